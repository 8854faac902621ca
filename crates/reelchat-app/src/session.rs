use crate::storage::{LocalStore, CHAT_ID_KEY, CHAT_TITLE_KEY, USER_ID_KEY};

/// Identifiers of the current conversation.
///
/// Owned by [`crate::AppContext`] and mutated only through the setters
/// below. Last write wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStore {
    user_id: String,
    chat_id: String,
    character_title: String,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn set_user_id(&mut self, id: impl Into<String>) {
        self.user_id = id.into();
    }

    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    pub fn set_chat_id(&mut self, id: impl Into<String>) {
        self.chat_id = id.into();
    }

    pub fn character_title(&self) -> &str {
        &self.character_title
    }

    pub fn set_character_title(&mut self, title: impl Into<String>) {
        self.character_title = title.into();
    }

    /// Reset every field to the empty string
    pub fn clear_user(&mut self) {
        self.user_id.clear();
        self.chat_id.clear();
        self.character_title.clear();
    }

    pub fn has_user(&self) -> bool {
        !self.user_id.trim().is_empty()
    }

    pub fn has_chat(&self) -> bool {
        !self.chat_id.trim().is_empty()
    }

    /// Restore identifiers mirrored into local storage by an earlier run
    pub fn hydrate_from(&mut self, storage: &LocalStore) {
        if let Some(id) = storage.get(USER_ID_KEY) {
            self.set_user_id(id);
        }
        if let Some(id) = storage.get(CHAT_ID_KEY) {
            self.set_chat_id(id);
        }
        if let Some(title) = storage.get(CHAT_TITLE_KEY) {
            self.set_character_title(title);
        }
    }

    /// One line per field, for the `status` command
    pub fn summary(&self) -> String {
        let show = |v: &str| if v.is_empty() { "(none)".to_string() } else { v.to_string() };
        format!(
            "user:      {}\nchat:      {}\ncharacter: {}",
            show(&self.user_id),
            show(&self.chat_id),
            show(&self.character_title)
        )
    }
}
