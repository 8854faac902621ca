use reelchat_types::{ChatError, CreateChatRequest, DEFAULT_SERVER_MESSAGE, POPULAR_CHARACTERS};

use crate::context::AppContext;
use crate::navigation::Route;
use crate::storage::{CHAT_ID_KEY, CHAT_TITLE_KEY};

const GENERIC_CREATE_ERROR: &str = "Failed to start conversation";

/// Form state of the chat-creation screen
#[derive(Debug, Default)]
pub struct CreateChatView {
    character: String,
    loading: bool,
    error: Option<String>,
}

impl CreateChatView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn character(&self) -> &str {
        &self.character
    }

    pub fn set_character(&mut self, name: impl Into<String>) {
        self.character = name.into();
    }

    /// Pick one of [`POPULAR_CHARACTERS`] by zero-based index
    pub fn select_suggestion(&mut self, index: usize) -> bool {
        match POPULAR_CHARACTERS.get(index) {
            Some(name) => {
                self.character = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Accept either a 1-based suggestion number or a free-text name
    pub fn choose(&mut self, input: &str) {
        let input = input.trim();
        let picked = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .map(|index| self.select_suggestion(index))
            .unwrap_or(false);

        if !picked {
            self.set_character(input);
        }
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Inline error from the last attempt, if it failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the start button would be enabled
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.character.trim().is_empty()
    }

    /// Create a remote chat session for the selected character.
    ///
    /// On success the chat id and title land in the session, are mirrored
    /// to local storage, and the navigator moves to the chat screen.
    pub async fn create_chat(&mut self, ctx: &mut AppContext) -> Result<(), ChatError> {
        let title = self.character.trim().to_string();
        self.error = None;

        if title.is_empty() {
            return Err(self.fail(ChatError::MissingCharacter));
        }
        if !ctx.session.has_user() {
            return Err(self.fail(ChatError::MissingUser));
        }
        let backend = ctx.backend().map_err(|e| self.fail(e))?;

        let request = CreateChatRequest {
            user_id: ctx.session.user_id().to_string(),
            title: title.clone(),
        };

        self.loading = true;
        let result = backend.create_chat(&request).await;
        self.loading = false;

        let created = result.map_err(|e| self.fail(e))?;

        log::info!("created chat {} with {}", created.chat_id, title);
        ctx.session.set_chat_id(created.chat_id.clone());
        ctx.session.set_character_title(title.clone());

        for (key, value) in [(CHAT_ID_KEY, created.chat_id), (CHAT_TITLE_KEY, title)] {
            if let Err(e) = ctx.storage.set(key, value) {
                log::warn!("could not mirror {} to local storage: {:#}", key, e);
            }
        }

        ctx.navigator.navigate(Route::Chat);
        Ok(())
    }

    fn fail(&mut self, err: ChatError) -> ChatError {
        log::warn!("chat creation failed: {}", err);
        self.error = Some(form_error(&err));
        err
    }
}

/// Inline text for a failed creation attempt.
///
/// Server-provided messages are shown as-is; other remote failures get a
/// generic line. Local precondition failures keep their own wording.
fn form_error(err: &ChatError) -> String {
    match err {
        ChatError::Server { message, .. } if message != DEFAULT_SERVER_MESSAGE => message.clone(),
        ChatError::Server { .. }
        | ChatError::Network(_)
        | ChatError::RequestSetup(_)
        | ChatError::MalformedResponse(_) => GENERIC_CREATE_ERROR.to_string(),
        ChatError::Configuration
        | ChatError::Authentication
        | ChatError::MissingUser
        | ChatError::MissingCharacter => err.to_string(),
    }
}
