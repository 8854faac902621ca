use std::sync::Arc;

use reelchat_api::ChatBackend;
use reelchat_types::ChatError;

use crate::navigation::{guard, Navigator, Route};
use crate::session::SessionStore;
use crate::storage::{LocalStore, TOKEN_KEY};

/// Everything a view may read or write.
///
/// Passed by `&mut` to views; there is exactly one writer at a time.
pub struct AppContext {
    pub session: SessionStore,
    pub storage: LocalStore,
    pub navigator: Navigator,
    backend: Option<Arc<dyn ChatBackend>>,
}

impl AppContext {
    /// Build a context, restoring mirrored identifiers from `storage`.
    ///
    /// `backend` is `None` when no backend address could be resolved.
    pub fn new(storage: LocalStore, backend: Option<Arc<dyn ChatBackend>>) -> Self {
        let mut session = SessionStore::new();
        session.hydrate_from(&storage);

        let start = guard(Route::Create, &session);

        Self {
            session,
            storage,
            navigator: Navigator::new(start),
            backend,
        }
    }

    /// The configured backend, or `Configuration` when there is none
    pub fn backend(&self) -> Result<Arc<dyn ChatBackend>, ChatError> {
        self.backend.clone().ok_or(ChatError::Configuration)
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    /// The stored auth token, or `Authentication` when missing or blank
    pub fn auth_token(&self) -> Result<String, ChatError> {
        self.storage
            .get(TOKEN_KEY)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .ok_or(ChatError::Authentication)
    }
}
