#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use reelchat::storage::{TOKEN_KEY, USER_ID_KEY};
use reelchat::{AppContext, ChatBackend, LocalStore};
use reelchat_types::{ChatError, CreateChatRequest, CreateChatResponse, SendPromptRequest};

/// Scripted backend that records every call it receives
#[derive(Default)]
pub struct FakeBackend {
    create_results: Mutex<VecDeque<Result<CreateChatResponse, ChatError>>>,
    send_results: Mutex<VecDeque<Result<String, ChatError>>>,
    pub create_calls: Mutex<Vec<CreateChatRequest>>,
    pub send_calls: Mutex<Vec<(SendPromptRequest, String)>>,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_create(&self, result: Result<CreateChatResponse, ChatError>) {
        self.create_results.lock().unwrap().push_back(result);
    }

    pub fn push_reply(&self, reply: &str) {
        self.send_results.lock().unwrap().push_back(Ok(reply.to_string()));
    }

    pub fn push_send_error(&self, err: ChatError) {
        self.send_results.lock().unwrap().push_back(Err(err));
    }

    pub fn create_count(&self) -> usize {
        self.create_calls.lock().unwrap().len()
    }

    pub fn send_count(&self) -> usize {
        self.send_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatBackend for FakeBackend {
    async fn create_chat(&self, request: &CreateChatRequest) -> Result<CreateChatResponse, ChatError> {
        self.create_calls.lock().unwrap().push(request.clone());
        self.create_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ChatError::Network("no scripted response".to_string())))
    }

    async fn send_prompt(&self, request: &SendPromptRequest, token: &str) -> Result<String, ChatError> {
        self.send_calls.lock().unwrap().push((request.clone(), token.to_string()));
        self.send_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ChatError::Network("no scripted response".to_string())))
    }
}

/// Context with a user, a token, and an active chat
pub fn chatting_context(backend: Arc<FakeBackend>) -> AppContext {
    let mut storage = LocalStore::in_memory();
    storage.set(USER_ID_KEY, "user-1").unwrap();
    storage.set(TOKEN_KEY, "secret-token").unwrap();

    let mut ctx = AppContext::new(storage, Some(backend as Arc<dyn ChatBackend>));
    ctx.session.set_chat_id("abc123");
    ctx.session.set_character_title("Tony Stark");
    ctx.navigator.navigate(reelchat::Route::Chat);
    ctx
}

/// Context with a signed-in user but no chat yet
pub fn signed_in_context(backend: Option<Arc<FakeBackend>>) -> AppContext {
    let mut storage = LocalStore::in_memory();
    storage.set(USER_ID_KEY, "user-1").unwrap();
    storage.set(TOKEN_KEY, "secret-token").unwrap();

    AppContext::new(storage, backend.map(|b| b as Arc<dyn ChatBackend>))
}
