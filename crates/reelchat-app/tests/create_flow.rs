mod common;

use pretty_assertions::assert_eq;
use std::sync::Arc;

use reelchat::storage::{CHAT_ID_KEY, CHAT_TITLE_KEY};
use reelchat::{AppContext, ChatBackend, CreateChatView, LocalStore, Route};
use reelchat_types::{ChatError, CreateChatResponse};

use common::{signed_in_context, FakeBackend};

#[tokio::test]
async fn test_create_chat_stores_id_and_title() {
    let backend = FakeBackend::new();
    backend.push_create(Ok(CreateChatResponse { chat_id: "abc123".to_string() }));
    let mut ctx = signed_in_context(Some(backend.clone()));
    let mut view = CreateChatView::new();
    view.set_character("Tony Stark");

    view.create_chat(&mut ctx).await.unwrap();

    assert_eq!(ctx.session.chat_id(), "abc123");
    assert_eq!(ctx.session.character_title(), "Tony Stark");
    assert_eq!(ctx.storage.get(CHAT_ID_KEY), Some("abc123"));
    assert_eq!(ctx.storage.get(CHAT_TITLE_KEY), Some("Tony Stark"));
    assert_eq!(ctx.navigator.current(), Route::Chat);
    assert!(!view.loading());
    assert!(view.error().is_none());

    let calls = backend.create_calls.lock().unwrap();
    assert_eq!(calls[0].user_id, "user-1");
    assert_eq!(calls[0].title, "Tony Stark");
}

#[tokio::test]
async fn test_blank_character_makes_no_call() {
    let backend = FakeBackend::new();
    let mut ctx = signed_in_context(Some(backend.clone()));
    let mut view = CreateChatView::new();
    view.set_character("   ");

    let err = view.create_chat(&mut ctx).await.unwrap_err();

    assert_eq!(err, ChatError::MissingCharacter);
    assert_eq!(view.error(), Some("Please select or enter a character"));
    assert_eq!(backend.create_count(), 0);
}

#[tokio::test]
async fn test_missing_user_fails_fast() {
    let backend = FakeBackend::new();
    let mut ctx = AppContext::new(LocalStore::in_memory(), Some(backend.clone() as Arc<dyn ChatBackend>));
    let mut view = CreateChatView::new();
    view.choose("3");

    let err = view.create_chat(&mut ctx).await.unwrap_err();

    assert_eq!(err, ChatError::MissingUser);
    assert_eq!(backend.create_count(), 0);
    assert_eq!(ctx.session.chat_id(), "");
}

#[tokio::test]
async fn test_server_message_shown_inline() {
    let backend = FakeBackend::new();
    backend.push_create(Err(ChatError::server(400, r#"{"message":"Unknown character"}"#)));
    let mut ctx = signed_in_context(Some(backend.clone()));
    let mut view = CreateChatView::new();
    view.set_character("Nobody");

    assert!(view.create_chat(&mut ctx).await.is_err());

    assert_eq!(view.error(), Some("Unknown character"));
    assert!(!view.loading());
    assert_eq!(ctx.navigator.current(), Route::Create);
    assert_eq!(ctx.session.chat_id(), "");
}

#[tokio::test]
async fn test_network_failure_shows_generic_error() {
    let backend = FakeBackend::new();
    backend.push_create(Err(ChatError::Network("refused".into())));
    let mut ctx = signed_in_context(Some(backend.clone()));
    let mut view = CreateChatView::new();
    view.set_character("Forrest Gump");

    assert!(view.create_chat(&mut ctx).await.is_err());

    assert_eq!(view.error(), Some("Failed to start conversation"));
    assert!(view.can_submit());
}

#[tokio::test]
async fn test_missing_backend_is_reported_inline() {
    let mut ctx = signed_in_context(None);
    let mut view = CreateChatView::new();
    view.set_character("Hermione Granger");

    let err = view.create_chat(&mut ctx).await.unwrap_err();

    assert_eq!(err, ChatError::Configuration);
    assert!(view.error().unwrap().starts_with("Configuration error"));
}
