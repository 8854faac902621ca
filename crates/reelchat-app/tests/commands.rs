mod common;

use pretty_assertions::assert_eq;
use std::sync::Arc;

use reelchat::storage::{CHAT_ID_KEY, TOKEN_KEY, USER_ID_KEY};
use reelchat::{run_command, AppContext, ChatBackend, Commands, LocalStore, Route};
use reelchat_types::CreateChatResponse;

use common::{chatting_context, signed_in_context, FakeBackend};

fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[tokio::test]
async fn test_send_without_active_chat_fails_before_calling_backend() {
    let backend = FakeBackend::new();
    let mut ctx = signed_in_context(Some(backend.clone()));

    let err = run_command(Commands::Send { message: words("Hello there") }, &mut ctx)
        .await
        .unwrap_err();

    assert!(err.to_string().starts_with("No active chat"), "got {}", err);
    assert_eq!(backend.send_count(), 0);
}

#[tokio::test]
async fn test_create_without_user_suggests_login() {
    let backend = FakeBackend::new();
    let mut ctx = AppContext::new(LocalStore::in_memory(), Some(backend.clone() as Arc<dyn ChatBackend>));

    let err = run_command(Commands::Create { character: words("Tony Stark") }, &mut ctx)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Run `reelchat-cli login` first."), "got {}", err);
    assert_eq!(backend.create_count(), 0);
}

#[tokio::test]
async fn test_create_joins_words_into_title() {
    let backend = FakeBackend::new();
    backend.push_create(Ok(CreateChatResponse { chat_id: "chat-9".to_string() }));
    let mut ctx = signed_in_context(Some(backend.clone()));

    run_command(Commands::Create { character: words("Forrest Gump") }, &mut ctx)
        .await
        .unwrap();

    assert_eq!(ctx.session.chat_id(), "chat-9");
    assert_eq!(ctx.session.character_title(), "Forrest Gump");
    assert_eq!(ctx.storage.get(CHAT_ID_KEY), Some("chat-9"));
}

#[tokio::test]
async fn test_successful_send_keeps_session() {
    let backend = FakeBackend::new();
    backend.push_reply("Jarvis, you up?");
    let mut ctx = chatting_context(backend.clone());
    let before = ctx.session.summary();

    run_command(Commands::Send { message: words("Suit up") }, &mut ctx)
        .await
        .unwrap();

    assert_eq!(ctx.session.summary(), before);
    assert_eq!(ctx.navigator.current(), Route::Chat);
    let calls = backend.send_calls.lock().unwrap();
    assert_eq!(calls[0].0.user_prompt, "Suit up");
}

#[tokio::test]
async fn test_send_without_token_suggests_login() {
    let backend = FakeBackend::new();
    let mut ctx = chatting_context(backend.clone());
    ctx.storage.remove(TOKEN_KEY).unwrap();

    let err = run_command(Commands::Send { message: words("Hello?") }, &mut ctx)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("reelchat-cli login"), "got {}", err);
    assert_eq!(backend.send_count(), 0);
}

#[tokio::test]
async fn test_blank_send_is_an_error() {
    let backend = FakeBackend::new();
    let mut ctx = chatting_context(backend.clone());

    let err = run_command(Commands::Send { message: Vec::new() }, &mut ctx)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Message is empty");
    assert_eq!(backend.send_count(), 0);
}

#[tokio::test]
async fn test_login_then_logout_round_trip() {
    let mut ctx = AppContext::new(LocalStore::in_memory(), None);

    run_command(
        Commands::Login { user_id: "user-5".to_string(), token: "tok-5".to_string() },
        &mut ctx,
    )
    .await
    .unwrap();
    assert_eq!(ctx.storage.get(USER_ID_KEY), Some("user-5"));
    assert_eq!(ctx.navigator.current(), Route::Create);

    run_command(Commands::Logout, &mut ctx).await.unwrap();
    assert_eq!(ctx.storage.get(TOKEN_KEY), None);
    assert!(!ctx.session.has_user());
    assert_eq!(ctx.navigator.current(), Route::Login);
}
