use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use reelchat::views::login::login;
use reelchat::{AppContext, ChatBackend, ChatView, CreateChatView, HttpBackend, LocalStore, Route};
use reelchat_types::Sender;

#[tokio::test]
async fn test_login_create_and_chat_against_http_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/create"))
        .and(body_json(json!({ "userId": "user-1", "title": "Marty McFly" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "chat": { "_id": "chat-77" } })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/first/send"))
        .and(header("authorization", "Bearer tok-1"))
        .and(body_json(json!({
            "chatId": "chat-77",
            "title": "Marty McFly",
            "userPrompt": "Where are we going?"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chat": { "messages": [
                { "content": "Where are we going?" },
                { "content": "Back to the future!" }
            ]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let temp = tempfile::tempdir().unwrap();
    let storage = LocalStore::open(temp.path()).unwrap();
    let backend: Arc<dyn ChatBackend> = Arc::new(HttpBackend::new(&server.uri()));
    let mut ctx = AppContext::new(storage, Some(backend));
    assert_eq!(ctx.navigator.current(), Route::Login);

    login(&mut ctx, "user-1", "tok-1").unwrap();

    let mut create = CreateChatView::new();
    create.choose("7");
    create.create_chat(&mut ctx).await.unwrap();
    assert_eq!(ctx.navigator.current(), Route::Chat);

    let mut chat = ChatView::new();
    chat.send_message(&mut ctx, "Where are we going?").await;

    let last = chat.transcript().last().unwrap();
    assert_eq!(last.sender, Sender::Character);
    assert_eq!(last.content, "Back to the future!");

    // Identifiers survive a restart through local storage
    let restored = AppContext::new(LocalStore::open(temp.path()).unwrap(), None);
    assert_eq!(restored.session.user_id(), "user-1");
    assert_eq!(restored.session.chat_id(), "chat-77");
    assert_eq!(restored.session.character_title(), "Marty McFly");
}

#[tokio::test]
async fn test_server_failure_reaches_transcript() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/first/send"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "boom" })))
        .mount(&server)
        .await;

    let mut storage = LocalStore::in_memory();
    storage.set(reelchat::storage::TOKEN_KEY, "tok-1").unwrap();
    let backend: Arc<dyn ChatBackend> = Arc::new(HttpBackend::new(&server.uri()));
    let mut ctx = AppContext::new(storage, Some(backend));
    ctx.session.set_user_id("user-1");
    ctx.session.set_chat_id("chat-77");

    let mut chat = ChatView::new();
    chat.send_message(&mut ctx, "Hello").await;

    let last = chat.transcript().last().unwrap();
    assert_eq!(last.sender, Sender::System);
    assert_eq!(last.content, "Server error: 500 - boom");
}
