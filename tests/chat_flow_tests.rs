//! チャット送受信の統合テスト
//!
//! どの結果でもユーザー1件・ボット1件が追加され、送信中フラグが戻ることを確認する。

use async_trait::async_trait;
use mockito::Matcher;
use nexus_support::api::{ApiClient, ApiResult, ChatService};
use nexus_support::gui::state::chat_session::{CONNECTION_ERROR_REPLY, FALLBACK_REPLY};
use nexus_support::gui::state::{exchange, ChatSession};
use nexus_support::{ChatReply, Sender};
use std::sync::atomic::{AtomicUsize, Ordering};

/// 入力を送信し、応答を反映するまでの一連の流れ
async fn round_trip<S: ChatService + ?Sized>(service: &S, input: &str) -> ChatSession {
    let mut session = ChatSession::new();
    session.input = input.to_string();

    if let Some(text) = session.begin_submit() {
        assert!(session.busy);
        let outcome = exchange(service, &text).await;
        session.finish(outcome);
    }

    session
}

fn assert_single_exchange(session: &ChatSession, user_text: &str, bot_text: &str) {
    assert_eq!(session.messages.len(), 2);
    assert_eq!(session.messages[0].sender, Sender::User);
    assert_eq!(session.messages[0].text, user_text);
    assert_eq!(session.messages[1].sender, Sender::Bot);
    assert_eq!(session.messages[1].text, bot_text);
    assert!(!session.busy);
    assert!(session.input.is_empty());
}

#[tokio::test]
async fn test_reply_is_shown() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/chat")
        .match_body(Matcher::Json(serde_json::json!({ "message": "Olá" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"reply":"hi"}"#)
        .create_async()
        .await;

    let client = ApiClient::new(&server.url()).unwrap();
    let session = round_trip(&client, "Olá").await;

    assert_single_exchange(&session, "Olá", "hi");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_reply_uses_fallback() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/chat")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = ApiClient::new(&server.url()).unwrap();
    let session = round_trip(&client, "Preciso de ajuda").await;

    assert_single_exchange(&session, "Preciso de ajuda", FALLBACK_REPLY);
}

#[tokio::test]
async fn test_error_status_with_reply_body_is_still_shown() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/chat")
        .with_status(503)
        .with_body(r#"{"reply":"Serviço indisponível"}"#)
        .create_async()
        .await;

    let client = ApiClient::new(&server.url()).unwrap();
    let session = round_trip(&client, "status?").await;

    assert_single_exchange(&session, "status?", "Serviço indisponível");
}

#[tokio::test]
async fn test_unparseable_body_is_connection_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/chat")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let client = ApiClient::new(&server.url()).unwrap();
    let session = round_trip(&client, "oi").await;

    assert_single_exchange(&session, "oi", CONNECTION_ERROR_REPLY);
}

#[tokio::test]
async fn test_unreachable_host_is_connection_error() {
    let client = ApiClient::new("http://127.0.0.1:9").unwrap();
    let session = round_trip(&client, "alguém aí?").await;

    assert_single_exchange(&session, "alguém aí?", CONNECTION_ERROR_REPLY);
}

#[tokio::test]
async fn test_custom_chat_url() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/bot/webhook")
        .with_status(200)
        .with_body(r#"{"reply":"pong"}"#)
        .create_async()
        .await;

    let chat_url = format!("{}/bot/webhook", server.url());
    let client = ApiClient::with_chat_url("http://localhost:8000", Some(&chat_url)).unwrap();
    let session = round_trip(&client, "ping").await;

    assert_single_exchange(&session, "ping", "pong");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_blank_input_never_sends() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/chat")
        .expect(0)
        .create_async()
        .await;

    let client = ApiClient::new(&server.url()).unwrap();
    let session = round_trip(&client, "   ").await;

    assert!(session.messages.is_empty());
    assert!(!session.busy);
    mock.assert_async().await;
}

/// 呼び出し回数を数えるだけのテスト用サービス
#[derive(Default)]
struct CountingChat {
    calls: AtomicUsize,
}

#[async_trait]
impl ChatService for CountingChat {
    async fn send_message(&self, text: &str) -> ApiResult<ChatReply> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(ChatReply {
            reply: Some(format!("eco: {}", text)),
        })
    }
}

#[test]
fn test_exchange_with_trait_object() {
    let service = CountingChat::default();
    let dyn_service: &dyn ChatService = &service;

    let session = tokio_test::block_on(round_trip(dyn_service, "teste"));

    assert_single_exchange(&session, "teste", "eco: teste");
    assert_eq!(service.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_second_submit_waits_for_reply() {
    let service = CountingChat::default();
    let mut session = ChatSession::new();

    session.input = "primeira".to_string();
    let first = session.begin_submit().unwrap();

    // 応答待ちの間は送信できない
    session.input = "segunda".to_string();
    assert!(session.begin_submit().is_none());

    let outcome = tokio_test::block_on(exchange(&service, &first));
    session.finish(outcome);
    assert!(session.can_submit());
    assert_eq!(service.calls.load(Ordering::SeqCst), 1);
    assert_eq!(session.messages.len(), 2);
}
