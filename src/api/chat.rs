//! チャットAPI
//!
//! 入力されたテキストをそのまま会話エンドポイントへ転送する。

use super::client::ApiClient;
use super::error::ApiResult;
use crate::models::ChatReply;
use async_trait::async_trait;

#[async_trait]
pub trait ChatService: Send + Sync {
    /// メッセージを送信し、`{reply}` を受け取る
    async fn send_message(&self, text: &str) -> ApiResult<ChatReply>;
}

#[async_trait]
impl ChatService for ApiClient {
    async fn send_message(&self, text: &str) -> ApiResult<ChatReply> {
        let payload = serde_json::json!({ "message": text });

        tracing::debug!(
            url = %self.chat_url(),
            text_length = text.len(),
            "💬 Sending chat message"
        );

        // ステータスは見ずにボディだけを解釈する
        let response = self
            .http()
            .post(self.chat_url().clone())
            .json(&payload)
            .send()
            .await?;

        tracing::debug!("📡 Chat response status: {}", response.status());

        let body = response.text().await?;
        let reply: ChatReply = serde_json::from_str(&body)?;

        Ok(reply)
    }
}
