//! チャットメッセージ
//!
//! 画面セッション中のメモリ上にのみ存在し、サーバーへは本文だけが送られる。

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 送信者
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// チャットログの1件
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender,
            timestamp: Local::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Bot)
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// チャットエンドポイントのレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_ids_are_unique() {
        let first = ChatMessage::user("oi");
        let second = ChatMessage::user("oi");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_reply_without_field() {
        let reply: ChatReply = serde_json::from_str("{}").unwrap();
        assert_eq!(reply.reply, None);

        let reply: ChatReply = serde_json::from_str(r#"{"reply":"olá"}"#).unwrap();
        assert_eq!(reply.reply.as_deref(), Some("olá"));
    }
}
