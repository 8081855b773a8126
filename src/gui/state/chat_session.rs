//! チャット画面の状態
//!
//! メッセージログ（セッション内で追記のみ）と送信中フラグで入力を制御する。

use crate::api::ChatService;
use crate::models::{ChatMessage, ChatReply};

/// 返信フィールドが無い場合の定型文
pub const FALLBACK_REPLY: &str = "Desculpe, não entendi.";
/// 通信・解析エラー時の定型文
pub const CONNECTION_ERROR_REPLY: &str = "Erro de conexão. Tente novamente mais tarde.";

/// 1回の送受信の結果
#[derive(Debug, Clone, PartialEq)]
pub enum ChatOutcome {
    Replied(ChatReply),
    Failed(String),
}

impl ChatOutcome {
    /// ボットメッセージとして表示する文言
    pub fn bot_text(&self) -> &str {
        match self {
            ChatOutcome::Replied(reply) => match reply.reply.as_deref() {
                Some(text) if !text.is_empty() => text,
                _ => FALLBACK_REPLY,
            },
            ChatOutcome::Failed(_) => CONNECTION_ERROR_REPLY,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatSession {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub busy: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_submit(&self) -> bool {
        !self.busy && !self.input.trim().is_empty()
    }

    /// 送信開始
    ///
    /// 空入力・送信中は何もしない。それ以外はユーザーメッセージを即座に追加し、
    /// 入力欄をクリアして送信すべき本文を返す。
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }

        let text = std::mem::take(&mut self.input);
        self.messages.push(ChatMessage::user(text.clone()));
        self.busy = true;
        Some(text)
    }

    /// 応答を反映（必ずボットメッセージを1件追加する）
    pub fn finish(&mut self, outcome: ChatOutcome) {
        self.messages.push(ChatMessage::bot(outcome.bot_text()));
        self.busy = false;
    }

    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

/// メッセージを送信し、失敗は呼び出し側へ伝播させずに結果へ変換
pub async fn exchange<S>(service: &S, text: &str) -> ChatOutcome
where
    S: ChatService + ?Sized,
{
    match service.send_message(text).await {
        Ok(reply) => ChatOutcome::Replied(reply),
        Err(e) => {
            tracing::error!("❌ Erro ao enviar mensagem: {}", e);
            ChatOutcome::Failed(e.to_string())
        }
    }
}
