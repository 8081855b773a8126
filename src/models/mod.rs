//! ドメインモデル
//!
//! バックエンドから受け取るチケットと、チャット画面内でのみ生存するメッセージ。

pub mod chat;
pub mod ticket;

pub use chat::{ChatMessage, ChatReply, Sender};
pub use ticket::{NewTicket, Ticket, TicketPriority, TicketStatus};
