//! テーマとスタイルヘルパー

use crate::models::{TicketPriority, TicketStatus};

/// CSS クラス名の定数
pub struct CssClasses;

impl CssClasses {
    // レイアウト
    pub const PAGE: &'static str = "page";
    pub const PAGE_CENTERED: &'static str = "page page-centered";
    pub const CONTAINER: &'static str = "container";
    pub const CARD: &'static str = "card";

    // ボタン
    pub const BTN_PRIMARY: &'static str = "btn btn-primary";
    pub const BTN_SECONDARY: &'static str = "btn btn-secondary";
    pub const BTN_BLOCK: &'static str = "btn btn-primary btn-block";

    // フォーム
    pub const FORM_GROUP: &'static str = "form-group";
    pub const FORM_LABEL: &'static str = "form-label";
    pub const FORM_INPUT: &'static str = "form-input";

    // テーブル
    pub const TABLE_WRAPPER: &'static str = "ticket-table-wrapper";
    pub const TABLE: &'static str = "ticket-table";
    pub const TABLE_ROW: &'static str = "ticket-row";
    pub const TABLE_EMPTY: &'static str = "ticket-empty";
    pub const CELL_ID: &'static str = "cell-id";
    pub const CELL_DESCRIPTION: &'static str = "cell-description";
    pub const BADGE: &'static str = "badge";

    // チャット
    pub const CHAT_WINDOW: &'static str = "chat-window";
    pub const CHAT_HEADER: &'static str = "chat-header";
    pub const CHAT_MESSAGES: &'static str = "chat-messages";
    pub const CHAT_GREETING: &'static str = "chat-greeting";
    pub const CHAT_TYPING: &'static str = "chat-typing";
    pub const CHAT_INPUT_ROW: &'static str = "chat-input-row";
    pub const BUBBLE_USER: &'static str = "bubble bubble-user";
    pub const BUBBLE_BOT: &'static str = "bubble bubble-bot";

    // 状態表示
    pub const SPINNER: &'static str = "spinner";
    pub const ALERT_ERROR: &'static str = "alert alert-error";
}

/// チケット状態バッジのクラス
pub fn status_badge_class(status: &TicketStatus) -> &'static str {
    match status {
        TicketStatus::Open => "bg-green-100 text-green-800",
        TicketStatus::InProgress => "bg-blue-100 text-blue-800",
        TicketStatus::Resolved => "bg-gray-100 text-gray-800",
        TicketStatus::Closed => "bg-red-100 text-red-800",
        TicketStatus::Other(_) => "bg-gray-100 text-gray-800",
    }
}

/// 優先度テキストのクラス
pub fn priority_text_class(priority: &TicketPriority) -> &'static str {
    match priority {
        TicketPriority::Critical => "text-red-600 font-bold",
        TicketPriority::High => "text-orange-600 font-semibold",
        TicketPriority::Medium => "text-yellow-600",
        TicketPriority::Low => "text-blue-600",
        TicketPriority::Other(_) => "text-gray-600",
    }
}

/// CSSの埋め込み用ヘルパー
pub fn get_embedded_css() -> &'static str {
    include_str!("theme.css")
}
