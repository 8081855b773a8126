// Dioxus GUI Components Module

pub mod auth_guard; // セッション確認ガード
pub mod chat_interface;
pub mod ticket_form;
pub mod ticket_table;

// Re-exports for convenience
pub use auth_guard::{AuthGuard, GuardedContent};
pub use chat_interface::ChatInterface;
pub use ticket_form::TicketForm;
pub use ticket_table::TicketTable;
