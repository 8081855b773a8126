pub mod api;
pub mod gui;
pub mod models;

// Re-export the main error types for convenience
pub use api::{ApiClient, ApiError, ApiResult};

// Re-export domain models
pub use models::{ChatMessage, ChatReply, NewTicket, Sender, Ticket, TicketPriority, TicketStatus};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_structure() {
        // Test that the main modules are accessible
        assert!(std::any::type_name::<api::ApiClient>().contains("ApiClient"));
        assert!(std::any::type_name::<gui::state::ChatSession>().contains("ChatSession"));
    }

    #[test]
    fn test_services_share_one_client() {
        let client = ApiClient::new("http://localhost:8000").unwrap();
        let services = gui::AppServices::from_client(client);
        let _tickets: &dyn api::TicketService = services.tickets.as_ref();
        let _auth: &dyn api::AuthService = services.auth.as_ref();
        let _chat: &dyn api::ChatService = services.chat.as_ref();
    }
}
