//! チケットAPI
//!
//! 一覧取得と新規作成の2つのHTTP呼び出しをラップする。

use super::client::{ApiClient, CSRF_HEADER, TICKETS_PATH};
use super::error::{ApiError, ApiResult};
use crate::models::{NewTicket, Ticket};
use async_trait::async_trait;

/// チケットサービスの抽象インタフェース
#[async_trait]
pub trait TicketService: Send + Sync {
    /// チケット一覧を取得（サーバーの並び順のまま）
    async fn get_tickets(&self) -> ApiResult<Vec<Ticket>>;

    /// チケットを作成し、サーバーが採番したチケットを返す
    async fn create_ticket(&self, ticket: &NewTicket) -> ApiResult<Ticket>;
}

#[async_trait]
impl TicketService for ApiClient {
    async fn get_tickets(&self) -> ApiResult<Vec<Ticket>> {
        let url = self.endpoint(TICKETS_PATH)?;
        tracing::debug!("📡 GET {}", url);

        let response = self.http().get(url).send().await.map_err(|e| {
            tracing::error!("❌ Ticket list request failed: {}", e);
            e
        })?;

        let status = response.status();
        if !status.is_success() {
            let error = ApiError::from_fetch_status(status);
            tracing::error!("❌ Failed to fetch tickets: {}", error);
            return Err(error);
        }

        let body = response.text().await.map_err(|e| {
            tracing::error!("❌ Failed to read ticket list body: {}", e);
            e
        })?;

        let tickets: Vec<Ticket> = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("❌ Failed to parse ticket list: {}", e);
            e
        })?;

        tracing::info!(count = tickets.len(), "🎫 Tickets loaded");
        Ok(tickets)
    }

    async fn create_ticket(&self, ticket: &NewTicket) -> ApiResult<Ticket> {
        let url = self.endpoint(TICKETS_PATH)?;
        tracing::debug!("📡 POST {}", url);

        let response = self
            .http()
            .post(url)
            .header(CSRF_HEADER, self.csrf_token())
            .json(ticket)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("❌ Ticket create request failed: {}", e);
                e
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("❌ Failed to create ticket: status {}", status);
            return Err(ApiError::CreateFailed(status));
        }

        let body = response.text().await.map_err(|e| {
            tracing::error!("❌ Failed to read created ticket body: {}", e);
            e
        })?;

        let created: Ticket = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("❌ Failed to parse created ticket: {}", e);
            e
        })?;

        tracing::info!(id = created.id, "🎫 Ticket created");
        Ok(created)
    }
}
