//! ダッシュボード画面の状態

use crate::api::{ApiError, TicketService};
use crate::models::{NewTicket, Ticket};

pub const DASHBOARD_LOAD_ERROR: &str =
    "Erro ao carregar tickets. Verifique se o backend está rodando.";
pub const TICKET_CREATE_ERROR: &str = "Erro ao criar ticket.";

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Loading,
    Error(String),
    Loaded(Vec<Ticket>),
}

impl Default for DashboardState {
    fn default() -> Self {
        DashboardState::Loading
    }
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardState::Loading)
    }

    pub fn tickets(&self) -> &[Ticket] {
        match self {
            DashboardState::Loaded(tickets) => tickets,
            _ => &[],
        }
    }
}

/// チケット読み込み結果
#[derive(Debug)]
pub struct LoadResult {
    pub state: DashboardState,
    /// 401/403 の場合はログイン画面へ誘導する
    pub unauthorized: bool,
}

pub async fn load_tickets<S>(service: &S) -> LoadResult
where
    S: TicketService + ?Sized,
{
    match service.get_tickets().await {
        Ok(tickets) => LoadResult {
            state: DashboardState::Loaded(tickets),
            unauthorized: false,
        },
        Err(e) => {
            tracing::error!("❌ Dashboard load failed: {}", e);
            LoadResult {
                unauthorized: e.is_unauthorized(),
                state: DashboardState::Error(DASHBOARD_LOAD_ERROR.to_string()),
            }
        }
    }
}

/// フォームからチケットを作成（未入力は送信しない）
pub async fn submit_ticket<S>(service: &S, ticket: &NewTicket) -> Result<Ticket, String>
where
    S: TicketService + ?Sized,
{
    if !ticket.is_complete() {
        return Err(TICKET_CREATE_ERROR.to_string());
    }

    service.create_ticket(ticket).await.map_err(|e: ApiError| {
        tracing::error!("❌ Ticket creation failed: {}", e);
        TICKET_CREATE_ERROR.to_string()
    })
}
