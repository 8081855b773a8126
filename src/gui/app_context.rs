//! アプリケーションコンテキスト
//!
//! バックエンドサービスをDioxusコンテキスト経由で各画面へ渡す。
//! テストではトレイト実装を差し替えられる。

use std::sync::Arc;

use crate::api::{ApiClient, AuthService, ChatService, TicketService};

#[derive(Clone)]
pub struct AppServices {
    pub tickets: Arc<dyn TicketService>,
    pub auth: Arc<dyn AuthService>,
    pub chat: Arc<dyn ChatService>,
}

impl AppServices {
    /// 1つのクライアント（Cookie Jar共有）から全サービスを構成
    pub fn from_client(client: ApiClient) -> Self {
        let client = Arc::new(client);
        Self {
            tickets: client.clone(),
            auth: client.clone(),
            chat: client,
        }
    }
}

impl std::fmt::Debug for AppServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppServices").finish_non_exhaustive()
    }
}
