pub mod auth; // 認証・セッション確認
pub mod chat; // 会話エンドポイント
pub mod client; // HTTPクライアントとCookie Jar
pub mod error;
pub mod tickets; // チケット一覧・作成

pub use auth::{get_cookie, AuthService, Credentials, CurrentUser, LoginResponse};
pub use chat::ChatService;
pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use tickets::TicketService;
