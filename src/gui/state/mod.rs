//! 画面ごとの状態管理モジュール
//!
//! 各画面のロード毎に独立した状態機械。Signalに包んでコンポーネントから使う。

pub mod chat_session;
pub mod dashboard;
pub mod guard;
pub mod login;

pub use chat_session::{exchange, ChatOutcome, ChatSession};
pub use dashboard::{load_tickets, submit_ticket, DashboardState, LoadResult};
pub use guard::{check_session, GuardState};
pub use login::{perform_login, perform_logout, LoginOutcome, LoginState};
