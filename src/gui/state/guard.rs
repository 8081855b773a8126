//! 認証ガードの状態
//!
//! マウントごとに1回だけサーバーへセッションを確認する。

use crate::api::AuthService;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GuardState {
    #[default]
    Pending,
    Authenticated,
    /// ログイン画面へ遷移中（子要素は描画しない）
    Redirecting,
}

impl GuardState {
    pub fn renders_children(&self) -> bool {
        matches!(self, GuardState::Authenticated)
    }
}

pub async fn check_session<S>(service: &S) -> GuardState
where
    S: AuthService + ?Sized,
{
    match service.current_user().await {
        Ok(_) => GuardState::Authenticated,
        Err(e) => {
            tracing::error!("🔒 Auth check failed: {}", e);
            GuardState::Redirecting
        }
    }
}
