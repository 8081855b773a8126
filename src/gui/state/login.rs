//! ログイン画面の状態

use crate::api::{AuthService, Credentials};

pub const LOGIN_FAILED_FALLBACK: &str = "Falha no login. Verifique suas credenciais.";
pub const LOGIN_CONNECTION_ERROR: &str = "Erro de conexão com o servidor.";

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoginState {
    #[default]
    Idle,
    Submitting,
    Error(String),
}

impl LoginState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, LoginState::Submitting)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoginState::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// ダッシュボードへ遷移
    Authenticated,
    Rejected(String),
}

impl From<LoginOutcome> for LoginState {
    fn from(outcome: LoginOutcome) -> Self {
        match outcome {
            LoginOutcome::Authenticated => LoginState::Idle,
            LoginOutcome::Rejected(message) => LoginState::Error(message),
        }
    }
}

/// CSRF取得 → ログインの順に2回リクエストする
pub async fn perform_login<S>(service: &S, credentials: &Credentials) -> LoginOutcome
where
    S: AuthService + ?Sized,
{
    let result = match service.fetch_csrf().await {
        Ok(_) => service.login(credentials).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(response) if response.ok => LoginOutcome::Authenticated,
        Ok(response) => LoginOutcome::Rejected(
            response
                .detail
                .filter(|detail| !detail.is_empty())
                .unwrap_or_else(|| LOGIN_FAILED_FALLBACK.to_string()),
        ),
        Err(e) => {
            tracing::error!("❌ Login request failed: {}", e);
            LoginOutcome::Rejected(LOGIN_CONNECTION_ERROR.to_string())
        }
    }
}

/// ログアウト（結果に関わらず呼び出し側はログイン画面へ遷移する）
pub async fn perform_logout<S>(service: &S)
where
    S: AuthService + ?Sized,
{
    if let Err(e) = service.logout().await {
        tracing::warn!("⚠️ Logout request failed: {}", e);
    }
}
