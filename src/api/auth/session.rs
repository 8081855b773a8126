use super::{AuthService, CurrentUser, Credentials, LoginResponse};
use crate::api::client::{
    ApiClient, CSRF_HEADER, CSRF_PATH, CURRENT_USER_PATH, LOGIN_PATH, LOGOUT_PATH,
};
use crate::api::error::{ApiError, ApiResult};
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

#[async_trait]
impl AuthService for ApiClient {
    async fn current_user(&self) -> ApiResult<CurrentUser> {
        let url = self.endpoint(CURRENT_USER_PATH)?;
        let response = self.http().get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::from_fetch_status(status));
        }

        // ボディが空・非JSONでもセッションは有効とみなす
        let user = response
            .json::<CurrentUser>()
            .await
            .unwrap_or_default();

        tracing::debug!(username = ?user.username, "👤 Session verified");
        Ok(user)
    }

    async fn fetch_csrf(&self) -> ApiResult<()> {
        let url = self.endpoint(CSRF_PATH)?;
        let response = self.http().get(url).send().await?;

        tracing::debug!(
            status = %response.status(),
            has_token = self.cookie(super::CSRF_COOKIE).is_some(),
            "🔑 CSRF cookie requested"
        );
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        let url = self.endpoint(LOGIN_PATH)?;
        let response = self
            .http()
            .post(url)
            .header(CSRF_HEADER, self.csrf_token())
            .json(credentials)
            .send()
            .await?;

        let status = response.status();
        let ok = status.is_success();
        let body = response.text().await?;

        // プロキシのHTMLページなどはログイン結果として扱わない
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .map_err(|e| {
                tracing::error!("❌ Login response is not JSON (status {}): {}", status, e);
                e
            })?
            .detail;

        if ok {
            tracing::info!(username = %credentials.username, "✅ Login succeeded");
        } else {
            tracing::warn!(
                username = %credentials.username,
                detail = ?detail,
                "🚫 Login rejected"
            );
        }

        Ok(LoginResponse { ok, detail })
    }

    async fn logout(&self) -> ApiResult<()> {
        let url = self.endpoint(LOGOUT_PATH)?;
        let response = self
            .http()
            .post(url)
            .header(CSRF_HEADER, self.csrf_token())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::FetchFailed(status));
        }

        tracing::info!("👋 Logged out");
        Ok(())
    }
}
