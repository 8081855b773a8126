//! バックエンドAPIクライアント
//!
//! セッションCookieと偽造防止Cookieはクライアント内のCookie Jarが保持する。
//! ブラウザの `document.cookie` に相当するのは [`ApiClient::cookie_string`]。

use super::auth::{get_cookie, CSRF_COOKIE};
use super::error::ApiResult;
use crate::gui::config_manager::AppConfig;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::Url;
use std::sync::Arc;

/// 偽造防止トークンを送るヘッダー名
pub const CSRF_HEADER: &str = "X-CSRFToken";

pub const TICKETS_PATH: &str = "/api/tickets/";
pub const CSRF_PATH: &str = "/api/auth/csrf/";
pub const LOGIN_PATH: &str = "/api/auth/login/";
pub const LOGOUT_PATH: &str = "/api/auth/logout/";
pub const CURRENT_USER_PATH: &str = "/api/auth/user/";
pub const CHAT_PATH: &str = "/api/chat";

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    chat_url: Url,
    cookie_jar: Arc<Jar>,
    http_client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        Self::with_chat_url(base_url, None)
    }

    /// チャットエンドポイントを別オリジンに置く場合に使用
    pub fn with_chat_url(base_url: &str, chat_url: Option<&str>) -> ApiResult<Self> {
        let base_url = normalize_base(Url::parse(base_url)?);
        let chat_url = match chat_url {
            Some(url) => Url::parse(url)?,
            None => base_url.join(relative(CHAT_PATH))?,
        };

        let cookie_jar = Arc::new(Jar::default());
        let http_client = reqwest::Client::builder()
            .cookie_provider(cookie_jar.clone())
            .build()?;

        tracing::debug!(
            base_url = %base_url,
            chat_url = %chat_url,
            "🌐 API client initialized"
        );

        Ok(Self {
            base_url,
            chat_url,
            cookie_jar,
            http_client,
        })
    }

    pub fn from_config(config: &AppConfig) -> ApiResult<Self> {
        Self::with_chat_url(&config.api_base_url, config.chat_url.as_deref())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn chat_url(&self) -> &Url {
        &self.chat_url
    }

    /// ベースURLからエンドポイントURLを組み立て
    ///
    /// ベースURLのパス（`/backend` など）は保持される。
    pub fn endpoint(&self, path: &str) -> ApiResult<Url> {
        Ok(self.base_url.join(relative(path))?)
    }

    pub fn cookie_jar(&self) -> &Arc<Jar> {
        &self.cookie_jar
    }

    /// ベースURL宛てに送られるCookie文字列（`a=1; b=2`）
    pub fn cookie_string(&self) -> Option<String> {
        self.cookie_jar
            .cookies(&self.base_url)
            .and_then(|value| value.to_str().ok().map(str::to_owned))
    }

    pub fn cookie(&self, name: &str) -> Option<String> {
        get_cookie(self.cookie_string().as_deref(), name)
    }

    /// 偽造防止トークン（未取得なら空文字列）
    pub fn csrf_token(&self) -> String {
        self.cookie(CSRF_COOKIE).unwrap_or_default()
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http_client
    }
}

/// `join` がパスを置き換えないよう末尾を `/` にそろえる
fn normalize_base(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn relative(path: &str) -> &str {
    path.trim_start_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_join_base_url() {
        let client = ApiClient::new("http://localhost:8000").unwrap();

        assert_eq!(
            client.endpoint(TICKETS_PATH).unwrap().as_str(),
            "http://localhost:8000/api/tickets/"
        );
        assert_eq!(client.chat_url().as_str(), "http://localhost:8000/api/chat");
    }

    #[test]
    fn test_base_url_path_prefix_is_kept() {
        for base in ["http://localhost:8000/backend", "http://localhost:8000/backend/"] {
            let client = ApiClient::new(base).unwrap();

            assert_eq!(client.base_url().as_str(), "http://localhost:8000/backend/");
            assert_eq!(
                client.endpoint(TICKETS_PATH).unwrap().as_str(),
                "http://localhost:8000/backend/api/tickets/"
            );
            assert_eq!(
                client.endpoint(LOGIN_PATH).unwrap().as_str(),
                "http://localhost:8000/backend/api/auth/login/"
            );
            assert_eq!(
                client.chat_url().as_str(),
                "http://localhost:8000/backend/api/chat"
            );
        }
    }

    #[test]
    fn test_custom_chat_url() {
        let client =
            ApiClient::with_chat_url("http://localhost:8000", Some("http://localhost:3000/api/chat"))
                .unwrap();
        assert_eq!(client.chat_url().as_str(), "http://localhost:3000/api/chat");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(ApiClient::new("not a url").is_err());
    }

    #[test]
    fn test_csrf_token_from_jar() {
        let client = ApiClient::new("http://localhost:8000").unwrap();
        assert_eq!(client.cookie_string(), None);
        assert_eq!(client.csrf_token(), "");

        client
            .cookie_jar()
            .add_cookie_str("csrftoken=abc123; Path=/", client.base_url());
        assert_eq!(client.csrf_token(), "abc123");
    }
}
