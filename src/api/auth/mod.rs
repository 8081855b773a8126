//! 認証モジュール
//!
//! 管理画面のログインとセッション確認に必要な機能を提供します。
//!
//! ## 機能
//!
//! - Cookie文字列の読み取り（偽造防止トークン）
//! - CSRF取得 → ログインの2段階リクエスト
//! - ログアウト
//! - 現在のセッション確認

mod cookie;
mod session;

pub use cookie::{get_cookie, CSRF_COOKIE};

use super::error::ApiResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// ログイン資格情報
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// ログイン結果
///
/// 認証失敗はエラーではなく `ok == false` として返す。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginResponse {
    pub ok: bool,
    /// サーバーが返したエラー詳細
    pub detail: Option<String>,
}

/// `/api/auth/user/` のレスポンス
///
/// ボディの形はバックエンド次第なので、既知のフィールドだけを緩く読む。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub username: Option<String>,
}

/// 認証サービスの抽象インタフェース
#[async_trait]
pub trait AuthService: Send + Sync {
    /// 現在のセッションを確認
    async fn current_user(&self) -> ApiResult<CurrentUser>;

    /// 偽造防止Cookieを取得
    async fn fetch_csrf(&self) -> ApiResult<()>;

    /// 資格情報を送信
    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse>;

    /// セッションを終了
    async fn logout(&self) -> ApiResult<()>;
}
