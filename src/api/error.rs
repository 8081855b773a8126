use reqwest::StatusCode;

/// バックエンドAPI呼び出しのエラー
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// 401/403: 呼び出し側でログイン画面へ誘導する
    #[error("Unauthorized: {0}")]
    Unauthorized(StatusCode),
    #[error("Fetch failed with status: {0}")]
    FetchFailed(StatusCode),
    #[error("Create failed with status: {0}")]
    CreateFailed(StatusCode),
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Deserialization failed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// 取得系レスポンスのステータスを分類
    pub fn from_fetch_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized(status),
            other => ApiError::FetchFailed(other),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
