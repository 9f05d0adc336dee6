//! Error taxonomy for REST calls.
//!
//! Infrastructure failures (401, no response) are handled once inside the
//! wrapper; application failures are handed back for the caller to display.

use thiserror::Error;

pub const REQUEST_FAILED_MESSAGE: &str = "请求失败";
pub const SESSION_EXPIRED_MESSAGE: &str = "登录已过期，请重新登录";
pub const NETWORK_FAILURE_MESSAGE: &str = "网络连接失败，请检查网络设置";

/// Result of every `ApiClient` call.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Server answered 401; the session has already been cleared.
    #[error("session expired")]
    AuthExpired,
    /// No response reached us.
    #[error("connectivity failure: {0}")]
    Connectivity(String),
    /// Server responded with an error status or `success: false`.
    #[error("application error ({status}): {message}")]
    Application { status: u16, message: String },
    #[error("request encode failed: {0}")]
    Encode(String),
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// User-facing message for this failure.
    pub fn message(&self) -> &str {
        match self {
            Self::AuthExpired => SESSION_EXPIRED_MESSAGE,
            Self::Connectivity(_) => NETWORK_FAILURE_MESSAGE,
            Self::Application { message, .. } => message,
            Self::Encode(_) | Self::Decode(_) => REQUEST_FAILED_MESSAGE,
        }
    }
}

/// Failure below HTTP: the request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("not available outside the browser")]
    Unavailable,
}
