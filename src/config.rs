//! Client configuration resolved at build time.
//!
//! A WASM bundle has no process environment, so overrides are read with
//! `option_env!` when the crate is compiled. Unset values fall back to the
//! defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001/api";
pub const DEFAULT_TOKEN_KEY: &str = "authToken";
pub const DEFAULT_USER_KEY: &str = "currentUser";
pub const DEFAULT_LOGIN_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST base URL every request path is appended to. No trailing slash.
    pub api_base_url: String,
    /// Storage key holding the bearer token.
    pub token_key: String,
    /// Storage key holding the JSON user profile.
    pub user_key: String,
    /// Public entry page; every forced logout lands here.
    pub login_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_overrides(None, None, None)
    }
}

impl ClientConfig {
    /// Build config from compile-time environment.
    ///
    /// Optional:
    /// - `COURTSIDE_API_BASE_URL`: default `http://localhost:5001/api`
    /// - `COURTSIDE_TOKEN_KEY`: default `authToken`
    /// - `COURTSIDE_USER_KEY`: default `currentUser`
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("COURTSIDE_API_BASE_URL"),
            option_env!("COURTSIDE_TOKEN_KEY"),
            option_env!("COURTSIDE_USER_KEY"),
        )
    }

    fn from_overrides(api_base_url: Option<&str>, token_key: Option<&str>, user_key: Option<&str>) -> Self {
        Self {
            api_base_url: normalize_base_url(api_base_url.unwrap_or(DEFAULT_API_BASE_URL)),
            token_key: non_empty_or(token_key, DEFAULT_TOKEN_KEY),
            user_key: non_empty_or(user_key, DEFAULT_USER_KEY),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
        }
    }

    /// Join a request path onto the base URL.
    pub fn api_url(&self, path: &str) -> String {
        if path.is_empty() || path.starts_with('/') {
            format!("{}{path}", self.api_base_url)
        } else {
            format!("{}/{path}", self.api_base_url)
        }
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE_URL.to_owned() } else { trimmed.to_owned() }
}

fn non_empty_or(raw: Option<&str>, default: &str) -> String {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_owned()
}
