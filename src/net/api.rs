//! REST wrapper used for every backend call.
//!
//! SYSTEM CONTEXT
//! ==============
//! Prefixes the configured base URL, attaches the session's bearer token,
//! drives the global loading overlay and normalizes every outcome into
//! `ApiResult<T>`.
//!
//! ERROR HANDLING
//! ==============
//! - 401: session cleared, "expired" toast, redirect to login, `AuthExpired`
//!   returned. Only the first 401 for a given session epoch does this; later
//!   ones from the same burst just return `AuthExpired`.
//! - No response: connectivity toast, `Connectivity` returned.
//! - Error status or `success: false`: `Application` returned with the
//!   server's `message`, nothing shown. The caller decides how to display it.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{
    ApiError, ApiResult, NETWORK_FAILURE_MESSAGE, REQUEST_FAILED_MESSAGE, SESSION_EXPIRED_MESSAGE,
};
use super::transport::{HttpRequest, HttpResponse, Method, Transport};
use crate::config::ClientConfig;
use crate::platform::{LoadingIndicator, Navigator, Notifier};
use crate::state::session::SessionManager;
use crate::state::ui::ToastKind;

pub struct ApiClient {
    config: ClientConfig,
    transport: Rc<dyn Transport>,
    session: Rc<SessionManager>,
    navigator: Rc<dyn Navigator>,
    notifier: Rc<dyn Notifier>,
    loader: Rc<dyn LoadingIndicator>,
}

impl ApiClient {
    pub fn new(
        config: &ClientConfig,
        transport: Rc<dyn Transport>,
        session: Rc<SessionManager>,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
        loader: Rc<dyn LoadingIndicator>,
    ) -> Self {
        Self {
            config: config.clone(),
            transport,
            session,
            navigator,
            notifier,
            loader,
        }
    }

    /// Current default `Authorization` header, if a session is cached.
    pub fn authorization(&self) -> Option<String> {
        self.session.authorization()
    }

    /// `GET {base}{path}?{query}`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> ApiResult<T> {
        let url = append_query(&self.url(path), query);
        self.send(HttpRequest::new(Method::Get, url)).await
    }

    /// `POST {base}{path}` with a JSON body.
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let request = json_request(Method::Post, self.url(path), body)?;
        self.send(request).await
    }

    /// `PUT {base}{path}` with a JSON body.
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let request = json_request(Method::Put, self.url(path), body)?;
        self.send(request).await
    }

    /// `DELETE {base}{path}`.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send(HttpRequest::new(Method::Delete, self.url(path))).await
    }

    fn url(&self, path: &str) -> String {
        self.config.api_url(path)
    }

    async fn send<T: DeserializeOwned>(&self, mut request: HttpRequest) -> ApiResult<T> {
        let issued_epoch = self.session.epoch();
        if let Some(auth) = self.session.authorization() {
            request.headers.push(("Authorization".to_owned(), auth));
        }
        let method = request.method;
        let url = request.url.clone();

        self.loader.show();
        let outcome = self.transport.send(request).await;
        self.loader.hide();

        match outcome {
            Err(e) => {
                log::warn!("{} {url} failed without response: {e}", method.as_str());
                self.notifier.notify(NETWORK_FAILURE_MESSAGE, ToastKind::Error);
                Err(ApiError::Connectivity(e.to_string()))
            }
            Ok(resp) if resp.status == 401 => {
                self.expire_session(issued_epoch);
                Err(ApiError::AuthExpired)
            }
            Ok(resp) => {
                let result = decode_response(&resp);
                if let Err(e) = &result {
                    log::debug!("{} {url} -> {}: {e}", method.as_str(), resp.status);
                }
                result
            }
        }
    }

    /// Forced logout after a 401.
    ///
    /// A request issued under an older epoch arrived after the session it
    /// carried was already replaced or cleared; it must not clobber the
    /// current one or repeat the notification.
    fn expire_session(&self, issued_epoch: u64) {
        if self.session.epoch() != issued_epoch {
            log::debug!("ignoring stale 401 from session epoch {issued_epoch}");
            return;
        }
        log::info!("session expired, returning to login");
        self.session.clear();
        self.notifier.notify(SESSION_EXPIRED_MESSAGE, ToastKind::Error);
        self.navigator.redirect(&self.config.login_path);
    }
}

fn json_request<B: Serialize + ?Sized>(method: Method, url: String, body: &B) -> ApiResult<HttpRequest> {
    let json = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
    let mut request = HttpRequest::new(method, url);
    request.headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
    request.body = Some(json);
    Ok(request)
}

fn append_query(url: &str, query: &[(&str, &str)]) -> String {
    if query.is_empty() {
        return url.to_owned();
    }
    let encoded = query
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}{encoded}")
}

/// Server `message` field, if the body carries a non-empty one.
fn extract_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
}

fn decode_response<T: DeserializeOwned>(resp: &HttpResponse) -> ApiResult<T> {
    let body = if resp.body.trim().is_empty() {
        Value::Null
    } else {
        match serde_json::from_str::<Value>(&resp.body) {
            Ok(v) => v,
            Err(e) if resp.is_success() => return Err(ApiError::Decode(e.to_string())),
            Err(_) => Value::Null,
        }
    };

    let application_error = |body: &Value| ApiError::Application {
        status: resp.status,
        message: extract_message(body).unwrap_or_else(|| REQUEST_FAILED_MESSAGE.to_owned()),
    };

    if !resp.is_success() {
        return Err(application_error(&body));
    }

    let payload = match body.get("success").and_then(Value::as_bool) {
        Some(false) => return Err(application_error(&body)),
        Some(true) => body.get("data").cloned().unwrap_or(Value::Null),
        None => body,
    };
    serde_json::from_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}
