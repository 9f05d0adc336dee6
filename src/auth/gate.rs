//! Page-load authorization and session lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app shell calls `check_auth_status` once at mount. Only an
//! `Authorized` or `Anonymous` outcome lets the page render; `Redirected`
//! means navigation to the login page is already underway.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use std::rc::Rc;

use super::access::{AccessPolicy, is_public_path};
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{LoginData, LoginRequest, UserProfile, UserType};
use crate::platform::Navigator;
use crate::state::session::{Session, SessionManager};

pub const LOGIN_FAILED_MESSAGE: &str = "登录失败，请检查网络连接";
pub const LOGOUT_CONFIRM_MESSAGE: &str = "确定要退出登录吗？";

const LOGIN_ENDPOINT: &str = "/auth/login";

/// Result of the page-load check.
#[derive(Clone, Debug, PartialEq)]
pub enum GateOutcome {
    /// Session restored and the page is allowed for its role.
    Authorized(UserProfile),
    /// No session, but the page is public.
    Anonymous,
    /// Navigation to the login page was issued; render nothing.
    Redirected,
}

pub struct AuthGate {
    login_path: String,
    session: Rc<SessionManager>,
    api: Rc<ApiClient>,
    navigator: Rc<dyn Navigator>,
    policy: AccessPolicy,
}

impl AuthGate {
    pub fn new(
        config: &ClientConfig,
        session: Rc<SessionManager>,
        api: Rc<ApiClient>,
        navigator: Rc<dyn Navigator>,
        policy: AccessPolicy,
    ) -> Self {
        Self { login_path: config.login_path.clone(), session, api, navigator, policy }
    }

    /// Restore the persisted session and validate the current page.
    pub fn check_auth_status(&self) -> GateOutcome {
        let Some(session) = self.session.restore() else {
            let path = self.navigator.current_path();
            if is_public_path(&path, &self.login_path) {
                return GateOutcome::Anonymous;
            }
            log::info!("no session for {path}, redirecting to login");
            self.redirect_to_login();
            return GateOutcome::Redirected;
        };

        if !self.check_page_permission() {
            self.redirect_to_login();
            return GateOutcome::Redirected;
        }
        GateOutcome::Authorized(session.user)
    }

    /// Whether the cached user may view the current page.
    pub fn check_page_permission(&self) -> bool {
        let Some(user) = self.session.user() else {
            return false;
        };
        let path = self.navigator.current_path();
        let allowed = self.policy.permits(&path, user.user_type);
        if !allowed {
            log::warn!("{} ({}) may not open {path}", user.username, user.user_type.as_str());
        }
        allowed
    }

    /// Authenticate and persist the new session.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message; storage is untouched on failure.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserProfile, String> {
        let request = LoginRequest { username, password };
        let data: LoginData = match self.api.post(LOGIN_ENDPOINT, &request).await {
            Ok(data) => data,
            Err(ApiError::Application { message, .. }) => return Err(message),
            Err(e) => {
                log::warn!("login for {username} failed: {e}");
                return Err(LOGIN_FAILED_MESSAGE.to_owned());
            }
        };

        let user = data.user.clone();
        if let Err(e) = self.session.store(Session { token: data.access_token, user: data.user }) {
            log::warn!("could not persist session: {e}");
            return Err(LOGIN_FAILED_MESSAGE.to_owned());
        }
        log::info!("{} signed in as {}", user.username, user.user_type.as_str());
        Ok(user)
    }

    /// Clear the session and return to the login page.
    ///
    /// With a `confirm` callback, nothing happens unless it returns `true`.
    /// Returns whether the logout went ahead.
    pub fn logout(&self, confirm: Option<&dyn Fn(&str) -> bool>) -> bool {
        if let Some(confirm) = confirm {
            if !confirm(LOGOUT_CONFIRM_MESSAGE) {
                return false;
            }
        }
        self.session.clear();
        self.redirect_to_login();
        true
    }

    /// Navigate to the dashboard of `user_type`, or of the cached user.
    /// Returns `false` when no role is known.
    pub fn redirect_to_dashboard(&self, user_type: Option<UserType>) -> bool {
        let Some(role) = user_type.or_else(|| self.session.user().map(|u| u.user_type)) else {
            return false;
        };
        self.navigator.redirect(role.dashboard_path());
        true
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.session.user()
    }

    pub fn redirect_to_login(&self) {
        self.navigator.redirect(&self.login_path);
    }
}
