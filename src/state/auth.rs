//! Auth state for the current page, as seen by components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filled from the gate's page-load outcome. `loading` stays `true` until the
//! gate lets the page render, so a redirected page never shows content.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::auth::gate::GateOutcome;
use crate::net::types::UserProfile;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub loading: bool,
}

impl AuthState {
    /// State before the gate has run.
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    pub fn from_outcome(outcome: &GateOutcome) -> Self {
        match outcome {
            GateOutcome::Authorized(user) => Self { user: Some(user.clone()), loading: false },
            GateOutcome::Anonymous => Self { user: None, loading: false },
            GateOutcome::Redirected => Self::pending(),
        }
    }

    /// Name for the `name` display slot.
    pub fn display_name(&self) -> String {
        self.user.as_ref().map(|u| u.display_name().to_owned()).unwrap_or_default()
    }

    /// Initial for the avatar slot.
    pub fn initial(&self) -> String {
        self.user.as_ref().map(UserProfile::initial).unwrap_or_default()
    }

    /// Localized role label for the `type` display slot.
    pub fn role_label(&self) -> &'static str {
        self.user.as_ref().map_or("", |u| u.user_type.label())
    }
}
