//! Wire DTOs shared with the REST backend.
//!
//! DESIGN
//! ======
//! `UserProfile` keeps every field the backend sends in `extra`, so the
//! profile written to storage after login round-trips without loss even
//! when the server attaches role-specific blocks (coach profile, account).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The four account roles known to the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Student,
    Coach,
    CampusAdmin,
    SuperAdmin,
}

impl UserType {
    pub const ALL: [UserType; 4] = [Self::Student, Self::Coach, Self::CampusAdmin, Self::SuperAdmin];

    /// Wire name, as stored in `user_type`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Coach => "coach",
            Self::CampusAdmin => "campus_admin",
            Self::SuperAdmin => "super_admin",
        }
    }

    /// Localized label shown in the role display slot.
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "学员",
            Self::Coach => "教练",
            Self::CampusAdmin => "校区管理员",
            Self::SuperAdmin => "超级管理员",
        }
    }

    /// Landing page for this role.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::Student => "/student/dashboard",
            Self::Coach => "/coach/dashboard",
            Self::CampusAdmin | Self::SuperAdmin => "/admin/dashboard",
        }
    }

    pub fn is_admin(self) -> bool {
        matches!(self, Self::CampusAdmin | Self::SuperAdmin)
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

/// The authenticated user as returned by `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    #[serde(default)]
    pub real_name: Option<String>,
    pub user_type: UserType,
    /// Remaining backend fields (id, campus, contact, nested profiles).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserProfile {
    pub fn new(username: impl Into<String>, real_name: Option<&str>, user_type: UserType) -> Self {
        Self {
            username: username.into(),
            real_name: real_name.map(str::to_owned),
            user_type,
            extra: serde_json::Map::new(),
        }
    }

    /// Real name when set, otherwise the login name.
    pub fn display_name(&self) -> &str {
        self.real_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.username)
    }

    /// Uppercased first character of the display name, for the avatar slot.
    pub fn initial(&self) -> String {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// `data` payload of a successful login envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginData {
    pub access_token: String,
    pub user: UserProfile,
}
