//! Role-to-path access rules.
//!
//! A rule names a run of path segments (`["admin"]`, `["student"]`) and the
//! roles allowed under it. When several rules match one path, the outermost
//! match governs, so `/admin/student/list` is an admin page; between matches
//! starting at the same segment, the longer pattern wins. Paths matching no
//! rule are open to every role.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use crate::net::types::UserType;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleAccessRule {
    pub pattern: &'static [&'static str],
    pub allowed: &'static [UserType],
}

impl RoleAccessRule {
    pub fn permits(&self, role: UserType) -> bool {
        self.allowed.contains(&role)
    }

    /// Start index of the outermost occurrence of `pattern` in `segments`.
    fn outermost_match(&self, segments: &[&str]) -> Option<usize> {
        let n = self.pattern.len();
        if n == 0 || n > segments.len() {
            return None;
        }
        (0..=segments.len() - n).find(|&start| segments[start..start + n] == *self.pattern)
    }
}

pub const DEFAULT_RULES: &[RoleAccessRule] = &[
    RoleAccessRule { pattern: &["student"], allowed: &[UserType::Student] },
    RoleAccessRule { pattern: &["coach"], allowed: &[UserType::Coach] },
    RoleAccessRule { pattern: &["admin"], allowed: &[UserType::CampusAdmin, UserType::SuperAdmin] },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessPolicy {
    rules: Vec<RoleAccessRule>,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.to_vec())
    }
}

impl AccessPolicy {
    pub fn new(rules: Vec<RoleAccessRule>) -> Self {
        Self { rules }
    }

    /// Rule governing `path`, if any: the outermost match, then the longest.
    pub fn matching_rule(&self, path: &str) -> Option<&RoleAccessRule> {
        let segments = path_segments(path);
        self.rules
            .iter()
            .filter_map(|rule| rule.outermost_match(&segments).map(|start| (rule, start)))
            .min_by_key(|&(rule, start)| (start, std::cmp::Reverse(rule.pattern.len())))
            .map(|(rule, _)| rule)
    }

    pub fn permits(&self, path: &str, role: UserType) -> bool {
        self.matching_rule(path).is_none_or(|rule| rule.permits(role))
    }
}

/// Non-empty path segments, ignoring any query string or fragment.
pub fn path_segments(path: &str) -> Vec<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Pages reachable without a session: the login page, directory indexes and
/// anything under an `index.html`.
pub fn is_public_path(path: &str, login_path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path == login_path || path.is_empty() || path.ends_with('/') || path.contains("index.html")
}
