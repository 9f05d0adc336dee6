use super::*;
use crate::net::types::UserType;

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_no_user_not_loading() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn pending_state_is_loading() {
    assert!(AuthState::pending().loading);
}

#[test]
fn authorized_outcome_fills_display_slots() {
    let user = UserProfile::new("zhao", Some("赵校长"), UserType::CampusAdmin);
    let state = AuthState::from_outcome(&GateOutcome::Authorized(user));
    assert!(!state.loading);
    assert_eq!(state.display_name(), "赵校长");
    assert_eq!(state.initial(), "赵");
    assert_eq!(state.role_label(), "校区管理员");
}

#[test]
fn anonymous_outcome_renders_without_user() {
    let state = AuthState::from_outcome(&GateOutcome::Anonymous);
    assert!(!state.loading);
    assert!(state.user.is_none());
    assert_eq!(state.display_name(), "");
    assert_eq!(state.role_label(), "");
}

#[test]
fn redirected_outcome_keeps_page_hidden() {
    let state = AuthState::from_outcome(&GateOutcome::Redirected);
    assert!(state.loading);
    assert!(state.user.is_none());
}
