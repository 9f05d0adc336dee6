use super::*;
use crate::platform::KeyValueStore;
use crate::platform::headless::MemoryStore;
use crate::test_support::{COACH_JSON, Harness, STUDENT_JSON, SUPER_ADMIN_JSON, ScriptedTransport};
use futures::executor::block_on;
use std::cell::Cell;

fn harness_at(path: &str) -> (Rc<ScriptedTransport>, Harness) {
    let transport = Rc::new(ScriptedTransport::default());
    let harness = Harness::new(transport.clone(), path);
    (transport, harness)
}

const LOGIN_OK: &str = r#"{
    "success": true,
    "message": "登录成功",
    "data": {
        "access_token": "jwt-abc",
        "user": {"id": 1, "username": "lin", "real_name": "林小明", "user_type": "student",
                 "account": {"balance": 100.0}}
    }
}"#;

// =============================================================
// check_auth_status
// =============================================================

#[test]
fn no_session_on_protected_page_redirects_to_login() {
    let (_, h) = harness_at("/student/dashboard");
    assert_eq!(h.ctx.gate.check_auth_status(), GateOutcome::Redirected);
    assert_eq!(h.navigator.redirects(), vec!["/".to_owned()]);
}

#[test]
fn no_session_on_login_page_proceeds_anonymously() {
    let (_, h) = harness_at("/");
    assert_eq!(h.ctx.gate.check_auth_status(), GateOutcome::Anonymous);
    assert!(h.navigator.redirects().is_empty());
}

#[test]
fn corrupt_session_is_treated_as_logged_out() {
    let (_, h) = harness_at("/coach/dashboard");
    h.seed_session("tok", "][");
    assert_eq!(h.ctx.gate.check_auth_status(), GateOutcome::Redirected);
    assert_eq!(h.ctx.api.authorization(), None);
}

#[test]
fn valid_session_on_own_page_is_authorized() {
    let (_, h) = harness_at("/student/dashboard");
    h.seed_session("tok-1", STUDENT_JSON);

    let GateOutcome::Authorized(user) = h.ctx.gate.check_auth_status() else {
        panic!("expected authorized");
    };
    assert_eq!(user.display_name(), "林小明");
    assert_eq!(h.ctx.api.authorization().as_deref(), Some("Bearer tok-1"));
    assert!(h.navigator.redirects().is_empty());
}

#[test]
fn valid_session_on_foreign_role_page_redirects() {
    let (_, h) = harness_at("/coach/dashboard");
    h.seed_session("tok-1", STUDENT_JSON);
    assert_eq!(h.ctx.gate.check_auth_status(), GateOutcome::Redirected);
    assert_eq!(h.navigator.redirects(), vec!["/".to_owned()]);
}

#[test]
fn super_admin_passes_admin_pages() {
    let (_, h) = harness_at("/admin/anything");
    h.seed_session("tok-3", SUPER_ADMIN_JSON);
    assert!(matches!(h.ctx.gate.check_auth_status(), GateOutcome::Authorized(_)));
}

#[test]
fn student_is_turned_away_from_student_pages_under_admin() {
    let (_, h) = harness_at("/admin/student/list");
    h.seed_session("tok-1", STUDENT_JSON);
    assert_eq!(h.ctx.gate.check_auth_status(), GateOutcome::Redirected);
    assert_eq!(h.navigator.redirects(), vec!["/".to_owned()]);
}

#[test]
fn super_admin_opens_role_pages_under_admin() {
    for path in ["/admin/coach/approvals", "/admin/student/list"] {
        let (_, h) = harness_at(path);
        h.seed_session("tok-3", SUPER_ADMIN_JSON);
        assert!(matches!(h.ctx.gate.check_auth_status(), GateOutcome::Authorized(_)), "{path}");
    }
}

// =============================================================
// check_page_permission
// =============================================================

#[test]
fn page_permission_is_false_without_session() {
    let (_, h) = harness_at("/help");
    assert!(!h.ctx.gate.check_page_permission());
}

#[test]
fn open_pages_are_permitted_for_every_role() {
    for user_json in [STUDENT_JSON, COACH_JSON, SUPER_ADMIN_JSON] {
        let (_, h) = harness_at("/help/faq");
        h.seed_session("t", user_json);
        h.ctx.session.restore();
        assert!(h.ctx.gate.check_page_permission());
    }
}

// =============================================================
// login
// =============================================================

#[test]
fn login_persists_session_and_sets_auth_header() {
    let (transport, h) = harness_at("/");
    transport.respond(200, LOGIN_OK);

    let user = block_on(h.ctx.gate.login("lin", "secret1")).unwrap();

    assert_eq!(user.username, "lin");
    let sent = &transport.requests()[0];
    assert_eq!(sent.url, "http://localhost:5001/api/auth/login");
    assert_eq!(sent.body.as_deref(), Some(r#"{"username":"lin","password":"secret1"}"#));
    assert_eq!(h.store.get("authToken").as_deref(), Some("jwt-abc"));
    assert_eq!(h.ctx.api.authorization().as_deref(), Some("Bearer jwt-abc"));
}

#[test]
fn login_then_reload_restores_same_profile() {
    let (transport, h) = harness_at("/");
    transport.respond(200, LOGIN_OK);
    let user = block_on(h.ctx.gate.login("lin", "secret1")).unwrap();

    let reloaded = Harness::with_store(Rc::new(ScriptedTransport::default()), "/student/dashboard", h.store.clone());
    assert_eq!(reloaded.ctx.gate.check_auth_status(), GateOutcome::Authorized(user.clone()));
    assert_eq!(reloaded.ctx.gate.current_user().unwrap().extra["account"]["balance"], 100.0);
}

#[test]
fn rejected_login_returns_server_message_and_keeps_storage() {
    let (transport, h) = harness_at("/");
    transport.respond(400, r#"{"success":false,"message":"用户名或密码错误"}"#);

    let err = block_on(h.ctx.gate.login("lin", "bad")).unwrap_err();

    assert_eq!(err, "用户名或密码错误");
    assert!(h.store.is_empty());
    assert!(h.ctx.gate.current_user().is_none());
}

#[test]
fn login_envelope_failure_on_200_returns_message() {
    let (transport, h) = harness_at("/");
    transport.respond(200, r#"{"success":false,"message":"账户等待审核中"}"#);
    assert_eq!(block_on(h.ctx.gate.login("coach", "pw")).unwrap_err(), "账户等待审核中");
}

#[test]
fn login_network_failure_returns_generic_message() {
    let (transport, h) = harness_at("/");
    transport.fail();
    assert_eq!(block_on(h.ctx.gate.login("lin", "pw")).unwrap_err(), LOGIN_FAILED_MESSAGE);
    assert!(h.store.is_empty());
}

#[test]
fn login_with_unwritable_storage_fails_cleanly() {
    let transport = Rc::new(ScriptedTransport::default());
    transport.respond(200, LOGIN_OK);
    let h = Harness::with_store(transport, "/", Rc::new(MemoryStore::read_only()));

    assert_eq!(block_on(h.ctx.gate.login("lin", "secret1")).unwrap_err(), LOGIN_FAILED_MESSAGE);
    assert!(h.ctx.gate.current_user().is_none());
    assert_eq!(h.ctx.api.authorization(), None);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_without_confirmation_clears_everything() {
    let (_, h) = harness_at("/student/dashboard");
    h.seed_session("tok-1", STUDENT_JSON);
    h.ctx.gate.check_auth_status();

    assert!(h.ctx.gate.logout(None));

    assert!(h.store.is_empty());
    assert_eq!(h.ctx.api.authorization(), None);
    assert!(h.ctx.gate.current_user().is_none());
    assert_eq!(h.navigator.redirects(), vec!["/".to_owned()]);
}

#[test]
fn logout_is_idempotent_without_session() {
    let (_, h) = harness_at("/");
    h.store.insert("authToken", "orphan");
    assert!(h.ctx.gate.logout(None));
    assert!(h.ctx.gate.logout(None));
    assert!(h.store.is_empty());
}

#[test]
fn declined_confirmation_is_a_no_op() {
    let (_, h) = harness_at("/student/dashboard");
    h.seed_session("tok-1", STUDENT_JSON);
    h.ctx.gate.check_auth_status();

    let asked = Cell::new(None::<String>);
    let decline = |msg: &str| {
        asked.set(Some(msg.to_owned()));
        false
    };
    assert!(!h.ctx.gate.logout(Some(&decline)));

    assert_eq!(asked.take().as_deref(), Some(LOGOUT_CONFIRM_MESSAGE));
    assert_eq!(h.store.get("authToken").as_deref(), Some("tok-1"));
    assert!(h.navigator.redirects().is_empty());
}

#[test]
fn accepted_confirmation_logs_out() {
    let (_, h) = harness_at("/student/dashboard");
    h.seed_session("tok-1", STUDENT_JSON);
    h.ctx.gate.check_auth_status();
    assert!(h.ctx.gate.logout(Some(&|_: &str| true)));
    assert!(h.store.is_empty());
}

// =============================================================
// redirect_to_dashboard
// =============================================================

#[test]
fn redirect_to_dashboard_uses_override_first() {
    let (_, h) = harness_at("/");
    h.seed_session("tok-1", STUDENT_JSON);
    h.ctx.session.restore();
    assert!(h.ctx.gate.redirect_to_dashboard(Some(UserType::CampusAdmin)));
    assert_eq!(h.navigator.redirects(), vec!["/admin/dashboard".to_owned()]);
}

#[test]
fn redirect_to_dashboard_falls_back_to_session_role() {
    let (_, h) = harness_at("/");
    h.seed_session("tok-2", COACH_JSON);
    h.ctx.session.restore();
    assert!(h.ctx.gate.redirect_to_dashboard(None));
    assert_eq!(h.navigator.current_path(), "/coach/dashboard");
}

#[test]
fn redirect_to_dashboard_without_role_is_a_no_op() {
    let (_, h) = harness_at("/");
    assert!(!h.ctx.gate.redirect_to_dashboard(None));
    assert!(h.navigator.redirects().is_empty());
}
