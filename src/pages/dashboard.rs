//! Role dashboard shell: header with the user badge and logout control.
//!
//! The gate has already checked the role against the path before this page
//! mounts, so the page only renders what the session says.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::logout_button::LogoutButton;
use crate::components::user_badge::UserBadge;
use crate::net::types::UserType;
use crate::state::auth::AuthState;
use crate::util::format::{format_datetime, local_now};

/// Heading for the dashboard of `user_type`.
pub fn dashboard_heading(user_type: Option<UserType>) -> &'static str {
    match user_type {
        Some(UserType::Student) => "学员中心",
        Some(UserType::Coach) => "教练工作台",
        Some(UserType::CampusAdmin) => "校区管理后台",
        Some(UserType::SuperAdmin) => "系统管理后台",
        None => "工作台",
    }
}

/// Welcome line shown under the heading.
pub fn welcome_line(name: &str, today: &str) -> String {
    if today.is_empty() {
        format!("欢迎，{name}")
    } else {
        format!("欢迎，{name}。今天是 {today}")
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let heading = move || dashboard_heading(auth.get().user.map(|u| u.user_type));
    let today = format_datetime(local_now(), "YYYY年MM月DD日");
    let welcome = move || welcome_line(&auth.get().display_name(), &today);

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1 class="dashboard-header__title">{heading}</h1>
                <div class="dashboard-header__actions">
                    <UserBadge/>
                    <LogoutButton/>
                </div>
            </header>
            <main class="dashboard-main">
                <p class="dashboard-welcome">{welcome}</p>
            </main>
        </div>
    }
}
