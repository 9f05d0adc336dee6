//! Header slot showing the signed-in user's avatar, name and role.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn UserBadge() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let name = move || auth.get().display_name();
    let initial = move || auth.get().initial();
    let role = move || auth.get().role_label();

    view! {
        <div class="user-badge">
            <span class="user-badge__avatar" title=name>{initial}</span>
            <span class="user-badge__name">{name}</span>
            <span class="user-badge__type">{role}</span>
        </div>
    }
}
