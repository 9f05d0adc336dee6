//! Logout control and the `Ctrl+L` shortcut.

#[cfg(test)]
#[path = "logout_button_test.rs"]
mod logout_button_test;

use leptos::prelude::*;

use crate::app::ClientHandle;
use crate::platform::confirm_dialog;

/// `Ctrl+L` asks to log out.
pub fn is_logout_shortcut(ctrl: bool, key: &str) -> bool {
    ctrl && key == "l"
}

/// Logout after a confirmation prompt.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let client = expect_context::<ClientHandle>();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        client.with_value(|c| {
            c.gate.logout(Some(&confirm_dialog));
        });
    };

    view! {
        <button class="btn btn--ghost logout-button" on:click=on_click>
            "退出登录"
        </button>
    }
}
