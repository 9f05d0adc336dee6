//! Login page with username + password auth.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gate lets anonymous users through here. A user who already has a
//! session is sent straight to their role's dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::app::ClientHandle;
use crate::state::auth::AuthState;

pub const MISSING_CREDENTIALS_MESSAGE: &str = "请输入用户名和密码";

/// Trim the username; the password is sent as typed.
pub fn validate_credentials(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS_MESSAGE);
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = expect_context::<ClientHandle>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "csr")]
    let ui = expect_context::<RwSignal<crate::state::ui::UiState>>();

    Effect::new(move || {
        if let Some(user) = auth.get().user {
            client.with_value(|c| {
                c.gate.redirect_to_dashboard(Some(user.user_type));
            });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value) = match validate_credentials(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "csr")]
        {
            use crate::platform::Notifier;
            use crate::state::ui::ToastKind;

            let gate = client.with_value(|c| std::rc::Rc::clone(&c.gate));
            leptos::task::spawn_local(async move {
                match gate.login(&username_value, &password_value).await {
                    Ok(user) => {
                        Notifier::notify(&ui, "登录成功", ToastKind::Success);
                        gate.redirect_to_dashboard(Some(user.user_type));
                    }
                    Err(message) => {
                        info.set(message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (username_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"乒乓球培训管理系统"</h1>
                <p class="login-card__subtitle">"账号登录"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="用户名"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="密码"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "登录中..." } else { "登录" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
