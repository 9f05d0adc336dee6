//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the `ClientContext` for the page, runs the authorization gate
//! once and only mounts the router after the gate let the page through.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::loading_overlay::LoadingOverlay;
use crate::components::toast_host::ToastHost;
use crate::config::ClientConfig;
use crate::context::ClientContext;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::{auth::AuthState, ui::UiState};

/// Context handle for the page's `ClientContext`. The context holds `Rc`s,
/// so it lives in local (non-`Send`) arena storage.
pub type ClientHandle = StoredValue<Rc<ClientContext>, LocalStorage>;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let ui = RwSignal::new(UiState::default());
    provide_context(auth);
    provide_context(ui);

    let client: ClientHandle = StoredValue::new_local(Rc::new(build_context(ui)));
    provide_context(client);

    // Runs once: nothing inside is tracked.
    Effect::new(move || {
        let outcome = client.with_value(|c| c.gate.check_auth_status());
        auth.set(AuthState::from_outcome(&outcome));
    });

    #[cfg(feature = "csr")]
    install_logout_shortcut(client);

    view! {
        <Title text="乒乓球培训管理系统"/>
        <LoadingOverlay/>
        <ToastHost/>

        <Show
            when=move || !auth.get().loading
            fallback=|| view! { <div class="page-loading"><div class="loading"></div></div> }
        >
            <Router>
                <Routes fallback=|| "页面不存在".into_view()>
                    <Route path=StaticSegment("") view=LoginPage/>
                    <Route path=(StaticSegment("student"), StaticSegment("dashboard")) view=DashboardPage/>
                    <Route path=(StaticSegment("coach"), StaticSegment("dashboard")) view=DashboardPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("dashboard")) view=DashboardPage/>
                </Routes>
            </Router>
        </Show>
    }
}

#[cfg(feature = "csr")]
fn build_context(ui: RwSignal<UiState>) -> ClientContext {
    use crate::net::transport::GlooTransport;
    use crate::platform::browser::{BrowserNavigator, BrowserStorage};

    ClientContext::new(
        ClientConfig::from_build_env(),
        Rc::new(BrowserStorage),
        Rc::new(GlooTransport),
        Rc::new(BrowserNavigator),
        Rc::new(ui),
        Rc::new(ui),
    )
}

#[cfg(not(feature = "csr"))]
fn build_context(ui: RwSignal<UiState>) -> ClientContext {
    use crate::net::transport::OfflineTransport;
    use crate::platform::headless::{HeadlessNavigator, MemoryStore};

    let config = ClientConfig::from_build_env();
    let navigator = HeadlessNavigator::at(&config.login_path);
    ClientContext::new(
        config,
        Rc::new(MemoryStore::new()),
        Rc::new(OfflineTransport),
        Rc::new(navigator),
        Rc::new(ui),
        Rc::new(ui),
    )
}

/// `Ctrl+L` logs out after confirmation. The listener lives as long as the
/// page does.
#[cfg(feature = "csr")]
fn install_logout_shortcut(client: ClientHandle) {
    use crate::components::logout_button::is_logout_shortcut;
    use crate::platform::confirm_dialog;

    let _handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if is_logout_shortcut(ev.ctrl_key(), &ev.key()) {
            ev.prevent_default();
            client.with_value(|c| {
                c.gate.logout(Some(&confirm_dialog));
            });
        }
    });
}
