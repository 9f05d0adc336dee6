//! Per-page wiring of session, HTTP wrapper and gate.
//!
//! `ClientContext` is built once by the app shell and shared through Leptos
//! context; nothing here is global.

use std::rc::Rc;

use crate::auth::access::AccessPolicy;
use crate::auth::gate::AuthGate;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::transport::Transport;
use crate::platform::{KeyValueStore, LoadingIndicator, Navigator, Notifier};
use crate::state::session::SessionManager;

pub struct ClientContext {
    pub config: ClientConfig,
    pub session: Rc<SessionManager>,
    pub api: Rc<ApiClient>,
    pub gate: Rc<AuthGate>,
}

impl ClientContext {
    pub fn new(
        config: ClientConfig,
        storage: Rc<dyn KeyValueStore>,
        transport: Rc<dyn Transport>,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
        loader: Rc<dyn LoadingIndicator>,
    ) -> Self {
        let session = Rc::new(SessionManager::new(&config, storage));
        let api = Rc::new(ApiClient::new(
            &config,
            transport,
            Rc::clone(&session),
            Rc::clone(&navigator),
            notifier,
            loader,
        ));
        let gate = Rc::new(AuthGate::new(
            &config,
            Rc::clone(&session),
            Rc::clone(&api),
            navigator,
            AccessPolicy::default(),
        ));
        Self { config, session, api, gate }
    }
}
