//! Fakes shared by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use futures::channel::oneshot;
use futures::future::LocalBoxFuture;

use crate::config::ClientConfig;
use crate::context::ClientContext;
use crate::net::error::TransportError;
use crate::net::transport::{HttpRequest, HttpResponse, Transport};
use crate::platform::headless::{HeadlessNavigator, MemoryStore};
use crate::state::ui::UiState;
use crate::util::timing::{TimerId, Timers};

type Reply = Result<HttpResponse, TransportError>;

/// Answers requests from a queue, in order, and records them.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Reply>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(&self) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Err(TransportError::Network("connection refused".to_owned())));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'_, Reply> {
        self.requests.borrow_mut().push(request);
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".to_owned())));
        Box::pin(async move { reply })
    }
}

/// Holds every request open until the test releases it.
#[derive(Default)]
pub struct DeferredTransport {
    pending: RefCell<Vec<(HttpRequest, oneshot::Sender<Reply>)>>,
}

impl DeferredTransport {
    pub fn in_flight(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Release every held request with the same response.
    pub fn complete_all(&self, status: u16, body: &str) {
        for (_, tx) in self.pending.borrow_mut().drain(..) {
            let _ = tx.send(Ok(HttpResponse { status, body: body.to_owned() }));
        }
    }
}

impl Transport for DeferredTransport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'_, Reply> {
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().push((request, tx));
        Box::pin(async move {
            rx.await
                .unwrap_or_else(|_| Err(TransportError::Network("request dropped".to_owned())))
        })
    }
}

/// A fully wired client over in-memory capabilities.
pub struct Harness {
    pub ctx: ClientContext,
    pub store: Rc<MemoryStore>,
    pub navigator: Rc<HeadlessNavigator>,
    pub ui: Rc<RefCell<UiState>>,
}

impl Harness {
    pub fn new(transport: Rc<dyn Transport>, path: &str) -> Self {
        Self::with_store(transport, path, Rc::new(MemoryStore::new()))
    }

    pub fn with_store(transport: Rc<dyn Transport>, path: &str, store: Rc<MemoryStore>) -> Self {
        let navigator = Rc::new(HeadlessNavigator::at(path));
        let ui = Rc::new(RefCell::new(UiState::default()));
        let ctx = ClientContext::new(
            ClientConfig::default(),
            store.clone(),
            transport,
            navigator.clone(),
            ui.clone(),
            ui.clone(),
        );
        Self { ctx, store, navigator, ui }
    }

    pub fn toast_messages(&self) -> Vec<String> {
        self.ui.borrow().toasts.iter().map(|t| t.message.clone()).collect()
    }

    /// Seed storage with a persisted session.
    pub fn seed_session(&self, token: &str, user_json: &str) {
        self.store.insert("authToken", token);
        self.store.insert("currentUser", user_json);
    }
}

pub const STUDENT_JSON: &str = r#"{"id":1,"username":"lin","real_name":"林小明","user_type":"student"}"#;
pub const COACH_JSON: &str = r#"{"id":2,"username":"wang","real_name":"王教练","user_type":"coach"}"#;
pub const SUPER_ADMIN_JSON: &str = r#"{"id":3,"username":"root","real_name":null,"user_type":"super_admin"}"#;

/// Timer queue driven by `advance` instead of wall-clock time.
#[derive(Default)]
pub struct ManualTimers {
    now: Cell<Duration>,
    next_id: Cell<TimerId>,
    queue: RefCell<Vec<(Duration, TimerId, Box<dyn FnOnce()>)>>,
}

impl ManualTimers {
    /// Move the clock forward, firing due timers in order.
    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        loop {
            let next = self
                .queue
                .borrow()
                .iter()
                .enumerate()
                .filter(|(_, (due, _, _))| *due <= target)
                .min_by_key(|(_, (due, id, _))| (*due, *id))
                .map(|(i, _)| i);
            let Some(index) = next else {
                break;
            };
            let (due, _, callback) = self.queue.borrow_mut().remove(index);
            self.now.set(due);
            callback();
        }
        self.now.set(target);
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl Timers for ManualTimers {
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.queue.borrow_mut().push((self.now.get() + delay, id, callback));
        id
    }

    fn clear_timeout(&self, id: TimerId) {
        self.queue.borrow_mut().retain(|(_, queued, _)| *queued != id);
    }
}
