//! Debounce and throttle wrappers over an injectable timer.
//!
//! DESIGN
//! ======
//! Each wrapper owns its own single-timer state. Timers come from the
//! `Timers` capability so the same wrappers run on browser `setTimeout`
//! and on a manual clock in tests.

#[cfg(test)]
#[path = "timing_test.rs"]
mod timing_test;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

pub type TimerId = u32;

/// One-shot timer scheduling.
pub trait Timers {
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId;

    /// Cancelling a fired or unknown timer is a no-op.
    fn clear_timeout(&self, id: TimerId);
}

/// `window.setTimeout` timers.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

#[cfg(feature = "csr")]
impl Timers for BrowserTimers {
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            log::warn!("no window; timer dropped");
            return 0;
        };
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let closure = Closure::once_into_js(move || callback());
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(closure.unchecked_ref(), millis) {
            Ok(handle) => u32::try_from(handle).unwrap_or_default(),
            Err(e) => {
                log::warn!("setTimeout failed: {e:?}");
                0
            }
        }
    }

    fn clear_timeout(&self, id: TimerId) {
        if let (Some(window), Ok(handle)) = (web_sys::window(), i32::try_from(id)) {
            window.clear_timeout_with_handle(handle);
        }
    }
}

struct DebounceInner<A> {
    func: Box<dyn Fn(A)>,
    wait: Duration,
    timers: Rc<dyn Timers>,
    pending: Cell<Option<TimerId>>,
}

/// Calls `func` once `wait` has passed without another call, with the
/// arguments of the last call.
pub struct Debounced<A> {
    inner: Rc<DebounceInner<A>>,
}

impl<A> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<A: 'static> Debounced<A> {
    pub fn call(&self, args: A) {
        if let Some(id) = self.inner.pending.take() {
            self.inner.timers.clear_timeout(id);
        }
        let inner = Rc::clone(&self.inner);
        let id = self.inner.timers.set_timeout(
            self.inner.wait,
            Box::new(move || {
                inner.pending.set(None);
                (inner.func)(args);
            }),
        );
        self.inner.pending.set(Some(id));
    }

    /// Drop a pending invocation, if any.
    pub fn cancel(&self) {
        if let Some(id) = self.inner.pending.take() {
            self.inner.timers.clear_timeout(id);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.inner.pending.get().is_some()
    }
}

pub fn debounce<A: 'static>(timers: Rc<dyn Timers>, wait: Duration, func: impl Fn(A) + 'static) -> Debounced<A> {
    Debounced {
        inner: Rc::new(DebounceInner { func: Box::new(func), wait, timers, pending: Cell::new(None) }),
    }
}

struct ThrottleInner<A> {
    func: Box<dyn Fn(A)>,
    limit: Duration,
    timers: Rc<dyn Timers>,
    cooling: Cell<bool>,
}

/// Calls `func` at most once per `limit` window, with the first call's
/// arguments; calls inside the window are dropped.
pub struct Throttled<A> {
    inner: Rc<ThrottleInner<A>>,
}

impl<A> Clone for Throttled<A> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<A: 'static> Throttled<A> {
    /// Returns whether this call went through.
    pub fn call(&self, args: A) -> bool {
        if self.inner.cooling.get() {
            return false;
        }
        self.inner.cooling.set(true);
        (self.inner.func)(args);
        let inner = Rc::clone(&self.inner);
        self.inner
            .timers
            .set_timeout(self.inner.limit, Box::new(move || inner.cooling.set(false)));
        true
    }
}

pub fn throttle<A: 'static>(timers: Rc<dyn Timers>, limit: Duration, func: impl Fn(A) + 'static) -> Throttled<A> {
    Throttled {
        inner: Rc::new(ThrottleInner { func: Box::new(func), limit, timers, cooling: Cell::new(false) }),
    }
}
