//! UI chrome state: the global loading overlay and the toast stack.
//!
//! DESIGN
//! ======
//! `UiState` is plain data so its transitions are unit-testable; the
//! `Notifier`/`LoadingIndicator` impls adapt it to the platform traits,
//! either behind an `RwSignal` (the app) or a `RefCell` (headless).

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::cell::RefCell;
use std::time::Duration;

use leptos::prelude::*;

use crate::platform::{LoadingIndicator, Notifier};

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(5000);
/// Extra time a toast stays mounted after its display duration.
pub const TOAST_CLEANUP_GRACE: Duration = Duration::from_millis(500);

/// Toast severity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    /// Color modifier class.
    pub fn color_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Icon name shown before the message.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Error => "exclamation-circle",
            Self::Warning => "exclamation-triangle",
            Self::Info => "info-circle",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub duration: Duration,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub loader_visible: bool,
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl UiState {
    /// Returns `true` if the loader was not already showing.
    pub fn show_loader(&mut self) -> bool {
        !std::mem::replace(&mut self.loader_visible, true)
    }

    /// Returns `true` if a loader was removed; hiding twice is a no-op.
    pub fn hide_loader(&mut self) -> bool {
        std::mem::replace(&mut self.loader_visible, false)
    }

    /// Queue a toast and return its id.
    pub fn push_toast(&mut self, message: &str, kind: ToastKind, duration: Duration) -> u64 {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toasts.push(Toast { id, message: message.to_owned(), kind, duration });
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss_toast(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }
}

impl Notifier for RefCell<UiState> {
    fn notify(&self, message: &str, kind: ToastKind) {
        self.borrow_mut().push_toast(message, kind, DEFAULT_TOAST_DURATION);
    }
}

impl LoadingIndicator for RefCell<UiState> {
    fn show(&self) {
        self.borrow_mut().show_loader();
    }

    fn hide(&self) {
        self.borrow_mut().hide_loader();
    }
}

impl Notifier for RwSignal<UiState> {
    fn notify(&self, message: &str, kind: ToastKind) {
        let Some(id) = self.try_update(|ui| ui.push_toast(message, kind, DEFAULT_TOAST_DURATION)) else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let ui = *self;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(DEFAULT_TOAST_DURATION + TOAST_CLEANUP_GRACE).await;
                ui.try_update(|state| state.dismiss_toast(id));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    }
}

impl LoadingIndicator for RwSignal<UiState> {
    fn show(&self) {
        if !self.with_untracked(|ui| ui.loader_visible) {
            self.try_update(UiState::show_loader);
        }
    }

    fn hide(&self) {
        if self.with_untracked(|ui| ui.loader_visible) {
            self.try_update(UiState::hide_loader);
        }
    }
}
