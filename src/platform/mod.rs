//! Browser capabilities the client depends on.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session, gate and HTTP code only see these traits. `browser` implements
//! them over `web-sys` for `csr` builds; `headless` provides in-memory
//! versions for native builds and tests.

#[cfg(feature = "csr")]
pub mod browser;
pub mod headless;

use thiserror::Error;

use crate::state::ui::ToastKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write failed for {key}: {detail}")]
    Write { key: String, detail: String },
}

/// String key-value persistence (browser `localStorage`).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the value could not be persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing an absent key is a no-op.
    fn remove(&self, key: &str);
}

/// Page location and full-page navigation.
pub trait Navigator {
    fn current_path(&self) -> String;
    fn redirect(&self, path: &str);
}

/// User-visible toast sink.
pub trait Notifier {
    fn notify(&self, message: &str, kind: ToastKind);
}

/// Global loading overlay. Both calls are idempotent.
pub trait LoadingIndicator {
    fn show(&self);
    fn hide(&self);
}

/// Ask the user to confirm a destructive action.
///
/// Outside the browser there is nobody to ask, so the answer is no.
pub fn confirm_dialog(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}
