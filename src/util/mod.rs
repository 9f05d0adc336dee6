//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure formatting lives in `format`; `timing` and `transition` wrap
//! browser timers behind a capability so they stay testable natively.

pub mod format;
pub mod timing;
pub mod transition;
