//! Shared UI components rendered by every page.

pub mod loading_overlay;
pub mod logout_button;
pub mod toast_host;
pub mod user_badge;
