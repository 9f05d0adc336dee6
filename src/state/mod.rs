//! Client-side state.
//!
//! DESIGN
//! ======
//! `session` is the token/profile cache shared with the HTTP wrapper,
//! `auth` is what components render from, `ui` holds the loader and toasts.

pub mod auth;
pub mod session;
pub mod ui;
