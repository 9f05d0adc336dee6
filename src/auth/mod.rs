//! Session gate and role-based page access.
//!
//! SYSTEM CONTEXT
//! ==============
//! `access` holds the static role rules; `gate` applies them at page load
//! and owns the login/logout lifecycle.

pub mod access;
pub mod gate;
