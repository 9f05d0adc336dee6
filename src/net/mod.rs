//! Networking: REST wrapper, transport seam and wire types.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` applies request policy, `transport` moves bytes, `types` defines
//! the backend schema and `error` the failure taxonomy.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;
