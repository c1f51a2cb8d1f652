//! Networking modules for the booking backend's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the refresh-aware client every screen uses, `transport` the
//! swappable wire layer beneath it, `types` the JSON schema and `error` the
//! failure taxonomy shown to users.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
