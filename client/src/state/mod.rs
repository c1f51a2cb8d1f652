//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the only state shared across screens. Flow screens keep
//! their own ephemeral state (see `flows`).

pub mod bootstrap;
pub mod session;
