//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the route guard while reading shared
//! state from Leptos context providers.

pub mod footer;
pub mod form_alert;
pub mod header;
pub mod protected_route;
pub mod sidebar;
