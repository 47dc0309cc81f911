//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and route guarding while reading shared auth
//! state from Leptos context providers.

pub mod header;
pub mod layout;
pub mod require_auth;
pub mod sidebar;
