//! Networking modules for the helpdesk REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `channel` is the single shared outbound channel and its bearer header,
//! `api` wraps the auth endpoints, and `types` defines their wire schema.

pub mod api;
pub mod channel;
pub mod types;
