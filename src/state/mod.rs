//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only auth state is app-wide; ticket views fetch their own data.

pub mod auth;
