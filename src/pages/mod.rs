//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Public pages (`login`, `register`, `unauthorized`) render bare. Guarded
//! routes wrap `workspace` in `RequireAuth` + `Layout` from `components`.

pub mod login;
pub mod register;
pub mod unauthorized;
pub mod workspace;
