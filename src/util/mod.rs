//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock) from
//! session and page logic to improve reuse and testability.

pub mod clock;
pub mod storage;
