//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, timers) from page and
//! component logic so the rest of the crate stays testable natively.

pub mod storage;
pub mod timer;
