//! Page modules for top-level screens.
//!
//! ARCHITECTURE
//! ============
//! `App` swaps between these on the session flag; pages own orchestration
//! and delegate presentation to `components`.

pub mod home;
pub mod login;
