//! # logingate
//!
//! Framework-independent core of the login form: per-field validation,
//! the debounced "form may submit" gate, and the persisted logged-in flag.
//!
//! ARCHITECTURE
//! ============
//! ```text
//! input event ──→ FieldValidator ──→ FormGate (quiet period) ──→ submittable
//!                                                                   │
//!                     SessionHandle::login  ←── LoginForm::submit ──┘
//! ```
//!
//! The `client` crate renders these types with Leptos; everything here is
//! plain Rust so it can be exercised natively under tokio.

pub mod config;
#[cfg(feature = "tokio")]
pub mod debounce;
pub mod field;
pub mod form;
pub mod gate;
pub mod mirror;
pub mod session;

pub use config::LoginConfig;
pub use field::{FieldEvent, FieldKind, FieldState, FieldValidator, Validity};
pub use form::{Focus, FocusTargets, LoginForm, SubmitOutcome};
pub use gate::{FormGate, Ticket};
pub use mirror::{DurableMirror, FileMirror, MemoryMirror, MirrorError};
pub use session::{SessionError, SessionFlag, SessionHandle};
