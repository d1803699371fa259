//! Field Validator: one text value plus a tri-state validity.
//!
//! DESIGN
//! ======
//! Both login fields share one reducer. What differs between them is the
//! predicate, injected as a plain `fn(&str) -> bool` so validators stay
//! `Send + Sync` and cheap to clone into reactive state.
//!
//! `Invalid` is an ordinary state, not an error: nothing here fails.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use serde::{Deserialize, Serialize};

/// Validity predicate for a single field value.
pub type Predicate = fn(&str) -> bool;

/// Minimum number of characters (exclusive) a trimmed password must exceed.
pub const PASSWORD_MIN_LEN: usize = 6;

// =============================================================================
// VALIDITY
// =============================================================================

/// Tri-state validity of a field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validity {
    /// No transition has happened yet.
    #[default]
    Unknown,
    Valid,
    Invalid,
}

impl Validity {
    #[must_use]
    pub fn from_bool(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }

    /// `true` only for an explicit `Invalid`; `Unknown` is not flagged.
    #[must_use]
    pub fn is_invalid(self) -> bool {
        self == Self::Invalid
    }
}

// =============================================================================
// EVENTS + REDUCER
// =============================================================================

/// Transition events a field reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldEvent {
    /// The user changed the value.
    UserInput(String),
    /// The input lost focus.
    InputBlur,
}

/// Current value and validity of a field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub validity: Validity,
}

/// Pure transition function shared by every field.
#[must_use]
pub fn reduce(state: &FieldState, event: FieldEvent, predicate: Predicate) -> FieldState {
    let value = match event {
        FieldEvent::UserInput(value) => value,
        FieldEvent::InputBlur => state.value.clone(),
    };
    let validity = Validity::from_bool(predicate(&value));
    FieldState { value, validity }
}

/// Email rule: the value contains an `@`.
#[must_use]
pub fn email_predicate(value: &str) -> bool {
    value.contains('@')
}

/// Password rule: more than [`PASSWORD_MIN_LEN`] characters once trimmed.
#[must_use]
pub fn password_predicate(value: &str) -> bool {
    value.trim().chars().count() > PASSWORD_MIN_LEN
}

// =============================================================================
// FIELD KIND
// =============================================================================

/// The two login fields, in focus order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Email,
    Password,
}

impl FieldKind {
    /// Fixed tie-break order used when redirecting focus.
    pub const ORDER: [FieldKind; 2] = [FieldKind::Email, FieldKind::Password];

    #[must_use]
    pub fn predicate(self) -> Predicate {
        match self {
            Self::Email => email_predicate,
            Self::Password => password_predicate,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "E-Mail",
            Self::Password => "Password",
        }
    }

    /// DOM id and `for` target of the rendered input.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    /// HTML `type` attribute of the rendered input.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

// =============================================================================
// VALIDATOR
// =============================================================================

/// A field value with an injected validity predicate.
#[derive(Clone, Debug)]
pub struct FieldValidator {
    state: FieldState,
    predicate: Predicate,
}

impl FieldValidator {
    /// Create an empty validator (`value = ""`, `validity = Unknown`).
    #[must_use]
    pub fn new(predicate: Predicate) -> Self {
        Self { state: FieldState::default(), predicate }
    }

    #[must_use]
    pub fn for_kind(kind: FieldKind) -> Self {
        Self::new(kind.predicate())
    }

    /// Apply one transition event.
    pub fn dispatch(&mut self, event: FieldEvent) {
        self.state = reduce(&self.state, event, self.predicate);
    }

    /// Replace the value and revalidate against it.
    pub fn submit_value(&mut self, value: impl Into<String>) {
        self.dispatch(FieldEvent::UserInput(value.into()));
    }

    /// Revalidate the current value (focus lost).
    pub fn commit(&mut self) {
        self.dispatch(FieldEvent::InputBlur);
    }

    #[must_use]
    pub fn state(&self) -> &FieldState {
        &self.state
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.state.value
    }

    #[must_use]
    pub fn validity(&self) -> Validity {
        self.state.validity
    }
}
