//! Submit orchestration for the two-field login form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The view layer owns rendering and the focusable inputs. It hands this
//! module one [`Focus`] capability per field, plus the gate's current
//! `submittable` read model, and acts on the returned [`SubmitOutcome`].

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use tracing::debug;

use crate::field::{FieldEvent, FieldKind, FieldValidator, Validity};
use crate::mirror::DurableMirror;
use crate::session::{SessionError, SessionHandle};

/// Imperative focus capability attached to a rendered input.
pub trait Focus {
    fn focus(&self);
}

impl<F: Fn()> Focus for F {
    fn focus(&self) {
        self();
    }
}

/// Focus capabilities for both login fields.
pub struct FocusTargets<'a> {
    pub email: &'a dyn Focus,
    pub password: &'a dyn Focus,
}

impl FocusTargets<'_> {
    #[must_use]
    pub fn get(&self, kind: FieldKind) -> &dyn Focus {
        match kind {
            FieldKind::Email => self.email,
            FieldKind::Password => self.password,
        }
    }
}

/// Result of a submit request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The session store accepted the login.
    LoggedIn,
    /// Submission refused; focus moved to this field.
    Refocused(FieldKind),
    /// Every field is valid but the gate has not opened yet.
    Pending,
}

/// Email and password validators.
#[derive(Clone, Debug)]
pub struct LoginForm {
    email: FieldValidator,
    password: FieldValidator,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginForm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            email: FieldValidator::for_kind(FieldKind::Email),
            password: FieldValidator::for_kind(FieldKind::Password),
        }
    }

    #[must_use]
    pub fn field(&self, kind: FieldKind) -> &FieldValidator {
        match kind {
            FieldKind::Email => &self.email,
            FieldKind::Password => &self.password,
        }
    }

    pub fn dispatch(&mut self, kind: FieldKind, event: FieldEvent) {
        match kind {
            FieldKind::Email => self.email.dispatch(event),
            FieldKind::Password => self.password.dispatch(event),
        }
    }

    /// Validities in [`FieldKind::ORDER`], as observed by the gate.
    #[must_use]
    pub fn validities(&self) -> [Validity; 2] {
        FieldKind::ORDER.map(|kind| self.field(kind).validity())
    }

    /// First field, in fixed order, that is not `Valid`.
    #[must_use]
    pub fn first_unsettled(&self) -> Option<FieldKind> {
        FieldKind::ORDER
            .into_iter()
            .find(|kind| !self.field(*kind).validity().is_valid())
    }

    /// Log in when `submittable`, otherwise focus the first unsettled field.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot persist the login.
    pub fn submit<M: DurableMirror>(
        &self,
        submittable: bool,
        session: &SessionHandle<M>,
        targets: &FocusTargets<'_>,
    ) -> Result<SubmitOutcome, SessionError> {
        if submittable {
            session.login(self.email.value(), self.password.value())?;
            return Ok(SubmitOutcome::LoggedIn);
        }
        match self.first_unsettled() {
            Some(kind) => {
                debug!(field = ?kind, "submit refused; focusing field");
                targets.get(kind).focus();
                Ok(SubmitOutcome::Refocused(kind))
            }
            None => {
                debug!("submit refused; validity check still pending");
                Ok(SubmitOutcome::Pending)
            }
        }
    }
}
