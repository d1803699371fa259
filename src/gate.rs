//! Debounced Form Gate: decides whether the form may submit.
//!
//! DESIGN
//! ======
//! `FormGate` is the timer-free half of a trailing-edge debounce. Every
//! observed validity change supersedes the outstanding recomputation and
//! hands out a fresh [`Ticket`]; a driver (tokio task, browser timeout)
//! sleeps for the quiet period and then calls [`FormGate::fire`]. Only the
//! latest ticket can write `submittable`, so a timer that escapes
//! cancellation still has no effect.
//!
//! The first observation schedules like any other: there is no immediate
//! evaluation on mount.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use std::time::Duration;

use tracing::{debug, trace};

use crate::field::Validity;

/// Default quiet period between the last change and the recomputation.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Handle for one scheduled recomputation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

/// Gate state over N observed field validities.
#[derive(Clone, Debug)]
pub struct FormGate {
    quiet_period: Duration,
    observed: Option<Vec<Validity>>,
    generation: u64,
    pending: Option<u64>,
    submittable: bool,
    recomputations: u64,
    torn_down: bool,
}

impl FormGate {
    #[must_use]
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            observed: None,
            generation: 0,
            pending: None,
            submittable: false,
            recomputations: 0,
            torn_down: false,
        }
    }

    /// Record the current validities of every observed field.
    ///
    /// Returns a ticket to fire after [`Self::quiet_period`] when this is the
    /// first observation or any validity differs from the previous one.
    /// Any previously outstanding ticket is cancelled. Returns `None` when
    /// nothing changed or the gate has been torn down.
    pub fn observe(&mut self, validities: &[Validity]) -> Option<Ticket> {
        if self.torn_down {
            return None;
        }
        if self.observed.as_deref() == Some(validities) {
            return None;
        }
        self.cancel();
        self.observed = Some(validities.to_vec());
        self.generation += 1;
        self.pending = Some(self.generation);
        trace!(generation = self.generation, "form validity recomputation scheduled");
        Some(Ticket { generation: self.generation })
    }

    /// Run a scheduled recomputation.
    ///
    /// Returns the new `submittable` value, or `None` if the ticket was
    /// superseded or cancelled (in which case nothing is written).
    pub fn fire(&mut self, ticket: Ticket) -> Option<bool> {
        if self.torn_down || self.pending != Some(ticket.generation) {
            return None;
        }
        self.pending = None;
        let submittable = self
            .observed
            .as_deref()
            .is_some_and(|v| v.iter().all(|validity| validity.is_valid()));
        self.submittable = submittable;
        self.recomputations += 1;
        debug!(submittable, "checking form validity");
        Some(submittable)
    }

    /// Drop the outstanding recomputation, if any.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.pending.take().is_some();
        if cancelled {
            trace!(generation = self.generation, "form validity recomputation cleanup");
        }
        cancelled
    }

    /// Cancel and refuse all further scheduling.
    pub fn teardown(&mut self) {
        self.cancel();
        self.torn_down = true;
    }

    #[must_use]
    pub fn submittable(&self) -> bool {
        self.submittable
    }

    #[must_use]
    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Number of recomputations that actually wrote `submittable`.
    #[must_use]
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}

impl Default for FormGate {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}
