//! Tokio driver for [`FormGate`].
//!
//! DESIGN
//! ======
//! At most one sleeping task exists per `Debouncer`: scheduling a new
//! recomputation aborts the previous task before the new one is stored.
//! The gate's ticket check backs this up for a task that had already woken
//! when it was aborted.
//!
//! `submittable` is published over a `watch` channel so observers can await
//! changes instead of polling. Dropping the debouncer tears the gate down.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::field::Validity;
use crate::gate::FormGate;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Schedules gate recomputations on the current tokio runtime.
pub struct Debouncer {
    gate: Arc<Mutex<FormGate>>,
    pending: Mutex<Option<JoinHandle<()>>>,
    submittable: Arc<watch::Sender<bool>>,
}

impl Debouncer {
    #[must_use]
    pub fn new(gate: FormGate) -> Self {
        let (submittable, _) = watch::channel(gate.submittable());
        Self { gate: Arc::new(Mutex::new(gate)), pending: Mutex::new(None), submittable: Arc::new(submittable) }
    }

    /// Feed the current validities of every observed field.
    ///
    /// Must be called from within a tokio runtime.
    pub fn notify(&self, validities: &[Validity]) {
        let (ticket, delay) = {
            let mut gate = lock(&self.gate);
            let Some(ticket) = gate.observe(validities) else {
                return;
            };
            (ticket, gate.quiet_period())
        };

        let gate = Arc::clone(&self.gate);
        let submittable = Arc::clone(&self.submittable);
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut gate = lock(&gate);
            if let Some(value) = gate.fire(ticket) {
                submittable.send_replace(value);
            }
        });

        if let Some(previous) = lock(&self.pending).replace(task) {
            previous.abort();
        }
    }

    /// Latest published `submittable` value.
    #[must_use]
    pub fn submittable(&self) -> bool {
        *self.submittable.borrow()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.submittable.subscribe()
    }

    #[must_use]
    pub fn recomputations(&self) -> u64 {
        lock(&self.gate).recomputations()
    }

    /// Cancel the outstanding recomputation and stop scheduling.
    pub fn teardown(&self) {
        lock(&self.gate).teardown();
        if let Some(task) = lock(&self.pending).take() {
            task.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.teardown();
    }
}
