//! Single-slot cancellable browser timeout.
//!
//! DESIGN
//! ======
//! Holds at most one `gloo_timers` `Timeout`. Scheduling replaces (and
//! thereby clears) the previous timeout; dropping a `Timeout` is what
//! cancels it. Outside the browser build nothing is ever scheduled.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::time::Duration;

#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "csr")]
use leptos::prelude::*;

/// Copyable handle to the slot; owned by the current reactive owner.
#[derive(Clone, Copy)]
pub struct PendingTimeout {
    #[cfg(feature = "csr")]
    slot: StoredValue<Option<Timeout>, LocalStorage>,
}

impl Default for PendingTimeout {
    fn default() -> Self {
        Self::new()
    }
}

impl PendingTimeout {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "csr")]
            slot: StoredValue::new_local(None),
        }
    }

    /// Run `callback` after `delay`, clearing any outstanding timeout first.
    pub fn replace(&self, delay: Duration, callback: impl FnOnce() + 'static) {
        #[cfg(feature = "csr")]
        {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            self.slot.update_value(|slot| {
                drop(slot.take());
                *slot = Some(Timeout::new(millis, callback));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (delay, callback);
        }
    }

    /// Clear the outstanding timeout, if any.
    pub fn cancel(&self) {
        #[cfg(feature = "csr")]
        {
            self.slot.update_value(|slot| drop(slot.take()));
        }
    }
}
