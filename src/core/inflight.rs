//! # In-flight emission tracking with a drain barrier.
//!
//! Counts emissions whose listener fan-out has not yet joined, and lets the
//! close sequence wait until that count returns to zero.
//!
//! ## Rules
//! - One unit per emission, not per matched listener: [`InFlight::enter`]
//!   is called once when a fan-out starts, and the returned guard releases
//!   the unit when the fan-in join completes (or unwinds).
//! - **RAII**: the guard decrements on drop, so the counter stays
//!   consistent even if an invocation panics through the fan-out.
//! - [`InFlight::wait_idle`] observes the count and parks on a
//!   [`Notify`]; the last guard to drop wakes all waiters.

use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::Notify;

/// Counter of emissions in flight, with an awaitable idle barrier.
pub(crate) struct InFlight {
    current: AtomicUsize,
    drained: Notify,
}

impl InFlight {
    /// Creates a tracker with nothing in flight.
    pub fn new() -> Self {
        Self {
            current: AtomicUsize::new(0),
            drained: Notify::new(),
        }
    }

    /// Returns the number of emissions currently in flight.
    pub fn current(&self) -> usize {
        self.current.load(Ordering::Acquire)
    }

    /// Marks one emission as in flight until the returned guard drops.
    pub fn enter(&self) -> InFlightGuard<'_> {
        self.current.fetch_add(1, Ordering::AcqRel);
        InFlightGuard { tracker: self }
    }

    /// Waits until nothing is in flight.
    ///
    /// Returns immediately when the count is already zero. The notified
    /// future is created before the count is checked, so a decrement
    /// between the check and the await cannot be missed.
    pub async fn wait_idle(&self) {
        loop {
            let drained = self.drained.notified();
            if self.current() == 0 {
                return;
            }
            drained.await;
        }
    }
}

/// RAII unit of in-flight work; releases its slot on drop.
pub(crate) struct InFlightGuard<'a> {
    tracker: &'a InFlight,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.tracker.current.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.tracker.drained.notify_waiters();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_enter_and_drop_track_count() {
        let tracker = InFlight::new();
        assert_eq!(tracker.current(), 0);

        let first = tracker.enter();
        let second = tracker.enter();
        assert_eq!(tracker.current(), 2);

        drop(first);
        assert_eq!(tracker.current(), 1);
        drop(second);
        assert_eq!(tracker.current(), 0);
    }

    #[tokio::test]
    async fn test_wait_idle_returns_immediately_when_idle() {
        let tracker = InFlight::new();
        tokio::time::timeout(Duration::from_secs(1), tracker.wait_idle())
            .await
            .expect("idle tracker must not block");
    }

    #[tokio::test]
    async fn test_wait_idle_blocks_until_last_guard_drops() {
        let tracker = Arc::new(InFlight::new());
        let guard = tracker.enter();

        let waiter = tokio::spawn({
            let tracker = Arc::clone(&tracker);
            async move { tracker.wait_idle().await }
        });
        tokio::task::yield_now().await;
        assert!(!waiter.is_finished(), "waiter must park while work is in flight");

        drop(guard);
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter must wake after drain")
            .expect("waiter task must not panic");
    }
}
