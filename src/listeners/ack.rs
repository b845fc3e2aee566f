//! # One-shot delivery acknowledgment.
//!
//! Every matched listener receives an [`Ack`] per delivery and must fire it
//! exactly once — [`Ack::done`] on success, [`Ack::fail`] on failure. The
//! emission that dispatched the delivery joins on all of its acks before
//! its own future resolves.
//!
//! ## Rules
//! - **One-shot by construction**: both `done` and `fail` consume the ack.
//! - **Movable**: an ack may be carried into a spawned task and fired
//!   later; the emission stays in flight until it is.
//! - **Dropping counts as a failure**: an ack dropped unfired is reported
//!   to the emitter as a listener failure, so a forgetful listener can
//!   never deadlock the join.

use tokio::sync::oneshot;

/// What a listener reported through its ack.
pub(crate) type AckResult = Result<(), String>;

/// Receiving half awaited by the emission's fan-in join.
pub(crate) type AckWait = oneshot::Receiver<AckResult>;

/// One-shot completion signal for a single delivery.
///
/// ## Example
/// ```rust
/// use topicvisor::{Ack, Config, Emitter, ListenFn, Message};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let emitter = Emitter::new(Config::default()).unwrap();
/// emitter.on(
///     "jobs/+",
///     ListenFn::arc("worker", |_msg: Message, ack: Ack, _emitter: Emitter| async move {
///         // process, then acknowledge
///         ack.done();
///     }),
/// );
/// # }
/// ```
#[derive(Debug)]
pub struct Ack {
    tx: Option<oneshot::Sender<AckResult>>,
}

impl Ack {
    /// Creates an ack and the wait handle the emitter joins on.
    pub(crate) fn channel() -> (Self, AckWait) {
        let (tx, rx) = oneshot::channel();
        (Self { tx: Some(tx) }, rx)
    }

    /// Signals successful processing of the delivery.
    pub fn done(mut self) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(Ok(()));
        }
    }

    /// Signals failed processing of the delivery.
    ///
    /// The reason is surfaced as the emit call's error once every other
    /// listener of the same emission has acknowledged.
    pub fn fail(mut self, reason: impl Into<String>) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(Err(reason.into()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_done_resolves_ok() {
        let (ack, wait) = Ack::channel();
        ack.done();
        assert_eq!(wait.await.expect("sender fired"), Ok(()));
    }

    #[tokio::test]
    async fn test_fail_carries_reason() {
        let (ack, wait) = Ack::channel();
        ack.fail("boom");
        assert_eq!(wait.await.expect("sender fired"), Err("boom".to_string()));
    }

    #[tokio::test]
    async fn test_dropped_ack_observed_as_closed_channel() {
        let (ack, wait) = Ack::channel();
        drop(ack);
        assert!(wait.await.is_err(), "dropping the ack closes the channel");
    }

    #[tokio::test]
    async fn test_ack_can_fire_from_spawned_task() {
        let (ack, wait) = Ack::channel();
        tokio::spawn(async move {
            tokio::task::yield_now().await;
            ack.done();
        });
        assert_eq!(wait.await.expect("sender fired"), Ok(()));
    }
}
