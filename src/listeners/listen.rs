//! # Core listener trait
//!
//! `Listen` is the extension point for plugging message handlers into the
//! engine. A handler is invoked once per matching registration per
//! emission, in the order registrations are discovered by the matcher.
//!
//! ## Contract
//! - Implementations receive the message, a one-shot [`Ack`], and a clone
//!   of the emitting [`Emitter`] as their execution context.
//! - The ack must be fired exactly once. It may be moved into a spawned
//!   task and fired later; `on_message` returning does **not** complete
//!   the delivery, the ack does.
//! - `on_message` should return promptly. Long-running work belongs in a
//!   spawned task holding the ack, otherwise it delays the invocation of
//!   the remaining listeners of the same emission.
//! - Do not await [`Emitter::close`] from inside `on_message`: close waits
//!   for the running emission, which waits for `on_message` to return.
//!   Spawn it instead.

use async_trait::async_trait;
use std::sync::Arc;

use crate::core::Emitter;
use crate::listeners::Ack;
use crate::messages::Message;

/// Shared listener handle stored by subscriptions.
///
/// Identity is the `Arc` allocation: registering clones of the same handle
/// under two patterns creates two subscriptions of the same listener, and
/// removal matches by pointer, never by value.
pub type ListenerRef = Arc<dyn Listen>;

/// Contract for message listeners.
///
/// Called inline by the emitting task. Implementations should avoid
/// blocking the async runtime (prefer async I/O and cooperative waits).
#[async_trait]
pub trait Listen: Send + Sync + 'static {
    /// Handle a single delivery.
    ///
    /// # Parameters
    /// - `message`: the emitted message (clone it if it must outlive the call)
    /// - `ack`: one-shot completion signal, fire exactly once
    /// - `emitter`: the engine that dispatched this delivery
    async fn on_message(&self, message: &Message, ack: Ack, emitter: &Emitter);

    /// Human-readable name (for logs/metrics).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
