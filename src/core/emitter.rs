//! # Emitter: subscription registry, fan-out dispatch, and graceful close.
//!
//! The [`Emitter`] owns the pattern trie, the in-flight emission counter,
//! and the lifecycle state. Registration is synchronous; emission and close
//! are futures whose completion *is* the operation's completion callback.
//!
//! ## Key responsibilities
//! - delegate `on` / `remove_listener` to the [`TopicTrie`]
//! - **fan-out** each emission to every matched listener, in discovery
//!   order, and **fan-in** on their acknowledgments
//! - track emissions in flight via [`InFlight`]
//! - reject emissions once closing has begun, and drain before closing
//!
//! ## High-level architecture
//! ```text
//! emit(msg):
//!   closing?  ──► Err(Closed), nothing resolved, nothing invoked
//!   resolve(msg.topic) ──► []            ──► Ok(()) (counter untouched, no suspension)
//!                      ──► [L1 .. Ln]    ──► inflight.enter()  (current += 1)
//!                                             │
//!                        L1.on_message(&msg, ack1, &emitter)
//!                        L2.on_message(&msg, ack2, &emitter)   (in discovery order)
//!                        ...
//!                                             │
//!                        join_all(ack1 .. ackn)     AND-join: every ack, success or
//!                                             │     failure, before the call settles
//!                        guard drops (current -= 1, wake close)
//!                                             ▼
//!                        Ok(()) | Err(Listener { first failure })
//!
//! close():
//!   closing.cancel()          → new emits rejected
//!   inflight.wait_idle()      → all outstanding joins complete
//!   closed = true
//!   yield_now()               → completion deferred past the first poll
//! ```
//!
//! ## Example
//! ```rust
//! use topicvisor::{Config, Emitter, ListenFn, Message};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let emitter = Emitter::new(Config::default())?;
//!
//!     emitter.on(
//!         "sensors/+/temp",
//!         ListenFn::arc("printer", |msg: Message, ack: topicvisor::Ack, _e: Emitter| async move {
//!             println!("{} = {:?}", msg.topic, msg.payload);
//!             ack.done();
//!         }),
//!     );
//!
//!     emitter.emit(Message::new("sensors/kitchen/temp", &b"21.5"[..])).await?;
//!     emitter.close().await;
//!     assert!(emitter.closed());
//!     Ok(())
//! }
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::FutureExt;
use futures::future;
use parking_lot::RwLock;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::core::inflight::InFlight;
use crate::error::{ConfigError, EmitError};
use crate::listeners::{Ack, AckWait, ListenerRef};
use crate::matcher::TopicTrie;
use crate::messages::Message;

/// State shared by all clones of one engine instance.
struct Shared {
    cfg: Config,
    /// Subscription storage. Critical sections are short and never held
    /// across an await; listener invocation happens after release.
    trie: RwLock<TopicTrie>,
    inflight: InFlight,
    /// Cancelled when closing begins; one-directional, like the rest of
    /// the lifecycle.
    closing: CancellationToken,
    /// True only once a close sequence has fully drained.
    closed: AtomicBool,
}

/// In-process pub/sub dispatch engine.
///
/// Cheap to clone; all clones share subscriptions, counters, and lifecycle
/// state. Listeners receive a clone as their execution context, so a
/// handler can register, remove, or emit from within a delivery.
#[derive(Clone)]
pub struct Emitter {
    shared: Arc<Shared>,
}

impl Emitter {
    /// Creates an engine with the given topic syntax.
    ///
    /// The configuration is validated first and fixed for the instance's
    /// lifetime; see [`Config::validate`] for the rules.
    pub fn new(cfg: Config) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let trie = TopicTrie::new(&cfg);
        Ok(Self {
            shared: Arc::new(Shared {
                cfg,
                trie: RwLock::new(trie),
                inflight: InFlight::new(),
                closing: CancellationToken::new(),
                closed: AtomicBool::new(false),
            }),
        })
    }

    /// Returns the topic syntax this engine was built with.
    pub fn config(&self) -> &Config {
        &self.shared.cfg
    }

    /// Registers `listener` under `pattern`. Synchronous and chainable.
    ///
    /// Legal in any lifecycle state; a listener registered after close is
    /// simply never invoked, since closed engines reject emissions.
    pub fn on(&self, pattern: &str, listener: ListenerRef) -> &Self {
        self.shared.trie.write().register(pattern, listener);
        self
    }

    /// Removes one registration of `listener` under `pattern`.
    ///
    /// A listener or pattern that was never registered is a no-op, not an
    /// error. Synchronous and chainable; legal in any lifecycle state.
    pub fn remove_listener(&self, pattern: &str, listener: &ListenerRef) -> &Self {
        self.shared.trie.write().unregister(pattern, listener);
        self
    }

    /// Number of emissions whose fan-out has not yet joined.
    ///
    /// Counts emit calls, not matched listeners: an emission reaching five
    /// listeners holds one unit until all five have acknowledged.
    pub fn current(&self) -> usize {
        self.shared.inflight.current()
    }

    /// True once a close sequence has fully completed.
    ///
    /// Stays `false` while closing is still draining in-flight emissions.
    pub fn closed(&self) -> bool {
        self.shared.closed.load(Ordering::Acquire)
    }

    /// Emits a message to every listener whose pattern matches its topic.
    ///
    /// The returned future resolves once every matched listener has
    /// acknowledged (the AND-join); with no matches it is ready on its
    /// first poll and the in-flight counter is never touched, so `current`
    /// is observable as unchanged immediately afterwards.
    ///
    /// # Errors
    /// - [`EmitError::Closed`] — the engine is closing or closed; nothing
    ///   was resolved and no listener was invoked.
    /// - [`EmitError::Listener`] — a matched listener acknowledged with an
    ///   error, dropped its ack unfired, or panicked. The join still
    ///   waited for every other listener; the first failure wins.
    pub async fn emit(&self, message: Message) -> Result<(), EmitError> {
        if self.shared.closing.is_cancelled() {
            return Err(EmitError::Closed);
        }

        let matched = self.shared.trie.read().resolve(&message.topic);
        if matched.is_empty() {
            return Ok(());
        }

        let _guard = self.shared.inflight.enter();

        let mut pending: Vec<AckWait> = Vec::with_capacity(matched.len());
        for listener in matched {
            let (ack, wait) = Ack::channel();
            let invocation =
                std::panic::AssertUnwindSafe(listener.on_message(&message, ack, self))
                    .catch_unwind()
                    .await;

            match invocation {
                Ok(()) => pending.push(wait),
                Err(panic) => {
                    // The listener's ack died in the unwind; substitute a
                    // pre-completed failure so the join stays uniform.
                    let (tx, rx) = oneshot::channel();
                    let _ = tx.send(Err(panic_reason(panic.as_ref())));
                    pending.push(rx);
                }
            }
        }

        let mut first_failure: Option<String> = None;
        for outcome in future::join_all(pending).await {
            let failure = match outcome {
                Ok(Ok(())) => None,
                Ok(Err(reason)) => Some(reason),
                Err(_) => Some("acknowledgment dropped before completion".to_string()),
            };
            if first_failure.is_none() {
                first_failure = failure;
            }
        }

        match first_failure {
            None => Ok(()),
            Some(reason) => Err(EmitError::Listener { reason }),
        }
    }

    /// Closes the engine: rejects new emissions, drains in-flight ones,
    /// then marks the engine closed.
    ///
    /// Emissions already in flight when the close begins still run to
    /// their joins; `closed()` turns true only after the drain. The
    /// returned future is never ready on its first poll, even with
    /// nothing to drain, so code running between the call and the await
    /// is always observed by whatever follows the completion.
    ///
    /// Closing twice is permitted: every call waits for the same drain
    /// and resolves after the engine is closed.
    pub async fn close(&self) {
        self.shared.closing.cancel();
        self.shared.inflight.wait_idle().await;
        self.shared.closed.store(true, Ordering::Release);
        tokio::task::yield_now().await;
    }
}

/// Extracts a printable reason from a listener panic payload.
fn panic_reason(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = panic.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
