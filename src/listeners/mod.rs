//! # Listeners: the delivery side of the engine.
//!
//! This module provides the [`Listen`] trait and the pieces a listener
//! interacts with during delivery.
//!
//! ## Architecture
//! ```text
//! Delivery flow (one emission):
//!   Emitter::emit(msg) ──► matcher resolves ──► for each matched listener:
//!                                                    │
//!                                                    ▼
//!                                  listener.on_message(&msg, ack, &emitter)
//!                                                    │
//!                                     ack.done() / ack.fail(reason)
//!                                                    │
//!                                                    ▼
//!                                  fan-in join ──► emit future resolves
//! ```
//!
//! ## Listener kinds
//! - **Trait implementations** — implement [`Listen`] for stateful handlers.
//! - **Closures** — wrap an async closure with [`ListenFn`].
//! - **`LogListener`** — stdout writer behind the `logging` feature, for
//!   demos and debugging.
//!
//! ## Implementing a custom listener
//! ```rust
//! use topicvisor::{Ack, Emitter, Listen, Message};
//! use async_trait::async_trait;
//!
//! struct Audit;
//!
//! #[async_trait]
//! impl Listen for Audit {
//!     async fn on_message(&self, message: &Message, ack: Ack, _emitter: &Emitter) {
//!         // write audit record...
//!         let _ = message;
//!         ack.done();
//!     }
//!     fn name(&self) -> &str { "audit" }
//! }
//! ```

mod ack;
mod listen;
mod listen_fn;

#[cfg(feature = "logging")]
mod log;

pub use ack::Ack;
pub(crate) use ack::AckWait;
pub use listen::{Listen, ListenerRef};
pub use listen_fn::ListenFn;

#[cfg(feature = "logging")]
pub use log::LogListener;
