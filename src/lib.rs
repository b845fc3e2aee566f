//! # topicvisor
//!
//! **Topicvisor** is an in-process publish/subscribe dispatch engine for Rust.
//!
//! Subscribers register interest with hierarchical topic patterns
//! (single-level and multi-level wildcards), publishers emit topic-addressed
//! messages, and the engine resolves the exact matching set, invokes each
//! matched listener exactly once, tracks emissions in flight, and supports a
//! graceful close that drains outstanding work before rejecting new
//! emissions. The crate is designed as a building block for higher-level
//! buses, brokers and routers.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//!     │  publisher   │    │  publisher   │    │  publisher   │
//!     └──────┬───────┘    └──────┬───────┘    └──────┬───────┘
//!            │ emit(msg)         │                   │
//!            ▼                   ▼                   ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Emitter (dispatch engine)                                        │
//! │  - TopicTrie (pattern storage + topic resolution)                 │
//! │  - InFlight (emission counter + drain barrier)                    │
//! │  - lifecycle: open ──► closing ──► closed                         │
//! └──────┬──────────────────────┬──────────────────────┬─────────────┘
//!        │ resolve(topic)       │                      │
//!        ▼                      ▼                      ▼
//!   ┌──────────┐          ┌──────────┐           ┌──────────┐
//!   │ listener │          │ listener │    ...    │ listener │
//!   │ (ack #1) │          │ (ack #2) │           │ (ack #N) │
//!   └────┬─────┘          └────┬─────┘           └────┬─────┘
//!        │                     │                      │
//!        └─────────────────────┴──────────┬───────────┘
//!                                         ▼
//!                        AND-join on every ack, then the
//!                        emit future resolves (fan-in)
//! ```
//!
//! ### Matching
//! Patterns are tokenized on a configurable separator (default `/`):
//! - a literal token matches itself;
//! - the single-level wildcard (default `+`) matches exactly one token:
//!   `a/+` matches `a/b` but not `a/b/c`;
//! - the multi-level wildcard (default `#`, final token only) matches one
//!   or more trailing tokens: `a/#` matches both `a/b` and `a/b/c`.
//!
//! A topic matched by several patterns invokes each pattern's listeners
//! exactly once per registration.
//!
//! ### Lifecycle
//! ```text
//! close():
//!   ├─► reject new emissions (Err(EmitError::Closed))
//!   ├─► wait until every in-flight emission has joined (current == 0)
//!   ├─► closed() == true
//!   └─► resolve, always deferred past the first poll
//! ```
//!
//! ## Features
//! | Area              | Description                                                      | Key types / traits              |
//! |-------------------|------------------------------------------------------------------|---------------------------------|
//! | **Dispatch**      | Wildcard resolution, per-emission fan-out/fan-in join.           | [`Emitter`]                     |
//! | **Listeners**     | Async handlers with one-shot acknowledgments.                    | [`Listen`], [`ListenFn`], [`Ack`] |
//! | **Messages**      | Topic plus cheap-to-clone payload bytes.                         | [`Message`]                     |
//! | **Configuration** | Per-instance separator and wildcard symbols.                     | [`Config`]                      |
//! | **Errors**        | Typed errors for construction and emission.                      | [`ConfigError`], [`EmitError`]  |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogListener`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use topicvisor::{Ack, Config, Emitter, ListenFn, Message};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let emitter = Emitter::new(Config::default())?;
//!
//!     let hits = Arc::new(AtomicUsize::new(0));
//!     let counter = {
//!         let hits = Arc::clone(&hits);
//!         ListenFn::arc("counter", move |msg: Message, ack: Ack, _e: Emitter| {
//!             let hits = Arc::clone(&hits);
//!             async move {
//!                 println!("delivered on {}", msg.topic);
//!                 hits.fetch_add(1, Ordering::SeqCst);
//!                 ack.done();
//!             }
//!         })
//!     };
//!
//!     // "+" matches exactly one level, "#" matches one or more.
//!     emitter.on("sensors/+/temp", counter.clone());
//!     emitter.on("sensors/#", counter);
//!
//!     // Matches both patterns: the listener runs once per registration.
//!     emitter.emit(Message::new("sensors/kitchen/temp", &b"21.5"[..])).await?;
//!     assert_eq!(hits.load(Ordering::SeqCst), 2);
//!
//!     // Drain and shut down; later emissions are rejected.
//!     emitter.close().await;
//!     assert!(emitter.closed());
//!     assert!(emitter.emit(Message::empty("sensors/any")).await.is_err());
//!     Ok(())
//! }
//! ```

mod config;
mod core;
mod error;
mod listeners;
mod matcher;
mod messages;

// ---- Public re-exports ----

pub use config::Config;
pub use core::Emitter;
pub use error::{ConfigError, EmitError};
pub use listeners::{Ack, Listen, ListenFn, ListenerRef};
pub use messages::Message;

// Optional: expose a simple built-in logging listener (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use listeners::LogListener;
