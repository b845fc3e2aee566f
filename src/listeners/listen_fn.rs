//! # Function-backed listener (`ListenFn`)
//!
//! [`ListenFn`] wraps a closure `F: Fn(Message, Ack, Emitter) -> Fut`,
//! producing a fresh future per delivery. This avoids shared mutable state;
//! if a handler needs state across deliveries, capture an `Arc<...>`
//! explicitly inside the closure.
//!
//! ## Example
//! ```rust
//! use topicvisor::{Ack, Emitter, ListenFn, ListenerRef, Message};
//!
//! let l: ListenerRef = ListenFn::arc("printer", |msg: Message, ack: Ack, _e: Emitter| async move {
//!     println!("got {}", msg.topic);
//!     ack.done();
//! });
//!
//! assert_eq!(l.name(), "printer");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::Emitter;
use crate::listeners::{Ack, Listen};
use crate::messages::Message;

/// Function-backed listener implementation.
///
/// Wraps a closure that *creates* a new future per delivery. The closure
/// receives owned clones of the message and engine handle, so it can move
/// them (and the ack) into spawned tasks freely.
#[derive(Debug)]
pub struct ListenFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> ListenFn<F> {
    /// Creates a new function-backed listener.
    ///
    /// Prefer [`ListenFn::arc`] when you immediately need a [`ListenerRef`](crate::ListenerRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the listener and returns it as a shared handle (`Arc<Self>`).
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<F, Fut> Listen for ListenFn<F>
where
    F: Fn(Message, Ack, Emitter) -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn on_message(&self, message: &Message, ack: Ack, emitter: &Emitter) {
        (self.f)(message.clone(), ack, emitter.clone()).await;
    }

    fn name(&self) -> &str {
        &self.name
    }
}
