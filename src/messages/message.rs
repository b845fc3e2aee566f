//! # The unit of delivery: a topic plus an opaque payload.
//!
//! [`Message`] pairs a concrete (wildcard-free) routing topic with payload
//! bytes. Both fields are cheap to clone — the topic is an `Arc<str>` and
//! the payload is [`bytes::Bytes`] — so one message can fan out to many
//! listeners without copying the body.
//!
//! ## Example
//! ```rust
//! use topicvisor::Message;
//!
//! let msg = Message::new("sensors/kitchen/temp", &b"21.5"[..]);
//! assert_eq!(&*msg.topic, "sensors/kitchen/temp");
//! assert_eq!(&msg.payload[..], b"21.5");
//! ```

use std::sync::Arc;

use bytes::Bytes;

/// A topic-addressed message.
///
/// The topic is a concrete token sequence (no wildcards); where a message
/// is routed is decided entirely by the subscriptions registered on the
/// engine that emits it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// Concrete routing topic.
    pub topic: Arc<str>,
    /// Opaque payload bytes.
    pub payload: Bytes,
}

impl Message {
    /// Creates a new message from a topic and payload.
    pub fn new(topic: impl Into<Arc<str>>, payload: impl Into<Bytes>) -> Self {
        Self {
            topic: topic.into(),
            payload: payload.into(),
        }
    }

    /// Creates a message with an empty payload.
    ///
    /// Useful for signal-style topics where the address is the information.
    pub fn empty(topic: impl Into<Arc<str>>) -> Self {
        Self {
            topic: topic.into(),
            payload: Bytes::new(),
        }
    }
}
