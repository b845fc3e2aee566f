//! Topic-addressed messages delivered through the engine.
//!
//! This module groups the message **data model**: the `{topic, payload}`
//! pair handed to [`Emitter::emit`](crate::Emitter::emit) and delivered to
//! every matched listener.
//!
//! ## Contents
//! - [`Message`] — routing topic plus opaque payload bytes.

mod message;

pub use message::Message;
