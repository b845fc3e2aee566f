//! # Simple logging listener for debugging and demos.
//!
//! [`LogListener`] prints every delivery it receives to stdout in a
//! human-readable format and acknowledges immediately. Primarily useful for
//! development, debugging, and the bundled demos.
//!
//! ## Output format
//! ```text
//! [deliver] topic=sensors/kitchen/temp bytes=4
//! [deliver] topic=jobs/cleanup bytes=0
//! ```
//!
//! ## Example
//! ```no_run
//! # use topicvisor::{Config, Emitter, LogListener};
//! # use std::sync::Arc;
//! let emitter = Emitter::new(Config::default()).unwrap();
//! emitter.on("#", Arc::new(LogListener));
//! // every subsequent emission is printed to stdout
//! ```

use async_trait::async_trait;

use crate::core::Emitter;
use crate::listeners::{Ack, Listen};
use crate::messages::Message;

/// Simple stdout logging listener.
///
/// Enabled via the `logging` feature. Prints topic and payload size for
/// each delivery and acks right away.
///
/// Not intended for production use - implement a custom [`Listen`] for
/// structured logging or metrics collection.
pub struct LogListener;

#[async_trait]
impl Listen for LogListener {
    async fn on_message(&self, message: &Message, ack: Ack, _emitter: &Emitter) {
        println!(
            "[deliver] topic={} bytes={}",
            message.topic,
            message.payload.len()
        );
        ack.done();
    }

    fn name(&self) -> &str {
        "log"
    }
}
