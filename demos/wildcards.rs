//! # Wildcard Matching Example
//!
//! Shows single-level (`+`) and multi-level (`#`) subscriptions side by
//! side: the same emission can fan out to several patterns, and every
//! matching registration fires exactly once.
//!
//! ## Run
//! ```bash
//! cargo run --example wildcards
//! ```

use topicvisor::{Ack, Config, Emitter, ListenFn, ListenerRef, Message};

fn tagged(tag: &'static str) -> ListenerRef {
    ListenFn::arc(tag, move |msg: Message, ack: Ack, _e: Emitter| async move {
        println!("[{tag}] {}", msg.topic);
        ack.done();
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let emitter = Emitter::new(Config::default())?;

    emitter.on("sensors/+/temp", tagged("one-level"));
    emitter.on("sensors/#", tagged("deep"));
    emitter.on("sensors/kitchen/temp", tagged("exact"));

    // Matches all three patterns.
    emitter
        .emit(Message::new("sensors/kitchen/temp", &b"21.5"[..]))
        .await?;

    // Matches only the deep subscription: "+" cannot span two levels.
    emitter
        .emit(Message::new("sensors/attic/co2/ppm", &b"417"[..]))
        .await?;

    emitter.close().await;
    Ok(())
}
