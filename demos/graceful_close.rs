//! # Graceful Close Example
//!
//! A listener defers its acknowledgment into a spawned task, keeping the
//! emission in flight. `close()` waits for that work to join before the
//! engine reports itself closed; emissions arriving during the drain are
//! rejected.
//!
//! ## Run
//! ```bash
//! cargo run --example graceful_close --features logging
//! ```

use std::sync::Arc;
use std::time::Duration;

use topicvisor::{Ack, Config, Emitter, ListenFn, LogListener, Message};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let emitter = Emitter::new(Config::default())?;

    emitter.on("#", Arc::new(LogListener));
    emitter.on(
        "jobs/+",
        ListenFn::arc("slow-worker", |msg: Message, ack: Ack, _e: Emitter| async move {
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(200)).await;
                println!("[slow-worker] finished {}", msg.topic);
                ack.done();
            });
        }),
    );

    let inflight = tokio::spawn({
        let emitter = emitter.clone();
        async move { emitter.emit(Message::empty("jobs/cleanup")).await }
    });
    tokio::time::sleep(Duration::from_millis(50)).await;
    println!("emissions in flight: {}", emitter.current());

    emitter.close().await;
    println!("drained; closed = {}", emitter.closed());
    inflight.await??;

    match emitter.emit(Message::empty("jobs/late")).await {
        Err(err) => println!("late emission rejected: {err}"),
        Ok(()) => unreachable!("closed engines reject emissions"),
    }
    Ok(())
}
