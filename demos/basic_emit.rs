//! # Basic Emit Example
//!
//! Registers two listeners on the same topic and emits one message.
//! Awaiting the emit resolves only after both listeners have acknowledged.
//!
//! ## Run
//! ```bash
//! cargo run --example basic_emit
//! ```

use topicvisor::{Ack, Config, Emitter, Message};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let emitter = Emitter::new(Config::default())?;

    emitter.on(
        "orders/created",
        topicvisor::ListenFn::arc("billing", |msg: Message, ack: Ack, _e: Emitter| async move {
            println!("[billing] invoice for {:?}", msg.payload);
            ack.done();
        }),
    );

    emitter.on(
        "orders/created",
        topicvisor::ListenFn::arc("audit", |msg: Message, ack: Ack, _e: Emitter| async move {
            println!("[audit] recorded {}", msg.topic);
            ack.done();
        }),
    );

    emitter
        .emit(Message::new("orders/created", &b"order-42"[..]))
        .await?;
    println!("both listeners acknowledged, {} in flight", emitter.current());

    emitter.close().await;
    Ok(())
}
