//! Receiving half of the demo pair — creates the FIFO and prints every
//! message delivered over it.
//!
//! Run with:
//!   cargo run --example fifo-recv -- /tmp/pipeframe-demo.pipe
//!
//! In another terminal:
//!   cargo run --example fifo-send -- /tmp/pipeframe-demo.pipe

use pipeframe::fifo::Fifo;
use pipeframe::pump::{self, SignalPolicy};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/tmp/pipeframe-demo.pipe".to_string());

    let fifo = Fifo::create(&path)?;
    eprintln!("Created FIFO at {path}, waiting for a sender...");

    let stop = pump::install_termination_listener(SignalPolicy::Cancel)?;

    let (tx, rx) = pump::message_queue();
    let handle = pump::start_reading(fifo.path(), tx)?;

    for message in rx {
        match std::str::from_utf8(&message) {
            Ok(text) => println!("{} bytes: {text}", message.len()),
            Err(_) => println!("{} bytes (binary)", message.len()),
        }
        if stop.is_cancelled() {
            handle.cancel();
            break;
        }
    }

    eprintln!("Reader loop ended: {:?}", handle.wait());
    Ok(())
}
