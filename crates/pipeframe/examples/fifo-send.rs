//! Sending half of the demo pair — attaches to an existing FIFO and frames
//! every stdin line as one message.
//!
//! Run `fifo-recv` first so the FIFO exists, then:
//!   cargo run --example fifo-send -- /tmp/pipeframe-demo.pipe

use std::io::BufRead;

use pipeframe::pump::{self, SignalPolicy};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/tmp/pipeframe-demo.pipe".to_string());

    pump::install_termination_listener(SignalPolicy::ExitImmediately)?;

    let (tx, rx) = std::sync::mpsc::sync_channel(pump::DEFAULT_QUEUE_CAPACITY);
    let handle = pump::start_writing(&path, rx)?;
    eprintln!("Attached to {path}; type lines to send, EOF to stop.");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if tx.send(line.into_bytes().into()).is_err() {
            break;
        }
    }
    drop(tx);

    eprintln!("Writer loop ended: {:?}", handle.wait());
    Ok(())
}
