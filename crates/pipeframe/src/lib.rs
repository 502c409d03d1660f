//! Framed message passing between processes over named pipes (FIFOs).
//!
//! pipeframe turns a unidirectional OS pipe into a channel of discrete
//! binary messages: an 8-byte little-endian length prefix frames each
//! payload, and background pump loops move messages between the pipe and a
//! caller-owned queue.
//!
//! # Crate Structure
//!
//! - [`fifo`] — FIFO lifecycle management (create, open, remove)
//! - [`frame`] — Length-prefixed framing codec with blocking reader/writer
//! - [`pump`] — Background read/write loops, cancellation, and the
//!   process-wide termination listener
//!
//! # Example
//!
//! ```no_run
//! use pipeframe::fifo::Fifo;
//! use pipeframe::pump;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let fifo = Fifo::create("/tmp/app.pipe")?;
//!
//! let (tx, rx) = pump::message_queue();
//! let handle = pump::start_reading(fifo.path(), tx)?;
//!
//! for message in rx {
//!     println!("received {} bytes", message.len());
//! }
//! let outcome = handle.wait();
//! # Ok(())
//! # }
//! ```

/// Re-export FIFO lifecycle types.
pub mod fifo {
    pub use pipeframe_fifo::*;
}

/// Re-export framing types.
pub mod frame {
    pub use pipeframe_frame::*;
}

/// Re-export pump loop types.
pub mod pump {
    pub use pipeframe_pump::*;
}
