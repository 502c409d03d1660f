//! Background read/write loops and shutdown handling for FIFO framing.
//!
//! A pump is a long-running background thread that moves framed messages
//! between a FIFO and a caller-owned queue: the reader pump decodes frames
//! off the pipe and delivers payloads in wire order, the writer pump drains
//! the caller's queue onto the pipe, flushing after every frame. Each pump
//! reports how it ended on a dedicated outcome channel instead of dying
//! silently or taking the process with it.

pub mod cancel;
pub mod error;
pub mod pump;
pub mod shutdown;

pub use cancel::CancelToken;
pub use error::{PumpError, Result};
pub use pump::{
    message_queue, start_reading, start_reading_with_config, start_writing,
    start_writing_with_config, PumpHandle, PumpOutcome, DEFAULT_QUEUE_CAPACITY,
};
pub use shutdown::{install as install_termination_listener, SignalPolicy};
