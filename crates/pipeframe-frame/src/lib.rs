//! Length-prefixed message framing for FIFO IPC.
//!
//! This is the core value-add layer of pipeframe. Every message is framed as:
//! - An 8-byte little-endian payload length (u64)
//! - The payload itself, opaque bytes
//!
//! There is no magic number, type tag, checksum, or version field: both ends
//! of a pipe agree on the format out of band. No partial reads, no buffer
//! management in user code.

pub mod codec;
pub mod error;
pub mod reader;
pub mod writer;

pub use codec::{
    decode_frame, encode_frame, FrameConfig, DEFAULT_MAX_PAYLOAD, LEN_PREFIX_SIZE,
};
pub use error::{FrameError, Result};
pub use reader::FrameReader;
pub use writer::FrameWriter;
