/// Errors that can occur during frame encoding/decoding.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The payload exceeds the configured maximum size.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// An I/O error occurred while reading or writing frames.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended before a complete frame was transferred.
    ///
    /// On the reader side this covers both a clean end-of-stream between
    /// frames and a truncation mid-frame; either way no partial message is
    /// ever delivered.
    #[error("stream closed (incomplete frame)")]
    StreamClosed,
}

pub type Result<T> = std::result::Result<T, FrameError>;
