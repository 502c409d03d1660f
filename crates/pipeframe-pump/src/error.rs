use pipeframe_fifo::FifoError;
use pipeframe_frame::FrameError;

/// Errors that can occur in pump operations.
#[derive(Debug, thiserror::Error)]
pub enum PumpError {
    /// FIFO lifecycle or open error.
    #[error("fifo error: {0}")]
    Fifo(#[from] FifoError),

    /// Frame-level error.
    #[error("frame error: {0}")]
    Frame(#[from] FrameError),

    /// Failed to spawn the background loop thread.
    #[error("failed to spawn pump thread: {0}")]
    Spawn(std::io::Error),

    /// Failed to install the process signal handler.
    #[error("signal handler setup failed: {0}")]
    Signal(#[from] ctrlc::Error),

    /// The loop thread ended without reporting an outcome (it panicked).
    #[error("pump loop aborted without reporting an outcome")]
    Aborted,
}

impl PumpError {
    /// True if this error means no FIFO exists at the requested path.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PumpError::Fifo(FifoError::NotFound { .. }))
    }
}

pub type Result<T> = std::result::Result<T, PumpError>;
