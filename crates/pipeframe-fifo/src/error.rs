use std::path::PathBuf;

/// Errors that can occur while managing or opening a FIFO.
#[derive(Debug, thiserror::Error)]
pub enum FifoError {
    /// Failed to remove a stale filesystem entry occupying the FIFO path.
    #[error("failed to remove stale entry at {path}: {source}")]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create the FIFO object.
    #[error("failed to create fifo at {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to open an existing FIFO for reading or writing.
    #[error("failed to open fifo at {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// No filesystem entry exists at the given path.
    #[error("no fifo exists at {path}")]
    NotFound { path: PathBuf },

    /// The entry at the given path exists but is not a FIFO.
    #[error("entry at {path} is not a fifo")]
    NotAFifo { path: PathBuf },

    /// An I/O error occurred while inspecting or using the FIFO, other than
    /// the path being absent.
    #[error("fifo I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FifoError>;
