use std::ffi::CString;
use std::fs::{File, OpenOptions};
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::{FileTypeExt, PermissionsExt};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{FifoError, Result};

/// A named pipe (FIFO) on the filesystem.
///
/// The FIFO object outlives any reader or writer handle opened on it: it is
/// created once, persists across connections, and is only removed by an
/// explicit [`Fifo::remove`] or by the stale-entry cleanup the next
/// [`Fifo::create`] performs. Dropping a `Fifo` never touches the filesystem.
#[derive(Debug, Clone)]
pub struct Fifo {
    path: PathBuf,
}

impl Fifo {
    /// Default permission mode for created FIFOs.
    ///
    /// World read/write matches the historical behavior of this protocol;
    /// deployments with other processes on the host should tighten it via
    /// [`Fifo::create_with_mode`].
    pub const DEFAULT_MODE: u32 = 0o666;

    /// Create a FIFO at `path`, replacing whatever currently occupies it.
    ///
    /// Any existing filesystem entry at the path is removed first, regardless
    /// of its type, so a stale object from a previous run cannot collide with
    /// pipe semantics. No retry is attempted on failure.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        Self::create_with_mode(path, Self::DEFAULT_MODE)
    }

    /// Create a FIFO at `path` with an explicit permission mode.
    pub fn create_with_mode(path: impl AsRef<Path>, mode: u32) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if path.symlink_metadata().is_ok() {
            debug!(?path, "removing stale entry");
            std::fs::remove_file(&path).map_err(|e| FifoError::Remove {
                path: path.clone(),
                source: e,
            })?;
        }

        mkfifo(&path, mode)?;

        // mkfifo(2) masks the mode with the process umask; apply the
        // requested mode explicitly so it holds regardless of umask.
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode)).map_err(|e| {
            FifoError::Create {
                path: path.clone(),
                source: e,
            }
        })?;
        info!(?path, mode = %format!("{mode:o}"), "created fifo");

        Ok(Self { path })
    }

    /// Wrap an existing FIFO without creating anything.
    ///
    /// Fails with [`FifoError::NotFound`] if nothing exists at the path, or
    /// [`FifoError::NotAFifo`] if the entry is not a FIFO.
    pub fn at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        ensure_fifo(&path)?;
        Ok(Self { path })
    }

    /// Open the FIFO for reading only.
    ///
    /// Blocks until a writer also has the FIFO open (standard named-pipe
    /// rendezvous semantics).
    pub fn open_reader(&self) -> Result<File> {
        ensure_fifo(&self.path)?;
        let file = File::open(&self.path).map_err(|e| FifoError::Open {
            path: self.path.clone(),
            source: e,
        })?;
        debug!(path = ?self.path, "opened fifo for reading");
        Ok(file)
    }

    /// Open the FIFO for writing only.
    ///
    /// Blocks until a reader also has the FIFO open.
    pub fn open_writer(&self) -> Result<File> {
        ensure_fifo(&self.path)?;
        let file = OpenOptions::new()
            .write(true)
            .open(&self.path)
            .map_err(|e| FifoError::Open {
                path: self.path.clone(),
                source: e,
            })?;
        debug!(path = ?self.path, "opened fifo for writing");
        Ok(file)
    }

    /// Remove the FIFO object from the filesystem.
    pub fn remove(self) -> Result<()> {
        std::fs::remove_file(&self.path).map_err(|e| FifoError::Remove {
            path: self.path.clone(),
            source: e,
        })?;
        debug!(path = ?self.path, "removed fifo");
        Ok(())
    }

    /// The path this FIFO lives at.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Verify that a FIFO exists at `path`.
pub fn ensure_fifo(path: &Path) -> Result<()> {
    let metadata = match path.symlink_metadata() {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(FifoError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(err) => return Err(FifoError::Io(err)),
    };
    if !metadata.file_type().is_fifo() {
        return Err(FifoError::NotAFifo {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn mkfifo(path: &Path, mode: u32) -> Result<()> {
    let c_path = CString::new(path.as_os_str().as_bytes()).map_err(|_| FifoError::Create {
        path: path.to_path_buf(),
        source: std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "path contains an interior NUL byte",
        ),
    })?;

    // SAFETY: `c_path` is a valid NUL-terminated string for the duration of
    // the call.
    let rc = unsafe { libc::mkfifo(c_path.as_ptr(), mode as libc::mode_t) };
    if rc != 0 {
        return Err(FifoError::Create {
            path: path.to_path_buf(),
            source: std::io::Error::last_os_error(),
        });
    }
    Ok(())
}
