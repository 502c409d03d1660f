use std::sync::{Mutex, OnceLock};

use tracing::info;

use crate::cancel::CancelToken;
use crate::error::Result;

/// What receipt of SIGINT/SIGTERM does to the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalPolicy {
    /// Exit the process immediately with a success status. No draining of
    /// queues, no flushing of in-flight frames. Appropriate when all state
    /// is re-derivable (the FIFO object itself survives).
    ExitImmediately,

    /// Trip the returned [`CancelToken`] so running loops wind down at their
    /// next iteration boundary, leaving the exit decision to the caller.
    Cancel,
}

static INSTALLED: OnceLock<CancelToken> = OnceLock::new();
static INSTALL_GUARD: Mutex<()> = Mutex::new(());

/// Install the process-wide termination listener.
///
/// Registers interest in interrupt and terminate signals. Installation is
/// idempotent, including under concurrent callers: the first call decides
/// the policy, every other call returns the same token without touching
/// signal disposition.
pub fn install(policy: SignalPolicy) -> Result<CancelToken> {
    let _guard = INSTALL_GUARD.lock().unwrap_or_else(|err| err.into_inner());

    if let Some(existing) = INSTALLED.get() {
        return Ok(existing.clone());
    }

    let token = CancelToken::new();
    let handler_token = token.clone();
    ctrlc::set_handler(move || match policy {
        SignalPolicy::ExitImmediately => std::process::exit(0),
        SignalPolicy::Cancel => {
            info!("termination signal received; cancelling pump loops");
            handler_token.cancel();
        }
    })?;

    Ok(INSTALLED.get_or_init(|| token).clone())
}
