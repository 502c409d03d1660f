use std::path::Path;
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread;

use bytes::Bytes;
use pipeframe_fifo::Fifo;
use pipeframe_frame::{FrameConfig, FrameError, FrameReader, FrameWriter};
use tracing::{debug, error};

use crate::cancel::CancelToken;
use crate::error::{PumpError, Result};

/// Recommended bound for the reader-side output queue: keeps unread backlog
/// small and lets a slow consumer push back through the OS pipe buffer.
pub const DEFAULT_QUEUE_CAPACITY: usize = 10;

/// Create a bounded message queue with the recommended capacity.
pub fn message_queue() -> (SyncSender<Bytes>, Receiver<Bytes>) {
    mpsc::sync_channel(DEFAULT_QUEUE_CAPACITY)
}

/// How a pump loop ended.
#[derive(Debug)]
pub enum PumpOutcome {
    /// The peer closed its end of the pipe (EOF). Terminal and distinct from
    /// a decode failure; no degraded message is ever delivered for it.
    StreamClosed,

    /// The caller's end of the message queue was dropped. For the writer
    /// loop this is its natural, non-error termination path.
    QueueClosed,

    /// The loop's cancel token was tripped.
    Cancelled,

    /// The loop hit a terminal I/O or decode error. Logged before the loop
    /// ends; process-exit policy is the caller's to choose.
    Failed(PumpError),
}

/// Handle to a running pump loop.
///
/// Owns the loop's thread and the dedicated outcome channel the loop reports
/// its termination on, so callers can react to asynchronous failures without
/// scraping logs or watching exit codes.
#[derive(Debug)]
pub struct PumpHandle {
    thread: thread::JoinHandle<()>,
    outcome_rx: Receiver<PumpOutcome>,
    cancel: CancelToken,
}

impl PumpHandle {
    /// The loop's cancel token.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Request cooperative cancellation (takes effect at the loop's next
    /// iteration boundary).
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Check whether the loop has ended, without blocking.
    pub fn try_outcome(&self) -> Option<PumpOutcome> {
        self.outcome_rx.try_recv().ok()
    }

    /// Block until the loop ends and return how it ended.
    pub fn wait(self) -> PumpOutcome {
        let outcome = self.outcome_rx.recv();
        let _ = self.thread.join();
        match outcome {
            Ok(outcome) => outcome,
            Err(_) => PumpOutcome::Failed(PumpError::Aborted),
        }
    }
}

/// Start a background loop that reads frames from the FIFO at `path` and
/// delivers each payload to `output` in wire order.
///
/// Fails synchronously — before any thread is spawned — if no FIFO exists at
/// `path`. Otherwise returns immediately; the loop opens the FIFO read-only
/// in the background (blocking until a writer attaches, normal rendezvous)
/// and then decodes one frame per iteration. Delivery to a full bounded
/// queue blocks the loop, which is the system's only backpressure mechanism.
pub fn start_reading(path: impl AsRef<Path>, output: SyncSender<Bytes>) -> Result<PumpHandle> {
    start_reading_with_config(path, output, FrameConfig::default())
}

/// [`start_reading`] with an explicit frame configuration.
pub fn start_reading_with_config(
    path: impl AsRef<Path>,
    output: SyncSender<Bytes>,
    config: FrameConfig,
) -> Result<PumpHandle> {
    let fifo = Fifo::at(path)?;
    spawn_loop("pipeframe-reader", move |cancel| {
        read_loop(&fifo, &output, config, cancel)
    })
}

/// Start a background loop that takes payloads from `input`, frames them,
/// and writes them to the FIFO at `path`.
///
/// Fails synchronously — before any thread is spawned — if no FIFO exists at
/// `path`. Otherwise returns immediately; the loop opens the FIFO write-only
/// in the background (blocking until a reader attaches) and writes one frame
/// per queued message, flushing after each so the peer observes it promptly.
/// All senders dropping the queue ends the loop with
/// [`PumpOutcome::QueueClosed`].
pub fn start_writing(path: impl AsRef<Path>, input: Receiver<Bytes>) -> Result<PumpHandle> {
    start_writing_with_config(path, input, FrameConfig::default())
}

/// [`start_writing`] with an explicit frame configuration.
pub fn start_writing_with_config(
    path: impl AsRef<Path>,
    input: Receiver<Bytes>,
    config: FrameConfig,
) -> Result<PumpHandle> {
    let fifo = Fifo::at(path)?;
    spawn_loop("pipeframe-writer", move |cancel| {
        write_loop(&fifo, &input, config, cancel)
    })
}

fn spawn_loop<F>(name: &str, body: F) -> Result<PumpHandle>
where
    F: FnOnce(&CancelToken) -> PumpOutcome + Send + 'static,
{
    let cancel = CancelToken::new();
    let (outcome_tx, outcome_rx) = mpsc::channel();
    let loop_cancel = cancel.clone();

    let thread = thread::Builder::new()
        .name(name.to_string())
        .spawn(move || {
            let outcome = body(&loop_cancel);
            debug!(?outcome, "pump loop ended");
            let _ = outcome_tx.send(outcome);
        })
        .map_err(PumpError::Spawn)?;

    Ok(PumpHandle {
        thread,
        outcome_rx,
        cancel,
    })
}

fn read_loop(
    fifo: &Fifo,
    output: &SyncSender<Bytes>,
    config: FrameConfig,
    cancel: &CancelToken,
) -> PumpOutcome {
    let source = match fifo.open_reader() {
        Ok(file) => file,
        Err(err) => {
            error!(path = ?fifo.path(), %err, "cannot open fifo for reading");
            return PumpOutcome::Failed(err.into());
        }
    };
    let mut reader = FrameReader::with_config(source, config);

    loop {
        if cancel.is_cancelled() {
            return PumpOutcome::Cancelled;
        }

        match reader.read_frame() {
            Ok(message) => {
                // Blocks while the queue is full: backpressure propagates
                // through the OS pipe buffer to the peer writer.
                if output.send(message).is_err() {
                    debug!(path = ?fifo.path(), "output queue dropped");
                    return PumpOutcome::QueueClosed;
                }
            }
            Err(FrameError::StreamClosed) => {
                debug!(path = ?fifo.path(), "peer closed the pipe");
                return PumpOutcome::StreamClosed;
            }
            Err(err) => {
                error!(path = ?fifo.path(), %err, "frame decode failed");
                return PumpOutcome::Failed(err.into());
            }
        }
    }
}

fn write_loop(
    fifo: &Fifo,
    input: &Receiver<Bytes>,
    config: FrameConfig,
    cancel: &CancelToken,
) -> PumpOutcome {
    let sink = match fifo.open_writer() {
        Ok(file) => file,
        Err(err) => {
            error!(path = ?fifo.path(), %err, "cannot open fifo for writing");
            return PumpOutcome::Failed(err.into());
        }
    };
    let mut writer = FrameWriter::with_config(sink, config);

    loop {
        if cancel.is_cancelled() {
            return PumpOutcome::Cancelled;
        }

        // Blocks while the queue is empty: the loop is idle, not polling.
        let message = match input.recv() {
            Ok(message) => message,
            Err(_) => {
                debug!(path = ?fifo.path(), "input queue closed");
                return PumpOutcome::QueueClosed;
            }
        };

        if let Err(err) = writer.send(&message) {
            // Log first, then report: the caller decides whether a dead
            // peer is fatal to the process.
            error!(path = ?fifo.path(), %err, "frame write failed");
            return PumpOutcome::Failed(err.into());
        }
    }
}
