//! Named-pipe (FIFO) lifecycle management.
//!
//! A FIFO is a filesystem-visible byte channel connecting exactly one reader
//! and one writer process. This crate owns the lifecycle side: creating the
//! FIFO object (replacing stale entries from previous runs), opening it for
//! exactly one direction, and removing it.
//!
//! This is the lowest layer of pipeframe. Everything else builds on the
//! [`Fifo`] type provided here.
//!
//! Unix only — Windows named pipes are a different facility with different
//! rendezvous semantics and are not supported.

#![cfg(unix)]

pub mod error;
pub mod fifo;

pub use error::{FifoError, Result};
pub use fifo::{ensure_fifo, Fifo};
