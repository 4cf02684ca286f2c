//! Thread-safe in-process queues with differing capacity and closability semantics, plus thin
//! adapters that present a queue as a streaming source (pull side) or sink (push side) of a
//! backpressure-aware pipeline.
//!
//! Four queue variants are provided:
//!
//! - [`UnboundedQueue`]: push never blocks, pop blocks while empty.
//! - [`BoundedQueue`]: push blocks while full, pop blocks while empty.
//! - [`ClosableUnboundedQueue`]: unbounded plus a one-shot, idempotent close; pops drain the
//!   remaining elements then report end-of-stream, pushes after close are rejected.
//! - [`ClosableBoundedQueue`]: bounded plus the same close semantics.
//!
//! All four are cheaply cloneable handles to shared state, so any number of producers and
//! consumers may operate on the same queue from different threads. Blocking is the sole
//! backpressure mechanism; closing a closable queue releases every blocked pusher and popper.
//!
//! The non-closable variants preserve a deliberate limitation: there is no way to release a
//! producer blocked on a queue whose consumer has stopped running. Consumers of a non-closable
//! queue must be told out-of-band that production has ended.

#[macro_use]
extern crate tracing;

mod queue;

pub mod pipe;

pub use crate::queue::api::*;

/// Error types
pub mod error {
    pub use crate::queue::error::*;
}
