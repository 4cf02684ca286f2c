// queue error types.

use thiserror::Error;


// ==== base error types ====


/// Error for trying to push into a closable queue that has already been closed
///
/// This is an expected end-of-life signal, not a defect: the far end of the queue has shut the
/// stream down. The [`QueueSink`](crate::pipe::QueueSink) adapter translates it into normal
/// stream completion rather than an error.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[error("queue closed")]
pub struct QueueClosedError;

/// Error for attempting a queue operation with no or limited blocking, and the operation not
/// completing immediately or by the specified deadline
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[error("operation would block")]
pub struct WouldBlockError;


// ==== compound error types ====


/// Error for trying to push into a closable bounded queue with no or limited blocking
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum TryPushErrorCause {
    /// The queue has been closed
    #[error(transparent)]
    Closed(#[from] QueueClosedError),
    /// The operation could not be resolved immediately or by the specified deadline
    #[error(transparent)]
    WouldBlock(#[from] WouldBlockError),
}

/// Error for trying to push into a queue
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PushError<T, E> {
    /// The element that could not be pushed
    pub elem: T,
    /// The reason the element could not be pushed
    pub cause: E,
}
