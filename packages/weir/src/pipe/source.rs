// queue-backed source adapter.

use super::Source;
use crate::queue::api::Popper;


/// [`Source`] presenting a queue as a pull-based producer
///
/// Pulls block on the queue until an element arrives. For closable queues, end-of-stream is
/// observed once the queue is closed and drained; after that the adapter is terminal and invokes
/// no further queue operations. For non-closable queues, the stream never completes on its own:
/// an external signal (such as downstream termination) is required to stop consumption.
///
/// Cancelling closes a closable queue, so producers still blocked pushing into it are released
/// rather than left hanging. A producer blocked on a non-closable queue cannot be released; this
/// limitation is inherited from the queue itself.
pub struct QueueSource<Q> {
    queue: Q,
    done: bool,
}

impl<Q> QueueSource<Q> {
    /// Wrap a queue handle
    pub fn new(queue: Q) -> Self {
        QueueSource { queue, done: false }
    }

    /// Whether the stream has completed or been cancelled
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Recover the queue handle
    pub fn into_inner(self) -> Q {
        self.queue
    }
}

impl<Q: Popper> Source for QueueSource<Q> {
    type Item = Q::Elem;

    fn pull(&mut self) -> Option<Q::Elem> {
        if self.done {
            return None;
        }
        match self.queue.take() {
            Some(elem) => Some(elem),
            None => {
                trace!("queue source observed end of stream");
                self.done = true;
                None
            }
        }
    }

    fn cancel(&mut self) {
        if !self.done {
            trace!("queue source cancelled from downstream");
            self.done = true;
            self.queue.disconnect();
        }
    }
}


// ==== tests ====


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClosableBoundedQueue, ClosableUnboundedQueue, UnboundedQueue};
    use std::{thread, time::Duration};

    #[test]
    fn source_drains_then_completes_idempotently() {
        let queue = ClosableUnboundedQueue::new();
        queue.push(1).unwrap();
        queue.push(2).unwrap();
        queue.close();

        let mut source = QueueSource::new(queue);
        assert_eq!(source.pull(), Some(1));
        assert_eq!(source.pull(), Some(2));
        assert!(!source.is_done());
        assert_eq!(source.pull(), None);
        assert!(source.is_done());
        assert_eq!(source.pull(), None);
    }

    #[test]
    fn cancel_releases_blocked_producer() {
        let queue = ClosableBoundedQueue::new(1);
        queue.push("a").unwrap();

        let queue_2 = queue.clone();
        let join = thread::spawn(move || queue_2.push("b"));

        let mut source = QueueSource::new(queue);
        thread::sleep(Duration::from_millis(50));
        source.cancel();

        assert!(join.join().unwrap().is_err());
        assert!(source.is_done());
        assert_eq!(source.pull(), None);
    }

    #[test]
    fn cancel_over_non_closable_stops_only_the_adapter() {
        let queue = UnboundedQueue::new();
        queue.push(5);

        let mut source = QueueSource::new(queue.clone());
        assert_eq!(source.pull(), Some(5));

        source.cancel();
        assert_eq!(source.pull(), None);

        // the queue itself has no close concept and keeps working
        queue.push(6);
        assert_eq!(queue.pop(), 6);
    }
}
