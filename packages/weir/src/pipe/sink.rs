// queue-backed sink adapter.

use super::{Feed, Sink};
use crate::queue::api::Pusher;


/// [`Sink`] presenting a queue as a push-based consumer
///
/// Accepts block on the queue while it is full; backpressure is expressed purely by blocking. A
/// push rejected because the queue was closed from the far end is treated as normal stream
/// shutdown: the adapter becomes terminal, discards the rejected element, and reports
/// [`Feed::Finished`] rather than an error.
///
/// Finishing closes a closable queue, so downstream pullers observe end-of-stream once the
/// buffered elements are drained. For a non-closable queue, finishing is a no-op and downstream
/// consumers must learn of completion out-of-band; this limitation is inherited from the queue
/// itself.
pub struct QueueSink<Q> {
    queue: Q,
    finished: bool,
}

impl<Q> QueueSink<Q> {
    /// Wrap a queue handle
    pub fn new(queue: Q) -> Self {
        QueueSink { queue, finished: false }
    }

    /// Whether the sink has finished or observed a far-end close
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Recover the queue handle
    pub fn into_inner(self) -> Q {
        self.queue
    }
}

impl<Q: Pusher> Sink for QueueSink<Q> {
    type Item = Q::Elem;

    fn accept(&mut self, item: Q::Elem) -> Feed {
        if self.finished {
            return Feed::Finished;
        }
        match self.queue.put(item) {
            Ok(()) => Feed::Accepted,
            Err(_) => {
                trace!("queue closed from the far end, sink finished");
                self.finished = true;
                Feed::Finished
            }
        }
    }

    fn finish(&mut self) {
        if !self.finished {
            trace!("queue sink finished");
            self.finished = true;
            self.queue.finish();
        }
    }
}


// ==== tests ====
