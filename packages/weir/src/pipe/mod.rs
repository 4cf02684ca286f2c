// adaptation of the queue family to a pull-based streaming pipeline.
//
// the pipeline engine itself lives outside this crate. it is polymorphic over anything
// satisfying the Source (pull one element, or observe end-of-stream) and Sink (accept one
// element, or observe completion) contracts defined here. the adapters in this module are a 1:1
// structural translation between those contracts and the queue operations: they buffer nothing
// of their own, holding only a queue handle and a terminal flag.
//
//      upstream thread --accept--> QueueSink --put--> queue --take--> QueueSource --pull--> downstream thread
//
// the two threads communicate only through the queue's synchronized state.

mod source;
mod sink;

pub use self::{
    source::QueueSource,
    sink::QueueSink,
};


/// Pull side of a pipeline stage: a producer of elements
///
/// Consumed by a pipeline engine acting as the downstream of a stage.
pub trait Source {
    /// Type of the produced elements
    type Item;

    /// Block until the next element is available, or until the stream completes
    ///
    /// Returns `None` to signal stream completion. Completion is a terminal state: once `None`
    /// has been returned, every further call also returns `None`. The engine must stop calling
    /// once a pipeline-fatal error or explicit termination occurs.
    fn pull(&mut self) -> Option<Self::Item>;

    /// Signal early termination from downstream
    ///
    /// After this, `pull` returns `None`. Implementations release whatever producers they can;
    /// see the implementor's docs for what that covers.
    fn cancel(&mut self);
}

/// Push side of a pipeline stage: a consumer of elements
///
/// Produced into by a pipeline engine acting as the upstream of a stage.
pub trait Sink {
    /// Type of the consumed elements
    type Item;

    /// Block until the element is accepted, or until the consumer observes completion
    ///
    /// A return of [`Feed::Finished`] means the element was not (and will never be) consumed;
    /// the engine must stop calling `accept` once it sees it.
    fn accept(&mut self, item: Self::Item) -> Feed;

    /// Notification that the upstream pipeline segment completed normally
    ///
    /// The engine invokes this exactly once.
    fn finish(&mut self);
}

/// Outcome of feeding one element to a [`Sink`]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Feed {
    /// The element was consumed; the sink remains ready for the next one
    Accepted,
    /// The consumer has completed and the element was discarded
    ///
    /// This is normal stream shutdown, not an error.
    Finished,
}


// ==== tests ====


#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClosableBoundedQueue;
    use std::thread;

    #[test]
    fn sink_to_source_roundtrip() {
        let queue = ClosableBoundedQueue::new(8);

        let mut sink = QueueSink::new(queue.clone());
        let join = thread::spawn(move || {
            for i in 0..1000 {
                assert_eq!(sink.accept(i), Feed::Accepted);
            }
            sink.finish();
        });

        let mut source = QueueSource::new(queue);
        for i in 0..1000 {
            assert_eq!(source.pull(), Some(i));
        }
        assert_eq!(source.pull(), None);
        assert_eq!(source.pull(), None);
        join.join().unwrap();
    }
}
