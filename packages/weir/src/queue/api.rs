// exposed API of the queue family.

use super::{
    core::{self, PushDenied, Timeout},
    error::*,
};
use std::{
    fmt::{self, Debug, Formatter},
    time::{Duration, Instant},
};


// ==== helper functions for adapting the core API to the variant APIs ====


// unwrap the element from a pop on a queue with no close concept.
fn must_elem<T>(elem: Option<T>) -> T {
    match elem {
        Some(elem) => elem,
        None => unreachable!("non-closable queue reported end of stream"),
    }
}

// resolve a pop that blocks with no timeout, which cannot report would-block.
fn pop_forever<T>(queue: &core::Queue<T>) -> Option<T> {
    queue.pop(Timeout::Never).ok().expect("pop timed out with Timeout::Never")
}

// map a push denial for a variant where only close can deny.
fn deny_closed<T>(denied: PushDenied<T>) -> PushError<T, QueueClosedError> {
    match denied {
        PushDenied::Closed(elem) => PushError { elem, cause: QueueClosedError },
        PushDenied::WouldBlock(_) => unreachable!("push reported would-block where it cannot"),
    }
}

// map a push denial for a variant with no close concept.
fn deny_full<T>(denied: PushDenied<T>) -> PushError<T, WouldBlockError> {
    match denied {
        PushDenied::WouldBlock(elem) => PushError { elem, cause: WouldBlockError },
        PushDenied::Closed(_) => unreachable!("non-closable queue reported closed"),
    }
}

// map a push denial for a variant where both denial causes are possible.
fn deny_either<T>(denied: PushDenied<T>) -> PushError<T, TryPushErrorCause> {
    match denied {
        PushDenied::Closed(elem) => PushError { elem, cause: QueueClosedError.into() },
        PushDenied::WouldBlock(elem) => PushError { elem, cause: WouldBlockError.into() },
    }
}


// ==== the capability traits ====


/// Pull capability uniting all four queue variants
///
/// Implemented independently by each variant so that consumers, notably
/// [`QueueSource`](crate::pipe::QueueSource), can pull from a queue without knowing whether it is
/// bounded or closable.
pub trait Popper {
    /// Element type of the underlying queue
    type Elem;

    /// Block until an element is available, or until the queue reaches end-of-stream
    ///
    /// Returns `None` once the queue is closed and drained. Variants with no close concept never
    /// return `None`: their `take` blocks until an element arrives, indefinitely if none does.
    fn take(&self) -> Option<Self::Elem>;

    /// Release producers still blocked pushing into this queue, if the variant supports it
    ///
    /// Closes closable queues, so blocked pushes fail with
    /// [`QueueClosedError`] promptly instead of hanging. For variants with no close concept this
    /// is a no-op: their blocked producers cannot be released (see crate docs).
    fn disconnect(&self) {}
}

/// Push capability uniting all four queue variants
///
/// Implemented independently by each variant so that producers, notably
/// [`QueueSink`](crate::pipe::QueueSink), can push into a queue without knowing whether it is
/// bounded or closable.
pub trait Pusher {
    /// Element type of the underlying queue
    type Elem;

    /// Block until the element is accepted, or fail if the queue has been closed
    ///
    /// Variants with no close concept never return `Err`: their `put` blocks until space is
    /// available and then succeeds.
    fn put(&self, elem: Self::Elem) -> Result<(), PushError<Self::Elem, QueueClosedError>>;

    /// Mark production into this queue as complete, if the variant supports it
    ///
    /// Closes closable queues, so consumers observe end-of-stream once the remaining elements
    /// are drained. For variants with no close concept this is a no-op: their consumers must
    /// learn of completion out-of-band.
    fn finish(&self) {}
}


// ==== the four queue variants ====


/// Unbounded FIFO queue, shared between any number of threads
///
/// Push never blocks and never fails; pop blocks while the queue is empty. There is no close
/// concept: a popper of a queue into which nothing further will be pushed blocks forever.
///
/// Cloning produces another handle to the same queue.
pub struct UnboundedQueue<T>(core::Queue<T>);

impl<T> UnboundedQueue<T> {
    /// Construct empty
    pub fn new() -> Self {
        UnboundedQueue(core::Queue::new(None))
    }

    /// Append an element to the tail of the queue
    pub fn push(&self, elem: T) {
        if self.0.push(elem, Timeout::NonBlocking).is_err() {
            unreachable!("unbounded non-closable queue denied a push");
        }
    }

    /// Remove and return the head element, blocking while the queue is empty
    pub fn pop(&self) -> T {
        must_elem(pop_forever(&self.0))
    }

    /// Remove and return the head element without blocking
    pub fn try_pop(&self) -> Result<T, WouldBlockError> {
        self.0.pop(Timeout::NonBlocking).map(must_elem)
    }

    /// Remove and return the head element, blocking until the timeout elapses
    pub fn pop_timeout(&self, timeout: Duration) -> Result<T, WouldBlockError> {
        self.pop_deadline(Instant::now() + timeout)
    }

    /// Remove and return the head element, blocking until the deadline is reached
    pub fn pop_deadline(&self, deadline: Instant) -> Result<T, WouldBlockError> {
        self.0.pop(Timeout::At(deadline)).map(must_elem)
    }

    /// Number of elements currently buffered (a racy snapshot)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the queue is currently empty (a racy snapshot)
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Popper for UnboundedQueue<T> {
    type Elem = T;

    fn take(&self) -> Option<T> {
        Some(self.pop())
    }
}

impl<T> Pusher for UnboundedQueue<T> {
    type Elem = T;

    fn put(&self, elem: T) -> Result<(), PushError<T, QueueClosedError>> {
        self.push(elem);
        Ok(())
    }
}

impl<T> Clone for UnboundedQueue<T> {
    fn clone(&self) -> Self {
        UnboundedQueue(self.0.clone())
    }
}

impl<T> Default for UnboundedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for UnboundedQueue<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("UnboundedQueue")
            .field("len", &self.len())
            .finish()
    }
}


/// Capacity-limited FIFO queue, shared between any number of threads
///
/// Push blocks while the queue is full; pop blocks while it is empty. There is no close concept:
/// a pusher into a queue from which nothing further will be popped blocks forever.
///
/// Cloning produces another handle to the same queue.
pub struct BoundedQueue<T>(core::Queue<T>);

impl<T> BoundedQueue<T> {
    /// Construct empty with the given maximum length
    ///
    /// Panics if `bound` is zero.
    pub fn new(bound: usize) -> Self {
        assert!(bound > 0, "bounded queue requires a positive bound");
        BoundedQueue(core::Queue::new(Some(bound)))
    }

    /// Append an element to the tail, blocking while the queue is full
    pub fn push(&self, elem: T) {
        if self.0.push(elem, Timeout::Never).is_err() {
            unreachable!("non-closable queue denied a push");
        }
    }

    /// Append an element to the tail without blocking
    pub fn try_push(&self, elem: T) -> Result<(), PushError<T, WouldBlockError>> {
        self.0.push(elem, Timeout::NonBlocking).map_err(deny_full)
    }

    /// Append an element to the tail, blocking until the timeout elapses
    pub fn push_timeout(&self, elem: T, timeout: Duration) -> Result<(), PushError<T, WouldBlockError>> {
        self.push_deadline(elem, Instant::now() + timeout)
    }

    /// Append an element to the tail, blocking until the deadline is reached
    pub fn push_deadline(&self, elem: T, deadline: Instant) -> Result<(), PushError<T, WouldBlockError>> {
        self.0.push(elem, Timeout::At(deadline)).map_err(deny_full)
    }

    /// Remove and return the head element, blocking while the queue is empty
    pub fn pop(&self) -> T {
        must_elem(pop_forever(&self.0))
    }

    /// Remove and return the head element without blocking
    pub fn try_pop(&self) -> Result<T, WouldBlockError> {
        self.0.pop(Timeout::NonBlocking).map(must_elem)
    }

    /// Remove and return the head element, blocking until the timeout elapses
    pub fn pop_timeout(&self, timeout: Duration) -> Result<T, WouldBlockError> {
        self.pop_deadline(Instant::now() + timeout)
    }

    /// Remove and return the head element, blocking until the deadline is reached
    pub fn pop_deadline(&self, deadline: Instant) -> Result<T, WouldBlockError> {
        self.0.pop(Timeout::At(deadline)).map(must_elem)
    }

    /// The maximum length fixed at construction
    pub fn bound(&self) -> usize {
        match self.0.bound() {
            Some(bound) => bound,
            None => unreachable!("bounded queue with no bound"),
        }
    }

    /// Number of elements currently buffered (a racy snapshot)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the queue is currently empty (a racy snapshot)
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Popper for BoundedQueue<T> {
    type Elem = T;

    fn take(&self) -> Option<T> {
        Some(self.pop())
    }
}

impl<T> Pusher for BoundedQueue<T> {
    type Elem = T;

    fn put(&self, elem: T) -> Result<(), PushError<T, QueueClosedError>> {
        self.push(elem);
        Ok(())
    }
}

impl<T> Clone for BoundedQueue<T> {
    fn clone(&self) -> Self {
        BoundedQueue(self.0.clone())
    }
}

impl<T> Debug for BoundedQueue<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("BoundedQueue")
            .field("len", &self.len())
            .field("bound", &self.bound())
            .finish()
    }
}


/// Unbounded FIFO queue with a one-shot close, shared between any number of threads
///
/// Push never blocks; it fails with [`QueueClosedError`] once the queue has been closed. Pop
/// blocks while the queue is empty and not closed; once the queue is closed, pops drain the
/// remaining elements then return `None` for end-of-stream.
///
/// Close may be called by any holder of a handle, any number of times; the second and subsequent
/// calls are no-ops.
///
/// Cloning produces another handle to the same queue.
pub struct ClosableUnboundedQueue<T>(core::Queue<T>);

impl<T> ClosableUnboundedQueue<T> {
    /// Construct empty and open
    pub fn new() -> Self {
        ClosableUnboundedQueue(core::Queue::new(None))
    }

    /// Append an element to the tail, unless the queue has been closed
    pub fn push(&self, elem: T) -> Result<(), PushError<T, QueueClosedError>> {
        self.0.push(elem, Timeout::NonBlocking).map_err(deny_closed)
    }

    /// Remove and return the head element, blocking while the queue is empty and not closed
    ///
    /// Returns `None` once the queue is closed and drained.
    pub fn pop(&self) -> Option<T> {
        pop_forever(&self.0)
    }

    /// Remove and return the head element without blocking
    ///
    /// `Ok(None)` means end-of-stream; `Err` means the queue is empty but not closed.
    pub fn try_pop(&self) -> Result<Option<T>, WouldBlockError> {
        self.0.pop(Timeout::NonBlocking)
    }

    /// Remove and return the head element, blocking until the timeout elapses
    pub fn pop_timeout(&self, timeout: Duration) -> Result<Option<T>, WouldBlockError> {
        self.pop_deadline(Instant::now() + timeout)
    }

    /// Remove and return the head element, blocking until the deadline is reached
    pub fn pop_deadline(&self, deadline: Instant) -> Result<Option<T>, WouldBlockError> {
        self.0.pop(Timeout::At(deadline))
    }

    /// Close the queue, idempotently
    ///
    /// Wakes every thread currently blocked in `push` or `pop` on this queue so each can
    /// re-evaluate its exit condition: blocked pushes fail with [`QueueClosedError`], blocked
    /// pops drain or observe end-of-stream.
    pub fn close(&self) {
        self.0.close();
    }

    /// Whether the queue has been closed
    pub fn is_closed(&self) -> bool {
        self.0.is_closed()
    }

    /// Number of elements currently buffered (a racy snapshot)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the queue is currently empty (a racy snapshot)
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Popper for ClosableUnboundedQueue<T> {
    type Elem = T;

    fn take(&self) -> Option<T> {
        self.pop()
    }

    fn disconnect(&self) {
        self.close();
    }
}

impl<T> Pusher for ClosableUnboundedQueue<T> {
    type Elem = T;

    fn put(&self, elem: T) -> Result<(), PushError<T, QueueClosedError>> {
        self.push(elem)
    }

    fn finish(&self) {
        self.close();
    }
}

impl<T> Clone for ClosableUnboundedQueue<T> {
    fn clone(&self) -> Self {
        ClosableUnboundedQueue(self.0.clone())
    }
}

impl<T> Default for ClosableUnboundedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for ClosableUnboundedQueue<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("ClosableUnboundedQueue")
            .field("len", &self.len())
            .field("closed", &self.is_closed())
            .finish()
    }
}


/// Capacity-limited FIFO queue with a one-shot close, shared between any number of threads
///
/// Push blocks while the queue is full and not closed; it fails with [`QueueClosedError`] if the
/// queue is closed at call time or becomes closed while the push waits for space. Pop blocks
/// while the queue is empty and not closed; once the queue is closed, pops drain the remaining
/// elements then return `None` for end-of-stream.
///
/// Close may be called by any holder of a handle, any number of times; the second and subsequent
/// calls are no-ops.
///
/// Cloning produces another handle to the same queue.
pub struct ClosableBoundedQueue<T>(core::Queue<T>);

impl<T> ClosableBoundedQueue<T> {
    /// Construct empty and open with the given maximum length
    ///
    /// Panics if `bound` is zero.
    pub fn new(bound: usize) -> Self {
        assert!(bound > 0, "bounded queue requires a positive bound");
        ClosableBoundedQueue(core::Queue::new(Some(bound)))
    }

    /// Append an element to the tail, blocking while the queue is full and not closed
    ///
    /// A close that lands while this call waits for space releases it with
    /// [`QueueClosedError`] rather than leaving it blocked.
    pub fn push(&self, elem: T) -> Result<(), PushError<T, QueueClosedError>> {
        self.0.push(elem, Timeout::Never).map_err(deny_closed)
    }

    /// Append an element to the tail without blocking
    pub fn try_push(&self, elem: T) -> Result<(), PushError<T, TryPushErrorCause>> {
        self.0.push(elem, Timeout::NonBlocking).map_err(deny_either)
    }

    /// Append an element to the tail, blocking until the timeout elapses
    pub fn push_timeout(
        &self,
        elem: T,
        timeout: Duration,
    ) -> Result<(), PushError<T, TryPushErrorCause>> {
        self.push_deadline(elem, Instant::now() + timeout)
    }

    /// Append an element to the tail, blocking until the deadline is reached
    pub fn push_deadline(
        &self,
        elem: T,
        deadline: Instant,
    ) -> Result<(), PushError<T, TryPushErrorCause>> {
        self.0.push(elem, Timeout::At(deadline)).map_err(deny_either)
    }

    /// Remove and return the head element, blocking while the queue is empty and not closed
    ///
    /// Returns `None` once the queue is closed and drained.
    pub fn pop(&self) -> Option<T> {
        pop_forever(&self.0)
    }

    /// Remove and return the head element without blocking
    ///
    /// `Ok(None)` means end-of-stream; `Err` means the queue is empty but not closed.
    pub fn try_pop(&self) -> Result<Option<T>, WouldBlockError> {
        self.0.pop(Timeout::NonBlocking)
    }

    /// Remove and return the head element, blocking until the timeout elapses
    pub fn pop_timeout(&self, timeout: Duration) -> Result<Option<T>, WouldBlockError> {
        self.pop_deadline(Instant::now() + timeout)
    }

    /// Remove and return the head element, blocking until the deadline is reached
    pub fn pop_deadline(&self, deadline: Instant) -> Result<Option<T>, WouldBlockError> {
        self.0.pop(Timeout::At(deadline))
    }

    /// Close the queue, idempotently
    ///
    /// Wakes every thread currently blocked in `push` or `pop` on this queue so each can
    /// re-evaluate its exit condition: blocked pushes fail with [`QueueClosedError`], blocked
    /// pops drain or observe end-of-stream.
    pub fn close(&self) {
        self.0.close();
    }

    /// Whether the queue has been closed
    pub fn is_closed(&self) -> bool {
        self.0.is_closed()
    }

    /// The maximum length fixed at construction
    pub fn bound(&self) -> usize {
        match self.0.bound() {
            Some(bound) => bound,
            None => unreachable!("bounded queue with no bound"),
        }
    }

    /// Number of elements currently buffered (a racy snapshot)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the queue is currently empty (a racy snapshot)
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Popper for ClosableBoundedQueue<T> {
    type Elem = T;

    fn take(&self) -> Option<T> {
        self.pop()
    }

    fn disconnect(&self) {
        self.close();
    }
}

impl<T> Pusher for ClosableBoundedQueue<T> {
    type Elem = T;

    fn put(&self, elem: T) -> Result<(), PushError<T, QueueClosedError>> {
        self.push(elem)
    }

    fn finish(&self) {
        self.close();
    }
}

impl<T> Clone for ClosableBoundedQueue<T> {
    fn clone(&self) -> Self {
        ClosableBoundedQueue(self.0.clone())
    }
}

impl<T> Debug for ClosableBoundedQueue<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("ClosableBoundedQueue")
            .field("len", &self.len())
            .field("bound", &self.bound())
            .field("closed", &self.is_closed())
            .finish()
    }
}


// ==== tests ====


#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        sync::{
            atomic::{AtomicBool, Ordering::SeqCst},
            Arc,
        },
        thread,
        time::Duration,
    };

    #[test]
    fn fifo_order() {
        let queue = UnboundedQueue::new();
        for i in 0..100 {
            queue.push(i);
        }
        for i in 0..100 {
            assert_eq!(queue.pop(), i);
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn fifo_order_closable() {
        let queue = ClosableBoundedQueue::new(100);
        for i in 0..100 {
            queue.push(i).unwrap();
        }
        queue.close();
        for i in 0..100 {
            assert_eq!(queue.pop(), Some(i));
        }
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn bounded_capacity_blocks_push() {
        let queue = BoundedQueue::new(1);
        queue.push("a");
        assert!(queue.try_push("b").is_err());

        let queue_2 = queue.clone();
        let landed = Arc::new(AtomicBool::new(false));
        let landed_2 = Arc::clone(&landed);
        let join = thread::spawn(move || {
            queue_2.push("b");
            landed_2.store(true, SeqCst);
        });

        thread::sleep(Duration::from_millis(50));
        assert!(!landed.load(SeqCst), "push completed despite full queue");

        assert_eq!(queue.pop(), "a");
        join.join().unwrap();
        assert!(landed.load(SeqCst));
        assert_eq!(queue.pop(), "b");
    }

    #[test]
    fn close_drains_then_signals_end_of_stream() {
        let queue = ClosableUnboundedQueue::new();
        queue.push("x").unwrap();
        queue.push("y").unwrap();
        queue.close();
        assert_eq!(queue.pop(), Some("x"));
        assert_eq!(queue.pop(), Some("y"));
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn close_rejects_new_pushes() {
        let queue = ClosableUnboundedQueue::new();
        queue.push(1).unwrap();
        queue.close();
        let error = queue.push(2).unwrap_err();
        assert_eq!(error.elem, 2);
        assert_eq!(error.cause, QueueClosedError);
        // contents unchanged by the rejected push
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn close_releases_blocked_push() {
        let queue = ClosableBoundedQueue::new(1);
        queue.push("a").unwrap();

        let queue_2 = queue.clone();
        let join = thread::spawn(move || queue_2.push("b"));

        thread::sleep(Duration::from_millis(50));
        queue.close();

        let error = join.join().unwrap().unwrap_err();
        assert_eq!(error.elem, "b");
        assert_eq!(error.cause, QueueClosedError);
        assert_eq!(queue.pop(), Some("a"));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn close_releases_blocked_pop() {
        let queue = ClosableUnboundedQueue::<u32>::new();

        let queue_2 = queue.clone();
        let join = thread::spawn(move || queue_2.pop());

        thread::sleep(Duration::from_millis(50));
        queue.close();

        assert_eq!(join.join().unwrap(), None);
    }

    #[test]
    fn idempotent_close() {
        let queue = ClosableBoundedQueue::new(4);
        queue.push(1).unwrap();
        queue.close();
        queue.close();
        assert!(queue.is_closed());
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), None);
        queue.close();
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn pop_gives_up_when_empty() {
        let queue = UnboundedQueue::<u32>::new();
        assert_eq!(queue.try_pop(), Err(WouldBlockError));
        assert_eq!(queue.pop_timeout(Duration::from_millis(20)), Err(WouldBlockError));
        queue.push(7);
        assert_eq!(queue.try_pop(), Ok(7));
    }

    #[test]
    fn push_gives_up_when_full() {
        let queue = BoundedQueue::new(1);
        queue.push(1);
        let error = queue.push_timeout(2, Duration::from_millis(20)).unwrap_err();
        assert_eq!(error.elem, 2);
        assert_eq!(error.cause, WouldBlockError);
        assert_eq!(queue.pop(), 1);
        queue.try_push(2).unwrap();
        assert_eq!(queue.pop(), 2);
    }

    #[test]
    fn try_push_distinguishes_full_from_closed() {
        let queue = ClosableBoundedQueue::new(1);
        queue.push(1).unwrap();
        let error = queue.try_push(2).unwrap_err();
        assert_eq!(error.cause, TryPushErrorCause::WouldBlock(WouldBlockError));
        queue.close();
        let error = queue.try_push(3).unwrap_err();
        assert_eq!(error.cause, TryPushErrorCause::Closed(QueueClosedError));
    }

    #[test]
    fn try_pop_reports_end_of_stream() {
        let queue = ClosableUnboundedQueue::<u32>::new();
        assert_eq!(queue.try_pop(), Err(WouldBlockError));
        queue.close();
        assert_eq!(queue.try_pop(), Ok(None));
    }

    #[test]
    fn stochastic_many_producers_many_consumers() {
        use rand::{Rng, SeedableRng};
        use rand_pcg::Pcg64;

        const PRODUCERS: usize = 4;
        const CONSUMERS: usize = 3;
        const PER_PRODUCER: u64 = 500;

        let queue = ClosableBoundedQueue::new(8);

        let mut producer_joins = Vec::new();
        for p in 0..PRODUCERS {
            let queue = queue.clone();
            producer_joins.push(thread::spawn(move || {
                let mut rng = Pcg64::seed_from_u64(p as u64);
                for i in 0..PER_PRODUCER {
                    queue.push((p, i)).unwrap();
                    if rng.gen_ratio(1, 50) {
                        thread::sleep(Duration::from_micros(rng.gen_range(0..200)));
                    }
                }
            }));
        }

        let mut consumer_joins = Vec::new();
        for _ in 0..CONSUMERS {
            let queue = queue.clone();
            consumer_joins.push(thread::spawn(move || {
                let mut last_seen = [None::<u64>; PRODUCERS];
                let mut count = 0u64;
                while let Some((p, i)) = queue.pop() {
                    if let Some(prev) = last_seen[p] {
                        assert!(i > prev, "per-producer order violated");
                    }
                    last_seen[p] = Some(i);
                    count += 1;
                }
                count
            }));
        }

        for join in producer_joins {
            join.join().unwrap();
        }
        queue.close();

        let total: u64 = consumer_joins.into_iter().map(|join| join.join().unwrap()).sum();
        assert_eq!(total, PRODUCERS as u64 * PER_PRODUCER);
    }
}
