// minimal locked core for the queue family. the exposed API is a set of typed wrappers around
// this.

use super::error::WouldBlockError;
use std::{
    collections::VecDeque,
    sync::{Arc, Condvar, Mutex, MutexGuard},
    time::Instant,
};


// handle to a queue.
pub(crate) struct Queue<T>(Arc<Shared<T>>);

// queue shared state.
struct Shared<T> {
    // mutex around lockable state. every state transition happens while holding it.
    lockable: Mutex<Lockable<T>>,
    // waited on by poppers of an empty queue. notified once per push, all on close.
    not_empty: Condvar,
    // waited on by pushers of a full bounded queue. notified once per pop, all on close.
    not_full: Condvar,
}

// queue lockable state.
struct Lockable<T> {
    // storage for elements.
    elems: VecDeque<T>,
    // elems maximum length. fixed at construction.
    bound: Option<usize>,
    // begins false. set true by close, never reverts.
    //
    // - once true, push operations immediately return a denial.
    // - once true, pop operations return None instead of waiting once elems is drained.
    closed: bool,
}

// how long a blocking operation is willing to wait.
pub(crate) enum Timeout {
    // never time out.
    Never,
    // time out at the given deadline.
    At(Instant),
    // time out if the operation cannot be resolved without blocking.
    NonBlocking,
}

impl Timeout {
    // block on the condvar until notified or out of patience. returns the reacquired guard and
    // whether the caller may keep waiting (false once the timeout is exhausted, at which point
    // the caller gets one last look at the state before giving up).
    fn wait<'a, U>(&self, cond: &Condvar, guard: MutexGuard<'a, U>) -> (MutexGuard<'a, U>, bool) {
        match self {
            Timeout::Never => (cond.wait(guard).unwrap(), true),
            Timeout::At(deadline) => {
                let now = Instant::now();
                if now >= *deadline {
                    return (guard, false);
                }
                let (guard, _) = cond.wait_timeout(guard, *deadline - now).unwrap();
                (guard, true)
            }
            Timeout::NonBlocking => (guard, false),
        }
    }
}

// why a core push could not commit.
pub(crate) enum PushDenied<T> {
    // the queue was closed, either at call time or while waiting for space.
    Closed(T),
    // out of patience while the queue was full.
    WouldBlock(T),
}

impl<T> Queue<T> {
    // construct empty, with an optional fixed maximum length.
    pub(crate) fn new(bound: Option<usize>) -> Self {
        Queue(Arc::new(Shared {
            lockable: Mutex::new(Lockable {
                elems: VecDeque::new(),
                bound,
                closed: false,
            }),
            not_empty: Condvar::new(),
            not_full: Condvar::new(),
        }))
    }

    // append to the tail, waiting for space per the timeout.
    //
    // the closed check and the capacity wait are atomic with respect to close: a close that
    // lands while this caller waits wakes it, and it re-checks under the mutex and denies
    // rather than re-suspending.
    pub(crate) fn push(&self, elem: T, timeout: Timeout) -> Result<(), PushDenied<T>> {
        let mut lock = self.0.lockable.lock().unwrap();
        loop {
            if lock.closed {
                return Err(PushDenied::Closed(elem));
            }
            if lock.bound.is_none_or(|n| lock.elems.len() < n) {
                break;
            }
            let (reacquired, may_wait) = timeout.wait(&self.0.not_full, lock);
            lock = reacquired;
            if !may_wait {
                // out of patience. the state may have changed while reacquiring the mutex, so
                // look once more before giving up.
                if lock.closed {
                    return Err(PushDenied::Closed(elem));
                }
                if lock.bound.is_none_or(|n| lock.elems.len() < n) {
                    break;
                }
                return Err(PushDenied::WouldBlock(elem));
            }
        }
        lock.elems.push_back(elem);
        self.0.not_empty.notify_one();
        Ok(())
    }

    // remove and return the head, waiting for an element per the timeout.
    //
    // Ok(None) means the queue is closed and drained: end-of-stream.
    pub(crate) fn pop(&self, timeout: Timeout) -> Result<Option<T>, WouldBlockError> {
        let mut lock = self.0.lockable.lock().unwrap();
        loop {
            if let Some(elem) = lock.elems.pop_front() {
                if lock.bound.is_some() {
                    self.0.not_full.notify_one();
                }
                return Ok(Some(elem));
            }
            if lock.closed {
                return Ok(None);
            }
            let (reacquired, may_wait) = timeout.wait(&self.0.not_empty, lock);
            lock = reacquired;
            if !may_wait {
                if let Some(elem) = lock.elems.pop_front() {
                    if lock.bound.is_some() {
                        self.0.not_full.notify_one();
                    }
                    return Ok(Some(elem));
                }
                if lock.closed {
                    return Ok(None);
                }
                return Err(WouldBlockError);
            }
        }
    }

    // set closed, idempotently, and wake everything currently waiting on either condvar so each
    // waiter re-evaluates its exit condition under the new state.
    pub(crate) fn close(&self) {
        let mut lock = self.0.lockable.lock().unwrap();
        if !lock.closed {
            lock.closed = true;
            self.0.not_empty.notify_all();
            self.0.not_full.notify_all();
        }
    }

    // current element count. a snapshot; stale by the time the caller sees it.
    pub(crate) fn len(&self) -> usize {
        self.0.lockable.lock().unwrap().elems.len()
    }

    // the maximum length fixed at construction, if any.
    pub(crate) fn bound(&self) -> Option<usize> {
        self.0.lockable.lock().unwrap().bound
    }

    // whether close has happened.
    pub(crate) fn is_closed(&self) -> bool {
        self.0.lockable.lock().unwrap().closed
    }
}

impl<T> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Queue(Arc::clone(&self.0))
    }
}
