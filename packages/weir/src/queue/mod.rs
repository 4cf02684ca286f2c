// implementation of the weir queue family.
//
// the basic architecture is as such:
//
// queue handles wrap around Arc<Mutex<shared state>>
//                                         |
//          /------------------------------/
//          v
//       shared state
//          |
//          |------ it contains a VecDeque<T> holding the buffered elements, an optional bound on
//          |       its length, and the closed flag
//          |
//          \------ next to the mutex sit two condvars: "not_empty", waited on by poppers of an
//                  empty queue, and "not_full", waited on by pushers of a full bounded queue.
//                  every wait is a predicate loop re-checked under the mutex, so spurious wakeups
//                  and closed-state races resolve correctly.
//
// the organization of these modules is as such:
//
//      core: one locked push/pop/close primitive parameterized by an optional bound and a
//      ^     timeout selector. it is correct but undiscriminating: it will report denial reasons
//      |     that a given queue variant can never actually produce.
//      |
//      api: the four public queue types, each a thin typed wrapper over core exposing only the
//           operations and denial reasons its variant allows, plus the Popper/Pusher capability
//           traits consumed by the pipe adapters. the crate re-exports this API publically.
//
// there is also the error module, which contains the relevant error types, which is also
// re-exported publically.

pub(crate) mod error;
pub(crate) mod api;

mod core;
