//! Scoped exclusive access for event submissions.

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};
use std::cell::Cell;

/// Admits one submission at a time.
///
/// Other threads block in [`enter`](Self::enter) until the running
/// submission's [`InFlight`] token is dropped. The thread already holding
/// the token gets `None` instead of deadlocking on itself.
pub(crate) struct SubmissionGuard {
    lock: ReentrantMutex<Cell<bool>>,
}

impl SubmissionGuard {
    pub(crate) fn new() -> Self {
        Self {
            lock: ReentrantMutex::new(Cell::new(false)),
        }
    }

    pub(crate) fn enter(&self) -> Option<InFlight<'_>> {
        let held = self.lock.lock();
        if held.replace(true) {
            return None;
        }
        Some(InFlight { held })
    }
}

/// Proof that a submission is running. Releases the guard on drop, on
/// every exit path including an unwinding action.
pub(crate) struct InFlight<'a> {
    held: ReentrantMutexGuard<'a, Cell<bool>>,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.held.set(false);
    }
}
