//! A thin `spin::Mutex` wrapper for sharing an allocator across threads.
//!
//! The allocator's own methods take `&mut self` and assume exclusive
//! access (§5 of the design doc); this type is the recommended way to get
//! that exclusive access from a `'static` global or a shared reference,
//! mirroring the `Locked<A>` pattern the teacher codebase uses around its
//! own global allocator.

use spin::{Mutex, MutexGuard};

/// Wraps `A` behind a spinlock.
pub struct Locked<A> {
    inner: Mutex<A>,
}

impl<A> Locked<A> {
    /// Wraps `inner` behind a new spinlock.
    pub const fn new(inner: A) -> Self {
        Locked {
            inner: Mutex::new(inner),
        }
    }

    /// Locks the spinlock, blocking the calling thread until it is free.
    pub fn lock(&self) -> MutexGuard<'_, A> {
        self.inner.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::Locked;
    use crate::BuddyPageAllocator;

    #[test]
    fn locked_allocator_round_trips() {
        let locked = Locked::new(BuddyPageAllocator::new(0, 16));
        let p = locked.lock().alloc(1).unwrap();
        assert_eq!(p, 0);
        locked.lock().free(p).unwrap();
        assert_eq!(locked.lock().query_page_counts(5), 1);
    }
}
