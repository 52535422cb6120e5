//! A buddy allocator for a fixed arena of 4 KiB pages.
//!
//! [`BuddyPageAllocator`] hands out runs of contiguous, power-of-two-aligned
//! pages from a caller-supplied address range. It owns no memory of its own —
//! the caller picks a base address and a page count, and this crate tracks
//! which pages within that range are free, split, or allocated.
//!
//! The allocator is not thread-safe by itself; wrap it in [`locked::Locked`]
//! (or any other mutex) if it needs to be shared across threads.
#![cfg_attr(not(test), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod error;
mod freelist;
mod tree;

pub mod allocator;
pub mod locked;

pub use allocator::BuddyPageAllocator;
pub use error::{AllocError, FreeError, QueryError};
pub use locked::Locked;
pub use tree::PAGE_SIZE;

/// Compile-time ceiling on the number of ranks a single arena can span.
///
/// Ranks are numbered `1..=MAX_RANK`. A rank-`MAX_RANK` arena covers
/// `2^(MAX_RANK - 1)` pages, so the default of 64 is ample for any arena a
/// 64-bit address space could describe; it exists only to size the (tiny)
/// free-list head table at construction time, not to cap `m` itself.
pub const MAX_RANK: usize = 64;
