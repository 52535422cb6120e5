//! Error types for the allocator's public operations.
//!
//! Modeled after the `x86_64` crate's per-operation error enums
//! (`MapToError`, `UnmapError`) rather than a single catch-all error: each
//! operation has its own narrow failure set, so a caller matching on the
//! result never has to handle variants that operation could never produce.

use core::fmt;

/// Errors returned by [`crate::BuddyPageAllocator::alloc`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    /// No free block of the requested rank or larger exists.
    NoSpace,
    /// The requested rank is `0` or greater than the arena's maximum rank.
    InvalidRank,
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocError::NoSpace => write!(f, "no free block large enough to satisfy the request"),
            AllocError::InvalidRank => write!(f, "requested rank is outside the arena's range"),
        }
    }
}

/// Errors returned by [`crate::BuddyPageAllocator::free`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreeError {
    /// `address` is not the start of a currently outstanding allocation.
    InvalidArg,
}

impl fmt::Display for FreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FreeError::InvalidArg => {
                write!(f, "address is not the start of an outstanding allocation")
            }
        }
    }
}

/// Errors returned by [`crate::BuddyPageAllocator::query_ranks`] and
/// [`crate::BuddyPageAllocator::is_allocated`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// `address` falls outside the arena's managed page range.
    InvalidArg,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::InvalidArg => write!(f, "address is outside the arena's page range"),
        }
    }
}

#[cfg(feature = "std")]
mod std_impls {
    use super::{AllocError, FreeError, QueryError};

    impl std::error::Error for AllocError {}
    impl std::error::Error for FreeError {}
    impl std::error::Error for QueryError {}
}
