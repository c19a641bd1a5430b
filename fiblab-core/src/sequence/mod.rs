//! Fibonacci sequence access patterns.
//!
//! Four interchangeable ways to walk one recurrence (F(0)=0, F(1)=1,
//! F(n)=F(n-1)+F(n-2)):
//! - [`FibIterator`] — explicit iterator object holding the running pair
//! - [`MemoFibonacci`] — index-addressed access over an append-only cache
//! - [`fibonacci`] — lazy generator keeping its state in the closure frame
//! - [`IndexQuery`] — two-phase one-shot query: index in, value out
//!
//! All four produce identical values at every index. Instances own their
//! state exclusively and share nothing with each other.

pub mod generator;
pub mod iterator;
pub mod memo;
pub mod oneshot;

pub use generator::fibonacci;
pub use iterator::FibIterator;
pub use memo::MemoFibonacci;
pub use oneshot::IndexQuery;

use thiserror::Error;

/// Errors from index-addressed sequence access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("invalid index {0}: the sequence starts at index 0")]
    InvalidIndex(i64),
}
