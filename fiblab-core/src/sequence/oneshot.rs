//! One-shot index query in two suspension phases.
//!
//! [`IndexQuery::start`] is the first resume: the routine suspends
//! immediately, holding the recurrence seed and awaiting a target index.
//! [`IndexQuery::resume`] feeds the index in, computes F(index) by
//! iterative recurrence, and consumes the query, so each instance answers
//! exactly one request.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::SequenceError;

/// A suspended Fibonacci query awaiting its target index.
#[derive(Debug)]
pub struct IndexQuery {
    pair: (BigUint, BigUint),
}

impl IndexQuery {
    /// First phase: suspend with the recurrence seeded at (F(0), F(1)).
    pub fn start() -> Self {
        Self {
            pair: (BigUint::zero(), BigUint::one()),
        }
    }

    /// Second phase: receive the target index, yield F(index), terminate.
    ///
    /// Negative indices fail with the same invalid-index error as
    /// [`MemoFibonacci::get`](super::MemoFibonacci::get); one policy for
    /// both index-addressed variants.
    pub fn resume(self, index: i64) -> Result<BigUint, SequenceError> {
        if index < 0 {
            return Err(SequenceError::InvalidIndex(index));
        }
        let (mut a, mut b) = self.pair;
        for _ in 0..index {
            let advanced = &a + &b;
            a = std::mem::replace(&mut b, advanced);
        }
        Ok(a)
    }
}
