//! Index-addressed Fibonacci access with a memo cache.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::SequenceError;

/// Fibonacci numbers by index, backed by an append-only cache of computed
/// terms.
///
/// A query past the end of the cache extends it iteratively from the last
/// two known terms; entries are never recomputed or evicted. A run of
/// monotonically increasing queries therefore costs amortized O(1) per
/// query, while a cold query for index n costs O(n).
#[derive(Debug, Clone)]
pub struct MemoFibonacci {
    cache: Vec<BigUint>,
}

impl MemoFibonacci {
    pub fn new() -> Self {
        Self {
            cache: vec![BigUint::zero(), BigUint::one()],
        }
    }

    /// Fibonacci number at `index`.
    ///
    /// Negative indices are rejected with [`SequenceError::InvalidIndex`].
    pub fn get(&mut self, index: i64) -> Result<BigUint, SequenceError> {
        if index < 0 {
            return Err(SequenceError::InvalidIndex(index));
        }
        Ok(self.value_at(index as usize))
    }

    /// Number of terms computed so far.
    pub fn computed_len(&self) -> usize {
        self.cache.len()
    }

    /// Infinite lazy view over the sequence, walking the indexed accessor
    /// from 0 upward and growing the cache as it goes.
    pub fn terms(&mut self) -> impl Iterator<Item = BigUint> + '_ {
        let mut index = 0usize;
        std::iter::from_fn(move || {
            let value = self.value_at(index);
            index += 1;
            Some(value)
        })
    }

    fn value_at(&mut self, index: usize) -> BigUint {
        while self.cache.len() <= index {
            let next = &self.cache[self.cache.len() - 1] + &self.cache[self.cache.len() - 2];
            self.cache.push(next);
        }
        self.cache[index].clone()
    }
}

impl Default for MemoFibonacci {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_zero_before_any_other_query() {
        let mut memo = MemoFibonacci::new();
        assert_eq!(memo.get(0), Ok(BigUint::zero()));
    }

    #[test]
    fn negative_index_is_rejected() {
        let mut memo = MemoFibonacci::new();
        assert_eq!(memo.get(-1), Err(SequenceError::InvalidIndex(-1)));
    }

    #[test]
    fn cache_grows_to_the_highest_index_and_never_shrinks() {
        let mut memo = MemoFibonacci::new();
        memo.get(10).unwrap();
        let grown = memo.computed_len();
        assert!(grown >= 11);

        // A lower query hits the cache without touching its extent.
        memo.get(3).unwrap();
        assert_eq!(memo.computed_len(), grown);
    }

    #[test]
    fn terms_view_matches_indexed_access() {
        let mut indexed = MemoFibonacci::new();
        let by_index: Vec<BigUint> = (0..8).map(|i| indexed.get(i).unwrap()).collect();

        let mut walked = MemoFibonacci::new();
        let by_view: Vec<BigUint> = walked.terms().take(8).collect();

        assert_eq!(by_index, by_view);
    }
}
