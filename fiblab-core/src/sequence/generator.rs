//! Lazy Fibonacci generator.
//!
//! The running pair lives in the closure frame; each pull yields the next
//! value and suspends until the following pull. Dropping the iterator is
//! the only cancellation, and restarting means building a new one.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Infinite lazy Fibonacci sequence, starting at F(0) = 0.
pub fn fibonacci() -> impl Iterator<Item = BigUint> {
    let mut pair = (BigUint::zero(), BigUint::one());
    std::iter::from_fn(move || {
        let value = pair.0.clone();
        let advanced = &pair.0 + &pair.1;
        pair.0 = std::mem::replace(&mut pair.1, advanced);
        Some(value)
    })
}
