//! Standalone functions that can be used without constructing an engine

use crate::engine::PrimeEngine;
use crate::error::OperationResult;
use crate::traits::{NextPrimeResult, PrimalityTestResult};
use num_bigint::BigInt;
use num_integer::Roots;

/// This function does an exact primality test on a u64 integer, by trial division with
/// the 6k±1 wheel up to the square root of the target.
pub fn is_prime64(target: u64) -> bool {
    // shortcuts
    if target <= 3 {
        return target > 1;
    }
    if target % 2 == 0 || target % 3 == 0 {
        return false;
    }

    let limit = Roots::sqrt(&target);
    let mut i = 5u64;
    while i <= limit {
        if target % i == 0 || target % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Outcome of a next prime search bounded to the u64 range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundedSearch {
    Found(u64),
    /// No prime between the start and `u64::MAX`
    Exhausted,
}

/// Find the smallest prime larger than `target` within the u64 range
pub fn next_prime64(target: u64) -> BoundedSearch {
    let mut n = target;
    loop {
        n = match n.checked_add(1) {
            Some(v) => v,
            None => break BoundedSearch::Exhausted,
        };
        if is_prime64(n) {
            break BoundedSearch::Found(n);
        }
    }
}

/// This function re-exports [PrimeEngine::is_prime()] with a default engine
pub fn is_prime(target: &BigInt) -> OperationResult<PrimalityTestResult> {
    PrimeEngine::new().is_prime(target)
}

/// This function re-exports [PrimeEngine::next_prime()] with a default engine
pub fn next_prime(target: &BigInt) -> OperationResult<NextPrimeResult> {
    PrimeEngine::new().next_prime(target)
}
