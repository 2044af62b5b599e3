//! The primality engine combining the exact and the probabilistic strategies

use crate::error::{Error, OperationResult, SizeLimit};
use crate::integer::ByteSize;
use crate::nt_funcs::{is_prime64, next_prime64, BoundedSearch};
use crate::primality::miller_rabin;
use crate::traits::{EngineConfig, NextPrimeResult, Primality, PrimalityTestResult, SIZE_LIMIT_BYTES};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::ToPrimitive;
use rand::{thread_rng, CryptoRng, RngCore};
use tracing::debug;

/// PrimeEngine answers primality questions for integers up to [SIZE_LIMIT_BYTES] bytes.
///
/// Integers in the u64 range are tested exactly by trial division, larger ones with the
/// Miller-Rabin test. The engine holds no state besides its configuration, so it can be
/// shared freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrimeEngine {
    config: EngineConfig,
}

impl PrimeEngine {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Test whether the target is a prime, using the thread local random generator
    pub fn is_prime(&self, target: &BigInt) -> OperationResult<PrimalityTestResult> {
        self.is_prime_with_rng(target, &mut thread_rng())
    }

    /// Test whether the target is a prime, drawing the Miller-Rabin witnesses from `rng`
    pub fn is_prime_with_rng<R: RngCore + CryptoRng + ?Sized>(
        &self,
        target: &BigInt,
        rng: &mut R,
    ) -> OperationResult<PrimalityTestResult> {
        let size = target.byte_len();
        if size > SIZE_LIMIT_BYTES {
            debug!(size, "rejected primality test input");
            return Err(Error::SizeLimitExceeded(SizeLimit::Test {
                limit: SIZE_LIMIT_BYTES,
            }));
        }

        let verdict = if target.sign() == Sign::Minus {
            Primality::No
        } else if let Some(v) = target.to_u64() {
            Primality::from(is_prime64(v))
        } else {
            debug!(size, certainty = self.config.certainty, "testing with miller-rabin");
            miller_rabin(target.magnitude(), self.config, rng)
        };
        Ok(verdict.into())
    }

    /// Find the smallest prime larger than the target, using the thread local random generator
    pub fn next_prime(&self, target: &BigInt) -> OperationResult<NextPrimeResult> {
        self.next_prime_with_rng(target, &mut thread_rng())
    }

    /// Find the smallest prime larger than the target, drawing the Miller-Rabin witnesses from `rng`.
    ///
    /// The target must be strictly smaller than [SIZE_LIMIT_BYTES] bytes because the result
    /// can be one byte longer.
    pub fn next_prime_with_rng<R: RngCore + CryptoRng + ?Sized>(
        &self,
        target: &BigInt,
        rng: &mut R,
    ) -> OperationResult<NextPrimeResult> {
        let size = target.byte_len();
        if size >= SIZE_LIMIT_BYTES {
            debug!(size, "rejected next prime search input");
            return Err(Error::SizeLimitExceeded(SizeLimit::Search {
                limit: SIZE_LIMIT_BYTES,
            }));
        }

        if target < &BigInt::from(2u8) {
            return Ok(NextPrimeResult {
                next_prime: BigInt::from(2u8),
                accuracy: 1.0,
            });
        }

        let start = match target.to_u64() {
            Some(v) if v < u64::MAX => match next_prime64(v) {
                BoundedSearch::Found(p) => {
                    return Ok(NextPrimeResult {
                        next_prime: BigInt::from(p),
                        accuracy: 1.0,
                    })
                }
                BoundedSearch::Exhausted => {
                    debug!(start = v, "no prime left in u64, continue with miller-rabin");
                    BigUint::from(u64::MAX)
                }
            },
            _ => target.magnitude().clone(),
        };
        self.next_probable_prime(start, rng)
    }

    fn next_probable_prime<R: RngCore + CryptoRng + ?Sized>(
        &self,
        mut n: BigUint,
        rng: &mut R,
    ) -> OperationResult<NextPrimeResult> {
        loop {
            n += 1u8;
            if n.byte_len() > SIZE_LIMIT_BYTES {
                debug!("next prime candidate grew past the size limit");
                return Err(Error::SizeLimitExceeded(SizeLimit::Candidate {
                    limit: SIZE_LIMIT_BYTES,
                }));
            }

            let verdict = miller_rabin(&n, self.config, rng);
            if verdict.probably() {
                return Ok(NextPrimeResult {
                    next_prime: BigInt::from(n),
                    accuracy: verdict.accuracy(),
                });
            }
        }
    }
}
