use num_bigint::BigInt;
use serde::Serialize;

/// Largest two's-complement size (in bytes) of a number the engine accepts
pub const SIZE_LIMIT_BYTES: usize = 128;

/// Number of Miller-Rabin rounds used unless configured otherwise
pub const DEFAULT_CERTAINTY: u32 = 10;

/// The verdict of a primality test
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primality {
    /// The number is certainly a prime
    Yes,
    /// The number is certainly a composite (or not a positive integer)
    No,
    /// The number is a prime with the carried probability
    Probable(f64),
}

impl Primality {
    /// Check whether the number is either a certain or a probable prime
    #[inline(always)]
    pub fn probably(self) -> bool {
        !matches!(self, Primality::No)
    }

    /// Probability that the verdict is right
    pub fn accuracy(self) -> f64 {
        match self {
            Primality::Probable(p) => p,
            _ => 1.0,
        }
    }
}

impl From<bool> for Primality {
    fn from(v: bool) -> Self {
        if v {
            Primality::Yes
        } else {
            Primality::No
        }
    }
}

/// Represents a configuration for the probabilistic part of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of Miller-Rabin rounds with random witnesses
    pub certainty: u32,
}

impl Default for EngineConfig {
    /// Create a configuration with the documented certainty of 10 rounds
    fn default() -> Self {
        Self {
            certainty: DEFAULT_CERTAINTY,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with a custom number of Miller-Rabin rounds
    pub fn with_certainty(certainty: u32) -> Self {
        Self { certainty }
    }

    /// The probability that a number passing every round is a prime, `1 - 4^(-k)`
    pub fn accuracy(&self) -> f64 {
        1.0 - 4f64.powi(-(self.certainty.min(i32::MAX as u32) as i32))
    }
}

/// Answer of a primality test
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimalityTestResult {
    pub is_prime: bool,
    /// From 0.0 (0%) to 1.0 (100%)
    pub accuracy: f64,
}

impl From<Primality> for PrimalityTestResult {
    fn from(p: Primality) -> Self {
        Self {
            is_prime: p.probably(),
            accuracy: p.accuracy(),
        }
    }
}

/// Answer of a next-prime search
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextPrimeResult {
    #[serde(serialize_with = "crate::integer::serialize_decimal")]
    pub next_prime: BigInt,
    /// From 0.0 (0%) to 1.0 (100%)
    pub accuracy: f64,
}
