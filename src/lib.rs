//! Primality test and next prime search for integers up to 128 bytes.
//!
//! Integers in the u64 range get exact answers, larger ones are tested with Miller-Rabin
//! and every answer carries its accuracy.
//!
//! ```
//! use num_bigint::BigInt;
//! use prime_oracle::{nt_funcs, parse_number};
//!
//! let result = nt_funcs::is_prime(&BigInt::from(29)).unwrap();
//! assert!(result.is_prime && result.accuracy == 1.0);
//!
//! let n = parse_number("18446744073709551615").unwrap();
//! let result = nt_funcs::next_prime(&n).unwrap();
//! assert_eq!(result.next_prime.to_string(), "18446744073709551629");
//! assert!(result.accuracy < 1.0);
//! ```

mod engine;
mod error;
mod integer;
pub mod nt_funcs;
mod primality;
mod rand;
mod traits;

pub use engine::PrimeEngine;
pub use error::{Error, OperationResult, SizeLimit};
pub use integer::{parse_number, ByteSize};
pub use traits::{
    EngineConfig, NextPrimeResult, Primality, PrimalityTestResult, DEFAULT_CERTAINTY,
    SIZE_LIMIT_BYTES,
};

pub mod detail {
    pub use super::nt_funcs::BoundedSearch;
    pub use super::primality::{miller_rabin, PrimalityUtils};
    pub use super::rand::RandWitness;
}
