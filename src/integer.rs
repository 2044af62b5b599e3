//! Backend helpers for the arbitrary precision integers

use crate::error::Error;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::One;
use serde::Serializer;

/// Size of an integer in its minimal two's-complement byte representation
pub trait ByteSize {
    fn byte_len(&self) -> usize;
}

impl ByteSize for BigUint {
    #[inline]
    fn byte_len(&self) -> usize {
        // one extra bit is reserved for the sign
        (self.bits() / 8) as usize + 1
    }
}

impl ByteSize for BigInt {
    fn byte_len(&self) -> usize {
        match self.sign() {
            Sign::Minus => {
                // -2^(8k-1) still fits in k bytes
                let m = self.magnitude() - BigUint::one();
                (m.bits() / 8) as usize + 1
            }
            _ => self.magnitude().byte_len(),
        }
    }
}

/// Parse a decimal integer with an optional sign, surrounding whitespaces are ignored
pub fn parse_number(input: &str) -> Result<BigInt, Error> {
    let malformed = || Error::MalformedInput {
        input: input.to_owned(),
    };

    let text = input.trim();
    let digits = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    text.parse::<BigInt>().map_err(|_| malformed())
}

/// Serialize an integer as its decimal text
pub fn serialize_decimal<S: Serializer>(v: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(v)
}
