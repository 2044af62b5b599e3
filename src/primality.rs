use crate::rand::RandWitness;
use crate::traits::{EngineConfig, Primality};
use num_bigint::BigUint;
use num_integer::Integer;
use num_modular::ModularCoreOps;
use num_traits::{One, ToPrimitive};
use rand::{CryptoRng, RngCore};
use tracing::trace;

/// Utilities for the strong probable prime test
pub trait PrimalityUtils {
    /// Test if the integer is a strong probable prime (based on miller-rabin test) to `base`.
    /// The integer must be odd and larger than 3.
    fn is_sprp(&self, base: &Self) -> bool;
}

impl PrimalityUtils for BigUint {
    fn is_sprp(&self, base: &BigUint) -> bool {
        if self <= &BigUint::one() {
            return false;
        }

        // find 2^shift*u + 1 = n
        let tm1 = self - BigUint::one();
        let shift = tm1.trailing_zeros().unwrap_or(0);
        let u = &tm1 >> shift;

        let mut x = base.modpow(&u, self);
        if x.is_one() || x == tm1 {
            return true;
        }

        for _ in 1..shift {
            x = (&x).mulm(&x, self);
            if x == tm1 {
                return true;
            }
            if x.is_one() {
                return false;
            }
        }
        false
    }
}

/// Miller-Rabin test with `config.certainty` random witnesses drawn from `rng`.
///
/// A composite verdict is certain, so it's reported as [Primality::No]. Otherwise the
/// number is a prime with probability of at least `1 - 4^(-k)`.
pub fn miller_rabin<R: RngCore + CryptoRng + ?Sized>(
    target: &BigUint,
    config: EngineConfig,
    rng: &mut R,
) -> Primality {
    match target.to_u8() {
        Some(0) | Some(1) => return Primality::No,
        Some(2) | Some(3) => return Primality::Yes,
        _ => {}
    }
    if target.is_even() {
        return Primality::No;
    }

    for round in 0..config.certainty {
        let witness = rng.gen_witness(target);
        if !target.is_sprp(&witness) {
            trace!(round, %witness, "found a compositeness witness");
            return Primality::No;
        }
    }
    Primality::Probable(config.accuracy())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Random source replaying a fixed list of witnesses, in little endian
    pub struct ScriptedRng {
        witnesses: Vec<u64>,
        next: usize,
    }

    impl ScriptedRng {
        pub fn new(witnesses: &[u64]) -> Self {
            Self {
                witnesses: witnesses.to_vec(),
                next: 0,
            }
        }
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            self.next_u64() as u32
        }
        fn next_u64(&mut self) -> u64 {
            let w = self.witnesses[self.next % self.witnesses.len()];
            self.next += 1;
            w
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let w = self.next_u64().to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = if i < 8 { w[i] } else { 0 };
            }
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for ScriptedRng {}

    fn k(certainty: u32) -> EngineConfig {
        EngineConfig::with_certainty(certainty)
    }

    #[test]
    fn sprp_test() {
        // strong pseudoprimes of base 2 (OEIS A001262) under 10000
        let spsp: [u16; 5] = [2047, 3277, 4033, 4681, 8321];
        for psp in spsp {
            assert!(BigUint::from(psp).is_sprp(&BigUint::from(2u8)));
        }
        assert!(!BigUint::from(2047u16).is_sprp(&BigUint::from(3u8)));

        // 3215031751 is a strong pseudoprime to all of 2, 3, 5, 7
        let n = BigUint::from(3215031751u64);
        for base in [2u8, 3, 5, 7] {
            assert!(n.is_sprp(&BigUint::from(base)));
        }
        assert!(!n.is_sprp(&BigUint::from(11u8)));

        // neither zero nor one passes any base
        for base in [0u8, 1, 2, 7] {
            assert!(!BigUint::from(0u8).is_sprp(&BigUint::from(base)));
            assert!(!BigUint::from(1u8).is_sprp(&BigUint::from(base)));
        }
    }

    #[test]
    fn miller_rabin_small_cases() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(miller_rabin(&BigUint::from(0u8), k(10), &mut rng), Primality::No);
        assert_eq!(miller_rabin(&BigUint::from(1u8), k(10), &mut rng), Primality::No);
        assert_eq!(miller_rabin(&BigUint::from(2u8), k(10), &mut rng), Primality::Yes);
        assert_eq!(miller_rabin(&BigUint::from(3u8), k(10), &mut rng), Primality::Yes);
        assert_eq!(miller_rabin(&BigUint::from(4u8), k(10), &mut rng), Primality::No);
        assert_eq!(miller_rabin(&BigUint::from(1u64 << 40), k(10), &mut rng), Primality::No);

        let accuracy = k(10).accuracy();
        for p in [5u32, 7, 11, 13, 8191, 65537, 2147483647] {
            assert_eq!(
                miller_rabin(&BigUint::from(p), k(10), &mut rng),
                Primality::Probable(accuracy),
                "testing prime {}",
                p
            );
        }
    }

    #[test]
    fn miller_rabin_scripted_witnesses() {
        // a liar witness is accepted, the next one reveals the composite
        let n = BigUint::from(2047u16);
        let mut rng = ScriptedRng::new(&[2]);
        assert_eq!(miller_rabin(&n, k(3), &mut rng), Primality::Probable(k(3).accuracy()));
        let mut rng = ScriptedRng::new(&[2, 3]);
        assert_eq!(miller_rabin(&n, k(3), &mut rng), Primality::No);
        assert_eq!(rng.next, 2);

        let n = BigUint::from(3215031751u64);
        let mut rng = ScriptedRng::new(&[2, 3, 5, 7]);
        assert_eq!(miller_rabin(&n, k(4), &mut rng), Primality::Probable(k(4).accuracy()));
        let mut rng = ScriptedRng::new(&[2, 3, 5, 7, 11]);
        assert_eq!(miller_rabin(&n, k(5), &mut rng), Primality::No);

        // Carmichael number 561, 50 is a strong liar while 2 is not
        let n = BigUint::from(561u16);
        let mut rng = ScriptedRng::new(&[50]);
        assert!(miller_rabin(&n, k(10), &mut rng).probably());
        let mut rng = ScriptedRng::new(&[50, 2]);
        assert_eq!(miller_rabin(&n, k(10), &mut rng), Primality::No);

        // out of range witnesses are redrawn
        let n = BigUint::from(2047u16);
        let mut rng = ScriptedRng::new(&[0, 1, 2046, 3]);
        assert_eq!(miller_rabin(&n, k(1), &mut rng), Primality::No);
        assert_eq!(rng.next, 4);
    }
}
