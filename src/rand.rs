use num_bigint::BigUint;
use num_traits::One;
use rand::RngCore;

/// This trait supports drawing uniformly random Miller-Rabin witnesses
pub trait RandWitness {
    /// Generate a random integer in `[2, n - 2]`.
    ///
    /// Random byte strings of `n`'s length are drawn (with the bits above `n.bits()`
    /// cleared) until one falls in range, so there is no modulo bias.
    ///
    /// # Panics
    /// If `n` is smaller than 4, since the range is empty.
    fn gen_witness(&mut self, n: &BigUint) -> BigUint;
}

impl<R: RngCore + ?Sized> RandWitness for R {
    fn gen_witness(&mut self, n: &BigUint) -> BigUint {
        let two = BigUint::from(2u8);
        assert!(n > &(&two + BigUint::one()), "witness range of {} is empty", n);
        let upper = n - &two;

        let bits = n.bits();
        let mut bytes = vec![0u8; ((bits + 7) / 8) as usize];
        let excess = bytes.len() as u64 * 8 - bits;
        loop {
            self.fill_bytes(&mut bytes);
            if let Some(top) = bytes.last_mut() {
                *top &= 0xff >> excess;
            }
            let a = BigUint::from_bytes_le(&bytes);
            if a >= two && a <= upper {
                break a;
            }
        }
    }
}
