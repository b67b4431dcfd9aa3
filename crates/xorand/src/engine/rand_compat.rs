//! `rand` interoperability.
//!
//! Every engine implements [`rand::RngCore`] and [`rand::SeedableRng`], so it
//! can drive any `rand` distribution. Seed bytes are read as little-endian
//! words, in order.

use crate::{Engine, Mt19937_64, Xorshift128Plus, Xoshiro256StarStar, fill_bytes};

macro_rules! impl_rand_core {
    ($engine:ty, $seed_bytes:literal) => {
        impl rand::RngCore for $engine {
            #[inline]
            fn next_u32(&mut self) -> u32 {
                (Engine::next_word(self) >> 32) as u32
            }

            #[inline]
            fn next_u64(&mut self) -> u64 {
                Engine::next_word(self)
            }

            fn fill_bytes(&mut self, dst: &mut [u8]) {
                fill_bytes(self, dst);
            }
        }

        impl rand::SeedableRng for $engine {
            type Seed = [u8; $seed_bytes];

            fn from_seed(seed: Self::Seed) -> Self {
                let mut words = <$engine as Engine>::Seed::default();
                for (word, chunk) in words.as_mut().iter_mut().zip(seed.chunks_exact(8)) {
                    let mut bytes = [0u8; 8];
                    bytes.copy_from_slice(chunk);
                    *word = u64::from_le_bytes(bytes);
                }
                <$engine as Engine>::from_seed(words)
            }
        }
    };
}

impl_rand_core!(Xorshift128Plus, 16);
impl_rand_core!(Xoshiro256StarStar, 32);
impl_rand_core!(Mt19937_64, 8);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, RngCore, SeedableRng};

    fn le_seed<const N: usize>(words: &[u64]) -> [u8; N] {
        let mut out = [0u8; N];
        for (chunk, word) in out.chunks_exact_mut(8).zip(words) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out
    }

    #[test]
    fn seedable_rng_matches_engine_seed() {
        let words = [0x1111_1111_1111_1111, 0x2222_2222_2222_2222];
        let mut via_rand = <Xorshift128Plus as SeedableRng>::from_seed(le_seed::<16>(&words));
        let mut via_engine = <Xorshift128Plus as Engine>::from_seed(words);

        for _ in 0..16 {
            assert_eq!(RngCore::next_u64(&mut via_rand), via_engine.next_word());
        }
    }

    #[test]
    fn next_u32_takes_the_high_half() {
        let mut a = <Xoshiro256StarStar as Engine>::from_seed([1, 2, 3, 4]);
        let mut b = a.clone();

        let word = a.next_word();
        assert_eq!(RngCore::next_u32(&mut b), (word >> 32) as u32);
    }

    #[test]
    fn drives_rand_distributions() {
        let mut rng = <Mt19937_64 as SeedableRng>::seed_from_u64(7);
        for _ in 0..1_000 {
            let v: u8 = rng.random_range(10..=20);
            assert!((10..=20).contains(&v));
        }
    }

    #[test]
    fn rand_fill_bytes_matches_crate_fill() {
        let mut a = <Mt19937_64 as Engine>::from_seed([99]);
        let mut b = a.clone();

        let mut via_rand = [0u8; 21];
        let mut via_crate = [0u8; 21];
        RngCore::fill_bytes(&mut a, &mut via_rand);
        fill_bytes(&mut b, &mut via_crate);

        assert_eq!(via_rand, via_crate);
    }
}
