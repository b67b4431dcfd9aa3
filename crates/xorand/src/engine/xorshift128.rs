use crate::{Engine, engine::ZERO_SEED_REPLACEMENT};

/// `xorshift128+`: the smallest and fastest engine.
///
/// - State: 128 bits (two words)
/// - Seed: `[u64; 2]`
/// - Period: 2^128 - 1
///
/// The lowest output bits are weaker than the rest (they form an LFSR).
/// Samplers in this crate favour high bits, so this is harmless for them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xorshift128Plus {
    s: [u64; 2],
}

impl Xorshift128Plus {
    /// Loads `seed` as-is, without warm-up.
    pub(crate) const fn from_state(seed: [u64; 2]) -> Self {
        let s = if seed[0] == 0 && seed[1] == 0 {
            [ZERO_SEED_REPLACEMENT, 0]
        } else {
            seed
        };
        Self { s }
    }
}

impl Engine for Xorshift128Plus {
    type Seed = [u64; 2];
    const SEED_WORDS: usize = 2;

    fn from_seed(seed: Self::Seed) -> Self {
        let mut engine = Self::from_state(seed);
        engine.warm_up();
        engine
    }

    fn seed(&mut self, seed: Self::Seed) {
        *self = Self::from_seed(seed);
    }

    #[inline]
    fn next_word(&mut self) -> u64 {
        let mut x = self.s[0];
        let y = self.s[1];
        self.s[0] = y;
        x ^= x << 23;
        self.s[1] = x ^ y ^ (x >> 17) ^ (y >> 26);
        self.s[1].wrapping_add(y)
    }
}
