use crate::{Engine, engine::ZERO_SEED_REPLACEMENT};

/// `xoshiro256**`: the default engine.
///
/// - State: 256 bits (four words)
/// - Seed: `[u64; 4]`
/// - Period: 2^256 - 1
///
/// The `**` scrambler (`rotl(s1 * 5, 7) * 9`) makes every output bit usable,
/// at the cost of two extra multiplications over `xorshift128+`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xoshiro256StarStar {
    s: [u64; 4],
}

impl Xoshiro256StarStar {
    /// Loads `seed` as-is, without warm-up.
    pub(crate) const fn from_state(seed: [u64; 4]) -> Self {
        let s = if seed[0] == 0 && seed[1] == 0 && seed[2] == 0 && seed[3] == 0 {
            [ZERO_SEED_REPLACEMENT, 0, 0, 0]
        } else {
            seed
        };
        Self { s }
    }
}

impl Engine for Xoshiro256StarStar {
    type Seed = [u64; 4];
    const SEED_WORDS: usize = 4;

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
        let result = self.s[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }
}
