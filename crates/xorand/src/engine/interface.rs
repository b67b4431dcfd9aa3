/// Number of outputs every engine discards after seeding.
///
/// Applied uniformly to all variants, whatever their state size.
pub const WARMUP_ROUNDS: usize = 256;

/// A seedable generator of raw 64-bit words.
///
/// Implementations own a fixed-size state that fully determines the next word
/// and the next state. Two engines of the same type seeded with the same
/// [`Engine::Seed`] produce identical streams on every platform.
///
/// Engines are not `Copy`. Duplicating a stream is only possible through an
/// explicit `.clone()`.
///
/// # Example
/// ```
/// use xorand::{Engine, Xorshift128Plus};
///
/// let mut a = Xorshift128Plus::from_seed([0x1111_1111_1111_1111, 0x2222_2222_2222_2222]);
/// let mut b = Xorshift128Plus::from_seed([0x1111_1111_1111_1111, 0x2222_2222_2222_2222]);
///
/// assert_eq!(a.next_word(), 0xAF9C_5377_1F39_7705);
/// assert_eq!(b.next_word(), 0xAF9C_5377_1F39_7705);
/// ```
pub trait Engine: Sized {
    /// Seed words consumed by [`Engine::seed`]. The word count is fixed per
    /// engine, see [`Engine::SEED_WORDS`].
    type Seed: Copy + Default + AsRef<[u64]> + AsMut<[u64]>;

    /// Number of `u64` words in [`Engine::Seed`].
    const SEED_WORDS: usize;

    /// Smallest value [`Engine::next_word`] can return.
    const MIN: u64 = 0;

    /// Largest value [`Engine::next_word`] can return.
    const MAX: u64 = u64::MAX;

    /// Creates an engine from `seed`, warm-up included.
    fn from_seed(seed: Self::Seed) -> Self;

    /// Replaces the state with one derived from `seed`, then discards
    /// [`WARMUP_ROUNDS`] outputs.
    fn seed(&mut self, seed: Self::Seed);

    /// Returns the next raw word and advances the state.
    fn next_word(&mut self) -> u64;

    /// Discards [`WARMUP_ROUNDS`] outputs.
    fn warm_up(&mut self) {
        for _ in 0..WARMUP_ROUNDS {
            self.next_word();
        }
    }
}
