mod interface;
mod mt64;
#[cfg(feature = "std")]
mod rand_compat;
mod xorshift128;
mod xoshiro256;

pub use interface::*;
pub use mt64::*;
pub use xorshift128::*;
pub use xoshiro256::*;

/// Substituted for the first word of an all-zero xor-shift seed, which would
/// otherwise be a fixed point emitting zeros forever.
pub(crate) const ZERO_SEED_REPLACEMENT: u64 = 0x9E37_79B9_7F4A_7C15;
