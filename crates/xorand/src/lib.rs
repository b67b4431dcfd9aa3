//! Seedable, non-cryptographic pseudo-random number generation.
//!
//! Three interchangeable [`Engine`]s share one interface: [`Xorshift128Plus`]
//! (fastest, 128-bit state), [`Xoshiro256StarStar`] (the default, 256-bit
//! state) and [`Mt19937_64`] (long period, about 2.5 KiB of state). On top of
//! any engine sit unbiased range sampling ([`SampleUniform`], [`Bounds`]),
//! byte filling ([`fill_bytes`]) and the [`Random`] facade.
//!
//! Output is **not** suitable for cryptography.
//!
//! # Example
//! ```rust
//! use xorand::{Random, Xoshiro256StarStar};
//!
//! // Reproducible: the same seed always yields the same stream.
//! let mut rng = Random::<Xoshiro256StarStar>::from_seed([1, 2, 3, 4]);
//! let n: i32 = rng.next(-100, 100);
//! assert!((-100..=100).contains(&n));
//!
//! // Non-reproducible: seeded from OS entropy and the clock.
//! let mut rng = Random::<Xoshiro256StarStar>::new();
//! assert!(!rng.seed_status().is_degraded());
//! let _ = rng.next_double();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod engine;
mod entropy;
mod error;
mod fill;
mod random;
mod sample;
mod status;
#[cfg(feature = "thread-local")]
mod thread_local;
mod time;

pub use crate::engine::*;
pub use crate::entropy::*;
pub use crate::error::*;
pub use crate::fill::*;
pub use crate::random::*;
pub use crate::sample::*;
pub use crate::status::*;
#[cfg(feature = "thread-local")]
pub use crate::thread_local::*;
pub use crate::time::*;
