use crate::{EntropySource, Error, Result};
use rand::{TryRngCore, rngs::OsRng};

/// An [`EntropySource`] backed by the operating system (`getrandom`,
/// `BCryptGenRandom`, `getentropy`, ...), through [`rand::rngs::OsRng`].
///
/// The handle is zero-sized and opened lazily by the platform layer, so a
/// seeder can own one for its whole lifetime and reuse it for every word.
/// Read failures are mapped to [`Error::EntropyUnavailable`].
#[derive(Default, Clone, Copy, Debug)]
pub struct OsEntropy {
    rng: OsRng,
}

impl OsEntropy {
    pub const fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl EntropySource for OsEntropy {
    fn try_next_u32(&mut self) -> Result<u32> {
        self.rng.try_next_u32().map_err(|_e| {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %_e, "failed to read operating system entropy");
            Error::EntropyUnavailable
        })
    }
}
