use crate::Result;

/// A trait for sources of unpredictable 32-bit samples used to build seeds.
///
/// This abstraction allows you to plug in the operating system source or a
/// mocked source in tests. A source may fail; the [`Seeder`] treats a failure
/// as a degradation, not as fatal.
///
/// # Example
/// ```
/// use xorand::{EntropySource, Result};
///
/// struct FixedEntropy;
/// impl EntropySource for FixedEntropy {
///     fn try_next_u32(&mut self) -> Result<u32> {
///         Ok(1234)
///     }
/// }
///
/// let mut source = FixedEntropy;
/// assert_eq!(source.try_next_u32(), Ok(1234));
/// ```
///
/// [`Seeder`]: crate::Seeder
pub trait EntropySource {
    /// Returns one fresh 32-bit sample.
    ///
    /// # Errors
    /// - Returns [`Error::EntropyUnavailable`] if the source cannot be read.
    ///
    /// [`Error::EntropyUnavailable`]: crate::Error::EntropyUnavailable
    fn try_next_u32(&mut self) -> Result<u32>;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn try_next_u32(&mut self) -> Result<u32> {
        (**self).try_next_u32()
    }
}
