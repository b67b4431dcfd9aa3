/// A result type defaulting to the crate [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `xorand` can emit.
///
/// Most of the crate is infallible: engines, byte filling and sampling over a
/// valid range never fail. The variants below cover caller contract
/// violations surfaced through the `try_` APIs and entropy failures reported
/// by an [`EntropySource`].
///
/// [`EntropySource`]: crate::EntropySource
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A sampling call received `max < min`, or a non-finite floating-point
    /// bound.
    ///
    /// The panicking APIs (`next`, [`Bounds::new`]) treat this as a logic
    /// bug. Their `try_` twins return this variant instead.
    ///
    /// [`Bounds::new`]: crate::Bounds::new
    #[error("invalid range: max must be greater than or equal to min")]
    InvalidRange,

    /// The operating system entropy source could not be read.
    ///
    /// Seeding does not abort on this error. The seeder falls back to
    /// clock-only seed words and reports [`SeedStatus::Degraded`].
    ///
    /// [`SeedStatus::Degraded`]: crate::SeedStatus::Degraded
    #[error("operating system entropy source unavailable")]
    EntropyUnavailable,
}
