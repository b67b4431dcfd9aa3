/// A trait for high-resolution clocks used to decorrelate seed words.
///
/// This abstraction allows you to plug in the system clock or a mocked clock
/// in tests. Only the low 32 bits of a reading end up in a seed word, so the
/// origin of the counter does not matter; it only has to move.
///
/// # Example
///
/// ```
/// use xorand::ClockSource;
///
/// struct FixedClock;
/// impl ClockSource for FixedClock {
///     fn current_nanos(&self) -> u64 {
///         1234
///     }
/// }
///
/// let clock = FixedClock;
/// assert_eq!(clock.current_nanos(), 1234);
/// ```
pub trait ClockSource {
    /// Returns the current reading of the clock, in nanoseconds.
    fn current_nanos(&self) -> u64;
}

impl<C: ClockSource + ?Sized> ClockSource for &C {
    fn current_nanos(&self) -> u64 {
        (**self).current_nanos()
    }
}
