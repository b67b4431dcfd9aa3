use crate::ClockSource;

#[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
use std::time::{Instant, SystemTime, UNIX_EPOCH};
#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
use web_time::{Instant, SystemTime, UNIX_EPOCH};

/// A monotonic nanosecond clock anchored to the Unix epoch.
///
/// The wall-clock offset is sampled once at construction; every reading after
/// that adds the elapsed time of a monotonic [`Instant`]. Readings therefore
/// never go backward, even if the system clock is adjusted externally, and no
/// syscall beyond the `Instant` read happens on the hot path.
///
/// # Example
///
/// ```
/// use xorand::{ClockSource, MonotonicClock};
///
/// let clock = MonotonicClock::new();
/// let a = clock.current_nanos();
/// let b = clock.current_nanos();
/// assert!(b >= a);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    start: Instant,
    epoch_offset: u64, // in nanoseconds
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    /// Constructs a clock whose readings start at the current wall-clock time
    /// in nanoseconds since the Unix epoch.
    ///
    /// A system clock set before 1970 yields an origin of zero; readings
    /// still advance monotonically from there.
    pub fn new() -> Self {
        let start = Instant::now();
        let epoch_offset = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();

        Self {
            start,
            epoch_offset,
        }
    }
}

impl ClockSource for MonotonicClock {
    fn current_nanos(&self) -> u64 {
        self.epoch_offset
            .wrapping_add(self.start.elapsed().as_nanos() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readings_never_go_backward() {
        let clock = MonotonicClock::new();
        let mut last = clock.current_nanos();
        for _ in 0..1_000 {
            let now = clock.current_nanos();
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn readings_are_anchored_to_the_unix_epoch() {
        let clock = MonotonicClock::new();
        // 2020-01-01T00:00:00Z in nanoseconds
        assert!(clock.current_nanos() > 1_577_836_800_000_000_000);
    }
}
