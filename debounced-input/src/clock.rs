//! Time sources for the debouncer.
//!
//! All timestamps share one abstract unit, milliseconds by default. Timestamps are `u32` and
//! are allowed to wrap, the debouncer only ever looks at wrapping differences.

use embassy_time::Instant;

/// A monotonically non-decreasing time source.
pub trait Clock {
    /// Current timestamp.
    fn now(&self) -> u32;
}

/// Milliseconds since boot, read from the embassy time driver.
///
/// The 64-bit embassy instant is truncated to `u32`, so it wraps after ~49 days.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}

impl<F: Fn() -> u32> Clock for F {
    fn now(&self) -> u32 {
        self()
    }
}
