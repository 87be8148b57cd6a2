use serde::{Deserialize, Serialize};

/// Default debounce interval, 25 time units (milliseconds with [`EmbassyClock`](crate::EmbassyClock)).
pub const DEFAULT_DEBOUNCE_INTERVAL: u32 = 25;

/// Debounce intervals of a single input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceConfig {
    /// How long the raw signal must stay asserted before a press is accepted
    pub push_interval: u32,
    /// How long the raw signal must stay released before a release is accepted
    pub release_interval: u32,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self::symmetric(DEFAULT_DEBOUNCE_INTERVAL)
    }
}

impl DebounceConfig {
    pub const fn new(push_interval: u32, release_interval: u32) -> Self {
        Self {
            push_interval,
            release_interval,
        }
    }

    /// Same interval for both directions.
    pub const fn symmetric(interval: u32) -> Self {
        Self::new(interval, interval)
    }
}
