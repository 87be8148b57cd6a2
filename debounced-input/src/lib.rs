//! Debounce a noisy digital input into clean, decisively timed press and release transitions.
//!
//! A [`DebouncedInput`] is fed raw samples from a polling loop. It tracks how long the raw
//! value has stayed unchanged, and once that exceeds the debounce interval of the current
//! confirmed state, the confirmed state flips and the registered [`ChangeHandler`] is called
//! exactly once.
//!
//! Raw polarity is fixed: `0` means asserted (pressed), any nonzero value means released (open).
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod clock;
pub mod config;
pub mod debounced_input;
pub mod handler;
pub mod pin;
pub mod state;

pub use clock::{Clock, EmbassyClock};
pub use config::{DEFAULT_DEBOUNCE_INTERVAL, DebounceConfig};
pub use debounced_input::DebouncedInput;
pub use handler::{ChangeHandler, NoopHandler};
pub use pin::DebouncedPin;
pub use state::InputState;
