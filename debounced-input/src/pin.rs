use embedded_hal::digital::InputPin;

use crate::clock::{Clock, EmbassyClock};
use crate::debounced_input::DebouncedInput;
use crate::handler::{ChangeHandler, NoopHandler};
use crate::state::InputState;

/// An input pin polled through a [`DebouncedInput`].
///
/// `low_active` selects the pin level that counts as asserted: a low level for buttons wired to
/// ground with a pull-up, a high level otherwise.
pub struct DebouncedPin<P: InputPin, C: Clock = EmbassyClock, H: ChangeHandler = NoopHandler> {
    pin: P,
    input: DebouncedInput<C, H>,
    low_active: bool,
}

impl<P: InputPin, C: Clock, H: ChangeHandler> DebouncedPin<P, C, H> {
    pub fn new(pin: P, input: DebouncedInput<C, H>, low_active: bool) -> Self {
        Self {
            pin,
            input,
            low_active,
        }
    }

    /// Read the pin once and feed the sample to the debouncer.
    ///
    /// Returns true if the confirmed state changed. A failed pin read leaves the debouncer untouched.
    pub fn poll(&mut self) -> Result<bool, P::Error> {
        // Raw samples are 0 when asserted, so read the inactive level
        let inactive = if self.low_active {
            self.pin.is_high()
        } else {
            self.pin.is_low()
        };

        match inactive {
            Ok(inactive) => Ok(self.input.update(inactive as u8)),
            Err(e) => {
                warn!("Failed to read input {}", self.input.id());
                Err(e)
            }
        }
    }

    pub fn state(&self) -> InputState {
        self.input.state()
    }

    pub fn input(&self) -> &DebouncedInput<C, H> {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut DebouncedInput<C, H> {
        &mut self.input
    }

    /// Release the pin and the debouncer.
    pub fn free(self) -> (P, DebouncedInput<C, H>) {
        (self.pin, self.input)
    }
}
