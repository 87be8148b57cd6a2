use core::ops::Not;

/// Logical state of a debounced input.
///
/// The raw polarity is fixed: a raw sample of `0` is `Asserted` (pressed, contact closed), any
/// nonzero sample is `Released` (open).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum InputState {
    /// Pressed, raw value 0
    Asserted = 0,
    /// Open, any nonzero raw value
    #[default]
    Released = 1,
}

impl InputState {
    /// Collapse a raw sample into the boolean domain.
    pub const fn from_raw(raw: u8) -> Self {
        if raw == 0 {
            InputState::Asserted
        } else {
            InputState::Released
        }
    }

    /// Raw value of the state, 0 for asserted and 1 for released.
    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn is_asserted(self) -> bool {
        matches!(self, InputState::Asserted)
    }

    pub const fn is_released(self) -> bool {
        matches!(self, InputState::Released)
    }
}

impl From<u8> for InputState {
    fn from(raw: u8) -> Self {
        InputState::from_raw(raw)
    }
}

impl From<InputState> for u8 {
    fn from(state: InputState) -> Self {
        state.as_raw()
    }
}

impl Not for InputState {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            InputState::Asserted => InputState::Released,
            InputState::Released => InputState::Asserted,
        }
    }
}
