use crate::state::InputState;

/// Receives confirmed state changes of a debounced input.
///
/// The handler runs synchronously inside [`DebouncedInput::update`](crate::DebouncedInput::update),
/// on the polling loop's stack, so it should be short and must not block.
pub trait ChangeHandler {
    fn on_change(&mut self, id: u8, state: InputState);
}

/// Handler that does nothing, used when an input is unmapped.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoopHandler;

impl ChangeHandler for NoopHandler {
    fn on_change(&mut self, _id: u8, _state: InputState) {}
}

impl<F: FnMut(u8, InputState)> ChangeHandler for F {
    fn on_change(&mut self, id: u8, state: InputState) {
        self(id, state)
    }
}
