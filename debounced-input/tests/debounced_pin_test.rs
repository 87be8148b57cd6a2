pub mod common;

use debounced_input::{DebouncedInput, DebouncedPin, InputState};
use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

use crate::common::{ManualClock, Recorder};

fn pin_input(id: u8) -> DebouncedInput<ManualClock, Recorder> {
    DebouncedInput::with_clock(id, ManualClock::default(), Recorder::default())
}

/// Poll the pin at each timestamp and collect the results
fn poll_at(pin: &mut DebouncedPin<PinMock, ManualClock, Recorder>, times: &[u32]) -> Vec<bool> {
    times
        .iter()
        .map(|t| {
            pin.input().clock().set(*t);
            pin.poll().unwrap()
        })
        .collect()
}

#[test]
fn test_low_active_pin() {
    let expectations = [
        Transaction::get(State::High),
        Transaction::get(State::Low),
        Transaction::get(State::Low),
        Transaction::get(State::Low),
        Transaction::get(State::High),
        Transaction::get(State::High),
    ];
    let mut pin = DebouncedPin::new(PinMock::new(&expectations), pin_input(3), true);

    assert_eq!(
        poll_at(&mut pin, &[0, 5, 20, 31, 40, 66]),
        [false, false, false, true, false, true]
    );
    assert_eq!(pin.state(), InputState::Released);

    let (mut mock, input) = pin.free();
    assert_eq!(
        input.handler().events,
        [(3, InputState::Asserted), (3, InputState::Released)]
    );
    mock.done();
}

#[test]
fn test_high_active_pin() {
    let expectations = [
        Transaction::get(State::Low),
        Transaction::get(State::High),
        Transaction::get(State::Low),
        Transaction::get(State::High),
        Transaction::get(State::High),
    ];
    let mut pin = DebouncedPin::new(PinMock::new(&expectations), pin_input(8), false);

    // A bounce at t=20 restarts the timer
    assert_eq!(
        poll_at(&mut pin, &[0, 10, 20, 30, 56]),
        [false, false, false, false, true]
    );
    assert_eq!(pin.state(), InputState::Asserted);
    assert_eq!(pin.input().handler().events, [(8, InputState::Asserted)]);

    pin.input_mut().set_release_debounce_interval(50);
    assert_eq!(pin.input().release_debounce_interval(), 50);

    let (mut mock, _) = pin.free();
    mock.done();
}
