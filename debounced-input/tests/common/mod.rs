use core::cell::Cell;

use debounced_input::{ChangeHandler, Clock, DebouncedInput, InputState};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// Clock that only moves when the test says so
#[derive(Default)]
pub struct ManualClock {
    now: Cell<u32>,
}

impl ManualClock {
    pub fn at(now: u32) -> Self {
        Self { now: Cell::new(now) }
    }

    pub fn set(&self, now: u32) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> u32 {
        self.now.get()
    }
}

/// Handler that records every confirmed change
#[derive(Default)]
pub struct Recorder {
    pub events: Vec<(u8, InputState)>,
}

impl ChangeHandler for Recorder {
    fn on_change(&mut self, id: u8, state: InputState) {
        self.events.push((id, state));
    }
}

pub fn recorded_input(id: u8) -> DebouncedInput<ManualClock, Recorder> {
    DebouncedInput::with_clock(id, ManualClock::default(), Recorder::default())
}

/// Move the input's clock to `now` and feed one sample
pub fn update_at<H: ChangeHandler>(input: &mut DebouncedInput<ManualClock, H>, now: u32, raw: u8) -> bool {
    input.clock().set(now);
    input.update(raw)
}
