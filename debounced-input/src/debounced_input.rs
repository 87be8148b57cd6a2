use crate::clock::{Clock, EmbassyClock};
use crate::config::{DEFAULT_DEBOUNCE_INTERVAL, DebounceConfig};
use crate::handler::{ChangeHandler, NoopHandler};
use crate::state::InputState;

/// Debounced state machine of a single digital input.
///
/// Every call of [`update`](Self::update) hands in one raw sample. The input records when the
/// raw value last changed, and confirms the raw value as the new state once it has been held for
/// longer than the debounce interval of the current state:
///
/// - while `Released`, the push interval gates the move to `Asserted`
/// - while `Asserted`, the release interval gates the move to `Released`
///
/// Any change of the raw value restarts the timer, so a single noisy sample delays confirmation
/// by a full interval.
pub struct DebouncedInput<C: Clock = EmbassyClock, H: ChangeHandler = NoopHandler> {
    /// Opaque id, passed through to the handler
    id: u8,
    /// Confirmed state
    state: InputState,
    /// Last raw sample, collapsed
    last_sample: InputState,
    /// Timestamp at which `last_sample` last changed
    sample_start: u32,
    push_interval: u32,
    release_interval: u32,
    clock: C,
    handler: H,
}

impl Default for DebouncedInput {
    fn default() -> Self {
        Self::new(0, NoopHandler)
    }
}

impl<H: ChangeHandler> DebouncedInput<EmbassyClock, H> {
    /// Create a debounced input which reads time from the embassy time driver.
    pub fn new(id: u8, handler: H) -> Self {
        Self::with_clock(id, EmbassyClock, handler)
    }
}

impl<C: Clock, H: ChangeHandler> DebouncedInput<C, H> {
    /// Create a debounced input with a custom time source.
    ///
    /// The input starts released, with both debounce intervals at [`DEFAULT_DEBOUNCE_INTERVAL`].
    /// The debounce timer starts at timestamp 0 rather than at the current time of `clock`.
    pub fn with_clock(id: u8, clock: C, handler: H) -> Self {
        Self {
            id,
            state: InputState::Released,
            last_sample: InputState::Released,
            sample_start: 0,
            push_interval: DEFAULT_DEBOUNCE_INTERVAL,
            release_interval: DEFAULT_DEBOUNCE_INTERVAL,
            clock,
            handler,
        }
    }

    /// Replace both debounce intervals, consuming self.
    pub fn with_config(mut self, config: DebounceConfig) -> Self {
        self.apply_config(&config);
        self
    }

    /// Replace the handler with one of another type.
    pub fn with_handler<H2: ChangeHandler>(self, handler: H2) -> DebouncedInput<C, H2> {
        DebouncedInput {
            id: self.id,
            state: self.state,
            last_sample: self.last_sample,
            sample_start: self.sample_start,
            push_interval: self.push_interval,
            release_interval: self.release_interval,
            clock: self.clock,
            handler,
        }
    }

    /// Feed the latest raw sample. Any nonzero sample means released, zero means asserted.
    ///
    /// Returns true if the confirmed state changed in this call, in which case the handler has
    /// already been called with the new state.
    pub fn update(&mut self, raw: u8) -> bool {
        let sample = InputState::from_raw(raw);
        let now = self.clock.now();

        if sample != self.last_sample {
            trace!("Input {} raw sample changed to {:?} at {}", self.id, sample, now);
            self.sample_start = now;
        }
        self.last_sample = sample;

        let interval = match self.state {
            InputState::Asserted => self.release_interval,
            InputState::Released => self.push_interval,
        };

        if now.wrapping_sub(self.sample_start) > interval && self.last_sample != self.state {
            self.state = self.last_sample;
            debug!("Input {} debounced to {:?} at {}", self.id, self.state, now);
            self.handler.on_change(self.id, self.state);
            return true;
        }

        false
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    /// Confirmed state of the input.
    pub fn state(&self) -> InputState {
        self.state
    }

    pub fn is_asserted(&self) -> bool {
        self.state.is_asserted()
    }

    pub fn is_released(&self) -> bool {
        self.state.is_released()
    }

    pub fn push_debounce_interval(&self) -> u32 {
        self.push_interval
    }

    /// Set how long the raw signal must stay asserted before a press is accepted.
    ///
    /// Takes effect on the next update, the timer of a pending transition is not touched.
    pub fn set_push_debounce_interval(&mut self, interval: u32) {
        info!("Input {} push debounce interval: {}", self.id, interval);
        self.push_interval = interval;
    }

    pub fn release_debounce_interval(&self) -> u32 {
        self.release_interval
    }

    /// Set how long the raw signal must stay released before a release is accepted.
    ///
    /// Takes effect on the next update, the timer of a pending transition is not touched.
    pub fn set_release_debounce_interval(&mut self, interval: u32) {
        info!("Input {} release debounce interval: {}", self.id, interval);
        self.release_interval = interval;
    }

    /// Current debounce intervals.
    pub fn config(&self) -> DebounceConfig {
        DebounceConfig::new(self.push_interval, self.release_interval)
    }

    pub fn apply_config(&mut self, config: &DebounceConfig) {
        self.set_push_debounce_interval(config.push_interval);
        self.set_release_debounce_interval(config.release_interval);
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn set_handler(&mut self, handler: H) {
        self.handler = handler;
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
