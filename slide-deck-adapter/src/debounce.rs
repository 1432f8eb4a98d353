/// Coalesces bursts of events into a single firing after a quiet period.
///
/// Driven by adapter time: call [`Debouncer::notify`] on every event and [`Debouncer::poll`] on
/// every tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debouncer {
    delay_ms: u64,
    last_event_ms: Option<u64>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            last_event_ms: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn is_pending(&self) -> bool {
        self.last_event_ms.is_some()
    }

    pub fn notify(&mut self, now_ms: u64) {
        self.last_event_ms = Some(now_ms);
    }

    pub fn cancel(&mut self) {
        self.last_event_ms = None;
    }

    /// Returns `true` exactly once per burst, when `delay_ms` has elapsed since its last event.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let Some(last) = self.last_event_ms else {
            return false;
        };
        if now_ms.saturating_sub(last) < self.delay_ms {
            return false;
        }
        self.last_event_ms = None;
        true
    }
}
