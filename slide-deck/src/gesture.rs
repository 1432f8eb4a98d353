use alloc::vec::Vec;

use crate::Delta;

/// A raw pointer sample from either a mouse or a touch surface.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerInput {
    Mouse { client_x: f64 },
    /// `clientX` of each changed touch point, in event order.
    Touch { changed_touches: Vec<f64> },
}

impl PointerInput {
    pub fn mouse(client_x: f64) -> Self {
        Self::Mouse { client_x }
    }

    pub fn touch(client_x: f64) -> Self {
        Self::Touch {
            changed_touches: alloc::vec![client_x],
        }
    }

    /// Horizontal coordinate of the sample. Touch events read their first changed touch.
    pub fn client_x(&self) -> Option<f64> {
        match self {
            Self::Mouse { client_x } => Some(*client_x),
            Self::Touch { changed_touches } => changed_touches.first().copied(),
        }
    }
}

/// Tracks one gesture session (pointer down → release) and the slide-blocking flag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureTracker {
    start_x: Option<f64>,
    blocked: bool,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, input: &PointerInput) {
        self.start_x = input.client_x();
        dtrace!(start_x = ?self.start_x, "GestureTracker::start");
    }

    pub fn start_x(&self) -> Option<f64> {
        self.start_x
    }

    pub fn is_active(&self) -> bool {
        self.start_x.is_some()
    }

    /// Delta between the session start and `input`, if a session is open and the pointer moved.
    pub fn delta(&self, input: &PointerInput) -> Option<Delta> {
        let start_x = self.start_x?;
        let current_x = input.client_x()?;
        Delta::between(start_x, current_x)
    }

    /// Ends the session and returns its final delta.
    pub fn release(&mut self, input: &PointerInput) -> Option<Delta> {
        let delta = self.delta(input);
        self.start_x = None;
        delta
    }

    pub fn reset(&mut self) {
        self.start_x = None;
    }

    /// Set while a descendant (e.g. a scrollable code block) owns the gesture.
    pub fn set_blocked(&mut self, blocked: bool) {
        self.blocked = blocked;
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }
}
