use crate::{ChangeKind, Delta, NavState, SwipeDirection};

/// The navigation state machine: active index, slide count and slider offset.
///
/// `Navigator` is pure state. It never talks to the host; [`crate::Deck`] feeds it deltas and
/// widths and applies the resulting offsets.
///
/// The offset follows the reading direction: in LTR the slider moves toward negative `x` as the
/// index grows, in RTL toward positive `x`.
#[derive(Clone, Debug)]
pub struct Navigator {
    active_index: usize,
    length: usize,
    translate_x: f64,
    rtl: bool,
    state: NavState,
    auto_swipe_ratio: u32,
}

impl Navigator {
    pub fn new(rtl: bool, auto_swipe_ratio: u32) -> Self {
        Self {
            active_index: 0,
            length: 0,
            translate_x: 0.0,
            rtl,
            state: NavState::Idle,
            auto_swipe_ratio: auto_swipe_ratio.max(1),
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn translate_x(&self) -> f64 {
        self.translate_x
    }

    pub fn rtl(&self) -> bool {
        self.rtl
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    /// Counts one more mounted slide.
    pub fn push_slide(&mut self) -> usize {
        self.length = self.length.saturating_add(1);
        self.length
    }

    pub fn is_beginning(&self) -> bool {
        self.active_index == 0
    }

    pub fn is_end(&self) -> bool {
        self.length > 0 && self.active_index == self.length - 1
    }

    /// Whether a swipe in `direction` means "go to the next slide".
    pub fn is_next_change(&self, direction: SwipeDirection) -> bool {
        direction.is_left() != self.rtl
    }

    /// Whether a swipe in `direction` has a slide to land on.
    pub fn can_swipe(&self, direction: SwipeDirection) -> bool {
        let has_next = self.active_index.saturating_add(1) < self.length;
        let has_prev = self.active_index > 0;
        if self.is_next_change(direction) {
            has_next
        } else {
            has_prev
        }
    }

    /// Minimum drag magnitude, exclusive, for a release to change slide.
    pub fn commit_threshold(&self, width: u32) -> f64 {
        width as f64 / self.auto_swipe_ratio as f64
    }

    pub fn begin_drag(&mut self) {
        self.state = NavState::Dragging;
    }

    /// Ends a gesture session without any transition.
    pub fn cancel_drag(&mut self) {
        if self.state == NavState::Dragging {
            self.state = NavState::Idle;
        }
    }

    /// Offset to show while dragging. Does not change any committed state.
    pub fn provisional_offset(&self, delta: Delta) -> f64 {
        match delta.direction {
            SwipeDirection::Left => self.translate_x - delta.magnitude,
            SwipeDirection::Right => self.translate_x + delta.magnitude,
        }
    }

    /// Decides whether a release commits a slide change, and applies it.
    ///
    /// Always moves the machine to `Transitioning`; [`Navigator::settle`] brings it back to
    /// `Idle`.
    pub fn commit(&mut self, delta: Delta, width: u32) -> Option<ChangeKind> {
        self.state = NavState::Transitioning;

        if !self.can_swipe(delta.direction) {
            dtrace!(
                active_index = self.active_index,
                length = self.length,
                "Navigator::commit: at boundary"
            );
            return None;
        }
        if delta.magnitude <= self.commit_threshold(width) {
            dtrace!(magnitude = delta.magnitude, width, "Navigator::commit: below threshold");
            return None;
        }

        let step = width as f64;
        self.translate_x = match delta.direction {
            SwipeDirection::Left => self.translate_x - step,
            SwipeDirection::Right => self.translate_x + step,
        };

        let kind = if self.is_next_change(delta.direction) {
            self.active_index += 1;
            ChangeKind::Next
        } else {
            self.active_index -= 1;
            ChangeKind::Prev
        };
        ddebug!(active_index = self.active_index, ?kind, "Navigator::commit");
        Some(kind)
    }

    /// Jumps straight to `index`. Returns `false` (and changes nothing) when out of range.
    ///
    /// `index == length` is accepted, matching the deck's `slide_to` contract.
    pub fn jump_to(&mut self, index: usize, width: u32) -> bool {
        if index > self.length {
            return false;
        }
        self.active_index = index;
        self.state = NavState::Transitioning;
        self.translate_x = self.resolved_offset(width);
        true
    }

    /// Offset that matches the active index for a given slider width.
    pub fn resolved_offset(&self, width: u32) -> f64 {
        let sign = if self.rtl { 1.0 } else { -1.0 };
        self.active_index as f64 * width as f64 * sign
    }

    /// Finishes a transition and returns the resolved offset.
    pub fn settle(&mut self, width: u32) -> f64 {
        self.translate_x = self.resolved_offset(width);
        self.state = NavState::Idle;
        self.translate_x
    }
}
