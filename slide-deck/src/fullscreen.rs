use crate::{CursorStyle, DeckHost, StyleProperty};

/// Fullscreen toggle plus the idle timer that hides the cursor while presenting.
///
/// The timer is a deadline in adapter time (`now_ms`); the adapter calls
/// [`FullscreenCursor::tick`] to let it fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FullscreenCursor {
    fullscreen: bool,
    cursor_hidden: bool,
    hide_at_ms: Option<u64>,
    idle_delay_ms: u64,
}

impl FullscreenCursor {
    pub fn new(idle_delay_ms: u64) -> Self {
        Self {
            fullscreen: false,
            cursor_hidden: false,
            hide_at_ms: None,
            idle_delay_ms,
        }
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn is_cursor_hidden(&self) -> bool {
        self.cursor_hidden
    }

    /// When the pending idle timer fires, if one is armed.
    pub fn hide_deadline(&self) -> Option<u64> {
        self.hide_at_ms
    }

    /// Enters fullscreen when the host is not fullscreen, exits otherwise.
    pub fn toggle<H: DeckHost + ?Sized>(&mut self, host: &mut H, now_ms: u64) {
        if !host.is_fullscreen() {
            host.request_fullscreen();
            self.fullscreen = true;
            self.arm(now_ms);
            ddebug!(now_ms, "entered fullscreen");
        } else {
            host.exit_fullscreen();
            self.hide_at_ms = None;
            self.show_hide_cursor(host, true);
            self.fullscreen = false;
            self.cursor_hidden = false;
            ddebug!(now_ms, "exited fullscreen");
        }
    }

    /// Pointer activity: shows the cursor and restarts the idle timer.
    pub fn on_pointer_activity<H: DeckHost + ?Sized>(&mut self, host: &mut H, now_ms: u64) {
        if !self.fullscreen {
            return;
        }
        self.hide_at_ms = None;
        self.show_hide_cursor(host, true);
        self.arm(now_ms);
    }

    /// Fires the idle timer when its deadline has passed.
    pub fn tick<H: DeckHost + ?Sized>(&mut self, host: &mut H, now_ms: u64) {
        let Some(at) = self.hide_at_ms else {
            return;
        };
        if now_ms < at {
            return;
        }
        self.hide_at_ms = None;
        self.show_hide_cursor(host, false);
    }

    /// Shows or hides the cursor. Writes the style only when the visible state changes.
    pub fn show_hide_cursor<H: DeckHost + ?Sized>(&mut self, host: &mut H, show: bool) {
        if !self.fullscreen {
            return;
        }
        if self.cursor_hidden != show {
            return;
        }
        host.set_style(StyleProperty::Cursor(if show {
            CursorStyle::Initial
        } else {
            CursorStyle::Hidden
        }));
        self.cursor_hidden = !show;
        dtrace!(show, "cursor visibility changed");
    }

    fn arm(&mut self, now_ms: u64) {
        if !self.fullscreen {
            return;
        }
        self.hide_at_ms = Some(now_ms.saturating_add(self.idle_delay_ms));
    }
}
