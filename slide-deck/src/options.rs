use alloc::string::String;
use alloc::sync::Arc;

use crate::DeckEvent;

/// A callback fired for every event the deck emits.
pub type OnEventCallback = Arc<dyn Fn(&DeckEvent) + Send + Sync>;

/// Configuration for [`crate::Deck`].
///
/// Cheap to clone: the event callback is stored in an `Arc`.
#[derive(Clone)]
pub struct DeckOptions {
    /// Arrow-key navigation.
    pub keyboard: bool,
    /// Render the pager indicator.
    pub pager: bool,
    /// Pager shows a percentage instead of discrete dots.
    pub pager_percentage: bool,
    /// Size slides to the containing element instead of the viewport.
    pub embedded: bool,

    /// A drag must exceed `slider_width / auto_swipe_ratio` to change slide.
    pub auto_swipe_ratio: u32,
    /// Default transition duration hint written with each resolved offset.
    pub transition_ms: u32,
    /// Inactivity before the cursor is hidden in fullscreen.
    pub idle_cursor_delay_ms: u64,
    /// Quiet period before a resize is applied (used by adapters).
    pub resize_debounce_ms: u64,

    /// Declared children whose lowercase tag contains this are counted as slides.
    pub slide_tag_prefix: String,

    pub on_event: Option<OnEventCallback>,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckOptions {
    pub fn new() -> Self {
        Self {
            keyboard: true,
            pager: true,
            pager_percentage: true,
            embedded: false,
            auto_swipe_ratio: 10,
            transition_ms: 300,
            idle_cursor_delay_ms: 4000,
            resize_debounce_ms: 100,
            slide_tag_prefix: String::from("deckgo-slide-"),
            on_event: None,
        }
    }

    pub fn with_keyboard(mut self, keyboard: bool) -> Self {
        self.keyboard = keyboard;
        self
    }

    pub fn with_pager(mut self, pager: bool) -> Self {
        self.pager = pager;
        self
    }

    pub fn with_pager_percentage(mut self, pager_percentage: bool) -> Self {
        self.pager_percentage = pager_percentage;
        self
    }

    pub fn with_embedded(mut self, embedded: bool) -> Self {
        self.embedded = embedded;
        self
    }

    pub fn with_auto_swipe_ratio(mut self, ratio: u32) -> Self {
        self.auto_swipe_ratio = ratio;
        self
    }

    pub fn with_transition_ms(mut self, transition_ms: u32) -> Self {
        self.transition_ms = transition_ms;
        self
    }

    pub fn with_idle_cursor_delay_ms(mut self, delay_ms: u64) -> Self {
        self.idle_cursor_delay_ms = delay_ms;
        self
    }

    pub fn with_resize_debounce_ms(mut self, delay_ms: u64) -> Self {
        self.resize_debounce_ms = delay_ms;
        self
    }

    pub fn with_slide_tag_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.slide_tag_prefix = prefix.into();
        self
    }

    pub fn with_on_event(
        mut self,
        on_event: Option<impl Fn(&DeckEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.on_event = on_event.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for DeckOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DeckOptions")
            .field("keyboard", &self.keyboard)
            .field("pager", &self.pager)
            .field("pager_percentage", &self.pager_percentage)
            .field("embedded", &self.embedded)
            .field("auto_swipe_ratio", &self.auto_swipe_ratio)
            .field("transition_ms", &self.transition_ms)
            .field("idle_cursor_delay_ms", &self.idle_cursor_delay_ms)
            .field("resize_debounce_ms", &self.resize_debounce_ms)
            .field("slide_tag_prefix", &self.slide_tag_prefix)
            .finish_non_exhaustive()
    }
}
