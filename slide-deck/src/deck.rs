use alloc::vec::Vec;

use crate::{
    ChangeKind, DeckEvent, DeckHost, DeckOptions, Delta, FullscreenCursor, GestureTracker,
    LazyLoadCoordinator, LoadOutcome, NavKey, NavState, Navigator, PagerProps, PointerInput,
    SlideHandle, StyleProperty, SwipeDirection,
};

/// A headless presentation deck.
///
/// `Deck` owns its [`DeckHost`] and drives it with style writes; it holds no other UI objects.
/// Slides are referenced through weak handles registered by [`Deck::slide_did_load`].
///
/// Every operation is synchronous. Invalid requests (out-of-range jumps, releases without a
/// gesture, swipes past the first/last slide) are silent no-ops.
#[derive(Debug)]
pub struct Deck<H> {
    options: DeckOptions,
    host: H,
    nav: Navigator,
    gesture: GestureTracker,
    lazy: LazyLoadCoordinator,
    cursor: FullscreenCursor,
    drag_offset: Option<f64>,
    transition_ms: u32,
}

impl<H: DeckHost> Deck<H> {
    /// Creates a deck. The text direction is read from the host once, here.
    pub fn new(options: DeckOptions, host: H) -> Self {
        let rtl = host.text_direction().is_rtl();
        ddebug!(
            rtl,
            embedded = options.embedded,
            keyboard = options.keyboard,
            "Deck::new"
        );
        Self {
            nav: Navigator::new(rtl, options.auto_swipe_ratio),
            gesture: GestureTracker::new(),
            lazy: LazyLoadCoordinator::new(),
            cursor: FullscreenCursor::new(options.idle_cursor_delay_ms),
            drag_offset: None,
            transition_ms: options.transition_ms,
            options,
            host,
        }
    }

    pub fn options(&self) -> &DeckOptions {
        &self.options
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn gesture(&self) -> &GestureTracker {
        &self.gesture
    }

    pub fn lazy_loader(&self) -> &LazyLoadCoordinator {
        &self.lazy
    }

    pub fn fullscreen(&self) -> &FullscreenCursor {
        &self.cursor
    }

    pub fn active_index(&self) -> usize {
        self.nav.active_index()
    }

    pub fn length(&self) -> usize {
        self.nav.length()
    }

    pub fn is_beginning(&self) -> bool {
        self.nav.is_beginning()
    }

    pub fn is_end(&self) -> bool {
        self.nav.is_end()
    }

    pub fn is_rtl(&self) -> bool {
        self.nav.rtl()
    }

    /// `Idle` or `Dragging`. Transitions settle before any deck call returns.
    pub fn state(&self) -> NavState {
        self.nav.state()
    }

    /// Committed slider offset, in px.
    pub fn translate_x(&self) -> f64 {
        self.nav.translate_x()
    }

    /// Offset currently on screen: the provisional drag offset while dragging, else the
    /// committed one.
    pub fn visual_offset(&self) -> f64 {
        self.drag_offset.unwrap_or_else(|| self.nav.translate_x())
    }

    /// Duration hint of the last resolved transition, in ms.
    pub fn transition_ms(&self) -> u32 {
        self.transition_ms
    }

    /// Width used for offsets and the commit threshold.
    ///
    /// Embedded decks use their container's width when it is known and non-zero; everything
    /// else uses the viewport width.
    pub fn slider_width(&self) -> u32 {
        if self.options.embedded {
            if let Some(size) = self.host.container_size() {
                if size.width > 0 {
                    return size.width;
                }
            }
        }
        self.host.viewport_width()
    }

    pub fn is_mobile(&self) -> bool {
        self.host.is_mobile()
    }

    pub fn pager_props(&self) -> Option<PagerProps> {
        self.options.pager.then(|| PagerProps {
            active_index: self.nav.active_index(),
            length: self.nav.length(),
            percentage: self.options.pager_percentage,
        })
    }

    fn emit(&self, event: DeckEvent) {
        dtrace!(?event, "Deck::emit");
        if let Some(cb) = &self.options.on_event {
            cb(&event);
        }
    }

    // Lifecycle

    /// Runs once the deck surface exists: embedded sizing and the background image pass.
    pub fn did_load(&mut self) {
        self.apply_embedded_size();
        self.lazy.load_background_images(&self.host);
    }

    /// Re-measures after a (debounced) resize and re-aligns the slider on the active slide.
    pub fn on_resize(&mut self) {
        self.apply_embedded_size();
        let index = self.nav.active_index();
        self.slide_to(index, None, true);
    }

    fn apply_embedded_size(&mut self) {
        if !self.options.embedded {
            return;
        }
        let Some(size) = self.host.container_size() else {
            return;
        };
        if size.width > 0 {
            self.host.set_style(StyleProperty::SlideWidth(size.width));
        }
        if size.height > 0 {
            self.host.set_style(StyleProperty::SlideHeight(size.height));
        }
    }

    /// "Slide mounted" signal from the slide at `position`.
    ///
    /// Once every declared slide has mounted, emits [`DeckEvent::SlidesDidLoad`] and loads the
    /// first two slides.
    pub fn slide_did_load(&mut self, position: usize, slide: SlideHandle) {
        self.nav.push_slide();
        let declared = self.host.declared_children();
        let Some(definitions) = self.lazy.on_slide_mounted(
            position,
            slide,
            &declared,
            &self.options.slide_tag_prefix,
        ) else {
            return;
        };

        self.emit(DeckEvent::SlidesDidLoad(definitions));
        self.lazy.load_first_slides();
    }

    // Gestures

    pub fn pointer_down(&mut self, input: &PointerInput) {
        self.gesture.start(input);
        if self.gesture.is_active() {
            self.nav.begin_drag();
        }
    }

    pub fn pointer_move(&mut self, input: &PointerInput, now_ms: u64) {
        self.cursor.on_pointer_activity(&mut self.host, now_ms);

        if self.gesture.is_blocked() {
            return;
        }
        let Some(delta) = self.gesture.delta(input) else {
            return;
        };

        let offset = self.nav.provisional_offset(delta);
        self.drag_offset = Some(offset);
        self.host.set_style(StyleProperty::TransformX(offset));
        self.host.set_style(StyleProperty::TransformXDuration(0));
        dtrace!(offset, "Deck::pointer_move");
        self.emit(DeckEvent::SlideDrag(offset));
    }

    pub fn pointer_up(&mut self, input: &PointerInput) {
        // The session ends here even when blocked.
        let delta = self.gesture.release(input);
        self.drag_offset = None;

        if self.gesture.is_blocked() {
            self.nav.cancel_drag();
            return;
        }
        match delta {
            Some(delta) => {
                self.swipe_slide(delta, true);
            }
            None => self.nav.cancel_drag(),
        }
    }

    /// Touch cancel: drops the session without any transition.
    pub fn pointer_cancel(&mut self) {
        self.reset_gesture();
    }

    /// Double click / double tap: unconditional gesture reset.
    pub fn double_click(&mut self) {
        self.reset_gesture();
    }

    fn reset_gesture(&mut self) {
        self.gesture.reset();
        self.drag_offset = None;
        self.nav.cancel_drag();
    }

    /// "Scrolling" signal from a descendant that claims (or releases) gestures.
    pub fn set_scrolling(&mut self, blocked: bool) {
        dtrace!(blocked, "Deck::set_scrolling");
        self.gesture.set_blocked(blocked);
    }

    pub fn is_slide_blocked(&self) -> bool {
        self.gesture.is_blocked()
    }

    fn swipe_slide(&mut self, delta: Delta, emit_event: bool) -> Option<ChangeKind> {
        let width = self.slider_width();
        let change = self.nav.commit(delta, width);

        if let Some(kind) = change {
            let index = self.nav.active_index();
            if emit_event {
                self.emit(match kind {
                    ChangeKind::Next => DeckEvent::SlideNextDidChange(index),
                    ChangeKind::Prev => DeckEvent::SlidePrevDidChange(index),
                });
            }
            self.lazy.load(index);
        }

        self.resolve_transition(None);

        // Prefetch in the background of the transition.
        self.lazy.load(self.nav.active_index().saturating_add(1));
        change
    }

    fn resolve_transition(&mut self, speed_ms: Option<u32>) {
        let offset = self.nav.settle(self.slider_width());
        let duration = speed_ms.unwrap_or(self.options.transition_ms);
        self.transition_ms = duration;
        self.drag_offset = None;

        self.host.set_style(StyleProperty::TransformX(offset));
        self.host.set_style(StyleProperty::TransformXDuration(duration));
        self.emit(DeckEvent::SlideWillChange(offset));

        self.gesture.reset();
    }

    // Programmatic navigation

    /// Steps to the next slide (in reading order).
    ///
    /// With `animate`, the active slide's `before_swipe` hook may veto the step.
    pub fn slide_next(&mut self, animate: bool, emit_event: bool) {
        let direction = if self.nav.rtl() {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        };
        self.slide_next_prev(direction, animate, emit_event);
    }

    /// Steps to the previous slide (in reading order).
    pub fn slide_prev(&mut self, animate: bool, emit_event: bool) {
        let direction = if self.nav.rtl() {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        };
        self.slide_next_prev(direction, animate, emit_event);
    }

    fn slide_next_prev(&mut self, direction: SwipeDirection, animate: bool, emit_event: bool) {
        let outgoing = self.nav.active_index();

        if animate {
            let entering_forward = self.nav.is_next_change(direction);
            // A slide we cannot reach must not block the presentation.
            let allowed = self
                .lazy
                .registry()
                .get(outgoing)
                .is_none_or(|slide| slide.before_swipe(entering_forward));
            if !allowed {
                ddebug!(outgoing, "step vetoed by before_swipe");
                return;
            }
        }

        let delta = Delta {
            direction,
            magnitude: self.slider_width() as f64,
        };
        if self.swipe_slide(delta, emit_event).is_none() {
            return;
        }

        if let Some(slide) = self.lazy.registry().get(outgoing) {
            slide.after_swipe();
        }
    }

    /// Jumps to `index` without before/after hooks.
    ///
    /// No-op when `index > length`. `speed_ms` overrides the default transition hint.
    pub fn slide_to(&mut self, index: usize, speed_ms: Option<u32>, emit_event: bool) {
        let width = self.slider_width();
        if !self.nav.jump_to(index, width) {
            dtrace!(index, length = self.nav.length(), "slide_to: out of range");
            return;
        }

        self.lazy.load(index);
        self.resolve_transition(speed_ms);

        if emit_event {
            self.emit(DeckEvent::SlideToChange(index));
        }
    }

    /// Arrow-key navigation. Returns `true` when the key was handled (the host should then
    /// prevent its default action).
    pub fn on_key(&mut self, key: NavKey, default_prevented: bool) -> bool {
        if !self.options.keyboard || default_prevented {
            return false;
        }
        let direction = match key {
            NavKey::ArrowLeft => SwipeDirection::Right,
            NavKey::ArrowRight => SwipeDirection::Left,
        };
        self.slide_next_prev(direction, true, true);
        true
    }

    // Fullscreen and utilities

    pub fn toggle_fullscreen(&mut self, now_ms: u64) {
        self.cursor.toggle(&mut self.host, now_ms);
    }

    pub fn show_hide_cursor(&mut self, show: bool) {
        self.cursor.show_hide_cursor(&mut self.host, show);
    }

    /// Advances deck timers (the fullscreen idle cursor).
    pub fn tick(&mut self, now_ms: u64) {
        self.cursor.tick(&mut self.host, now_ms);
    }

    /// Loads every slide's content, then asks the host to print.
    pub fn do_print(&mut self) -> Vec<LoadOutcome> {
        let outcomes = self.lazy.load_all(self.nav.length());
        ddebug!(slides = outcomes.len(), "printing deck");
        self.host.print();
        outcomes
    }
}
