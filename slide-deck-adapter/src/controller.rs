use slide_deck::{Deck, DeckHost, DeckOptions, PointerInput};

use crate::{Debouncer, Easing, Tween, nav_key_from_name};

/// A framework-neutral controller that wraps a [`slide_deck::Deck`] and provides the adapter
/// workflows around it: debounced resizes, key-name mapping and tween-driven offsets.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_pointer_*` / `on_key` / `on_resize` when UI events occur
/// - `tick(now_ms)` each frame/timer tick (idle cursor, resize debouncing, tweens)
///
/// Hosts that animate the slider with a native transition can ignore the value returned by
/// `tick()`; hosts that paint the slider themselves use it as the on-screen offset.
#[derive(Debug)]
pub struct Controller<H> {
    deck: Deck<H>,
    tween: Option<Tween>,
    resize: Debouncer,
    easing: Easing,
    rendered: f64,
}

impl<H: DeckHost> Controller<H> {
    pub fn new(options: DeckOptions, host: H) -> Self {
        Self::from_deck(Deck::new(options, host))
    }

    pub fn from_deck(deck: Deck<H>) -> Self {
        Self {
            resize: Debouncer::new(deck.options().resize_debounce_ms),
            rendered: deck.visual_offset(),
            deck,
            tween: None,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn deck(&self) -> &Deck<H> {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut Deck<H> {
        &mut self.deck
    }

    pub fn into_deck(self) -> Deck<H> {
        self.deck
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Offset last handed to the host, in px.
    pub fn rendered_offset(&self) -> f64 {
        self.rendered
    }

    pub fn on_pointer_down(&mut self, input: &PointerInput) {
        self.deck.pointer_down(input);
    }

    /// Dragging takes over from any running tween: the slider follows the pointer.
    pub fn on_pointer_move(&mut self, input: &PointerInput, now_ms: u64) {
        self.deck.pointer_move(input, now_ms);
        if self.deck.gesture().is_active() && !self.deck.is_slide_blocked() {
            self.cancel_animation();
            self.rendered = self.deck.visual_offset();
        }
    }

    pub fn on_pointer_up(&mut self, input: &PointerInput, now_ms: u64) {
        self.deck.pointer_up(input);
        self.sync(now_ms);
    }

    pub fn on_pointer_cancel(&mut self, now_ms: u64) {
        self.deck.pointer_cancel();
        self.sync(now_ms);
    }

    pub fn on_double_click(&mut self, now_ms: u64) {
        self.deck.double_click();
        self.sync(now_ms);
    }

    /// Handles a DOM key name. Returns `true` when the host should prevent the default action.
    pub fn on_key(&mut self, key: &str, default_prevented: bool, now_ms: u64) -> bool {
        let Some(key) = nav_key_from_name(key) else {
            return false;
        };
        let handled = self.deck.on_key(key, default_prevented);
        self.sync(now_ms);
        handled
    }

    /// Records a resize. The deck re-measures once the debounce quiet period has passed.
    pub fn on_resize(&mut self, now_ms: u64) {
        self.resize.notify(now_ms);
    }

    pub fn slide_next(&mut self, animate: bool, emit_event: bool, now_ms: u64) {
        self.deck.slide_next(animate, emit_event);
        self.sync(now_ms);
    }

    pub fn slide_prev(&mut self, animate: bool, emit_event: bool, now_ms: u64) {
        self.deck.slide_prev(animate, emit_event);
        self.sync(now_ms);
    }

    pub fn slide_to(&mut self, index: usize, speed_ms: Option<u32>, emit_event: bool, now_ms: u64) {
        self.deck.slide_to(index, speed_ms, emit_event);
        self.sync(now_ms);
    }

    pub fn toggle_fullscreen(&mut self, now_ms: u64) {
        self.deck.toggle_fullscreen(now_ms);
    }

    /// Advances the controller.
    ///
    /// - Fires the deck's idle-cursor timer and any settled resize.
    /// - If a tween is active, returns the offset to paint. Otherwise returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        self.deck.tick(now_ms);

        if self.resize.poll(now_ms) {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "slide_deck_adapter", now_ms, "resize settled");
            self.deck.on_resize();
            self.sync(now_ms);
        }

        let tween = self.tween?;
        let off = tween.sample(now_ms);
        self.rendered = off;
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(off)
    }

    /// Starts (or retargets) a tween toward the deck's resolved offset.
    fn sync(&mut self, now_ms: u64) {
        let target = self.deck.visual_offset();
        if target == self.rendered && self.tween.is_none() {
            return;
        }

        let duration = self.deck.transition_ms() as u64;
        if duration == 0 {
            self.tween = None;
            self.rendered = target;
            return;
        }

        if let Some(tween) = self.tween.as_mut() {
            if tween.to != target {
                tween.retarget(now_ms, target, duration);
            }
            return;
        }
        self.tween = Some(Tween::new(
            self.rendered,
            target,
            now_ms,
            duration,
            self.easing,
        ));
    }
}
