use alloc::string::String;
use alloc::sync::{Arc, Weak};
use alloc::vec::Vec;

use crate::{ImageRegion, LoadError, Size, StyleProperty, TextDirection};

/// Capabilities a slide child exposes to the deck.
///
/// Slides are owned by the host. The deck only holds [`SlideHandle`]s and upgrades them on
/// each operation; a slide that has gone away is treated as absent.
pub trait Slide {
    fn tag_name(&self) -> String;

    /// Inner HTML of the `notes` slot.
    fn notes(&self) -> Option<String> {
        None
    }

    /// Called on the active slide before a programmatic step.
    ///
    /// Returning `false` vetoes the step (e.g. the slide still has elements to reveal).
    fn before_swipe(&self, _entering_forward: bool) -> bool {
        true
    }

    /// Called on the slide that was left once a step has been committed.
    fn after_swipe(&self) {}

    fn lazy_load_content(&self) -> Result<(), LoadError>;
}

/// Non-owning reference to a slide registered with the deck.
pub type SlideHandle = Weak<dyn Slide>;

/// A background-slotted image whose real source is deferred.
pub trait BackgroundImage {
    fn load(&self) -> Result<(), LoadError>;
}

/// Platform capabilities the deck needs from its embedding UI layer.
///
/// Implementations are expected to be cheap: the deck samples geometry on demand rather than
/// caching it, so a resize is picked up on the next operation.
pub trait DeckHost {
    /// Width of the window viewport, in px.
    fn viewport_width(&self) -> u32;

    /// Client box of the element containing an embedded deck.
    fn container_size(&self) -> Option<Size> {
        None
    }

    /// Document text direction. Read once when the deck is created.
    fn text_direction(&self) -> TextDirection {
        TextDirection::Ltr
    }

    /// Tag names of the deck's declared children, in document order.
    ///
    /// This includes children that are not slides (a trailing background, for instance).
    fn declared_children(&self) -> Vec<String>;

    /// Applies one style write to the slider surface.
    fn set_style(&mut self, property: StyleProperty);

    fn is_fullscreen(&self) -> bool;

    fn request_fullscreen(&mut self);

    fn exit_fullscreen(&mut self);

    fn background_images(&self, _region: ImageRegion) -> Vec<Arc<dyn BackgroundImage>> {
        Vec::new()
    }

    fn print(&mut self) {}

    fn is_mobile(&self) -> bool {
        false
    }
}
