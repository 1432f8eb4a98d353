//! A headless slide deck engine.
//!
//! For adapter-level utilities (resize debouncing, key mapping, offset tweens), see the
//! `slide-deck-adapter` crate.
//!
//! This crate owns the navigation state of a presentation deck: the active slide, the horizontal
//! offset of the slider, swipe gestures with right-to-left aware semantics, lazy loading of slide
//! content around the active slide, and the fullscreen idle-cursor timer.
//!
//! It is UI-agnostic. A host layer is expected to provide (via [`DeckHost`]):
//! - viewport / container geometry
//! - style writes on the slider surface (offset, transition duration, cursor)
//! - the fullscreen capability
//! - slide handles implementing [`Slide`], registered as they mount
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod deck;
mod error;
mod fullscreen;
mod gesture;
mod host;
mod lazy;
mod navigation;
mod options;
mod registry;
mod types;


pub use deck::Deck;
pub use error::LoadError;
pub use fullscreen::FullscreenCursor;
pub use gesture::{GestureTracker, PointerInput};
pub use host::{BackgroundImage, DeckHost, Slide, SlideHandle};
pub use lazy::{LazyLoadCoordinator, LoadOutcome, count_declared_slides};
pub use navigation::Navigator;
pub use options::{DeckOptions, OnEventCallback};
pub use registry::SlideRegistry;
pub use types::{
    ChangeKind, CursorStyle, DeckEvent, Delta, ImageRegion, NavKey, NavState, PagerProps, Size,
    SlideDefinition, StyleProperty, SwipeDirection, TextDirection,
};
