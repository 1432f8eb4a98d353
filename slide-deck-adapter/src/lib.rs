//! Adapter utilities for the `slide-deck` crate.
//!
//! The `slide-deck` crate is UI-agnostic and focuses on navigation state. This crate provides
//! small, framework-neutral helpers commonly needed by adapters:
//!
//! - A [`Controller`] that owns a deck and is driven by UI events plus a `tick(now_ms)` clock
//! - Resize debouncing
//! - DOM key-name mapping
//! - Tween-based offset animation (optional; adapter-driven)
//!
//! This crate is intentionally framework-agnostic (no web-sys/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod debounce;
mod key;
mod tween;


pub use controller::Controller;
pub use debounce::Debouncer;
pub use key::nav_key_from_name;
pub use tween::{Easing, Tween};
