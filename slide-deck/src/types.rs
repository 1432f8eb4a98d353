use alloc::string::String;
use alloc::vec::Vec;

/// Horizontal direction of a swipe, as seen on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwipeDirection {
    /// The pointer travelled toward smaller `x`.
    Left,
    /// The pointer travelled toward larger `x`.
    Right,
}

impl SwipeDirection {
    pub fn is_left(self) -> bool {
        matches!(self, Self::Left)
    }
}

/// A one-dimensional pointer delta, recomputed on every move/release from the gesture start.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delta {
    pub direction: SwipeDirection,
    /// Distance travelled in px. Always positive.
    pub magnitude: f64,
}

impl Delta {
    /// Builds a delta from a gesture start and the current pointer position.
    ///
    /// Returns `None` when both positions are equal (no movement).
    pub fn between(start_x: f64, current_x: f64) -> Option<Self> {
        if start_x == current_x {
            return None;
        }
        let swipe_left = start_x > current_x;
        Some(Self {
            direction: if swipe_left {
                SwipeDirection::Left
            } else {
                SwipeDirection::Right
            },
            magnitude: if swipe_left {
                start_x - current_x
            } else {
                current_x - start_x
            },
        })
    }
}

/// Navigation state of a [`crate::Navigator`].
///
/// `Transitioning` spans [`crate::Navigator::commit`] (or `jump_to`) up to
/// [`crate::Navigator::settle`]. [`crate::Deck`] settles within the same call, so through the deck
/// only `Idle` and `Dragging` are observable: the transition duration is a hint for the host's
/// animation, not a state the deck waits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavState {
    #[default]
    Idle,
    Dragging,
    Transitioning,
}

/// Which way an index step went once committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChangeKind {
    Next,
    Prev,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Parses an html `dir` attribute value. Anything but `rtl` reads as left-to-right.
    pub fn from_dir_attribute(dir: Option<&str>) -> Self {
        match dir {
            Some("rtl") => Self::Rtl,
            _ => Self::Ltr,
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

/// Ordered descriptor of a mounted slide, carried by [`DeckEvent::SlidesDidLoad`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideDefinition {
    /// Tag name of the slide element (e.g. `DECKGO-SLIDE-TITLE`).
    pub name: String,
    /// Inner HTML of the slide's `notes` slot, if any.
    pub notes: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CursorStyle {
    /// `cursor: initial`
    Initial,
    /// `cursor: none`
    Hidden,
}

/// A single style write on the slider surface.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StyleProperty {
    /// `--transformX`, in px.
    TransformX(f64),
    /// `--transformXDuration`, in ms.
    TransformXDuration(u32),
    Cursor(CursorStyle),
    /// `--slide-width`, in px.
    SlideWidth(u32),
    /// `--slide-height`, in px.
    SlideHeight(u32),
}

/// Keys recognized by keyboard navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
}

/// Where background-slotted images live relative to the deck element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImageRegion {
    /// Images slotted directly (`img[slot=background]`).
    Light,
    /// Images nested in a slotted background container (`[slot=background] img`).
    Shadow,
}

/// Everything the pager indicator renders from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagerProps {
    pub active_index: usize,
    pub length: usize,
    /// Show a percentage instead of discrete dots.
    pub percentage: bool,
}

/// Notifications emitted by a [`crate::Deck`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeckEvent {
    /// Every declared slide has mounted. Fired once.
    SlidesDidLoad(Vec<SlideDefinition>),
    /// New active index after a forward step.
    SlideNextDidChange(usize),
    /// New active index after a backward step.
    SlidePrevDidChange(usize),
    /// New active index after a direct jump.
    SlideToChange(usize),
    /// Provisional slider offset while dragging, in px.
    SlideDrag(f64),
    /// Resolved slider offset at the start of a transition, in px.
    SlideWillChange(f64),
}
