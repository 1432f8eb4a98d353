use alloc::collections::BTreeMap;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{Slide, SlideDefinition, SlideHandle};

/// Ordered, non-owning registry of mounted slides (position → handle).
#[derive(Clone, Default)]
pub struct SlideRegistry {
    slides: BTreeMap<usize, SlideHandle>,
}

impl SlideRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the slide mounted at `position`, replacing any previous handle there.
    pub fn insert(&mut self, position: usize, slide: SlideHandle) {
        if self.slides.insert(position, slide).is_some() {
            dwarn!(position, "SlideRegistry: position registered twice");
        }
    }

    /// Returns the slide at `position`, if it is registered and still alive.
    pub fn get(&self, position: usize) -> Option<Arc<dyn Slide>> {
        self.slides.get(&position).and_then(|weak| weak.upgrade())
    }

    /// Number of registered slides that are still alive.
    pub fn live_count(&self) -> usize {
        self.slides
            .values()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.live_count() == 0
    }

    /// Descriptors of every live slide, in position order.
    pub fn definitions(&self) -> Vec<SlideDefinition> {
        self.slides
            .values()
            .filter_map(|weak| weak.upgrade())
            .map(|slide| SlideDefinition {
                name: slide.tag_name(),
                notes: slide.notes(),
            })
            .collect()
    }
}

impl core::fmt::Debug for SlideRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SlideRegistry")
            .field("registered", &self.slides.len())
            .field("live", &self.live_count())
            .finish()
    }
}
