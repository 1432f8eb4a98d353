use alloc::string::String;
use alloc::vec::Vec;

use crate::{DeckHost, ImageRegion, SlideDefinition, SlideHandle, SlideRegistry};

/// Result of a single lazy-load request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    /// The slide reported an error. Already logged.
    Failed,
    /// No live slide at that position.
    Missing,
}

/// Counts declared children whose tag marks them as slides.
pub fn count_declared_slides(children: &[String], slide_tag_prefix: &str) -> usize {
    let prefix = slide_tag_prefix.to_ascii_lowercase();
    children
        .iter()
        .filter(|tag| tag.to_ascii_lowercase().contains(prefix.as_str()))
        .count()
}

/// Tracks mounted slides and loads heavy slide content only around the active slide.
///
/// Every load is independent: a failing slide is logged and skipped, and never stops the other
/// loads of the same batch.
#[derive(Clone, Debug, Default)]
pub struct LazyLoadCoordinator {
    registry: SlideRegistry,
    mounted: usize,
    fully_loaded: bool,
    backgrounds_loaded: bool,
}

impl LazyLoadCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &SlideRegistry {
        &self.registry
    }

    /// Number of "slide mounted" signals received so far.
    pub fn mounted(&self) -> usize {
        self.mounted
    }

    pub fn is_fully_loaded(&self) -> bool {
        self.fully_loaded
    }

    /// Handles a "slide mounted" signal.
    ///
    /// Returns the ordered slide descriptors the first time the deck becomes fully loaded, i.e.
    /// when the live registered slides, the slide-typed declared children and the mount counter
    /// all agree.
    pub fn on_slide_mounted(
        &mut self,
        position: usize,
        slide: SlideHandle,
        declared_children: &[String],
        slide_tag_prefix: &str,
    ) -> Option<Vec<SlideDefinition>> {
        self.mounted = self.mounted.saturating_add(1);
        self.registry.insert(position, slide);

        if self.fully_loaded {
            return None;
        }

        let declared = count_declared_slides(declared_children, slide_tag_prefix);
        let live = self.registry.live_count();
        dtrace!(
            position,
            mounted = self.mounted,
            declared,
            live,
            "LazyLoadCoordinator::on_slide_mounted"
        );

        if declared == 0 || live != declared || declared != self.mounted {
            return None;
        }

        self.fully_loaded = true;
        ddebug!(slides = declared, "LazyLoadCoordinator: all slides mounted");
        Some(self.registry.definitions())
    }

    /// Loads the lazy content of the slide at `index`.
    pub fn load(&self, index: usize) -> LoadOutcome {
        let Some(slide) = self.registry.get(index) else {
            return LoadOutcome::Missing;
        };
        match slide.lazy_load_content() {
            Ok(()) => LoadOutcome::Loaded,
            Err(_err) => {
                dwarn!(index, error = %_err, "slide failed to load its content");
                LoadOutcome::Failed
            }
        }
    }

    /// Issues one independent load per index.
    pub fn load_each(&self, indexes: impl IntoIterator<Item = usize>) -> Vec<LoadOutcome> {
        indexes.into_iter().map(|i| self.load(i)).collect()
    }

    /// Loads the first two slides once the deck is ready.
    pub fn load_first_slides(&self) -> Vec<LoadOutcome> {
        self.load_each([0, 1])
    }

    /// Loads every slide in `0..length` (used before printing).
    pub fn load_all(&self, length: usize) -> Vec<LoadOutcome> {
        self.load_each(0..length)
    }

    /// One-time pass over background-slotted images in both content regions.
    ///
    /// Returns `None` when the pass already ran.
    pub fn load_background_images<H: DeckHost + ?Sized>(
        &mut self,
        host: &H,
    ) -> Option<Vec<LoadOutcome>> {
        if self.backgrounds_loaded {
            return None;
        }
        self.backgrounds_loaded = true;

        let mut images = host.background_images(ImageRegion::Light);
        images.extend(host.background_images(ImageRegion::Shadow));
        ddebug!(count = images.len(), "loading background images");

        let outcomes = images
            .iter()
            .map(|image| match image.load() {
                Ok(()) => LoadOutcome::Loaded,
                Err(_err) => {
                    dwarn!(error = %_err, "background image failed to load");
                    LoadOutcome::Failed
                }
            })
            .collect::<Vec<_>>();
        ddebug!(
            failed = outcomes.iter().filter(|o| **o == LoadOutcome::Failed).count(),
            "background images loaded"
        );
        Some(outcomes)
    }
}
