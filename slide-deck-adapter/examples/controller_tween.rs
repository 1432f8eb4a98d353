use std::sync::{Arc, Weak};

use slide_deck::{DeckHost, DeckOptions, LoadError, Slide, SlideHandle, StyleProperty};
use slide_deck_adapter::{Controller, Easing};

#[derive(Default)]
struct CanvasHost {
    width: u32,
}

impl DeckHost for CanvasHost {
    fn viewport_width(&self) -> u32 {
        self.width
    }

    fn declared_children(&self) -> Vec<String> {
        vec!["deckgo-slide-content".to_string(); 4]
    }

    // The canvas paints from `Controller::tick`, so style writes are ignored.
    fn set_style(&mut self, _property: StyleProperty) {}

    fn is_fullscreen(&self) -> bool {
        false
    }

    fn request_fullscreen(&mut self) {}

    fn exit_fullscreen(&mut self) {}
}

struct Page;

impl Slide for Page {
    fn tag_name(&self) -> String {
        "DECKGO-SLIDE-CONTENT".to_string()
    }

    fn lazy_load_content(&self) -> Result<(), LoadError> {
        Ok(())
    }
}

fn main() {
    let mut c = Controller::new(DeckOptions::new(), CanvasHost { width: 1280 })
        .with_easing(Easing::SmoothStep);

    let pages: Vec<Arc<Page>> = (0..4).map(|_| Arc::new(Page)).collect();
    for (i, page) in pages.iter().enumerate() {
        let weak: Weak<Page> = Arc::downgrade(page);
        let handle: SlideHandle = weak;
        c.deck_mut().slide_did_load(i, handle);
    }

    c.on_key("ArrowRight", false, 0);
    println!("active_index={}", c.deck().active_index());

    let mut now_ms = 0u64;
    while c.is_animating() {
        if let Some(offset) = c.tick(now_ms) {
            println!("t={now_ms:>3}ms offset={offset:.1}");
        }
        now_ms += 16;
    }
}
