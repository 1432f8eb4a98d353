use std::sync::Arc;

use slide_deck::{
    Deck, DeckEvent, DeckHost, DeckOptions, LoadError, PointerInput, Slide, SlideHandle,
    StyleProperty,
};

struct ConsoleHost {
    width: u32,
    slides: usize,
}

impl DeckHost for ConsoleHost {
    fn viewport_width(&self) -> u32 {
        self.width
    }

    fn declared_children(&self) -> Vec<String> {
        (0..self.slides)
            .map(|_| "deckgo-slide-title".to_string())
            .collect()
    }

    fn set_style(&mut self, property: StyleProperty) {
        println!("  style {property:?}");
    }

    fn is_fullscreen(&self) -> bool {
        false
    }

    fn request_fullscreen(&mut self) {}

    fn exit_fullscreen(&mut self) {}
}

struct TitleSlide(usize);

impl Slide for TitleSlide {
    fn tag_name(&self) -> String {
        "DECKGO-SLIDE-TITLE".to_string()
    }

    fn lazy_load_content(&self) -> Result<(), LoadError> {
        println!("  slide {} loads its images", self.0);
        Ok(())
    }
}

fn main() {
    let options = DeckOptions::new().with_on_event(Some(|e: &DeckEvent| println!("event {e:?}")));
    let mut deck = Deck::new(
        options,
        ConsoleHost {
            width: 1000,
            slides: 3,
        },
    );
    deck.did_load();

    let slides: Vec<Arc<TitleSlide>> = (0..3).map(|i| Arc::new(TitleSlide(i))).collect();
    for (i, slide) in slides.iter().enumerate() {
        let weak: std::sync::Weak<TitleSlide> = Arc::downgrade(slide);
        let handle: SlideHandle = weak;
        deck.slide_did_load(i, handle);
    }

    println!("drag 150px to the left");
    deck.pointer_down(&PointerInput::mouse(600.0));
    deck.pointer_move(&PointerInput::mouse(450.0), 0);
    deck.pointer_up(&PointerInput::mouse(450.0));
    println!(
        "active_index={} translate_x={}",
        deck.active_index(),
        deck.translate_x()
    );

    println!("drag 50px: below the commit threshold");
    deck.pointer_down(&PointerInput::touch(600.0));
    deck.pointer_move(&PointerInput::touch(550.0), 10);
    deck.pointer_up(&PointerInput::touch(550.0));
    println!("active_index={}", deck.active_index());

    println!("jump to the last slide");
    deck.slide_to(2, Some(0), true);
    println!("is_end={}", deck.is_end());
}
