use slide_deck::NavKey;

/// Maps a DOM `KeyboardEvent.key` value to a navigation key.
pub fn nav_key_from_name(name: &str) -> Option<NavKey> {
    match name {
        "ArrowLeft" => Some(NavKey::ArrowLeft),
        "ArrowRight" => Some(NavKey::ArrowRight),
        _ => None,
    }
}
