use alloc::string::String;

/// Failure reported by a slide or background image when loading its lazy content.
///
/// Load failures are never fatal to the deck: they are logged and counted, and sibling loads
/// proceed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("content failed to load: {0}")]
    Failed(String),

    #[error("content source unavailable")]
    Unavailable,
}
