use thiserror::Error;

/// Errors emitted while turning presentation variables into render values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum PresentationError {
    /// Color is not a `#RRGGBB` hex string.
    #[error("invalid color value: {value:?}")]
    InvalidColor { value: String },
    /// Length is not a positive pixel value such as `18px`.
    #[error("invalid length value: {value:?}")]
    InvalidLength { value: String },
}
