//! Errors raised before any geometry is derived.

/// Error returned when an icon cannot be generated from its parameters.
///
/// Generation is pure and deterministic, so none of these are retryable: the
/// same input fails the same way every time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IconError {
    /// A numeric parameter is outside its documented domain.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A color is not exactly six hexadecimal digits.
    #[error("invalid hex color `{0}`: expected six hex digits")]
    InvalidColor(String),
}

impl IconError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter { name, reason: reason.into() }
    }
}
