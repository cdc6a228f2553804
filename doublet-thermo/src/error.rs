use thiserror::Error;

/// Errors that may occur when evaluating fluid properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The property is not supported by this model, regardless of the state.
    #[error("property `{property}` is not implemented by this model")]
    NotImplemented {
        property: &'static str,
        context: Option<String>,
    },

    /// The input state is physically invalid or outside the model's valid domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The calculation failed due to a numerical or internal error.
    #[error("calculation error: {0}")]
    Calculation(String),
}
