use thiserror::Error;

/// Errors that can occur during bango core operations.
#[derive(Debug, Error)]
pub enum BangoError {
    /// The input string is empty or contains only whitespace.
    #[error("input is empty or whitespace-only")]
    EmptyInput,

    /// Normalization left nothing that could serve as a number.
    #[error("no number found in input: {input:?}")]
    Unrecognized {
        /// The input that yielded an empty number.
        input: String,
    },

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),
}

/// Result type alias for bango operations.
pub type Result<T> = std::result::Result<T, BangoError>;
