//! Error types for legible-core.

use thiserror::Error;

use crate::age::AgeScale;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// A pronunciation override maps a word to zero syllables.
    #[error("pronunciation override for {word:?} must be at least 1 syllable")]
    ZeroSyllableOverride {
        /// The offending word.
        word: String,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors produced by the readability calculators and the age converter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReadabilityError {
    /// The text is empty or degenerate (no sentences or no words).
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What made the input unusable.
        reason: String,
    },

    /// A score lies outside the domain an age scale supports.
    #[error("{scale} score {score} is outside the supported range [{min}, {max}]")]
    OutOfRange {
        /// Scale the conversion was attempted on.
        scale: AgeScale,
        /// The rejected score.
        score: f64,
        /// Lowest accepted score.
        min: f64,
        /// Highest accepted score.
        max: f64,
    },
}

impl ReadabilityError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Result type alias using [`ReadabilityError`].
pub type ReadabilityResult<T> = Result<T, ReadabilityError>;
