//! Core library for legible.
//!
//! Readability metrics for long-form prose such as privacy policies: Flesch
//! Reading Ease, the Automated Readability Index, SMOG and the Gunning Fog
//! Index, plus conversion of scores to an estimated reading age.
//!
//! # Modules
//!
//! - [`text`] - Sentence and word tokenization behind the [`Tokenizer`] trait
//! - [`syllables`] - Heuristic syllable estimation
//! - [`counts`] - Per-text statistics the formulas consume
//! - [`metrics`] - The four formulas over [`TextCounts`]
//! - [`readability`] - Text-level scoring and the [`ReadabilityReport`]
//! - [`age`] - Score to reading-age conversion
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use legible_core::{AgeScale, flesch_reading_ease, score_to_age};
//!
//! let ease = flesch_reading_ease("We do not sell your data. We keep it safe.").unwrap();
//! let age = score_to_age(AgeScale::Fres, ease).unwrap();
//! assert!(age < 12.0);
//! ```
#![deny(unsafe_code)]

pub mod age;
pub mod config;
pub mod counts;
pub mod dictionaries;
pub mod error;
pub mod interpolate;
pub mod markdown;
pub mod metrics;
pub mod readability;
pub mod syllables;
pub mod text;

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

pub use age::{AgeScale, score_to_age};
pub use config::{Config, ConfigLoader, LogLevel};
pub use counts::TextCounts;
pub use error::{ConfigError, ConfigResult, ReadabilityError, ReadabilityResult};
pub use interpolate::interpolate;
pub use metrics::Metric;
pub use readability::{
    ReadabilityOptions, ReadabilityReport, automated_readability_index, check_readability,
    flesch_reading_ease, gunning_fog_index, gunning_fog_strict, smog_grade, smog_grade_sampled,
};
pub use syllables::{SyllableCounter, count_syllables};
pub use text::{ProseTokenizer, Tokenizer};
