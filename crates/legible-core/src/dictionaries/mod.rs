//! Dictionaries for text analysis.
//!
//! Provides the curated word sets used by sentence splitting and syllable
//! counting.

pub mod abbreviations;
pub mod pronunciations;
