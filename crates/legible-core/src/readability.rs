//! Text-level readability scoring.
//!
//! The free functions here take raw text and use the default tokenizer and
//! syllable counter. [`check_readability`] computes every metric in one pass
//! and returns a serializable [`ReadabilityReport`], with reading ages and
//! threshold checks, which is what the CLI prints.

use serde::{Deserialize, Serialize};

use crate::age::{AgeScale, score_to_age};
use crate::counts::TextCounts;
use crate::error::{ReadabilityError, ReadabilityResult};
use crate::markdown;
use crate::metrics::{self, SMOG_MIN_SENTENCES};
use crate::syllables::SyllableCounter;
use crate::text::{ProseTokenizer, Tokenizer};

/// Flesch Reading Ease of `text`. Higher is easier.
///
/// # Errors
///
/// Returns [`ReadabilityError::InvalidInput`] if the text has no sentences
/// or no words.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn flesch_reading_ease(text: &str) -> ReadabilityResult<f64> {
    metrics::fres(&TextCounts::from_text(text))
}

/// Automated Readability Index of `text`, as a US grade level.
///
/// # Errors
///
/// Returns [`ReadabilityError::InvalidInput`] if the text has no sentences
/// or no words.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn automated_readability_index(text: &str) -> ReadabilityResult<f64> {
    metrics::ari(&TextCounts::from_text(text))
}

/// SMOG grade of `text`.
///
/// Scores texts shorter than 30 sentences too, with a logged warning.
///
/// # Errors
///
/// Returns [`ReadabilityError::InvalidInput`] if the text has no sentences
/// or no words.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn smog_grade(text: &str) -> ReadabilityResult<f64> {
    metrics::smog(&TextCounts::from_text(text))
}

/// SMOG grade of `text` by McLaughlin's 30-sentence sample.
///
/// # Errors
///
/// Returns [`ReadabilityError::InvalidInput`] if the text has fewer than
/// 30 sentences.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn smog_grade_sampled(text: &str) -> ReadabilityResult<f64> {
    let tokenizer = ProseTokenizer::default();
    let sentences = tokenizer.sentences(text);
    metrics::smog_sampled(&sentences, &tokenizer, &SyllableCounter::default())
}

/// Gunning Fog Index of `text`, as a US grade level.
///
/// # Errors
///
/// Returns [`ReadabilityError::InvalidInput`] if the text has no sentences
/// or no words.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn gunning_fog_index(text: &str) -> ReadabilityResult<f64> {
    metrics::gfi(&TextCounts::from_text(text))
}

/// Gunning Fog Index of `text`, ignoring proper nouns, hyphenated compounds
/// and inflected three-syllable words.
///
/// # Errors
///
/// Returns [`ReadabilityError::InvalidInput`] if the text has no sentences
/// or no words.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn gunning_fog_strict(text: &str) -> ReadabilityResult<f64> {
    metrics::gfi_strict(&TextCounts::from_text(text))
}

/// How the SMOG grade in a report was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmogMethod {
    /// The regression formula over all sentences.
    Formula,
    /// McLaughlin's count over a 30-sentence sample.
    Sampled,
}

/// Knobs for [`check_readability`].
#[derive(Debug, Clone, Default)]
pub struct ReadabilityOptions {
    /// Splits text into sentences and words.
    pub tokenizer: ProseTokenizer,
    /// Counts syllables per word.
    pub counter: SyllableCounter,
    /// Strip Markdown before scoring.
    pub strip_markdown: bool,
    /// Apply Gunning's complex-word exclusions to the fog index.
    pub strict_fog: bool,
    /// Prefer the sampled SMOG grade when the text is long enough.
    pub smog_sampled: bool,
    /// Lowest acceptable Flesch Reading Ease.
    pub min_reading_ease: Option<f64>,
    /// Highest acceptable reading age in years.
    pub max_reading_age: Option<f64>,
}

/// Raw metric scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    /// Flesch Reading Ease.
    pub fres: f64,
    /// Automated Readability Index.
    pub ari: f64,
    /// SMOG grade.
    pub smog: f64,
    /// Gunning Fog Index.
    pub gfi: f64,
}

impl Scores {
    /// Score for a convertible scale.
    pub const fn get(&self, scale: AgeScale) -> f64 {
        match scale {
            AgeScale::Fres => self.fres,
            AgeScale::Ari => self.ari,
            AgeScale::Gfi => self.gfi,
        }
    }
}

/// Reading ages in years. `None` where the score fell outside the scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingAges {
    /// Age from Flesch Reading Ease.
    pub fres: Option<f64>,
    /// Age from the Automated Readability Index.
    pub ari: Option<f64>,
    /// Age from the Gunning Fog Index.
    pub gfi: Option<f64>,
}

impl ReadingAges {
    /// Age for one scale.
    pub const fn get(&self, scale: AgeScale) -> Option<f64> {
        match scale {
            AgeScale::Fres => self.fres,
            AgeScale::Ari => self.ari,
            AgeScale::Gfi => self.gfi,
        }
    }

    /// Highest age across the scales that produced one.
    pub fn max(&self) -> Option<f64> {
        AgeScale::ALL
            .iter()
            .filter_map(|&s| self.get(s))
            .reduce(f64::max)
    }
}

/// Result of scoring one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    /// Sentence, word and syllable counts.
    pub counts: TextCounts,
    /// Metric scores.
    pub scores: Scores,
    /// Reading ages per convertible metric.
    pub ages: ReadingAges,
    /// Scales whose score could not be converted to an age.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ages_out_of_range: Vec<AgeScale>,
    /// Highest reading age across all scales.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_age: Option<f64>,
    /// How the SMOG grade was computed.
    pub smog_method: SmogMethod,
    /// Fewer than 30 sentences: SMOG is outside its normed range.
    pub smog_sample_too_small: bool,
    /// Whether the fog index used Gunning's exclusions.
    pub strict_fog: bool,
    /// Lowest acceptable Flesch Reading Ease (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_reading_ease: Option<f64>,
    /// Highest acceptable reading age (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_reading_age: Option<f64>,
    /// Whether Flesch Reading Ease is below the minimum.
    pub below_min_ease: bool,
    /// Whether the reading age is above the maximum.
    pub over_max_age: bool,
}

impl ReadabilityReport {
    /// Whether every configured threshold is met.
    pub const fn passes(&self) -> bool {
        !self.below_min_ease && !self.over_max_age
    }
}

/// Score `text` on every metric.
///
/// # Errors
///
/// Returns [`ReadabilityError::InvalidInput`] if the text (after Markdown
/// stripping, when enabled) has no sentences or no words.
#[tracing::instrument(skip(text, options), fields(text_len = text.len(), strip_md = options.strip_markdown))]
pub fn check_readability(
    text: &str,
    options: &ReadabilityOptions,
) -> ReadabilityResult<ReadabilityReport> {
    let prose = if options.strip_markdown {
        markdown::strip_to_prose(text)
    } else {
        text.to_string()
    };

    let sentences = options.tokenizer.sentences(&prose);
    let counts = TextCounts::from_sentences(&sentences, &options.tokenizer, &options.counter);
    if counts.sentences == 0 || counts.words == 0 {
        return Err(ReadabilityError::invalid_input("text contains no prose"));
    }

    let smog_sample_too_small = counts.sentences < SMOG_MIN_SENTENCES;
    let (smog, smog_method) = if options.smog_sampled && !smog_sample_too_small {
        let grade = metrics::smog_sampled(&sentences, &options.tokenizer, &options.counter)?;
        (grade, SmogMethod::Sampled)
    } else {
        (metrics::smog(&counts)?, SmogMethod::Formula)
    };

    let scores = Scores {
        fres: metrics::fres(&counts)?,
        ari: metrics::ari(&counts)?,
        smog,
        gfi: if options.strict_fog {
            metrics::gfi_strict(&counts)?
        } else {
            metrics::gfi(&counts)?
        },
    };

    let mut ages = ReadingAges::default();
    let mut ages_out_of_range = Vec::new();
    let mut beyond_hardest = false;
    for scale in AgeScale::ALL {
        let score = scores.get(scale);
        match score_to_age(scale, score) {
            Ok(age) => match scale {
                AgeScale::Fres => ages.fres = Some(age),
                AgeScale::Ari => ages.ari = Some(age),
                AgeScale::Gfi => ages.gfi = Some(age),
            },
            Err(e) => {
                tracing::debug!(error = %e, "no reading age");
                beyond_hardest |= scale.table().beyond_hardest(score);
                ages_out_of_range.push(scale);
            }
        }
    }

    let reading_age = ages.max();
    let below_min_ease = options.min_reading_ease.is_some_and(|min| scores.fres < min);
    // A score off the hard end of any scale is older than every table age.
    let over_max_age = options
        .max_reading_age
        .is_some_and(|max| beyond_hardest || reading_age.is_some_and(|age| age > max));

    Ok(ReadabilityReport {
        counts,
        scores,
        ages,
        ages_out_of_range,
        reading_age,
        smog_method,
        smog_sample_too_small,
        strict_fog: options.strict_fog,
        min_reading_ease: options.min_reading_ease,
        max_reading_age: options.max_reading_age,
        below_min_ease,
        over_max_age,
    })
}
