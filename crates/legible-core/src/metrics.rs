//! Readability formulas over [`TextCounts`].
//!
//! | metric | formula |
//! |--------|---------|
//! | FRES | `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)` |
//! | ARI  | `4.71 * (characters/words) + 0.5 * (words/sentences) - 21.43` |
//! | SMOG | `3.1291 + 1.0430 * sqrt(complex_words * 30 / sentences)` |
//! | GFI  | `0.4 * ((words/sentences) + 100 * (complex_words/words))` |
//!
//! Higher FRES is easier to read; the other three are US grade levels.
//! Every formula rejects counts with zero sentences or zero words.

use serde::{Deserialize, Serialize};

use crate::age::AgeScale;
use crate::counts::{COMPLEX_SYLLABLES, TextCounts};
use crate::error::{ReadabilityError, ReadabilityResult};
use crate::syllables::SyllableCounter;
use crate::text::Tokenizer;

/// SMOG was normed on 30-sentence samples.
pub const SMOG_MIN_SENTENCES: usize = 30;

/// Sentences taken from each of the start, middle and end of a text for a
/// sampled SMOG grade.
const SMOG_SAMPLE_BLOCK: usize = 10;

/// The readability formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Metric {
    /// Flesch Reading Ease.
    Fres,
    /// Automated Readability Index.
    Ari,
    /// Simple Measure of Gobbledygook.
    Smog,
    /// Gunning Fog Index.
    Gfi,
}

impl Metric {
    /// All metrics, in report order.
    pub const ALL: [Self; 4] = [Self::Fres, Self::Ari, Self::Smog, Self::Gfi];

    /// Short lowercase name of the metric.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fres => "fres",
            Self::Ari => "ari",
            Self::Smog => "smog",
            Self::Gfi => "gfi",
        }
    }

    /// The age scale for this metric, if it has one.
    pub const fn age_scale(&self) -> Option<AgeScale> {
        match self {
            Self::Fres => Some(AgeScale::Fres),
            Self::Ari => Some(AgeScale::Ari),
            Self::Gfi => Some(AgeScale::Gfi),
            Self::Smog => None,
        }
    }

    /// Compute this metric from counts.
    ///
    /// # Errors
    ///
    /// Returns [`ReadabilityError::InvalidInput`] if the counts have no
    /// sentences or no words.
    pub fn score(&self, counts: &TextCounts) -> ReadabilityResult<f64> {
        match self {
            Self::Fres => fres(counts),
            Self::Ari => ari(counts),
            Self::Smog => smog(counts),
            Self::Gfi => gfi(counts),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn ensure_measurable(counts: &TextCounts) -> ReadabilityResult<()> {
    if counts.sentences == 0 {
        return Err(ReadabilityError::invalid_input("text has no sentences"));
    }
    if counts.words == 0 {
        return Err(ReadabilityError::invalid_input("text has no words"));
    }
    Ok(())
}

/// Flesch Reading Ease.
///
/// # Errors
///
/// Returns [`ReadabilityError::InvalidInput`] on zero sentences or words.
pub fn fres(counts: &TextCounts) -> ReadabilityResult<f64> {
    ensure_measurable(counts)?;
    Ok(1.015f64.mul_add(
        -counts.words_per_sentence(),
        84.6f64.mul_add(-counts.syllables_per_word(), 206.835),
    ))
}

/// Automated Readability Index.
///
/// # Errors
///
/// Returns [`ReadabilityError::InvalidInput`] on zero sentences or words.
pub fn ari(counts: &TextCounts) -> ReadabilityResult<f64> {
    ensure_measurable(counts)?;
    Ok(4.71f64.mul_add(
        counts.characters_per_word(),
        0.5f64.mul_add(counts.words_per_sentence(), -21.43),
    ))
}

/// SMOG grade, scaled to a 30-sentence sample.
///
/// Texts shorter than [`SMOG_MIN_SENTENCES`] still get a score, with a
/// warning logged.
///
/// # Errors
///
/// Returns [`ReadabilityError::InvalidInput`] on zero sentences or words.
#[allow(clippy::cast_precision_loss)]
pub fn smog(counts: &TextCounts) -> ReadabilityResult<f64> {
    ensure_measurable(counts)?;
    if counts.sentences < SMOG_MIN_SENTENCES {
        tracing::warn!(
            sentences = counts.sentences,
            minimum = SMOG_MIN_SENTENCES,
            "SMOG is unreliable on short samples"
        );
    }
    let scaled = counts.complex_words as f64 * SMOG_MIN_SENTENCES as f64 / counts.sentences as f64;
    Ok(1.0430f64.mul_add(scaled.sqrt(), 3.1291))
}

/// Gunning Fog Index, counting every word of three or more syllables.
///
/// # Errors
///
/// Returns [`ReadabilityError::InvalidInput`] on zero sentences or words.
pub fn gfi(counts: &TextCounts) -> ReadabilityResult<f64> {
    ensure_measurable(counts)?;
    Ok(fog(counts, counts.complex_words))
}

/// Gunning Fog Index with Gunning's exclusions applied to complex words.
///
/// See [`TextCounts::fog_complex_words`].
///
/// # Errors
///
/// Returns [`ReadabilityError::InvalidInput`] on zero sentences or words.
pub fn gfi_strict(counts: &TextCounts) -> ReadabilityResult<f64> {
    ensure_measurable(counts)?;
    Ok(fog(counts, counts.fog_complex_words))
}

#[allow(clippy::cast_precision_loss)]
fn fog(counts: &TextCounts, complex_words: usize) -> f64 {
    let complex_share = complex_words as f64 / counts.words as f64;
    0.4 * 100.0f64.mul_add(complex_share, counts.words_per_sentence())
}

/// McLaughlin's hand-counting SMOG over already-split sentences.
///
/// Takes ten sentences from the start, ten from the middle and ten from the
/// end, counts the words of three or more syllables among them, and returns
/// `3 + round(sqrt(count))`.
///
/// # Errors
///
/// Returns [`ReadabilityError::InvalidInput`] when there are fewer than
/// [`SMOG_MIN_SENTENCES`] sentences.
#[allow(clippy::cast_precision_loss)]
pub fn smog_sampled<T>(
    sentences: &[String],
    tokenizer: &T,
    counter: &SyllableCounter,
) -> ReadabilityResult<f64>
where
    T: Tokenizer + ?Sized,
{
    if sentences.len() < SMOG_MIN_SENTENCES {
        return Err(ReadabilityError::invalid_input(format!(
            "sampled SMOG needs at least {SMOG_MIN_SENTENCES} sentences, got {}",
            sentences.len()
        )));
    }

    let middle = sentences.len() / 2 - SMOG_SAMPLE_BLOCK / 2;
    let polysyllables: usize = sentences[..SMOG_SAMPLE_BLOCK]
        .iter()
        .chain(&sentences[middle..middle + SMOG_SAMPLE_BLOCK])
        .chain(&sentences[sentences.len() - SMOG_SAMPLE_BLOCK..])
        .flat_map(|s| tokenizer.words(s))
        .filter(|w| counter.count(w) >= COMPLEX_SYLLABLES)
        .count();

    Ok(3.0 + (polysyllables as f64).sqrt().round())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::ProseTokenizer;

    fn counts(sentences: usize, words: usize, syllables: usize, complex: usize) -> TextCounts {
        TextCounts {
            sentences,
            words,
            syllables,
            characters: words * 5,
            complex_words: complex,
            fog_complex_words: complex,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn fres_formula() {
        // 206.835 - 1.015 * 10 - 84.6 * 1.5
        let score = fres(&counts(2, 20, 30, 0)).unwrap();
        assert!(close(score, 69.785), "{score}");
    }

    #[test]
    fn ari_formula() {
        // 4.71 * 5 + 0.5 * 10 - 21.43
        let score = ari(&counts(2, 20, 30, 0)).unwrap();
        assert!(close(score, 7.12), "{score}");
    }

    #[test]
    fn smog_formula() {
        // 3.1291 + 1.0430 * sqrt(12 * 30 / 40) = 3.1291 + 1.0430 * 3
        let score = smog(&counts(40, 400, 600, 12)).unwrap();
        assert!(close(score, 6.2581), "{score}");
    }

    #[test]
    fn smog_scores_short_samples() {
        // 3.1291 + 1.0430 * sqrt(5 * 30 / 6) = 3.1291 + 1.0430 * 5
        let score = smog(&counts(6, 60, 90, 5)).unwrap();
        assert!(close(score, 8.3441), "{score}");

        let single = smog(&counts(1, 8, 10, 0)).unwrap();
        assert!(close(single, 3.1291), "{single}");
    }

    #[test]
    fn gfi_formula() {
        // 0.4 * (10 + 100 * 4 / 20)
        let score = gfi(&counts(2, 20, 30, 4)).unwrap();
        assert!(close(score, 12.0), "{score}");
    }

    #[test]
    fn strict_fog_uses_filtered_complex_words() {
        let mut c = counts(2, 20, 30, 4);
        c.fog_complex_words = 2;
        let strict = gfi_strict(&c).unwrap();
        assert!(close(strict, 8.0), "{strict}");
        assert!(strict <= gfi(&c).unwrap());
    }

    #[test]
    fn zero_counts_are_invalid() {
        for metric in Metric::ALL {
            let no_sentences = counts(0, 5, 5, 0);
            let no_words = counts(1, 0, 0, 0);
            assert!(matches!(
                metric.score(&no_sentences),
                Err(ReadabilityError::InvalidInput { .. })
            ));
            assert!(matches!(
                metric.score(&no_words),
                Err(ReadabilityError::InvalidInput { .. })
            ));
        }
    }

    #[test]
    fn smog_non_decreasing_in_complex_words() {
        let mut previous = f64::MIN;
        for complex in 0..50 {
            let score = smog(&counts(30, 300, 450, complex)).unwrap();
            assert!(score >= previous);
            previous = score;
        }
    }

    #[test]
    fn fres_non_increasing_in_syllables_per_word() {
        let mut previous = f64::MAX;
        for syllables in 100..400 {
            let score = fres(&counts(10, 100, syllables, 0)).unwrap();
            assert!(score <= previous);
            previous = score;
        }
    }

    #[test]
    fn only_smog_lacks_an_age_scale() {
        assert_eq!(Metric::Smog.age_scale(), None);
        assert_eq!(Metric::Fres.age_scale(), Some(AgeScale::Fres));
        assert_eq!(Metric::Ari.age_scale(), Some(AgeScale::Ari));
        assert_eq!(Metric::Gfi.age_scale(), Some(AgeScale::Gfi));
    }

    #[test]
    fn sampled_smog_counts_three_blocks() {
        let tokenizer = ProseTokenizer::new();
        let counter = SyllableCounter::new();
        // 40 sentences; only sentence 0, 15 and 39 carry a complex word,
        // and sentence 12 is outside every block.
        let sentences: Vec<String> = (0..40)
            .map(|i| match i {
                0 | 15 | 39 | 12 => "We collect personal data.".to_string(),
                _ => "We keep it safe.".to_string(),
            })
            .collect();
        let grade = smog_sampled(&sentences, &tokenizer, &counter).unwrap();
        // 3 polysyllables: 3 + round(sqrt(3)) = 3 + 2
        assert!(close(grade, 5.0), "{grade}");
    }

    #[test]
    fn sampled_smog_needs_thirty_sentences() {
        let sentences = vec!["We keep it safe.".to_string(); 29];
        let err = smog_sampled(&sentences, &ProseTokenizer::new(), &SyllableCounter::new())
            .unwrap_err();
        assert!(matches!(err, ReadabilityError::InvalidInput { .. }));
    }
}
