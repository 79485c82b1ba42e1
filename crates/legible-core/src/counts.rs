//! Text statistics shared by every readability formula.

use serde::{Deserialize, Serialize};

use crate::syllables::SyllableCounter;
use crate::text::{ProseTokenizer, Tokenizer};

/// Words with at least this many syllables are complex.
pub const COMPLEX_SYLLABLES: usize = 3;

/// Aggregate counts for one text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextCounts {
    /// Sentences containing at least one letter.
    pub sentences: usize,
    /// Word tokens.
    pub words: usize,
    /// Total syllables across all words.
    pub syllables: usize,
    /// Characters in word tokens, punctuation and whitespace excluded.
    pub characters: usize,
    /// Words with three or more syllables.
    pub complex_words: usize,
    /// Complex words that survive Gunning's exclusions: no proper nouns,
    /// no hyphenated compounds, no three-syllable words made long by an
    /// `-es`, `-ed` or `-ing` ending.
    pub fog_complex_words: usize,
}

impl TextCounts {
    /// Count `text` with the default tokenizer and syllable counter.
    pub fn from_text(text: &str) -> Self {
        Self::measure(text, &ProseTokenizer::default(), &SyllableCounter::default())
    }

    /// Count `text` with a caller-supplied tokenizer and syllable counter.
    ///
    /// Words are taken sentence by sentence so the position of each word
    /// within its sentence is known for proper-noun detection.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn measure<T>(text: &str, tokenizer: &T, counter: &SyllableCounter) -> Self
    where
        T: Tokenizer + ?Sized,
    {
        Self::from_sentences(&tokenizer.sentences(text), tokenizer, counter)
    }

    /// Count text that has already been split into sentences.
    pub fn from_sentences<T>(sentences: &[String], tokenizer: &T, counter: &SyllableCounter) -> Self
    where
        T: Tokenizer + ?Sized,
    {
        let mut counts = Self {
            sentences: sentences.len(),
            ..Self::default()
        };

        for sentence in sentences {
            for (position, word) in tokenizer.words(sentence).iter().enumerate() {
                let syllables = counter.count(word);
                counts.words += 1;
                counts.syllables += syllables;
                counts.characters += word.chars().count();
                if syllables >= COMPLEX_SYLLABLES {
                    counts.complex_words += 1;
                    if !is_fog_exempt(word, position, syllables) {
                        counts.fog_complex_words += 1;
                    }
                }
            }
        }

        tracing::debug!(
            sentences = counts.sentences,
            words = counts.words,
            syllables = counts.syllables,
            complex_words = counts.complex_words,
            "counted text"
        );
        counts
    }

    /// Mean words per sentence. Zero when there are no sentences.
    pub fn words_per_sentence(&self) -> f64 {
        ratio(self.words, self.sentences)
    }

    /// Mean syllables per word. Zero when there are no words.
    pub fn syllables_per_word(&self) -> f64 {
        ratio(self.syllables, self.words)
    }

    /// Mean characters per word. Zero when there are no words.
    pub fn characters_per_word(&self) -> f64 {
        ratio(self.characters, self.words)
    }
}

#[allow(clippy::cast_precision_loss)]
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Whether a complex word is left out of the strict fog count.
fn is_fog_exempt(word: &str, position: usize, syllables: usize) -> bool {
    if word.contains('-') {
        return true;
    }
    // Capitalized mid-sentence: treated as a proper noun.
    if position > 0 && word.chars().next().is_some_and(char::is_uppercase) {
        return true;
    }
    if syllables == COMPLEX_SYLLABLES {
        let lower = word.to_lowercase();
        return ["es", "ed", "ing"].iter().any(|s| lower.ends_with(s));
    }
    false
}
