//! Sentence and word tokenization.
//!
//! The readability formulas only need sentence and word boundaries, so the
//! tokenizer sits behind the [`Tokenizer`] trait. [`ProseTokenizer`] is the
//! built-in implementation: a character scan that treats `.`, `!` and `?` as
//! candidate boundaries and rejects the ones that belong to abbreviations,
//! initials, decimals, URLs or email addresses.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::dictionaries::abbreviations;

/// Regex for URLs.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:https?://|www\.)\S+").expect("valid regex"));

/// Regex for email addresses.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid regex")
});

/// Regex for initials (J.K., U.S.A., etc.).
static INITIALS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]\.(?:[A-Z]\.)*").expect("valid regex"));

/// Splits text into sentences and words.
pub trait Tokenizer {
    /// Split `text` into sentences, in order.
    fn sentences(&self, text: &str) -> Vec<String>;

    /// Split `text` into word tokens, in order.
    fn words(&self, text: &str) -> Vec<String>;
}

/// Abbreviation-aware tokenizer for English prose.
///
/// Sentences that contain no letters are dropped, so numbered-list markers
/// ("1.") and stray punctuation never count as sentences.
#[derive(Debug, Clone, Default)]
pub struct ProseTokenizer {
    extra_abbreviations: HashSet<String>,
}

impl ProseTokenizer {
    /// A tokenizer using only the built-in abbreviation list.
    pub fn new() -> Self {
        Self::default()
    }

    /// A tokenizer that also treats `abbreviations` as non-terminal.
    ///
    /// Entries are matched case-insensitively, with or without the
    /// trailing period ("Pty", "pty.").
    pub fn with_abbreviations<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extra_abbreviations: abbreviations
                .into_iter()
                .map(|a| abbreviations::normalize(a.as_ref()))
                .filter(|a| !a.is_empty())
                .collect(),
        }
    }

    fn is_abbreviation(&self, word: &str) -> bool {
        abbreviations::is_abbreviation(word)
            || self
                .extra_abbreviations
                .contains(&abbreviations::normalize(word))
    }

    fn is_likely_abbreviation(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let word_clean = word.trim_end_matches('.');
        if self.is_abbreviation(word_clean) {
            return true;
        }
        // Single uppercase letter = likely initial
        word_clean.len() == 1 && word_clean.chars().next().is_some_and(char::is_uppercase)
    }

    fn is_sentence_boundary(&self, context: &SentenceContext, current_sentence: &str) -> bool {
        if context.is_end_of_text {
            return true;
        }

        if context.punctuation == '!' || context.punctuation == '?' {
            return check_next_char_capitalization(context);
        }

        if self.is_likely_abbreviation(&context.word_before)
            || is_likely_initial(&context.word_before)
            || current_sentence.ends_with("...")
            || (context.inside_token && is_url_or_email(context, current_sentence))
        {
            return false;
        }

        // Digit after a period that follows a digit: decimal, not a boundary.
        if let Some(next_char) = context.char_after
            && next_char.is_ascii_digit()
            && context
                .word_before
                .chars()
                .last()
                .is_some_and(|c| c.is_ascii_digit())
        {
            return false;
        }

        match context.char_after {
            Some(c) if c.is_uppercase() => true,
            Some(c) if c.is_lowercase() => false,
            _ => true,
        }
    }
}

impl Tokenizer for ProseTokenizer {
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    fn sentences(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let chars: Vec<char> = text.chars().collect();
        let mut sentences = Vec::new();
        let mut current = String::new();

        for (i, &ch) in chars.iter().enumerate() {
            current.push(ch);

            if is_sentence_terminator(ch) {
                let context = extract_context(&chars, i);
                if self.is_sentence_boundary(&context, &current) {
                    push_sentence(&mut sentences, &current);
                    current.clear();
                }
            }
        }
        push_sentence(&mut sentences, &current);

        sentences
    }

    fn words(&self, text: &str) -> Vec<String> {
        extract_words(text)
    }
}

/// Split text into sentences with the default [`ProseTokenizer`].
pub fn split_sentences(text: &str) -> Vec<String> {
    ProseTokenizer::default().sentences(text)
}

/// Extract word tokens from text.
///
/// Splits on whitespace and trims punctuation from both ends. Inner
/// apostrophes, hyphens and periods survive, so contractions, hyphenated
/// compounds, decimals and URLs stay single tokens. Tokens without any
/// alphanumeric character are dropped. Case is preserved.
pub fn extract_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| w.chars().any(char::is_alphanumeric))
        .map(str::to_string)
        .collect()
}

fn push_sentence(sentences: &mut Vec<String>, raw: &str) {
    let sentence = raw.trim();
    if sentence.chars().any(char::is_alphabetic) {
        sentences.push(sentence.to_string());
    }
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Context around a potential sentence boundary.
struct SentenceContext {
    punctuation: char,
    word_before: String,
    char_after: Option<char>,
    text_after: String,
    /// The terminator is followed directly by a non-space character.
    inside_token: bool,
    is_end_of_text: bool,
}

fn extract_context(chars: &[char], pos: usize) -> SentenceContext {
    let mut after_start = pos + 1;
    while after_start < chars.len() && chars[after_start].is_whitespace() {
        after_start += 1;
    }

    SentenceContext {
        punctuation: chars[pos],
        word_before: get_word_before(chars, pos),
        char_after: chars.get(after_start).copied(),
        text_after: chars[after_start.min(chars.len())..]
            .iter()
            .take(20)
            .collect(),
        inside_token: chars.get(pos + 1).is_some_and(|c| !c.is_whitespace()),
        is_end_of_text: pos == chars.len() - 1,
    }
}

fn get_word_before(chars: &[char], pos: usize) -> String {
    let mut i = pos;

    // Skip back past punctuation and whitespace
    while i > 0 {
        i -= 1;
        if !chars[i].is_whitespace() && chars[i] != '.' {
            break;
        }
    }

    let mut word_chars = Vec::new();
    loop {
        if chars[i].is_alphanumeric() || chars[i] == '.' {
            word_chars.push(chars[i]);
        } else {
            break;
        }
        if i == 0 {
            break;
        }
        i -= 1;
    }

    word_chars.iter().rev().collect()
}

fn check_next_char_capitalization(context: &SentenceContext) -> bool {
    if let Some(next_char) = context.char_after {
        if next_char.is_uppercase() {
            return true;
        }
        if next_char == '"' || next_char == '\'' {
            return context
                .text_after
                .chars()
                .nth(1)
                .is_some_and(char::is_uppercase);
        }
    }
    true
}

fn is_likely_initial(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    if word.len() == 2
        && word.chars().next().is_some_and(char::is_uppercase)
        && word.ends_with('.')
    {
        return true;
    }
    INITIALS_PATTERN.is_match(word)
}

/// Whether the token the terminator sits in is a URL or email address.
fn is_url_or_email(context: &SentenceContext, current_sentence: &str) -> bool {
    let before = current_sentence.split_whitespace().last().unwrap_or_default();
    let after = context.text_after.split_whitespace().next().unwrap_or_default();
    let token = format!("{before}{after}");
    URL_PATTERN.is_match(&token) || EMAIL_PATTERN.is_match(&token)
}
