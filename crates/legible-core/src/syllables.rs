//! Heuristic syllable estimation.
//!
//! A word's count starts as the number of vowel groups (maximal runs of
//! vowel letters). A flat table of [`SyllableRule`]s then corrects the count
//! for spelling patterns where letters and syllables disagree: silent final
//! `e`, silent `-es`/`-ed`, adjacent vowels that split into two syllables,
//! and a handful of prefixes and suffixes. The result never drops below 1.
//!
//! Words the rules cannot reach are listed in
//! [`dictionaries::pronunciations`](crate::dictionaries::pronunciations) and
//! looked up before the heuristic runs. Callers can add their own entries
//! through [`SyllableCounter::with_overrides`].
//!
//! `y` is a consonant at the start of a word ("you") and right after a vowel
//! ("beyond", "player"); everywhere else it is a vowel ("privacy", "style").
//! Accented vowels count as vowels, so a final `é` is never silent ("café"),
//! and a vowel with a diaeresis always opens a new group ("naïve").

use std::collections::HashMap;

use crate::dictionaries::pronunciations;
use crate::error::{ConfigError, ConfigResult};

/// Where in a word a rule's pattern must appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// The word starts with the pattern.
    Prefix,
    /// The word ends with the pattern.
    Suffix,
    /// Every non-overlapping occurrence of the pattern counts.
    Anywhere,
}

/// Constraint on the letter immediately before a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preceding {
    /// No constraint. Also matches when nothing precedes the pattern.
    Any,
    /// A vowel, as classified for this word.
    Vowel,
    /// A consonant other than the listed letters.
    ConsonantExcept(&'static str),
    /// Any letter other than the listed ones, or the start of the word.
    NoneOf(&'static str),
    /// One of the listed letters.
    OneOf(&'static str),
}

/// One correction to the vowel-group count.
#[derive(Debug, Clone, Copy)]
pub struct SyllableRule {
    /// Lowercase letters to match.
    pub pattern: &'static str,
    /// Where the pattern must sit.
    pub anchor: Anchor,
    /// Constraint on the letter before the pattern.
    pub preceding: Preceding,
    /// Syllables added per match (negative to subtract).
    pub adjustment: isize,
}

const fn rule(
    pattern: &'static str,
    anchor: Anchor,
    preceding: Preceding,
    adjustment: isize,
) -> SyllableRule {
    SyllableRule {
        pattern,
        anchor,
        preceding,
        adjustment,
    }
}

/// The correction table, applied additively.
///
/// Some entries pair up and cancel: `-e` after a consonant is silent, but
/// `-le` after a consonant restores the syllable ("table"), so a word like
/// "title" matches both.
pub static RULES: &[SyllableRule] = &[
    // Silent endings.
    rule("e", Anchor::Suffix, Preceding::ConsonantExcept(""), -1),
    rule("le", Anchor::Suffix, Preceding::ConsonantExcept("l"), 1),
    rule("es", Anchor::Suffix, Preceding::ConsonantExcept("sxzcgh"), -1),
    rule("les", Anchor::Suffix, Preceding::ConsonantExcept("l"), 1),
    rule("ed", Anchor::Suffix, Preceding::ConsonantExcept("td"), -1),
    rule("led", Anchor::Suffix, Preceding::ConsonantExcept("l"), 1),
    rule("ely", Anchor::Suffix, Preceding::ConsonantExcept(""), -1),
    rule("ement", Anchor::Anywhere, Preceding::ConsonantExcept("l"), -1),
    rule("eful", Anchor::Anywhere, Preceding::ConsonantExcept(""), -1),
    rule("eness", Anchor::Anywhere, Preceding::ConsonantExcept(""), -1),
    rule("eless", Anchor::Anywhere, Preceding::ConsonantExcept("h"), -1),
    rule("esome", Anchor::Suffix, Preceding::ConsonantExcept(""), -1),
    // Collapses.
    rule("que", Anchor::Suffix, Preceding::Any, -1),
    rule("ques", Anchor::Suffix, Preceding::Any, -1),
    rule("geous", Anchor::Anywhere, Preceding::Any, -1),
    // Vowel pairs that split into two syllables, except where the first
    // vowel glides ("-tion", "-cial", "qua", "people").
    rule("ia", Anchor::Anywhere, Preceding::NoneOf("ctsn"), 1),
    rule("io", Anchor::Anywhere, Preceding::NoneOf("tscgxnl"), 1),
    rule("ua", Anchor::Anywhere, Preceding::NoneOf("qg"), 1),
    rule("eo", Anchor::Anywhere, Preceding::NoneOf("p"), 1),
    rule("io", Anchor::Suffix, Preceding::OneOf("tl"), 1),
    rule("ios", Anchor::Suffix, Preceding::OneOf("tl"), 1),
    rule("ien", Anchor::Anywhere, Preceding::OneOf("dp"), 1),
    rule("uel", Anchor::Anywhere, Preceding::NoneOf("qg"), 1),
    rule("uen", Anchor::Anywhere, Preceding::NoneOf("qg"), 1),
    rule("eum", Anchor::Suffix, Preceding::Any, 1),
    rule("eums", Anchor::Suffix, Preceding::Any, 1),
    rule("oem", Anchor::Anywhere, Preceding::Any, 1),
    rule("oet", Anchor::Anywhere, Preceding::Any, 1),
    rule("iu", Anchor::Anywhere, Preceding::Any, 1),
    rule("uou", Anchor::Anywhere, Preceding::Any, 1),
    rule("ing", Anchor::Suffix, Preceding::Vowel, 1),
    rule("ier", Anchor::Suffix, Preceding::ConsonantExcept(""), 1),
    rule("iers", Anchor::Suffix, Preceding::ConsonantExcept(""), 1),
    // Syllabic consonant endings.
    rule("sm", Anchor::Suffix, Preceding::Any, 1),
    rule("sms", Anchor::Suffix, Preceding::Any, 1),
    rule("thm", Anchor::Suffix, Preceding::Any, 1),
    rule("thms", Anchor::Suffix, Preceding::Any, 1),
    // Prefixes whose vowel stays separate from the stem's.
    rule("coop", Anchor::Prefix, Preceding::Any, 1),
    rule("coor", Anchor::Prefix, Preceding::Any, 1),
    rule("reu", Anchor::Prefix, Preceding::Any, 1),
    rule("deac", Anchor::Prefix, Preceding::Any, 1),
    rule("coe", Anchor::Prefix, Preceding::Any, 1),
    rule("react", Anchor::Prefix, Preceding::Any, 1),
    rule("reali", Anchor::Prefix, Preceding::Any, 1),
];

impl SyllableRule {
    /// Total adjustment this rule contributes to `letters`.
    fn apply(&self, letters: &[char], vowels: &[bool]) -> isize {
        let pattern: Vec<char> = self.pattern.chars().collect();
        if pattern.is_empty() || pattern.len() > letters.len() {
            return 0;
        }
        let last_start = letters.len() - pattern.len();
        let at = |start: usize| letters[start..start + pattern.len()] == pattern[..];

        let matches = match self.anchor {
            Anchor::Prefix => usize::from(at(0) && self.preceding_ok(letters, vowels, 0)),
            Anchor::Suffix => {
                usize::from(at(last_start) && self.preceding_ok(letters, vowels, last_start))
            }
            Anchor::Anywhere => {
                let mut count = 0;
                let mut start = 0;
                while start <= last_start {
                    if at(start) && self.preceding_ok(letters, vowels, start) {
                        count += 1;
                        start += pattern.len();
                    } else {
                        start += 1;
                    }
                }
                count
            }
        };

        self.adjustment * matches as isize
    }

    fn preceding_ok(&self, letters: &[char], vowels: &[bool], start: usize) -> bool {
        let Some(before) = start.checked_sub(1) else {
            return matches!(self.preceding, Preceding::Any | Preceding::NoneOf(_));
        };
        match self.preceding {
            Preceding::Any => true,
            Preceding::Vowel => vowels[before],
            Preceding::ConsonantExcept(except) => {
                !vowels[before] && !except.contains(letters[before])
            }
            Preceding::NoneOf(except) => !except.contains(letters[before]),
            Preceding::OneOf(allowed) => allowed.contains(letters[before]),
        }
    }
}

/// Classify each letter as vowel (`true`) or consonant.
fn classify(letters: &[char]) -> Vec<bool> {
    let mut vowels: Vec<bool> = Vec::with_capacity(letters.len());
    for (i, &c) in letters.iter().enumerate() {
        let is_vowel = match c {
            'a' | 'e' | 'i' | 'o' | 'u' | 'à' | 'á' | 'â' | 'ã' | 'å' | 'è' | 'é' | 'ê' | 'ì'
            | 'í' | 'î' | 'ò' | 'ó' | 'ô' | 'õ' | 'ù' | 'ú' | 'û' => true,
            'y' => i > 0 && !vowels[i - 1],
            c => is_diaeresis(c),
        };
        vowels.push(is_vowel);
    }
    vowels
}

/// A diaeresis marks a vowel that is pronounced apart from the one before
/// it ("naïve", "coöperate").
const fn is_diaeresis(c: char) -> bool {
    matches!(c, 'ä' | 'ë' | 'ï' | 'ö' | 'ü' | 'ÿ')
}

/// Estimate syllables of a normalized word using vowel groups and [`RULES`].
///
/// `word` should be lowercase letters only; see [`normalize`]. Returns at
/// least 1, including for the empty string.
pub fn estimate_syllables(word: &str) -> usize {
    let letters: Vec<char> = word.chars().collect();
    let vowels = classify(&letters);

    let groups = vowels
        .iter()
        .enumerate()
        .filter(|&(i, &is_vowel)| {
            is_vowel && (i == 0 || !vowels[i - 1] || is_diaeresis(letters[i]))
        })
        .count();

    let adjustment: isize = RULES.iter().map(|r| r.apply(&letters, &vowels)).sum();

    usize::try_from(groups as isize + adjustment)
        .unwrap_or(0)
        .max(1)
}

/// Lowercase a token and drop everything that is not a letter.
pub fn normalize(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Syllable counter with optional caller-supplied pronunciations.
///
/// Lookup order for each word: overrides, the built-in pronunciation
/// dictionary, then [`estimate_syllables`].
#[derive(Debug, Clone, Default)]
pub struct SyllableCounter {
    overrides: HashMap<String, usize>,
}

impl SyllableCounter {
    /// A counter with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// A counter that consults `overrides` before anything else.
    ///
    /// Keys are normalized the same way words are.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroSyllableOverride`] if any entry maps a word
    /// to zero syllables.
    pub fn with_overrides<I, S>(overrides: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (S, usize)>,
        S: AsRef<str>,
    {
        let mut map = HashMap::new();
        for (word, count) in overrides {
            let key = normalize(word.as_ref());
            if count == 0 {
                return Err(ConfigError::ZeroSyllableOverride { word: key });
            }
            map.insert(key, count);
        }
        Ok(Self { overrides: map })
    }

    /// Number of caller-supplied overrides.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Count syllables in a word token.
    ///
    /// Hyphenated compounds are counted part by part. Tokens with no letters
    /// (numbers, symbols, the empty string) count as one syllable, as do
    /// tokens that mix letters with digits or URL punctuation ("3.5",
    /// "example.com/privacy", "mp3").
    pub fn count(&self, word: &str) -> usize {
        let word = word.trim_matches(|c: char| !c.is_alphanumeric());
        if !is_spelled_word(word) {
            return 1;
        }
        if word.contains('-') {
            let total: usize = word
                .split('-')
                .map(normalize)
                .filter(|part| !part.is_empty())
                .map(|part| self.count_normalized(&part))
                .sum();
            return total.max(1);
        }
        self.count_normalized(&normalize(word))
    }

    fn count_normalized(&self, word: &str) -> usize {
        if word.is_empty() {
            return 1;
        }
        self.overrides
            .get(word)
            .copied()
            .or_else(|| pronunciations::lookup(word))
            .unwrap_or_else(|| estimate_syllables(word))
    }
}

/// Letters, hyphens and apostrophes only.
fn is_spelled_word(word: &str) -> bool {
    word.chars()
        .all(|c| c.is_alphabetic() || matches!(c, '-' | '\'' | '\u{2019}'))
}

/// Count syllables in a word using the built-in dictionary and heuristics.
///
/// Never fails; the minimum is 1.
pub fn count_syllables(word: &str) -> usize {
    SyllableCounter::default().count(word)
}
