//! Abbreviations that end in a period without ending a sentence.
//!
//! Privacy policies lean on corporate suffixes ("Inc."), Latin shorthand
//! ("i.e.", "e.g.") and statute citations ("Cal. Civ. Code Sec. 1798"), all
//! of which would otherwise split sentences mid-clause. Entries are stored
//! lowercase without the trailing period.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Titles and honorifics.
const TITLES: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "sr", "jr", "hon", "esq", "gen", "gov", "sen", "rep",
];

/// Corporate and organizational suffixes.
const ORGANIZATIONS: &[&str] = &[
    "inc", "corp", "co", "ltd", "llc", "llp", "plc", "bros", "assn", "intl", "dept", "gmbh",
];

/// Latin and editorial shorthand.
const LATIN: &[&str] = &[
    "i.e", "e.g", "etc", "vs", "viz", "cf", "et al", "n.b", "ibid", "approx", "incl", "esp",
];

/// Legal citation vocabulary.
const CITATIONS: &[&str] = &[
    "art", "arts", "sec", "secs", "para", "paras", "subd", "ch", "no", "nos", "vol", "pp", "reg",
    "regs", "stat", "civ", "proc", "cal", "u.s.c", "c.f.r", "ann", "cl", "amend",
];

/// Places and jurisdictions.
const PLACES: &[&str] = &[
    "u.s", "u.s.a", "u.k", "e.u", "e.e.a", "st", "ave", "blvd", "rd", "ste", "apt", "fl", "n.y",
    "d.c", "mass", "penn", "wash", "calif",
];

/// Months, weekdays and times of day.
const DATES: &[&str] = &[
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "mon",
    "tue", "tues", "wed", "thu", "thur", "thurs", "fri", "sat", "sun", "a.m", "p.m",
];

/// Set of every built-in abbreviation.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [TITLES, ORGANIZATIONS, LATIN, CITATIONS, PLACES, DATES]
        .into_iter()
        .flatten()
        .copied()
        .collect()
});

/// Normalize a candidate word for lookup: lowercase, trailing periods removed.
pub fn normalize(word: &str) -> String {
    word.trim_matches('.').to_lowercase()
}

/// Check if a word is a built-in abbreviation.
pub fn is_abbreviation(word: &str) -> bool {
    ABBREVIATIONS.contains(normalize(word).as_str())
}
