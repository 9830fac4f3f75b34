//! Title-case classification of heading text.
//!
//! A heading is in title case when every word starts with an uppercase
//! letter, except the minor words of the [`ExceptionSet`], which must be
//! written in lowercase. The first and last word are always capitalized,
//! even when they are minor words.
//!
//! ```rust
//! use adoc_check_core::classify;
//!
//! assert!(classify("This Is a Test").is_title_case);
//! assert_eq!(classify("This is a test").offending_words, vec!["is", "test"]);
//! ```

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

/// Minor words left lowercase inside a heading (titlecase.com settings).
pub const DEFAULT_EXCEPTIONS: &[&str] = &[
    "a", "abaft", "about", "above", "afore", "after", "along", "amid", "among", "an", "apud",
    "as", "aside", "at", "atop", "below", "but", "by", "circa", "down", "for", "from", "given",
    "in", "into", "lest", "like", "mid", "midst", "minus", "near", "next", "of", "off", "on",
    "onto", "out", "over", "pace", "past", "per", "plus", "pro", "qua", "round", "sans", "save",
    "since", "than", "thru", "till", "times", "to", "under", "until", "unto", "up", "upon", "via",
    "vice", "with", "worth", "the", "and", "nor", "or", "yet", "so",
];

static DEFAULT_SET: OnceLock<ExceptionSet> = OnceLock::new();
static INLINE_CODE: OnceLock<Regex> = OnceLock::new();

fn inline_code() -> &'static Regex {
    INLINE_CODE.get_or_init(|| Regex::new("`[^`]*`").expect("inline code pattern is valid"))
}

/// Outcome of classifying one heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleCase {
    /// True when no word is offending.
    pub is_title_case: bool,
    /// Offending words, in the order they appear.
    pub offending_words: Vec<String>,
}

/// The set of lowercase minor words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionSet {
    words: HashSet<String>,
}

impl ExceptionSet {
    /// The built-in set, shared by the whole process.
    pub fn default_set() -> &'static ExceptionSet {
        DEFAULT_SET.get_or_init(|| Self::from_words(DEFAULT_EXCEPTIONS.iter().copied()))
    }

    /// Builds a set from `words`, lowercasing each one.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// The built-in words plus `extra`.
    pub fn with_additional<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default_set().clone();
        set.words
            .extend(extra.into_iter().map(|w| w.as_ref().to_lowercase()));
        set
    }

    /// Returns true if `lowercase_word` is a minor word.
    pub fn contains(&self, lowercase_word: &str) -> bool {
        self.words.contains(lowercase_word)
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Classifies `text` against this set.
    ///
    /// Inline code (`` `...` ``) is dropped before splitting into words. Text
    /// with no words left is considered compliant.
    pub fn classify(&self, text: &str) -> TitleCase {
        let stripped = inline_code().replace_all(text, "");
        let words: Vec<&str> = stripped.split_whitespace().collect();
        let last = words.len().saturating_sub(1);

        let mut offending_words = Vec::new();
        for (i, &word) in words.iter().enumerate() {
            let boundary = i == 0 || i == last;
            let lower = word.to_lowercase();
            let minor = self.contains(&lower);

            if (boundary || !minor) && starts_lowercase(word) {
                offending_words.push(word.to_string());
            }
            if !boundary && minor && lower != word {
                offending_words.push(word.to_string());
            }
        }

        TitleCase {
            is_title_case: offending_words.is_empty(),
            offending_words,
        }
    }
}

impl Default for ExceptionSet {
    fn default() -> Self {
        Self::default_set().clone()
    }
}

/// First character is a lowercase letter. Digits and punctuation never are.
fn starts_lowercase(word: &str) -> bool {
    word.chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() && c.is_lowercase())
}

/// Classifies `text` with the built-in exception set.
pub fn classify(text: &str) -> TitleCase {
    ExceptionSet::default_set().classify(text)
}
