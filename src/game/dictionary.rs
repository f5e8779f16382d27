//! Dictionary module for word validation
//!
//! Two-letter words come from a fixed whitelist. Longer words are checked
//! against a bulk word list that is loaded once, possibly after the game has
//! started. Until it is loaded every longer word is treated as invalid.

use super::error::DictionaryError;
use once_cell::sync::{Lazy, OnceCell};
use std::collections::HashSet;
use std::path::Path;

/// Authoritative two-letter words. Not checked against the bulk list.
static TWO_LETTER_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "aa", "ab", "ad", "ae", "ag", "ah", "ai", "al", "am", "an", "ar", "as", "at", "aw", "ax",
        "ay", "ba", "be", "bi", "bo", "by", "da", "de", "do", "ed", "ef", "eh", "el", "em", "en",
        "er", "es", "et", "ex", "fa", "fe", "go", "ha", "he", "hi", "hm", "ho", "id", "if", "in",
        "is", "it", "jo", "ka", "ki", "la", "li", "lo", "ma", "me", "mi", "mm", "mo", "mu", "my",
        "na", "ne", "no", "nu", "od", "oe", "of", "oh", "oi", "ok", "om", "on", "op", "or", "os",
        "ow", "ox", "oy", "pa", "pe", "pi", "qi", "re", "sh", "si", "so", "ta", "te", "ti", "to",
        "uh", "um", "un", "up", "us", "ut", "we", "wo", "xi", "xu", "ya", "ye", "yo", "za",
    ]
    .into_iter()
    .collect()
});

/// Anything that can answer "is this a word".
pub trait WordValidator {
    fn is_valid_word(&self, word: &str) -> bool;
}

impl<F> WordValidator for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid_word(&self, word: &str) -> bool {
        self(word)
    }
}

/// Where the bulk word list stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryStatus {
    Loading,
    Ready { words: usize },
    /// Loading failed; longer words stay invalid for the whole session
    Unavailable { reason: String },
}

/// Word lookup shared between the loader thread and the game.
#[derive(Debug, Default)]
pub struct Dictionary {
    words: OnceCell<HashSet<String>>,
    failure: OnceCell<String>,
}

impl Dictionary {
    /// An empty dictionary; only two-letter words validate until a list is loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// A dictionary that is loaded immediately with the given words.
    #[cfg(test)]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dictionary = Self::new();
        let set: HashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        // A fresh cell is always empty
        let _ = dictionary.words.set(set);
        dictionary
    }

    /// Whether the bulk word list has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.words.get().is_some()
    }

    /// Record that the word list could not be loaded.
    pub fn mark_unavailable(&self, reason: impl Into<String>) {
        let _ = self.failure.set(reason.into());
    }

    pub fn status(&self) -> DictionaryStatus {
        if let Some(words) = self.words.get() {
            return DictionaryStatus::Ready { words: words.len() };
        }
        match self.failure.get() {
            Some(reason) => DictionaryStatus::Unavailable {
                reason: reason.clone(),
            },
            None => DictionaryStatus::Loading,
        }
    }

    /// Load the bulk word list from a file, either one word per line or a
    /// JSON array of strings.
    pub fn load_path(&self, path: &Path) -> Result<usize, DictionaryError> {
        let text = std::fs::read_to_string(path)?;
        let count = self.load_str(&text)?;
        tracing::info!(path = %path.display(), words = count, "word list loaded");
        Ok(count)
    }

    /// Load the bulk word list from text. The first load wins.
    pub fn load_str(&self, text: &str) -> Result<usize, DictionaryError> {
        if self.is_loaded() {
            return Err(DictionaryError::AlreadyLoaded);
        }

        let set = parse_word_list(text)?;
        if set.is_empty() {
            return Err(DictionaryError::Empty);
        }

        let count = set.len();
        self.words
            .set(set)
            .map_err(|_| DictionaryError::AlreadyLoaded)?;
        Ok(count)
    }
}

impl WordValidator for Dictionary {
    /// Case-insensitive exact match. Fails closed while the list is loading.
    fn is_valid_word(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        match lower.chars().count() {
            0 | 1 => false,
            2 => TWO_LETTER_WORDS.contains(lower.as_str()),
            _ => self
                .words
                .get()
                .is_some_and(|words| words.contains(&lower)),
        }
    }
}

fn parse_word_list(text: &str) -> Result<HashSet<String>, DictionaryError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let trimmed = text.trim_start();
    if trimmed.starts_with('[') {
        let words: Vec<String> = serde_json::from_str(trimmed)?;
        return Ok(words
            .into_iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect());
    }

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect())
}
