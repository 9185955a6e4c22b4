//! Word sources and the playable dictionary
//!
//! A [`WordSource`] is the only I/O the game depends on. It never fails loudly:
//! a broken fetch comes back as an empty list or `None`, and the caller decides
//! what that means for the player.

mod embedded;
pub mod http;
pub mod loader;

pub use embedded::{OFFLINE_WORDS, OFFLINE_WORDS_COUNT};
pub use http::TdkWordSource;
pub use loader::StaticWordSource;

use crate::core::{Alphabet, Word};
use async_trait::async_trait;
use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Shown in place of a meaning that could not be fetched
pub const MEANING_NOT_FOUND: &str = "Anlam bulunamadı.";

/// Provider of candidate words and their meanings
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Lowercase words of exactly `length` characters
    ///
    /// Returns an empty list on any failure.
    async fn fetch_words(&self, length: usize) -> Vec<String>;

    /// First known meaning of `word`, if any
    ///
    /// Returns `None` on any failure or when the entry has no usable meaning.
    async fn fetch_meaning(&self, word: &str) -> Option<String>;
}

/// Where words come from, as chosen on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// The remote sozluk.gov.tr dictionary
    Tdk,
    /// The list compiled into the binary
    Offline,
    /// A newline separated word file
    File(PathBuf),
}

/// Error type for sources that cannot be opened
#[derive(Debug)]
pub enum SourceError {
    Http(reqwest::Error),
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "Failed to set up HTTP client: {e}"),
            Self::Io { path, source } => {
                write!(f, "Failed to read word file {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl SourceKind {
    /// Create the source
    ///
    /// `timeout` bounds each HTTP request of the remote source.
    ///
    /// # Errors
    /// Returns `SourceError` if the HTTP client cannot be built or the word file
    /// cannot be read.
    pub fn open(&self, timeout: Duration) -> Result<Arc<dyn WordSource>, SourceError> {
        Ok(match self {
            Self::Tdk => Arc::new(TdkWordSource::new(timeout).map_err(SourceError::Http)?),
            Self::Offline => Arc::new(StaticWordSource::embedded()),
            Self::File(path) => {
                Arc::new(StaticWordSource::from_file(path).map_err(|source| SourceError::Io {
                    path: path.clone(),
                    source,
                })?)
            }
        })
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err("Source must not be empty".to_string()),
            "tdk" => Ok(Self::Tdk),
            "offline" => Ok(Self::Offline),
            path => Ok(Self::File(PathBuf::from(path))),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tdk => f.write_str("tdk"),
            Self::Offline => f.write_str("offline"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The playable words for one word length
///
/// Entries are kept in fetch order; membership is checked on the normalized
/// spelling, so an accented guess matches its plain entry and vice versa.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Keeps entries of exactly `length` characters whose normalized letters
    /// are all in `alphabet`. Duplicates after normalization are dropped.
    ///
    /// # Examples
    /// ```
    /// use kelime::core::Alphabet;
    /// use kelime::wordsource::Dictionary;
    ///
    /// let entries = ["Kalem", "kâğıt", "kağıt", "su", "ab ay"].map(String::from);
    /// let dict = Dictionary::build(&entries, 5, &Alphabet::turkish());
    /// assert_eq!(dict.len(), 2);
    /// ```
    #[must_use]
    pub fn build(entries: &[String], length: usize, alphabet: &Alphabet) -> Self {
        let candidates: Vec<Word> = entries
            .par_iter()
            .filter_map(|entry| {
                let entry = entry.trim();
                if entry.chars().count() != length {
                    return None;
                }
                let word = Word::with_length(entry, length).ok()?;
                alphabet.spells(word.text()).then_some(word)
            })
            .collect();

        let mut index = FxHashSet::default();
        let words = candidates
            .into_iter()
            .filter(|word| index.insert(word.text().to_string()))
            .collect();

        Self { words, index }
    }

    /// Check if a word is playable
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word.text())
    }

    /// All words, in fetch order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick a word uniformly at random
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn entries(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn offline_count_matches_const() {
        assert_eq!(OFFLINE_WORDS.len(), OFFLINE_WORDS_COUNT);
    }

    #[test]
    fn offline_words_are_lowercase_letters() {
        for &word in OFFLINE_WORDS {
            assert!(
                word.chars().all(char::is_lowercase),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn offline_words_are_playable() {
        let all = loader::words_from_slice(OFFLINE_WORDS);
        let five = Dictionary::build(&all, 5, &Alphabet::turkish());
        let seven = Dictionary::build(&all, 7, &Alphabet::turkish());
        assert_eq!(five.len() + seven.len(), OFFLINE_WORDS_COUNT);
    }

    #[test]
    fn build_filters_length_by_chars() {
        let dict = Dictionary::build(
            &entries(&["kalem", "şeker", "kitapçı", "su"]),
            5,
            &Alphabet::turkish(),
        );
        let texts: Vec<&str> = dict.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["kalem", "şeker"]);
    }

    #[test]
    fn build_lowercases_entries() {
        let dict = Dictionary::build(&entries(&["KALEM"]), 5, &Alphabet::turkish());
        assert!(dict.contains(&Word::new("kalem").unwrap()));
    }

    #[test]
    fn build_keeps_dotted_capital_i() {
        let dict = Dictionary::build(&entries(&["İNCİR", "IRMAK"]), 5, &Alphabet::turkish());
        let texts: Vec<&str> = dict.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["incir", "ırmak"]);
    }

    #[test]
    fn build_drops_untypeable_entries() {
        let dict = Dictionary::build(
            &entries(&["kalem", "şeker", "ab-ay", "qu ak"]),
            5,
            &Alphabet::latin(),
        );
        assert_eq!(dict.len(), 1);
        assert!(dict.contains(&Word::new("kalem").unwrap()));
    }

    #[test]
    fn build_dedups_after_normalization() {
        let dict = Dictionary::build(&entries(&["kâğıt", "kağıt"]), 5, &Alphabet::turkish());
        assert_eq!(dict.len(), 1);
        // the first spelling wins
        assert_eq!(dict.words()[0].original(), "kâğıt");
    }

    #[test]
    fn contains_ignores_accents() {
        let dict = Dictionary::build(&entries(&["kağıt"]), 5, &Alphabet::turkish());
        assert!(dict.contains(&Word::new("kâğıt").unwrap()));
        assert!(!dict.contains(&Word::new("kalem").unwrap()));
    }

    #[test]
    fn pick_from_empty_is_none() {
        let dict = Dictionary::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(dict.is_empty());
        assert!(dict.pick(&mut rng).is_none());
    }

    #[test]
    fn pick_is_a_member() {
        let dict = Dictionary::build(
            &entries(&["kalem", "limon", "şeker"]),
            5,
            &Alphabet::turkish(),
        );
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let word = dict.pick(&mut rng).unwrap();
            assert!(dict.contains(word));
        }
    }

    #[test]
    fn source_kind_parsing() {
        assert_eq!("tdk".parse::<SourceKind>(), Ok(SourceKind::Tdk));
        assert_eq!("offline".parse::<SourceKind>(), Ok(SourceKind::Offline));
        assert_eq!(
            "words.txt".parse::<SourceKind>(),
            Ok(SourceKind::File(PathBuf::from("words.txt")))
        );
        assert!("".parse::<SourceKind>().is_err());
    }

    #[test]
    fn open_missing_file_fails() {
        let kind = SourceKind::File(PathBuf::from("/definitely/not/here.txt"));
        let err = kind.open(Duration::from_secs(1)).err().unwrap();
        assert!(matches!(err, SourceError::Io { .. }));
    }
}
