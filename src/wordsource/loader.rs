//! Local word sources
//!
//! Serves words from memory: the embedded offline list or a word file.

use super::WordSource;
use super::embedded::OFFLINE_WORDS;
use async_trait::async_trait;
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines and `#` comments are skipped; words are lowercased.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use kelime::wordsource::loader::load_from_file;
///
/// let words = load_from_file("data/kelimeler.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Convert embedded string slice to owned lowercase words
///
/// # Examples
/// ```
/// use kelime::wordsource::loader::words_from_slice;
/// use kelime::wordsource::OFFLINE_WORDS;
///
/// let words = words_from_slice(OFFLINE_WORDS);
/// assert_eq!(words.len(), OFFLINE_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

/// A [`WordSource`] backed by an in-memory list
///
/// Meanings are only known for words registered with [`StaticWordSource::with_meaning`].
#[derive(Debug, Clone, Default)]
pub struct StaticWordSource {
    words: Vec<String>,
    meanings: FxHashMap<String, String>,
}

impl StaticWordSource {
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            meanings: FxHashMap::default(),
        }
    }

    /// The list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(OFFLINE_WORDS))
    }

    /// Words read from a file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        load_from_file(path).map(Self::new)
    }

    /// Register a meaning for `word`
    #[must_use]
    pub fn with_meaning(mut self, word: &str, meaning: &str) -> Self {
        self.meanings
            .insert(word.to_lowercase(), meaning.to_string());
        self
    }
}

#[async_trait]
impl WordSource for StaticWordSource {
    async fn fetch_words(&self, length: usize) -> Vec<String> {
        self.words
            .iter()
            .filter(|w| w.chars().count() == length)
            .cloned()
            .collect()
    }

    async fn fetch_meaning(&self, word: &str) -> Option<String> {
        self.meanings.get(&word.to_lowercase()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_lowercases_and_skips_blank() {
        let input = &["Kalem", "", "  limon  ", "# comment"];
        let words = words_from_slice(input);
        assert_eq!(words, vec!["kalem", "limon"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }

    #[tokio::test]
    async fn fetch_words_filters_by_char_count() {
        let source = StaticWordSource::new(vec![
            "kalem".to_string(),
            "şeker".to_string(),
            "kitapçı".to_string(),
            "su".to_string(),
        ]);
        assert_eq!(source.fetch_words(5).await, vec!["kalem", "şeker"]);
        assert_eq!(source.fetch_words(7).await, vec!["kitapçı"]);
        assert!(source.fetch_words(6).await.is_empty());
    }

    #[tokio::test]
    async fn fetch_meaning_only_for_registered_words() {
        let source = StaticWordSource::new(vec!["kalem".to_string()])
            .with_meaning("kalem", "Yazı yazmaya yarayan araç");
        assert_eq!(
            source.fetch_meaning("KALEM").await.as_deref(),
            Some("Yazı yazmaya yarayan araç")
        );
        assert_eq!(source.fetch_meaning("limon").await, None);
    }

    #[tokio::test]
    async fn embedded_has_both_lengths() {
        let source = StaticWordSource::embedded();
        assert!(!source.fetch_words(5).await.is_empty());
        assert!(!source.fetch_words(7).await.is_empty());
    }
}
