//! Meaning lookup command

use crate::game::fetch_meaning;
use crate::wordsource::{MEANING_NOT_FOUND, WordSource};
use std::time::Duration;

/// Look up the first meaning of `word`
///
/// Failures, timeouts and unknown words all give the not-found text.
pub async fn define_word(source: &dyn WordSource, word: &str, limit: Duration) -> String {
    let word = word.trim();
    fetch_meaning(source, word, limit)
        .await
        .unwrap_or_else(|| MEANING_NOT_FOUND.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordsource::StaticWordSource;

    #[tokio::test]
    async fn known_and_unknown_words() {
        let source = StaticWordSource::new(vec!["kalem".to_string()])
            .with_meaning("kalem", "Yazı yazmaya yarayan araç");
        let limit = Duration::from_secs(1);

        assert_eq!(
            define_word(&source, " Kalem ", limit).await,
            "Yazı yazmaya yarayan araç"
        );
        assert_eq!(define_word(&source, "limon", limit).await, MEANING_NOT_FOUND);
    }
}
