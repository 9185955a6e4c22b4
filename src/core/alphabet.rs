//! Supported letter sets
//!
//! The alphabet decides which keys the player can type and which dictionary
//! entries are playable. It is configurable rather than tied to one language.

use super::normalize::normalize_char;
use std::fmt;
use std::str::FromStr;

const LATIN: &str = "abcdefghijklmnopqrstuvwxyz";
const TURKISH_EXTRA: &str = "çğıöşü";

/// An ordered set of lowercase letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
    turkish_case: bool,
}

/// Error type for alphabets built from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    Empty,
    NotALetter(char),
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Alphabet must contain at least one letter"),
            Self::NotALetter(c) => write!(f, "Alphabet contains a non-letter: {c:?}"),
        }
    }
}

impl std::error::Error for AlphabetError {}

impl Default for Alphabet {
    fn default() -> Self {
        Self::turkish()
    }
}

impl Alphabet {
    /// Latin `a-z` plus `ç ğ ı ö ş ü`, with Turkish dotted/dotless I casing
    #[must_use]
    pub fn turkish() -> Self {
        let mut letters: Vec<char> = LATIN.chars().chain(TURKISH_EXTRA.chars()).collect();
        letters.sort_unstable();
        Self {
            letters,
            turkish_case: true,
        }
    }

    /// Plain `a-z`
    #[must_use]
    pub fn latin() -> Self {
        Self {
            letters: LATIN.chars().collect(),
            turkish_case: false,
        }
    }

    /// Build an alphabet from an arbitrary list of letters
    ///
    /// Letters are lowercased and deduplicated.
    ///
    /// # Errors
    /// Returns `AlphabetError` if the list is empty or holds a non-alphabetic char.
    ///
    /// # Examples
    /// ```
    /// use kelime::core::Alphabet;
    ///
    /// let abc = Alphabet::from_letters("CbA").unwrap();
    /// assert_eq!(abc.letters(), &['a', 'b', 'c']);
    /// assert!(Alphabet::from_letters("ab1").is_err());
    /// ```
    pub fn from_letters(text: &str) -> Result<Self, AlphabetError> {
        let mut letters = Vec::new();
        for c in text.chars().filter(|c| !c.is_whitespace()) {
            if !c.is_alphabetic() {
                return Err(AlphabetError::NotALetter(c));
            }
            letters.extend(c.to_lowercase());
        }
        letters.sort_unstable();
        letters.dedup();

        if letters.is_empty() {
            return Err(AlphabetError::Empty);
        }

        Ok(Self {
            letters,
            turkish_case: false,
        })
    }

    /// All letters, sorted
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Check membership of an already lowercased, normalized letter
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.binary_search(&letter).is_ok()
    }

    /// Lowercase, fold and validate a typed character
    ///
    /// Returns `None` for anything outside the alphabet.
    ///
    /// # Examples
    /// ```
    /// use kelime::core::Alphabet;
    ///
    /// let tr = Alphabet::turkish();
    /// assert_eq!(tr.accept('Ş'), Some('ş'));
    /// assert_eq!(tr.accept('I'), Some('ı'));
    /// assert_eq!(tr.accept('â'), Some('a'));
    /// assert_eq!(tr.accept('7'), None);
    /// ```
    #[must_use]
    pub fn accept(&self, typed: char) -> Option<char> {
        let lower = self.lowercase(typed)?;
        let letter = normalize_char(lower);
        self.contains(letter).then_some(letter)
    }

    /// True when every char of an already normalized word is in the alphabet
    #[must_use]
    pub fn spells(&self, word: &str) -> bool {
        !word.is_empty() && word.chars().all(|c| self.contains(c))
    }

    fn lowercase(&self, c: char) -> Option<char> {
        if self.turkish_case {
            match c {
                'I' => return Some('ı'),
                'İ' => return Some('i'),
                _ => {}
            }
        }
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(single), None) => Some(single),
            _ => None,
        }
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "turkish" | "tr" => Ok(Self::turkish()),
            "latin" | "en" => Ok(Self::latin()),
            _ => Self::from_letters(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turkish_has_29_plus_qwx() {
        let tr = Alphabet::turkish();
        assert_eq!(tr.letters().len(), 32);
        for c in "çğıöşüqwx".chars() {
            assert!(tr.contains(c), "missing {c}");
        }
    }

    #[test]
    fn latin_rejects_turkish_letters() {
        let latin = Alphabet::latin();
        assert_eq!(latin.accept('a'), Some('a'));
        assert_eq!(latin.accept('ş'), None);
        assert_eq!(latin.accept('I'), Some('i'));
    }

    #[test]
    fn turkish_casing_for_i() {
        let tr = Alphabet::turkish();
        assert_eq!(tr.accept('I'), Some('ı'));
        assert_eq!(tr.accept('İ'), Some('i'));
        assert_eq!(tr.accept('i'), Some('i'));
        assert_eq!(tr.accept('ı'), Some('ı'));
    }

    #[test]
    fn accepts_accented_as_plain() {
        let tr = Alphabet::turkish();
        assert_eq!(tr.accept('Â'), Some('a'));
        assert_eq!(tr.accept('û'), Some('u'));
    }

    #[test]
    fn rejects_non_letters() {
        let tr = Alphabet::turkish();
        for c in ['1', ' ', '-', '\n', 'é'] {
            assert_eq!(tr.accept(c), None, "{c:?} accepted");
        }
    }

    #[test]
    fn spells_checks_every_letter() {
        let tr = Alphabet::turkish();
        assert!(tr.spells("kalem"));
        assert!(tr.spells("şeker"));
        assert!(!tr.spells("ab ay"));
        assert!(!tr.spells(""));
    }

    #[test]
    fn parse_named_and_custom() {
        assert_eq!("turkish".parse::<Alphabet>().unwrap(), Alphabet::turkish());
        assert_eq!("LATIN".parse::<Alphabet>().unwrap(), Alphabet::latin());
        let custom: Alphabet = "xyz".parse().unwrap();
        assert_eq!(custom.letters(), &['x', 'y', 'z']);
        assert_eq!("".parse::<Alphabet>(), Err(AlphabetError::Empty));
        assert_eq!(
            "a-b".parse::<Alphabet>(),
            Err(AlphabetError::NotALetter('-'))
        );
    }
}
