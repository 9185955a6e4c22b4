//! Game modes

use std::fmt;
use std::str::FromStr;

/// Selectable game mode
///
/// The mode fixes the word length for a whole session and whether one letter of
/// the target is revealed up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Five letters, no help
    #[default]
    Classic,
    /// Seven letters
    Hard7,
    /// Five letters, one letter of the first row revealed and locked
    Easy,
}

impl Mode {
    /// Every mode, in menu order
    pub const ALL: [Self; 3] = [Self::Classic, Self::Hard7, Self::Easy];

    /// Number of letters in the target word
    #[must_use]
    pub const fn word_length(self) -> usize {
        match self {
            Self::Hard7 => 7,
            Self::Classic | Self::Easy => 5,
        }
    }

    /// Whether the first row gets a fixed, pre-revealed slot
    #[must_use]
    pub const fn reveals_letter(self) -> bool {
        matches!(self, Self::Easy)
    }

    /// The mode after this one, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Classic => Self::Hard7,
            Self::Hard7 => Self::Easy,
            Self::Easy => Self::Classic,
        }
    }

    /// Stable lowercase name, as accepted by [`FromStr`]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Hard7 => "hard7",
            Self::Easy => "easy",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" | "normal" => Ok(Self::Classic),
            "hard7" | "hard-7" | "hard" => Ok(Self::Hard7),
            "easy" => Ok(Self::Easy),
            _ => Err(format!("Unknown mode: {s} (expected classic, hard7 or easy)")),
        }
    }
}
