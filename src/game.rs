//! Game orchestration
//!
//! [`Game`] owns the word source and at most one [`GameSession`]. No session
//! means Setup: the word list for the chosen mode is still being fetched, or
//! the fetch failed and the player has to pick a mode (or ask for a new word)
//! again.
//!
//! The two waits on the network happen here and nowhere else: the word list
//! before a session starts, and the meaning after it ends. Keystrokes never
//! wait on either.

use crate::core::{Alphabet, Mode, lowercase_tr};
use crate::input::Command;
use crate::session::{Event, GameSession, Outcome, SessionError, Submission};
use crate::wordsource::{Dictionary, MEANING_NOT_FOUND, WordSource};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{info, warn};

/// Default bound for each word source request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Settings for a game
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub mode: Mode,
    pub alphabet: Alphabet,
    pub timeout: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            alphabet: Alphabet::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// End of game message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndNotice {
    pub outcome: Outcome,
    /// The target in its dictionary spelling
    pub word: String,
    pub meaning: Option<String>,
}

impl EndNotice {
    #[must_use]
    pub fn headline(&self) -> &'static str {
        self.outcome.headline()
    }

    /// The meaning as shown to the player, or the not-found text
    #[must_use]
    pub fn meaning_text(&self) -> String {
        match &self.meaning {
            Some(meaning) => {
                let meaning = lowercase_tr(meaning.trim());
                format!("{}.", meaning.trim_end_matches('.'))
            }
            None => MEANING_NOT_FOUND.to_string(),
        }
    }
}

impl fmt::Display for EndNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline())?;
        writeln!(f, "Kelime: \"{}\"", self.word)?;
        write!(f, "Anlamı: {}", self.meaning_text())
    }
}

/// A pending meaning lookup for a finished session
///
/// Detached from the [`Game`] so it can run on its own task while the player
/// keeps using the interface.
#[derive(Clone)]
pub struct MeaningRequest {
    generation: u64,
    word: String,
    source: Arc<dyn WordSource>,
    timeout: Duration,
}

impl fmt::Debug for MeaningRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeaningRequest")
            .field("generation", &self.generation)
            .field("word", &self.word)
            .finish_non_exhaustive()
    }
}

/// Result of a [`MeaningRequest`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeaningReply {
    generation: u64,
    meaning: Option<String>,
}

impl MeaningRequest {
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Fetch the meaning; failures and timeouts give `None`
    pub async fn resolve(self) -> MeaningReply {
        let meaning = fetch_meaning(self.source.as_ref(), &self.word, self.timeout).await;
        MeaningReply {
            generation: self.generation,
            meaning,
        }
    }
}

/// Fetch a meaning with a time bound
pub async fn fetch_meaning(
    source: &dyn WordSource,
    word: &str,
    limit: Duration,
) -> Option<String> {
    if let Ok(meaning) = timeout(limit, source.fetch_meaning(word)).await {
        meaning
    } else {
        warn!(word, ?limit, "meaning fetch timed out");
        None
    }
}

/// The game: configuration, word source, cached dictionary and current session
pub struct Game {
    config: GameConfig,
    source: Arc<dyn WordSource>,
    mode: Mode,
    dictionary: Option<Arc<Dictionary>>,
    session: Option<GameSession>,
    generation: u64,
    rng: StdRng,
    pending: Vec<Event>,
}

impl Game {
    /// Create a game in Setup; call [`Game::select_mode`] to start playing
    #[must_use]
    pub fn new(config: GameConfig, source: Arc<dyn WordSource>) -> Self {
        Self::with_rng(config, source, StdRng::from_os_rng())
    }

    /// Like [`Game::new`] with a fixed random generator
    #[must_use]
    pub fn with_rng(config: GameConfig, source: Arc<dyn WordSource>, rng: StdRng) -> Self {
        Self {
            mode: config.mode,
            config,
            source,
            dictionary: None,
            session: None,
            generation: 0,
            rng,
            pending: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// True while no session exists
    #[must_use]
    pub fn in_setup(&self) -> bool {
        self.session.is_none()
    }

    /// Switch to `mode` and start a session on a freshly fetched word list
    ///
    /// The current session is dropped first, even if the fetch then fails.
    ///
    /// # Errors
    /// Returns `SessionError::WordListUnavailable` if the source yields no
    /// playable word in time.
    pub async fn select_mode(&mut self, mode: Mode) -> Result<(), SessionError> {
        self.mode = mode;
        self.session = None;
        self.dictionary = None;
        self.pending.clear();

        let dictionary = Arc::new(self.load_dictionary(mode).await);
        if dictionary.is_empty() {
            warn!(%mode, "no playable words");
            return Err(SessionError::WordListUnavailable { mode });
        }
        self.dictionary = Some(Arc::clone(&dictionary));
        self.start_session(dictionary)
    }

    /// Start over with a new word in the current mode
    ///
    /// Reuses the word list already fetched for the mode; without one this is
    /// the same as selecting the mode again.
    ///
    /// # Errors
    /// Same as [`Game::select_mode`].
    pub async fn restart(&mut self) -> Result<(), SessionError> {
        match self.dictionary.clone() {
            Some(dictionary) => {
                self.pending.clear();
                self.start_session(dictionary)
            }
            None => self.select_mode(self.mode).await,
        }
    }

    async fn load_dictionary(&self, mode: Mode) -> Dictionary {
        let length = mode.word_length();
        let entries = if let Ok(entries) =
            timeout(self.config.timeout, self.source.fetch_words(length)).await
        {
            entries
        } else {
            warn!(%mode, timeout = ?self.config.timeout, "word list fetch timed out");
            Vec::new()
        };
        let dictionary = Dictionary::build(&entries, length, &self.config.alphabet);
        info!(%mode, fetched = entries.len(), playable = dictionary.len(), "word list loaded");
        dictionary
    }

    fn start_session(&mut self, dictionary: Arc<Dictionary>) -> Result<(), SessionError> {
        let session = GameSession::start(self.mode, dictionary, &mut self.rng)?;
        self.generation += 1;
        self.session = Some(session);
        Ok(())
    }

    /// Apply one routed command; ignored during Setup
    ///
    /// Only a submit can score a row, so letters and deletes report
    /// [`Submission::Ignored`].
    pub fn apply(&mut self, command: Command) -> Submission {
        let Some(session) = self.session.as_mut() else {
            return Submission::Ignored;
        };
        match command {
            Command::TypeLetter(letter) => {
                session.type_letter(letter);
                Submission::Ignored
            }
            Command::Delete => {
                session.delete_letter();
                Submission::Ignored
            }
            Command::Submit => session.submit(),
        }
    }

    /// Lookup for the target of the finished session, if it is finished
    #[must_use]
    pub fn meaning_request(&self) -> Option<MeaningRequest> {
        let session = self.session.as_ref()?;
        session.outcome()?;
        Some(MeaningRequest {
            generation: self.generation,
            word: session.target().original().to_string(),
            source: Arc::clone(&self.source),
            timeout: self.config.timeout,
        })
    }

    /// Finish the session with a fetched meaning
    ///
    /// Replies for a session that has since been replaced are dropped.
    pub fn conclude(&mut self, reply: MeaningReply) -> Option<EndNotice> {
        if reply.generation != self.generation {
            return None;
        }
        let session = self.session.as_ref()?;
        let outcome = session.outcome()?;
        let notice = EndNotice {
            outcome,
            word: session.target().original().to_string(),
            meaning: reply.meaning,
        };
        info!(?outcome, word = %notice.word, found = notice.meaning.is_some(), "game concluded");
        self.pending.push(Event::GameEnded {
            outcome,
            word: notice.word.clone(),
            meaning: notice.meaning_text(),
        });
        Some(notice)
    }

    /// Take queued events of the session and the game, oldest first
    pub fn drain_events(&mut self) -> Vec<Event> {
        let mut events = self
            .session
            .as_mut()
            .map(GameSession::drain_events)
            .unwrap_or_default();
        events.append(&mut self.pending);
        events
    }
}
