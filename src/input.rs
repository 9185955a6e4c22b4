//! Input routing
//!
//! Turns physical key presses and on-screen key names into session commands.
//! The router only filters; whether a command does anything is up to the
//! session.

use crate::core::Alphabet;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A command for the game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TypeLetter(char),
    Delete,
    Submit,
}

/// On-screen key that submits the row
pub const VIRTUAL_ENTER: &str = "enter";
/// On-screen key that deletes a letter
pub const VIRTUAL_DELETE: &str = "del";

/// Modifiers that turn a letter key into a shortcut
const SHORTCUT_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL
    .union(KeyModifiers::ALT)
    .union(KeyModifiers::SUPER)
    .union(KeyModifiers::META);

/// Maps raw input to [`Command`]s for one alphabet
#[derive(Debug, Clone, Default)]
pub struct InputRouter {
    alphabet: Alphabet,
}

impl InputRouter {
    #[must_use]
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Route a physical key event
    ///
    /// Only presses count. Letters held with Ctrl, Alt, Super or Meta are
    /// ignored, Shift is fine; letters outside the alphabet are dropped.
    ///
    /// # Examples
    /// ```
    /// use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    /// use kelime::core::Alphabet;
    /// use kelime::input::{Command, InputRouter};
    ///
    /// let router = InputRouter::new(Alphabet::turkish());
    /// let key = KeyEvent::new(KeyCode::Char('Ş'), KeyModifiers::SHIFT);
    /// assert_eq!(router.route_key(&key), Some(Command::TypeLetter('ş')));
    ///
    /// let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
    /// assert_eq!(router.route_key(&key), None);
    /// ```
    #[must_use]
    pub fn route_key(&self, key: &KeyEvent) -> Option<Command> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Enter => Some(Command::Submit),
            KeyCode::Backspace => Some(Command::Delete),
            KeyCode::Char(_) if key.modifiers.intersects(SHORTCUT_MODIFIERS) => None,
            KeyCode::Char(c) => self.alphabet.accept(c).map(Command::TypeLetter),
            _ => None,
        }
    }

    /// Route an on-screen key by name: `enter`, `del` or a single letter
    #[must_use]
    pub fn route_virtual(&self, name: &str) -> Option<Command> {
        match name {
            VIRTUAL_ENTER => Some(Command::Submit),
            VIRTUAL_DELETE => Some(Command::Delete),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => self.alphabet.accept(c).map(Command::TypeLetter),
                    _ => None,
                }
            }
        }
    }

    /// Letter commands for every accepted char of a typed word
    #[must_use]
    pub fn route_text(&self, text: &str) -> Vec<Command> {
        text.chars()
            .filter_map(|c| self.alphabet.accept(c))
            .map(Command::TypeLetter)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn router() -> InputRouter {
        InputRouter::new(Alphabet::turkish())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn control_keys() {
        let router = router();
        assert_eq!(router.route_key(&press(KeyCode::Enter)), Some(Command::Submit));
        assert_eq!(
            router.route_key(&press(KeyCode::Backspace)),
            Some(Command::Delete)
        );
        assert_eq!(router.route_key(&press(KeyCode::Tab)), None);
        assert_eq!(router.route_key(&press(KeyCode::Left)), None);
    }

    #[test]
    fn letters_are_lowercased() {
        let router = router();
        assert_eq!(
            router.route_key(&press(KeyCode::Char('K'))),
            Some(Command::TypeLetter('k'))
        );
        assert_eq!(
            router.route_key(&press(KeyCode::Char('ğ'))),
            Some(Command::TypeLetter('ğ'))
        );
        // Turkish casing: I is the capital of ı
        assert_eq!(
            router.route_key(&press(KeyCode::Char('I'))),
            Some(Command::TypeLetter('ı'))
        );
    }

    #[test]
    fn non_letters_dropped() {
        let router = router();
        for c in ['1', ' ', '-', '!', 'ß'] {
            assert_eq!(router.route_key(&press(KeyCode::Char(c))), None, "{c:?}");
        }
    }

    #[test]
    fn alphabet_decides_letters() {
        let router = InputRouter::new(Alphabet::latin());
        assert_eq!(router.route_key(&press(KeyCode::Char('ş'))), None);
        assert_eq!(
            router.route_key(&press(KeyCode::Char('s'))),
            Some(Command::TypeLetter('s'))
        );
    }

    #[test]
    fn modifiers_suppress_letters() {
        let router = router();
        for modifiers in [
            KeyModifiers::CONTROL,
            KeyModifiers::ALT,
            KeyModifiers::SUPER,
            KeyModifiers::META,
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        ] {
            let key = KeyEvent::new(KeyCode::Char('a'), modifiers);
            assert_eq!(router.route_key(&key), None, "{modifiers:?}");
        }
        let key = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(router.route_key(&key), Some(Command::TypeLetter('a')));
    }

    #[test]
    fn releases_ignored() {
        let router = router();
        let key = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(router.route_key(&key), None);
    }

    #[test]
    fn virtual_keys() {
        let router = router();
        assert_eq!(router.route_virtual("enter"), Some(Command::Submit));
        assert_eq!(router.route_virtual("del"), Some(Command::Delete));
        assert_eq!(router.route_virtual("ç"), Some(Command::TypeLetter('ç')));
        assert_eq!(router.route_virtual("ab"), None);
        assert_eq!(router.route_virtual(""), None);
        assert_eq!(router.route_virtual("7"), None);
    }

    #[test]
    fn text_keeps_letters_only() {
        let router = router();
        assert_eq!(
            router.route_text("Ka-lem!"),
            "kalem".chars().map(Command::TypeLetter).collect::<Vec<_>>()
        );
    }
}
