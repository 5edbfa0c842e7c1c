//! Platform-agnostic key input for the terminal input line.
//!
//! Hosts map their native key events to these variants. The interpreter
//! never sees raw platform input.

use serde::{Deserialize, Serialize};

/// A key event delivered to the terminal input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyInput {
    /// Submit the current input line.
    Enter,
    /// Recall the previous history entry.
    Up,
    /// Recall the next history entry.
    Down,
    /// Complete the command name being typed.
    Tab,
    /// Ctrl+C.
    Interrupt,
    /// Character typed.
    Char(char),
    /// Delete the last character.
    Backspace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_variants_compare_by_payload() {
        assert_eq!(KeyInput::Char('a'), KeyInput::Char('a'));
        assert_ne!(KeyInput::Char('a'), KeyInput::Char('b'));
    }

    #[test]
    fn navigation_keys_are_distinct() {
        use std::collections::HashSet;
        let set: HashSet<KeyInput> = [KeyInput::Up, KeyInput::Down, KeyInput::Up]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn key_serde_roundtrip() {
        let json = serde_json::to_string(&KeyInput::Char('\u{1F9E0}')).unwrap();
        let back: KeyInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, KeyInput::Char('\u{1F9E0}'));
    }
}
