//! Abstract input key event, independent of terminal library.
//!
//! `bookview-app` never sees crossterm types; the TUI converts
//! `crossterm::event::KeyEvent` into [`InputKey`] at its boundary, which also
//! lets the handlers be driven directly from tests.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols, space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+u, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::Char('a'), InputKey::Char('b'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }
}
