#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! A host translates whatever its platform delivers (DOM events, terminal
//! input, synthetic test input) into these values before handing them to a
//! widget. All events derive `Clone` and `PartialEq` for use in tests and
//! pattern matching.
//!
//! # Design Notes
//!
//! - `KeyEventKind` defaults to `Press`; only presses drive navigation.
//! - Space is `KeyCode::Char(' ')`, matching how the browser reports it.

use crate::geometry::Size;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// Pointer entered or left the element.
    Pointer(PointerEventKind),

    /// Touch started or ended on the element.
    Touch(TouchPhase),

    /// Focus gained or lost.
    ///
    /// `true` = focus gained, `false` = focus lost.
    Focus(bool),

    /// Primary activation (mouse click or tap).
    Click,

    /// Viewport was resized.
    Resize(Size),

    /// The page or an ancestor scrolled.
    Scroll,
}

impl Event {
    /// Shorthand for a key press.
    #[must_use]
    pub const fn key(code: KeyCode) -> Self {
        Self::Key(KeyEvent::new(code))
    }
}

/// Pointer transitions relevant to hover tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Pointer moved onto the element.
    Enter,
    /// Pointer moved off the element.
    Leave,
}

/// Touch lifecycle phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    Start,
    End,
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Whether this event is a press or auto-repeat (not a release).
    #[must_use]
    pub const fn is_press(&self) -> bool {
        !matches!(self.kind, KeyEventKind::Release)
    }

    /// Enter or Space: the keys that activate a button-like control.
    #[must_use]
    pub const fn is_activation(&self) -> bool {
        matches!(self.code, KeyCode::Enter | KeyCode::Char(' '))
    }
}

/// Key codes for keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),

    /// Enter/Return key.
    Enter,

    /// Escape key.
    Escape,

    /// Tab key.
    Tab,

    /// Home key.
    Home,

    /// End key.
    End,

    /// Up arrow key.
    Up,

    /// Down arrow key.
    Down,

    /// Left arrow key.
    Left,

    /// Right arrow key.
    Right,
}

impl KeyCode {
    /// Map a DOM `KeyboardEvent.key` value to a key code.
    ///
    /// Returns `None` for keys the widgets never react to.
    #[must_use]
    pub fn from_key_name(name: &str) -> Option<Self> {
        let code = match name {
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            "Home" => Self::Home,
            "End" => Self::End,
            "ArrowUp" => Self::Up,
            "ArrowDown" => Self::Down,
            "ArrowLeft" => Self::Left,
            "ArrowRight" => Self::Right,
            " " | "Spacebar" => Self::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => return None,
                }
            }
        };
        Some(code)
    }
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,

    /// Key is being held (repeat event).
    Repeat,

    /// Key was released.
    Release,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_defaults_to_press() {
        let ev = KeyEvent::new(KeyCode::Enter);
        assert_eq!(ev.kind, KeyEventKind::Press);
        assert!(ev.is_press());
    }

    #[test]
    fn release_is_not_press() {
        let ev = KeyEvent::new(KeyCode::Enter).with_kind(KeyEventKind::Release);
        assert!(!ev.is_press());
        let ev = KeyEvent::new(KeyCode::Enter).with_kind(KeyEventKind::Repeat);
        assert!(ev.is_press());
    }

    #[test]
    fn activation_keys() {
        assert!(KeyEvent::new(KeyCode::Enter).is_activation());
        assert!(KeyEvent::new(KeyCode::Char(' ')).is_activation());
        assert!(!KeyEvent::new(KeyCode::Char('a')).is_activation());
        assert!(!KeyEvent::new(KeyCode::Escape).is_activation());
    }

    #[test]
    fn dom_key_names_map_to_codes() {
        assert_eq!(KeyCode::from_key_name("ArrowRight"), Some(KeyCode::Right));
        assert_eq!(KeyCode::from_key_name("ArrowUp"), Some(KeyCode::Up));
        assert_eq!(KeyCode::from_key_name(" "), Some(KeyCode::Char(' ')));
        assert_eq!(KeyCode::from_key_name("Esc"), Some(KeyCode::Escape));
        assert_eq!(KeyCode::from_key_name("q"), Some(KeyCode::Char('q')));
        assert_eq!(KeyCode::from_key_name("F5"), None);
        assert_eq!(KeyCode::from_key_name(""), None);
    }
}
