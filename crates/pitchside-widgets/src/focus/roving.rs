#![forbid(unsafe_code)]

//! Roving tab stop over an ordered group.
//!
//! # Invariants
//!
//! - `current`, when set, is always `< len`.
//! - `Next`/`Prev` wrap, so `len` consecutive `Next` moves return to the start.
//! - With nothing focused, `Next` lands on the first member and `Prev` on the
//!   last.
//! - Exactly one member reports tab index `0`.

use pitchside_core::event::{KeyCode, KeyEvent};

/// Direction of a roving focus move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavDirection {
    Next,
    Prev,
    First,
    Last,
}

impl NavDirection {
    /// Map a key press to a direction.
    ///
    /// Right/Down go forward, Left/Up go back, Home/End jump to the ends.
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if !key.is_press() {
            return None;
        }
        match key.code {
            KeyCode::Right | KeyCode::Down => Some(Self::Next),
            KeyCode::Left | KeyCode::Up => Some(Self::Prev),
            KeyCode::Home => Some(Self::First),
            KeyCode::End => Some(Self::Last),
            _ => None,
        }
    }
}

/// Which member of an ordered group holds the tab stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RovingFocus {
    len: usize,
    current: Option<usize>,
}

impl RovingFocus {
    pub fn new(len: usize) -> Self {
        Self { len, current: None }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the focused member, if any.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Record that `index` received focus by other means (Tab, pointer).
    /// Out-of-range indices are ignored.
    pub fn set_current(&mut self, index: usize) {
        if index < self.len {
            self.current = Some(index);
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Resize the group, dropping focus if it fell off the end.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.current.is_some_and(|c| c >= len) {
            self.current = None;
        }
    }

    /// Target of a move in `dir`, without applying it.
    pub fn target(&self, dir: NavDirection) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let last = self.len - 1;
        let target = match (dir, self.current) {
            (NavDirection::First, _) => 0,
            (NavDirection::Last, _) => last,
            (NavDirection::Next, None) => 0,
            (NavDirection::Next, Some(i)) if i >= last => 0,
            (NavDirection::Next, Some(i)) => i + 1,
            (NavDirection::Prev, None) => last,
            (NavDirection::Prev, Some(0)) => last,
            (NavDirection::Prev, Some(i)) => i - 1,
        };
        Some(target)
    }

    /// Move in `dir` and return the new index.
    pub fn navigate(&mut self, dir: NavDirection) -> Option<usize> {
        let target = self.target(dir)?;
        self.current = Some(target);
        Some(target)
    }

    /// Tab index for member `index`: `0` for the tab stop, `-1` otherwise.
    ///
    /// The tab stop is the focused member, or the first one when none is.
    pub fn tab_index(&self, index: usize) -> i32 {
        if index == self.current.unwrap_or(0) {
            0
        } else {
            -1
        }
    }
}
