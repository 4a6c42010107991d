#![forbid(unsafe_code)]

//! Live-region announcer.
//!
//! Holds the single line of text exposed through an `aria-live="polite"`
//! status region. Each announcement replaces the previous one; nothing is
//! queued, so a burst of focus changes only voices the last.

/// Politeness level of a live region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Politeness {
    #[default]
    Polite,
    Assertive,
}

impl Politeness {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Polite => "polite",
            Self::Assertive => "assertive",
        }
    }
}

/// Last-write-wins status text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveAnnouncer {
    text: String,
    revision: u64,
    politeness: Politeness,
}

impl LiveAnnouncer {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn politeness(mut self, politeness: Politeness) -> Self {
        self.politeness = politeness;
        self
    }

    /// Replace the current text.
    pub fn announce(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.revision = self.revision.wrapping_add(1);
        #[cfg(feature = "tracing")]
        tracing::trace!(message = "announce", revision = self.revision, text = %self.text);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Bumped on every announcement, including repeats of the same text, so
    /// a host can re-voice identical messages.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn level(&self) -> Politeness {
        self.politeness
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}
