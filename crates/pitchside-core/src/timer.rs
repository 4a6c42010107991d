#![forbid(unsafe_code)]

//! One-shot, cancellable delays driven by explicit ticks.
//!
//! A [`Delay`] is the owned equivalent of a `setTimeout` handle: the widget
//! that schedules it also holds it, supersedes it by re-arming, and cancels
//! it on unmount. Nothing fires behind the owner's back because time only
//! advances when the owner calls [`Delay::tick`].
//!
//! # Example
//! ```
//! use pitchside_core::timer::Delay;
//! use web_time::Duration;
//!
//! let mut delay = Delay::idle();
//! delay.arm(Duration::from_millis(300));
//! assert!(!delay.tick(Duration::from_millis(200)));
//! assert!(delay.tick(Duration::from_millis(100)));
//! // Already fired: further ticks are no-ops.
//! assert!(!delay.tick(Duration::from_millis(100)));
//! ```

use web_time::Duration;

/// Lifecycle of a [`Delay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DelayState {
    /// Never armed, or reset.
    #[default]
    Idle,
    /// Counting down.
    Pending,
    /// Reached zero; the owner has observed the firing.
    Fired,
    /// Cancelled before reaching zero.
    Cancelled,
}

/// A one-shot countdown owned by a widget.
#[derive(Debug, Clone, Default)]
pub struct Delay {
    remaining: Duration,
    state: DelayState,
}

impl Delay {
    /// A delay that is not counting.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            remaining: Duration::ZERO,
            state: DelayState::Idle,
        }
    }

    /// A delay already counting down from `duration`.
    #[must_use]
    pub fn armed(duration: Duration) -> Self {
        let mut delay = Self::idle();
        delay.arm(duration);
        delay
    }

    /// Start (or restart) the countdown. Any pending countdown is superseded.
    pub fn arm(&mut self, duration: Duration) {
        self.remaining = duration;
        self.state = DelayState::Pending;
    }

    /// Stop a pending countdown. Returns `true` if something was cancelled.
    pub fn cancel(&mut self) -> bool {
        if self.state == DelayState::Pending {
            self.state = DelayState::Cancelled;
            self.remaining = Duration::ZERO;
            true
        } else {
            false
        }
    }

    /// Advance by `elapsed`. Returns `true` exactly once, on the tick that
    /// brings the countdown to zero.
    ///
    /// A zero-length delay fires on the first tick, including `tick(ZERO)`.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if self.state != DelayState::Pending {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(elapsed);
        if self.remaining.is_zero() {
            self.state = DelayState::Fired;
            true
        } else {
            false
        }
    }

    /// Whether the countdown is running.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state == DelayState::Pending
    }

    /// Time left before firing (zero unless pending).
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> DelayState {
        self.state
    }
}

/// Convert a millisecond setting to a [`Duration`].
#[inline]
#[must_use]
pub const fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
