#![forbid(unsafe_code)]

//! Full-screen intro splash shown once on page load.
//!
//! The splash holds for a fixed time, fades out, and then stops rendering.
//! Both phases are [`Delay`]s owned here and cancelled by
//! [`IntroSplash::skip`].

use pitchside_core::timer::{Delay, millis};
use web_time::Duration;

/// Splash timing, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroTimings {
    /// Fully visible, animating.
    pub hold_ms: u64,
    /// Fading out.
    pub fade_ms: u64,
}

impl Default for IntroTimings {
    fn default() -> Self {
        Self {
            hold_ms: 3000,
            fade_ms: 500,
        }
    }
}

/// Current phase of the splash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    Animating,
    FadingOut,
    Hidden,
}

#[derive(Debug, Clone)]
pub struct IntroSplash {
    phase: IntroPhase,
    timings: IntroTimings,
    hold: Delay,
    fade: Delay,
}

impl IntroSplash {
    /// Start the splash, or start hidden when `show_on_load` is false.
    pub fn new(show_on_load: bool, timings: IntroTimings) -> Self {
        if show_on_load {
            Self {
                phase: IntroPhase::Animating,
                timings,
                hold: Delay::armed(millis(timings.hold_ms)),
                fade: Delay::idle(),
            }
        } else {
            Self {
                phase: IntroPhase::Hidden,
                timings,
                hold: Delay::idle(),
                fade: Delay::idle(),
            }
        }
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    /// Whether the splash still renders.
    pub fn is_visible(&self) -> bool {
        self.phase != IntroPhase::Hidden
    }

    /// Opacity target for the overlay: 1 while animating, 0 otherwise.
    pub fn opacity(&self) -> f32 {
        match self.phase {
            IntroPhase::Animating => 1.0,
            IntroPhase::FadingOut | IntroPhase::Hidden => 0.0,
        }
    }

    /// Advance both phases. Time past the end of the hold counts toward the
    /// fade, so one coarse tick can run the whole sequence.
    pub fn tick(&mut self, elapsed: Duration) -> IntroPhase {
        let mut elapsed = elapsed;
        if self.hold.is_pending() {
            let hold_left = self.hold.remaining();
            if !self.hold.tick(elapsed) {
                return self.phase;
            }
            self.phase = IntroPhase::FadingOut;
            self.fade.arm(millis(self.timings.fade_ms));
            elapsed = elapsed.saturating_sub(hold_left);
        }
        if self.fade.tick(elapsed) {
            self.phase = IntroPhase::Hidden;
        }
        self.phase
    }

    /// Hide immediately and cancel both timers.
    pub fn skip(&mut self) {
        self.hold.cancel();
        self.fade.cancel();
        self.phase = IntroPhase::Hidden;
    }
}
