#![forbid(unsafe_code)]

//! Core: geometry, canonical input events, and deterministic timers.
//!
//! # Role in Pitchside
//! `pitchside-core` is the input layer. It owns the event vocabulary that a
//! host (browser bridge, test harness, terminal front end) feeds into the
//! widgets, the rectangle math used for floating placement, and the
//! tick-driven [`timer::Delay`] that replaces wall-clock callbacks.
//!
//! # How it fits in the system
//! `pitchside-widgets` consumes [`event::Event`] values and advances its
//! timers through `tick(elapsed)`. Nothing here touches a real clock, so the
//! same sequence of events and ticks always produces the same state.

pub mod event;
pub mod geometry;
pub mod logging;
pub mod timer;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, trace, warn};
