#![forbid(unsafe_code)]

//! Tracing re-exports.
//!
//! Widgets log through `tracing` only when the `tracing` feature is enabled.
//! With the feature off this module is empty and every call site is compiled
//! out behind `#[cfg(feature = "tracing")]`.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, info, trace, warn};
