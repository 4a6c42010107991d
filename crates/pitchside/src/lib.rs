#![forbid(unsafe_code)]

//! Pitchside public facade crate.
//!
//! This crate provides the stable surface area for hosts. It re-exports the
//! common types from the internal crates, adds configuration loading and data
//! decoding, and offers a lightweight prelude.

pub mod config;
#[cfg(feature = "config")]
pub mod data;
pub mod error;
pub mod page;

// --- Core re-exports -------------------------------------------------------

pub use pitchside_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, PointerEventKind, TouchPhase,
};
pub use pitchside_core::geometry::{Rect, Size};
pub use pitchside_core::timer::{Delay, millis};

// --- Widget re-exports -----------------------------------------------------

pub use pitchside_widgets::{
    CardSignal, CardTimings, CardView, FocusHandle, Formation, IntroPhase, IntroSplash,
    IntroTimings, LayoutOutcome, LayoutSignal, LayoutTimings, LiveAnnouncer, OccupantMap,
    PartnerCard, Partner, PartnerInformation, PitchBackground, PitchLayout, PitchView, Position,
    PositionTooltip, Side, TooltipConfig, TooltipPlacement, ValidationError, compute_placement,
    default_formation, formation_by_name, validate_formation, validate_partner,
    validate_position,
};

// --- Facade types ----------------------------------------------------------

pub use config::{ConfigError, PitchConfig};
pub use error::{Error, Result};
pub use page::{PartnersPage, Selection};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Error, Event, Formation, KeyCode, KeyEvent, LayoutSignal, Partner, PartnersPage,
        PitchConfig, PitchLayout, PitchView, Position, Result,
    };

    pub use crate::{core, widgets};
}

pub use pitchside_core as core;
pub use pitchside_widgets as widgets;
