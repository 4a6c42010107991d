#![forbid(unsafe_code)]

//! Formation pitch widgets.
//!
//! Every widget here is headless: it consumes [`pitchside_core::event::Event`]s,
//! advances its timers on `tick(elapsed)`, and describes itself as a plain view
//! model for a host renderer to draw.
//!
//! - [`formation`]: positions, formations, partners, validation, the 4-4-2 table
//! - [`occupants`]: slot-id to partner lookup
//! - [`tooltip`]: viewport-safe placement and tooltip state
//! - [`partner_card`]: one interactive slot
//! - [`pitch_layout`]: the formation as a roving-focus grid with announcements
//! - [`partner_info`]: the details panel for the current selection
//! - [`intro`]: the timed splash overlay

pub mod announcer;
pub mod focus;
pub mod formation;
pub mod intro;
pub mod occupants;
pub mod partner_card;
pub mod partner_info;
pub mod pitch_background;
pub mod pitch_layout;
pub mod tooltip;

pub use announcer::{LiveAnnouncer, Politeness};
pub use focus::{FocusHandle, NavDirection, RovingFocus};
pub use formation::{
    Formation, Partner, Position, ValidationError, default_formation, formation_by_name,
    validate_formation, validate_partner, validate_position,
};
pub use intro::{IntroPhase, IntroSplash, IntroTimings};
pub use occupants::OccupantMap;
pub use partner_card::{CardSignal, CardTimings, CardView, PartnerCard};
pub use partner_info::PartnerInformation;
pub use pitch_background::PitchBackground;
pub use pitch_layout::{LayoutOutcome, LayoutSignal, LayoutTimings, PitchLayout, PitchView};
pub use tooltip::{PositionTooltip, Side, TooltipConfig, TooltipPlacement, compute_placement};
