#![forbid(unsafe_code)]

//! Tunable timings and tooltip geometry as data.
//!
//! [`PitchConfig`] collects every constant the widgets use into one struct
//! that can be loaded from TOML or JSON at startup. Missing sections and
//! fields fall back to their defaults, so a partial file only overrides what
//! it names.
//!
//! ```toml
//! [tooltip]
//! margin = 12.0
//! show_delay_ms = 250
//!
//! [layout]
//! stagger_ms = 60
//! ```
//!
//! ```rust,ignore
//! let config = PitchConfig::from_toml_file("pitchside.toml")?;
//! let layout = config.apply(PitchLayout::new(None, None));
//! ```
//!
//! # Defaults
//!
//! `PitchConfig::default()` reproduces the widgets' built-in behavior.

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use pitchside_core::geometry::Size;
use pitchside_widgets::{CardTimings, IntroTimings, LayoutTimings, PitchLayout, TooltipConfig};

/// Upper bound for every millisecond setting.
pub const MAX_TIMING_MS: u64 = 60_000;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct PitchConfig {
    /// Tooltip placement and timing.
    pub tooltip: TooltipSection,
    /// Partner card animation timing.
    pub card: CardSection,
    /// Pitch entrance timing.
    pub layout: LayoutSection,
    /// Intro splash timing.
    pub intro: IntroSection,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct TooltipSection {
    pub margin: f32,
    pub arrow_size: f32,
    pub show_delay_ms: u64,
    pub hide_grace_ms: u64,
    pub estimated_width: f32,
    pub estimated_height: f32,
}

impl Default for TooltipSection {
    fn default() -> Self {
        let d = TooltipConfig::default();
        Self {
            margin: d.margin,
            arrow_size: d.arrow_size,
            show_delay_ms: d.show_delay_ms,
            hide_grace_ms: d.hide_grace_ms,
            estimated_width: d.estimated_size.width,
            estimated_height: d.estimated_size.height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct CardSection {
    pub pulse_ms: u64,
    pub clicked_ms: u64,
    pub touch_clear_ms: u64,
}

impl Default for CardSection {
    fn default() -> Self {
        let d = CardTimings::default();
        Self {
            pulse_ms: d.pulse_ms,
            clicked_ms: d.clicked_ms,
            touch_clear_ms: d.touch_clear_ms,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct LayoutSection {
    pub load_delay_ms: u64,
    pub stagger_ms: u64,
}

impl Default for LayoutSection {
    fn default() -> Self {
        let d = LayoutTimings::default();
        Self {
            load_delay_ms: d.load_delay_ms,
            stagger_ms: d.stagger_ms,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct IntroSection {
    pub show_on_load: bool,
    pub hold_ms: u64,
    pub fade_ms: u64,
}

impl Default for IntroSection {
    fn default() -> Self {
        let d = IntroTimings::default();
        Self {
            show_on_load: true,
            hold_ms: d.hold_ms,
            fade_ms: d.fade_ms,
        }
    }
}

impl PitchConfig {
    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Validate all parameters.
    ///
    /// Returns a list of problems. An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.tooltip.margin.is_nan() || self.tooltip.margin < 0.0 {
            errors.push(format!(
                "tooltip.margin must be >= 0, got {}",
                self.tooltip.margin
            ));
        }
        if self.tooltip.arrow_size.is_nan() || self.tooltip.arrow_size < 0.0 {
            errors.push(format!(
                "tooltip.arrow_size must be >= 0, got {}",
                self.tooltip.arrow_size
            ));
        }
        let (w, h) = (self.tooltip.estimated_width, self.tooltip.estimated_height);
        if w.is_nan() || h.is_nan() || w <= 0.0 || h <= 0.0 {
            errors.push(format!(
                "tooltip estimated size must be positive, got {w}x{h}"
            ));
        }

        let timings = [
            ("tooltip.show_delay_ms", self.tooltip.show_delay_ms),
            ("tooltip.hide_grace_ms", self.tooltip.hide_grace_ms),
            ("card.pulse_ms", self.card.pulse_ms),
            ("card.clicked_ms", self.card.clicked_ms),
            ("card.touch_clear_ms", self.card.touch_clear_ms),
            ("layout.load_delay_ms", self.layout.load_delay_ms),
            ("layout.stagger_ms", self.layout.stagger_ms),
            ("intro.hold_ms", self.intro.hold_ms),
            ("intro.fade_ms", self.intro.fade_ms),
        ];
        for (name, ms) in timings {
            if ms > MAX_TIMING_MS {
                errors.push(format!("{name} must be <= {MAX_TIMING_MS}, got {ms}"));
            }
        }

        if self.card.clicked_ms < self.card.pulse_ms {
            errors.push(format!(
                "card.clicked_ms ({}) must be >= card.pulse_ms ({})",
                self.card.clicked_ms, self.card.pulse_ms
            ));
        }

        if self.intro.show_on_load && self.intro.hold_ms == 0 {
            errors.push("intro.hold_ms must be > 0 when the intro is shown".into());
        }

        errors
    }

    /// Like [`validate`](Self::validate), as a `Result`.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Build a [`TooltipConfig`].
    #[must_use]
    pub fn to_tooltip_config(&self) -> TooltipConfig {
        TooltipConfig {
            margin: self.tooltip.margin,
            arrow_size: self.tooltip.arrow_size,
            show_delay_ms: self.tooltip.show_delay_ms,
            hide_grace_ms: self.tooltip.hide_grace_ms,
            estimated_size: Size::new(self.tooltip.estimated_width, self.tooltip.estimated_height),
        }
    }

    /// Build [`CardTimings`].
    #[must_use]
    pub fn to_card_timings(&self) -> CardTimings {
        CardTimings {
            pulse_ms: self.card.pulse_ms,
            clicked_ms: self.card.clicked_ms,
            touch_clear_ms: self.card.touch_clear_ms,
        }
    }

    /// Build [`LayoutTimings`].
    #[must_use]
    pub fn to_layout_timings(&self) -> LayoutTimings {
        LayoutTimings {
            load_delay_ms: self.layout.load_delay_ms,
            stagger_ms: self.layout.stagger_ms,
        }
    }

    /// Build [`IntroTimings`].
    #[must_use]
    pub fn to_intro_timings(&self) -> IntroTimings {
        IntroTimings {
            hold_ms: self.intro.hold_ms,
            fade_ms: self.intro.fade_ms,
        }
    }

    /// Apply every layout-level setting to a freshly mounted layout.
    #[must_use]
    pub fn apply(&self, layout: PitchLayout) -> PitchLayout {
        layout
            .timings(self.to_layout_timings())
            .card_timings(self.to_card_timings())
            .tooltip_config(self.to_tooltip_config())
    }
}

/// Errors that can occur when loading a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_widgets() {
        let config = PitchConfig::default();
        assert_eq!(config.to_tooltip_config(), TooltipConfig::default());
        assert_eq!(config.to_card_timings(), CardTimings::default());
        assert_eq!(config.to_layout_timings(), LayoutTimings::default());
        assert_eq!(config.to_intro_timings(), IntroTimings::default());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn zero_margin_is_allowed() {
        let mut config = PitchConfig::default();
        config.tooltip.margin = 0.0;
        assert!(config.validate().is_empty());
    }

    #[test]
    fn negative_margin_is_rejected() {
        let mut config = PitchConfig::default();
        config.tooltip.margin = -1.0;
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("tooltip.margin"));
    }

    #[test]
    fn nan_arrow_is_rejected() {
        let mut config = PitchConfig::default();
        config.tooltip.arrow_size = f32::NAN;
        assert!(config.validate()[0].contains("arrow_size"));
    }

    #[test]
    fn clicked_shorter_than_pulse_is_rejected() {
        let mut config = PitchConfig::default();
        config.card.clicked_ms = 100;
        assert!(matches!(
            config.validated(),
            Err(ConfigError::Validation(errors)) if errors.len() == 1
        ));
    }

    #[test]
    fn oversized_timings_are_rejected() {
        let mut config = PitchConfig::default();
        config.layout.stagger_ms = 9_000_000_000_000_000_000;
        config.intro.fade_ms = MAX_TIMING_MS + 1;
        let errors = config.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("layout.stagger_ms must be <= 60000"));
        assert!(errors[1].starts_with("intro.fade_ms"));

        config.layout.stagger_ms = MAX_TIMING_MS;
        config.intro.fade_ms = MAX_TIMING_MS;
        assert!(config.validate().is_empty());
    }

    #[test]
    fn hidden_intro_may_have_zero_hold() {
        let mut config = PitchConfig::default();
        config.intro.show_on_load = false;
        config.intro.hold_ms = 0;
        assert!(config.validate().is_empty());
    }

    #[cfg(feature = "config")]
    #[test]
    fn partial_toml_keeps_defaults() {
        let config = PitchConfig::from_toml_str(
            r#"
            [tooltip]
            margin = 12.0

            [layout]
            stagger_ms = 60
            "#,
        )
        .unwrap();
        assert_eq!(config.tooltip.margin, 12.0);
        assert_eq!(config.tooltip.arrow_size, 8.0);
        assert_eq!(config.layout.stagger_ms, 60);
        assert_eq!(config.layout.load_delay_ms, 100);
        assert_eq!(config.card, CardSection::default());
    }

    #[cfg(feature = "config")]
    #[test]
    fn empty_json_is_default() {
        let config = PitchConfig::from_json_str("{}").unwrap();
        assert_eq!(config, PitchConfig::default());
    }

    #[cfg(feature = "config")]
    #[test]
    fn malformed_toml_reports_parse_error() {
        let err = PitchConfig::from_toml_str("[tooltip\nmargin = ").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
        assert!(err.to_string().starts_with("TOML parse error"));
    }

    #[cfg(feature = "config")]
    #[test]
    fn missing_file_is_io_error() {
        let err = PitchConfig::from_json_file("/nonexistent/pitchside.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
