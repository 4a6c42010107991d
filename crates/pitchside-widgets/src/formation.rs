#![forbid(unsafe_code)]

//! Formation data model, the built-in 4-4-2 table, and validation.
//!
//! A [`Formation`] is a named set of slots ([`Position`]s) laid out in
//! percentage coordinates over the pitch: `x` runs left to right, `y` runs
//! from the opponent's goal (0) to our own goal (100). A [`Partner`] occupies
//! a slot by naming its id; the partner never owns the position.
//!
//! Validation comes in two flavors. The `check_*` functions report the first
//! reason a value is invalid; the `validate_*` functions collapse that to a
//! boolean for callers that only decide between "use it" and "fall back".

use std::fmt;
use std::sync::LazyLock;

use ahash::AHashSet;

/// Number of slots every formation must have.
pub const FORMATION_SIZE: usize = 11;

/// Lowest legal coordinate, in percent.
pub const COORD_MIN: f64 = 0.0;
/// Highest legal coordinate, in percent.
pub const COORD_MAX: f64 = 100.0;

/// One slot on the pitch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Unique (within a formation) slot id, e.g. `"st1"`.
    pub id: String,
    /// Percentage from the left edge.
    pub x: f64,
    /// Percentage from the top edge.
    pub y: f64,
    /// Human role label, e.g. `"Striker"`.
    pub role: String,
    /// Longer text shown in the slot tooltip.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
}

impl Position {
    /// Create a position without a description.
    pub fn new(id: impl Into<String>, x: f64, y: f64, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            role: role.into(),
            description: None,
        }
    }

    /// Attach tooltip text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Tooltip text, if present and non-empty.
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// A named arrangement of slots.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Formation {
    /// Display name, e.g. `"4-4-2"`.
    pub name: String,
    /// Slots in navigation order.
    pub positions: Vec<Position>,
}

impl Formation {
    pub fn new(name: impl Into<String>, positions: Vec<Position>) -> Self {
        Self {
            name: name.into(),
            positions,
        }
    }

    /// Look up a slot by id.
    pub fn position(&self, id: &str) -> Option<&Position> {
        self.positions.iter().find(|p| p.id == id)
    }

    /// Index of a slot in navigation order.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.positions.iter().position(|p| p.id == id)
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// An occupant assigned to a slot by id reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partner {
    pub id: String,
    pub name: String,
    /// Id of the [`Position`] this partner occupies.
    pub position: String,
    /// Logo image URL.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub logo: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
    /// Website URL opened on activation.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub website: Option<String>,
}

impl Partner {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position: position.into(),
            logo: None,
            description: None,
            website: None,
        }
    }

    #[must_use]
    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    /// Whether activating this partner navigates to a website.
    pub fn has_website(&self) -> bool {
        self.website.as_deref().is_some_and(|w| !w.is_empty())
    }
}

// ── Validation ──────────────────────────────────────────────────────────

/// Which coordinate failed a range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Why a position, formation, or partner is invalid.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Position or partner id is empty.
    EmptyId,
    /// Position role is empty.
    EmptyRole,
    /// A coordinate is outside `[0, 100]` (or NaN).
    CoordinateOutOfRange { axis: Axis, value: f64 },
    /// Formation or partner name is empty.
    EmptyName,
    /// Formation does not have exactly [`FORMATION_SIZE`] positions.
    WrongPositionCount { expected: usize, actual: usize },
    /// Two positions share an id.
    DuplicateId(String),
    /// Partner does not reference a position.
    EmptyPositionRef,
    /// A position inside a formation failed.
    Position {
        index: usize,
        source: Box<ValidationError>,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => f.write_str("id must not be empty"),
            Self::EmptyRole => f.write_str("role must not be empty"),
            Self::CoordinateOutOfRange { axis, value } => {
                write!(f, "{axis} coordinate {value} outside [0, 100]")
            }
            Self::EmptyName => f.write_str("name must not be empty"),
            Self::WrongPositionCount { expected, actual } => {
                write!(f, "expected {expected} positions, found {actual}")
            }
            Self::DuplicateId(id) => write!(f, "duplicate position id '{id}'"),
            Self::EmptyPositionRef => f.write_str("partner position reference must not be empty"),
            Self::Position { index, source } => write!(f, "position {index}: {source}"),
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Position { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

fn check_coord(axis: Axis, value: f64) -> Result<(), ValidationError> {
    // Written as a positive range test so NaN fails.
    if (COORD_MIN..=COORD_MAX).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::CoordinateOutOfRange { axis, value })
    }
}

/// Report the first reason `position` is invalid.
pub fn check_position(position: &Position) -> Result<(), ValidationError> {
    if position.id.is_empty() {
        return Err(ValidationError::EmptyId);
    }
    check_coord(Axis::X, position.x)?;
    check_coord(Axis::Y, position.y)?;
    if position.role.is_empty() {
        return Err(ValidationError::EmptyRole);
    }
    Ok(())
}

/// Report the first reason `formation` is invalid.
pub fn check_formation(formation: &Formation) -> Result<(), ValidationError> {
    if formation.name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if formation.positions.len() != FORMATION_SIZE {
        return Err(ValidationError::WrongPositionCount {
            expected: FORMATION_SIZE,
            actual: formation.positions.len(),
        });
    }
    for (index, position) in formation.positions.iter().enumerate() {
        check_position(position).map_err(|source| ValidationError::Position {
            index,
            source: Box::new(source),
        })?;
    }
    let mut seen = AHashSet::with_capacity(formation.positions.len());
    for position in &formation.positions {
        if !seen.insert(position.id.as_str()) {
            return Err(ValidationError::DuplicateId(position.id.clone()));
        }
    }
    Ok(())
}

/// Report the first reason `partner` is invalid.
///
/// Optional fields are typed, so only the required strings are checked.
pub fn check_partner(partner: &Partner) -> Result<(), ValidationError> {
    if partner.id.is_empty() {
        return Err(ValidationError::EmptyId);
    }
    if partner.name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if partner.position.is_empty() {
        return Err(ValidationError::EmptyPositionRef);
    }
    Ok(())
}

/// Non-empty id and role, both coordinates in `[0, 100]`.
pub fn validate_position(position: &Position) -> bool {
    check_position(position).is_ok()
}

/// Non-empty name, exactly eleven valid positions, unique ids.
pub fn validate_formation(formation: &Formation) -> bool {
    check_formation(formation).is_ok()
}

/// Non-empty id, name, and position reference.
pub fn validate_partner(partner: &Partner) -> bool {
    check_partner(partner).is_ok()
}

// ── Built-in formations ─────────────────────────────────────────────────

struct Slot {
    id: &'static str,
    x: f64,
    y: f64,
    role: &'static str,
    description: &'static str,
}

static FOUR_FOUR_TWO: [Slot; FORMATION_SIZE] = [
    Slot {
        id: "gk",
        x: 50.0,
        y: 90.0,
        role: "Goalkeeper",
        description: "Security & Reliability Partner: Partners providing foundational security, reliability, and trust infrastructure for the platform. This includes payment processors, security providers, and compliance partners.",
    },
    Slot {
        id: "lb",
        x: 25.0,
        y: 75.0,
        role: "Left Back",
        description: "Content Distribution Partner: Ensures reliable delivery of African football content to global audiences through streaming infrastructure and content delivery networks.",
    },
    Slot {
        id: "cb1",
        x: 40.0,
        y: 75.0,
        role: "Centre Back",
        description: "Technology Infrastructure Partner: Provides robust cloud infrastructure, hosting services, and technical foundation for the streaming platform.",
    },
    Slot {
        id: "cb2",
        x: 60.0,
        y: 75.0,
        role: "Centre Back",
        description: "Data Analytics Partner: Delivers insights into viewer behavior, content performance, and audience engagement through advanced analytics solutions.",
    },
    Slot {
        id: "rb",
        x: 75.0,
        y: 75.0,
        role: "Right Back",
        description: "Customer Support Partner: Ensures excellent user experience through customer service, technical support, and user engagement solutions.",
    },
    Slot {
        id: "lm",
        x: 25.0,
        y: 50.0,
        role: "Left Midfielder",
        description: "Social Media Partner: Connects us with football fans through social platforms, community management, and digital engagement strategies.",
    },
    Slot {
        id: "cm1",
        x: 40.0,
        y: 50.0,
        role: "Central Midfielder",
        description: "Marketing Partner: Drives brand awareness, user acquisition, and promotional campaigns to reach African football fans worldwide.",
    },
    Slot {
        id: "cm2",
        x: 60.0,
        y: 50.0,
        role: "Central Midfielder",
        description: "Community Engagement Partner: Builds and nurtures the fan community through events, forums, and interactive experiences.",
    },
    Slot {
        id: "rm",
        x: 75.0,
        y: 50.0,
        role: "Right Midfielder",
        description: "Content Creation Partner: Produces exclusive content, documentaries, and programming about African football and culture.",
    },
    Slot {
        id: "st1",
        x: 40.0,
        y: 20.0,
        role: "Striker",
        description: "Growth & Expansion Partner: Drives market expansion, user growth, and business development into new territories and demographics.",
    },
    Slot {
        id: "st2",
        x: 60.0,
        y: 20.0,
        role: "Striker",
        description: "Innovation & Technology Partner: Brings cutting-edge technology, AI features, and innovative solutions to enhance the football viewing experience.",
    },
];

/// Name of the built-in default formation.
pub const DEFAULT_FORMATION_NAME: &str = "4-4-2";

static DEFAULT_FORMATION: LazyLock<Formation> = LazyLock::new(|| {
    Formation::new(
        DEFAULT_FORMATION_NAME,
        FOUR_FOUR_TWO
            .iter()
            .map(|s| Position::new(s.id, s.x, s.y, s.role).with_description(s.description))
            .collect(),
    )
});

/// The built-in 4-4-2, goalkeeper first, strikers last.
pub fn default_formation() -> &'static Formation {
    &DEFAULT_FORMATION
}

/// Look up a built-in formation by name.
pub fn formation_by_name(name: &str) -> Option<&'static Formation> {
    match name {
        DEFAULT_FORMATION_NAME => Some(default_formation()),
        _ => None,
    }
}

/// Names of every built-in formation.
pub fn formation_names() -> &'static [&'static str] {
    &[DEFAULT_FORMATION_NAME]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(id: &str, x: f64, y: f64) -> Position {
        Position::new(id, x, y, "Role")
    }

    fn eleven() -> Vec<Position> {
        (0..FORMATION_SIZE)
            .map(|i| pos(&format!("p{i}"), i as f64 * 9.0, 50.0))
            .collect()
    }

    #[test]
    fn default_formation_is_valid() {
        let f = default_formation();
        assert_eq!(f.name, "4-4-2");
        assert_eq!(f.len(), FORMATION_SIZE);
        assert!(validate_formation(f));
        assert!(f.positions.iter().all(|p| p.description_text().is_some()));
    }

    #[test]
    fn default_formation_order_and_lookup() {
        let f = default_formation();
        assert_eq!(f.positions[0].id, "gk");
        assert_eq!(f.positions[10].id, "st2");
        assert_eq!(f.index_of("st1"), Some(9));
        assert_eq!(f.position("cb2").map(|p| p.role.as_str()), Some("Centre Back"));
        assert!(f.position("nope").is_none());
    }

    #[test]
    fn registry_lookup() {
        assert!(formation_by_name("4-4-2").is_some());
        assert!(formation_by_name("4-3-3").is_none());
        assert_eq!(formation_names(), &["4-4-2"]);
    }

    #[test]
    fn position_bounds_are_inclusive() {
        assert!(validate_position(&pos("a", 0.0, 0.0)));
        assert!(validate_position(&pos("a", 100.0, 100.0)));
        assert!(!validate_position(&pos("a", -0.1, 50.0)));
        assert!(!validate_position(&pos("a", 50.0, 100.5)));
        assert!(!validate_position(&pos("a", f64::NAN, 50.0)));
    }

    #[test]
    fn position_requires_id_and_role() {
        assert_eq!(check_position(&pos("", 1.0, 1.0)), Err(ValidationError::EmptyId));
        let no_role = Position::new("a", 1.0, 1.0, "");
        assert_eq!(check_position(&no_role), Err(ValidationError::EmptyRole));
    }

    #[test]
    fn formation_requires_eleven() {
        let mut positions = eleven();
        positions.pop();
        let f = Formation::new("short", positions);
        assert_eq!(
            check_formation(&f),
            Err(ValidationError::WrongPositionCount {
                expected: 11,
                actual: 10
            })
        );
    }

    #[test]
    fn formation_rejects_duplicates() {
        let mut positions = eleven();
        positions[5].id = "p0".into();
        let f = Formation::new("dupe", positions);
        assert_eq!(
            check_formation(&f),
            Err(ValidationError::DuplicateId("p0".into()))
        );
    }

    #[test]
    fn formation_reports_bad_position_index() {
        let mut positions = eleven();
        positions[3].y = 120.0;
        let err = check_formation(&Formation::new("bad", positions)).unwrap_err();
        assert!(matches!(err, ValidationError::Position { index: 3, .. }));
        assert_eq!(err.to_string(), "position 3: y coordinate 120 outside [0, 100]");
    }

    #[test]
    fn formation_requires_name() {
        assert!(!validate_formation(&Formation::new("", eleven())));
        assert!(validate_formation(&Formation::new("custom", eleven())));
    }

    #[test]
    fn partner_validation() {
        assert!(validate_partner(&Partner::new("a", "A", "gk")));
        assert_eq!(
            check_partner(&Partner::new("", "A", "gk")),
            Err(ValidationError::EmptyId)
        );
        assert_eq!(
            check_partner(&Partner::new("a", "", "gk")),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            check_partner(&Partner::new("a", "A", "")),
            Err(ValidationError::EmptyPositionRef)
        );
    }

    #[test]
    fn partner_website_flag() {
        let p = Partner::new("a", "A", "gk");
        assert!(!p.has_website());
        assert!(!p.clone().with_website("").has_website());
        assert!(p.with_website("https://example.com").has_website());
    }

    #[test]
    fn empty_description_counts_as_absent() {
        let p = pos("a", 1.0, 1.0).with_description("");
        assert_eq!(p.description_text(), None);
    }
}
