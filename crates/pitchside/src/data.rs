#![forbid(unsafe_code)]

//! Decoding caller-supplied formation and partner JSON.
//!
//! Formations are validated on decode, since a host usually wants to know
//! about a broken formation file rather than silently get the 4-4-2.
//! Partner lists are only decoded: [`PitchLayout`](pitchside_widgets::PitchLayout)
//! drops individually invalid partners when it mounts them.

use pitchside_widgets::formation::check_formation;
use pitchside_widgets::{Formation, Partner};

use crate::error::Result;

/// Decode and validate a formation.
///
/// ```
/// let json = r#"{"name": "x", "positions": []}"#;
/// let err = pitchside::data::formation_from_json(json).unwrap_err();
/// assert_eq!(err.error_type(), "validation");
/// ```
pub fn formation_from_json(json: &str) -> Result<Formation> {
    let formation: Formation = serde_json::from_str(json)?;
    check_formation(&formation)?;
    Ok(formation)
}

/// Decode a partner list.
pub fn partners_from_json(json: &str) -> Result<Vec<Partner>> {
    Ok(serde_json::from_str(json)?)
}

/// Encode a formation, e.g. to seed an editable file from the default.
pub fn formation_to_json(formation: &Formation) -> Result<String> {
    Ok(serde_json::to_string_pretty(formation)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitchside_widgets::default_formation;

    #[test]
    fn default_formation_survives_json() {
        let json = formation_to_json(default_formation()).unwrap();
        let back = formation_from_json(&json).unwrap();
        assert_eq!(&back, default_formation());
    }

    #[test]
    fn optional_partner_fields_may_be_absent() {
        let partners = partners_from_json(
            r#"[{"id": "poku-kesse", "name": "Poku Kesse", "position": "st2", "logo": "/pkafro.png"}]"#,
        )
        .unwrap();
        assert_eq!(partners.len(), 1);
        assert_eq!(partners[0].logo.as_deref(), Some("/pkafro.png"));
        assert!(partners[0].website.is_none());
    }

    #[test]
    fn wrong_types_are_data_errors() {
        let err = partners_from_json(r#"[{"id": 7}]"#).unwrap_err();
        assert_eq!(err.error_type(), "data");
    }

    #[test]
    fn duplicate_ids_fail_validation() {
        let mut formation = default_formation().clone();
        formation.positions[1].id = "gk".into();
        let json = formation_to_json(&formation).unwrap();
        let err = formation_from_json(&json).unwrap_err();
        assert!(err.to_string().contains("duplicate"), "{err}");
    }
}
