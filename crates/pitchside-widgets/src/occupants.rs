#![forbid(unsafe_code)]

//! Slot-id to occupant lookup.

use ahash::AHashMap;

use crate::formation::{Formation, Partner};

/// Keyed lookup from `Partner::position` to the partner in that slot.
///
/// Built from a partner list in one pass; when two partners name the same
/// slot the later one wins. The map is a pure function of its input and is
/// rebuilt rather than patched whenever the list changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OccupantMap {
    by_slot: AHashMap<String, Partner>,
}

impl OccupantMap {
    /// Build the lookup from `partners`.
    pub fn build(partners: &[Partner]) -> Self {
        let mut by_slot = AHashMap::with_capacity(partners.len());
        for partner in partners {
            by_slot.insert(partner.position.clone(), partner.clone());
        }
        Self { by_slot }
    }

    /// The occupant of `slot_id`, if any.
    pub fn get(&self, slot_id: &str) -> Option<&Partner> {
        self.by_slot.get(slot_id)
    }

    /// Number of occupied slot ids (including ids absent from any formation).
    pub fn len(&self) -> usize {
        self.by_slot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_slot.is_empty()
    }

    /// Slot ids of `formation` that have no occupant, in formation order.
    pub fn vacant<'a>(&'a self, formation: &'a Formation) -> impl Iterator<Item = &'a str> + 'a {
        formation
            .positions
            .iter()
            .map(|p| p.id.as_str())
            .filter(move |id| !self.by_slot.contains_key(*id))
    }
}
