#![forbid(unsafe_code)]

//! Detail panel for the selected slot.

use crate::formation::{Partner, Position};

/// Contact address offered for vacant slots.
pub const PARTNERSHIP_MAILTO: &str =
    "mailto:partnerships@afroballconnect.com?subject=Partnership Inquiry";

/// What the panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartnerInformation {
    /// Nothing selected yet.
    Prompt { title: &'static str, body: &'static str },
    /// An occupied slot.
    Partner {
        role: String,
        name: String,
        logo: Option<String>,
        logo_alt: String,
        description: Option<String>,
        website: Option<String>,
    },
    /// A vacant slot.
    Opportunity {
        role: String,
        body: &'static str,
        cta_label: &'static str,
        cta_href: &'static str,
    },
}

impl PartnerInformation {
    /// Build the panel for a selection.
    pub fn for_selection(position: Option<&Position>, partner: Option<&Partner>) -> Self {
        let Some(position) = position else {
            return Self::Prompt {
                title: "Select a Position",
                body: "Click on any position in the formation to view details about the partner role or current partner.",
            };
        };
        match partner {
            Some(partner) => Self::Partner {
                role: position.role.clone(),
                name: partner.name.clone(),
                logo: partner.logo.clone(),
                logo_alt: format!("{} logo", partner.name),
                description: partner.description.clone(),
                website: partner.website.clone().filter(|w| !w.is_empty()),
            },
            None => Self::Opportunity {
                role: position.role.clone(),
                body: "This position is currently available for a strategic partner who can help us deliver the best African football experience.",
                cta_label: "Become Our Partner",
                cta_href: PARTNERSHIP_MAILTO,
            },
        }
    }
}
