#![forbid(unsafe_code)]

//! Static pitch artwork behind the slot grid.

/// Image source and accessible text for the pitch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchBackground {
    src: String,
}

impl Default for PitchBackground {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SRC)
    }
}

impl PitchBackground {
    pub const DEFAULT_SRC: &'static str = "/partnerpitch.png";
    const ALT: &'static str = "Football pitch background with field markings including center circle, penalty areas, goal areas, and corner arcs";
    const DESCRIPTION: &'static str = "A football pitch viewed from above with traditional field markings. The pitch includes a center circle, penalty areas on both ends, goal areas, corner arcs, and boundary lines. Partner positions will be displayed as cards overlaid on this pitch.";

    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into() }
    }

    pub fn view(&self) -> BackgroundView {
        BackgroundView {
            src: self.src.clone(),
            alt: Self::ALT,
            described_by: "pitch-description",
            description: Self::DESCRIPTION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundView {
    pub src: String,
    pub alt: &'static str,
    pub described_by: &'static str,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_artwork() {
        let view = PitchBackground::default().view();
        assert_eq!(view.src, "/partnerpitch.png");
        assert!(view.alt.starts_with("Football pitch background"));
        assert_eq!(view.described_by, "pitch-description");
    }

    #[test]
    fn custom_source() {
        assert_eq!(PitchBackground::new("/pitch.svg").view().src, "/pitch.svg");
    }
}
