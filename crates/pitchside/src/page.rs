#![forbid(unsafe_code)]

//! The partners page: intro splash, pitch, and detail panel wired together.
//!
//! [`PartnersPage`] owns a [`PitchLayout`] and remembers the last selected
//! slot. Selecting a slot never navigates away; the partner's website is only
//! offered as a link in the detail panel.

use pitchside_core::event::{Event, KeyEvent};
use pitchside_widgets::{
    Formation, IntroSplash, IntroTimings, LayoutOutcome, LayoutSignal, Partner, PartnerInformation,
    PitchLayout, PitchView, Position,
};
use web_time::Duration;

use crate::config::PitchConfig;

/// Current selection: the slot and its occupant, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub position: Position,
    pub partner: Option<Partner>,
}

#[derive(Debug)]
pub struct PartnersPage {
    layout: PitchLayout,
    intro: IntroSplash,
    selection: Option<Selection>,
    hovered: Option<Partner>,
}

impl PartnersPage {
    /// Mount with default configuration.
    pub fn new(formation: Option<Formation>, partners: Option<Vec<Partner>>) -> Self {
        Self::with_config(&PitchConfig::default(), formation, partners)
    }

    pub fn with_config(
        config: &PitchConfig,
        formation: Option<Formation>,
        partners: Option<Vec<Partner>>,
    ) -> Self {
        Self {
            layout: config.apply(PitchLayout::new(formation, partners)),
            intro: IntroSplash::new(config.intro.show_on_load, config.to_intro_timings()),
            selection: None,
            hovered: None,
        }
    }

    /// Replace the intro splash timing, restarting it.
    #[must_use]
    pub fn intro(mut self, show_on_load: bool, timings: IntroTimings) -> Self {
        self.intro = IntroSplash::new(show_on_load, timings);
        self
    }

    pub fn layout(&self) -> &PitchLayout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut PitchLayout {
        &mut self.layout
    }

    pub fn splash(&self) -> &IntroSplash {
        &self.intro
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Partner under the pointer or focus, if any.
    pub fn hovered(&self) -> Option<&Partner> {
        self.hovered.as_ref()
    }

    /// Detail panel content for the current selection.
    pub fn information(&self) -> PartnerInformation {
        match &self.selection {
            Some(sel) => PartnerInformation::for_selection(Some(&sel.position), sel.partner.as_ref()),
            None => PartnerInformation::for_selection(None, None),
        }
    }

    pub fn view(&self) -> PitchView {
        self.layout.view()
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> LayoutOutcome {
        let outcome = self.layout.handle_key(key);
        self.apply(&outcome.signals);
        outcome
    }

    pub fn handle_slot_event(&mut self, slot_id: &str, event: &Event) -> LayoutOutcome {
        let outcome = self.layout.handle_slot_event(slot_id, event);
        self.apply(&outcome.signals);
        outcome
    }

    pub fn handle_global(&mut self, event: &Event) {
        self.layout.handle_global(event);
    }

    pub fn tick(&mut self, elapsed: Duration) {
        self.intro.tick(elapsed);
        let signals = self.layout.tick(elapsed);
        self.apply(&signals);
    }

    pub fn unmount(&mut self) {
        self.intro.skip();
        self.layout.unmount();
    }

    fn apply(&mut self, signals: &[LayoutSignal]) {
        for signal in signals {
            match signal {
                LayoutSignal::Hover(partner) => self.hovered = partner.clone(),
                LayoutSignal::Select {
                    partner,
                    position_id,
                } => {
                    self.selection = self
                        .layout
                        .formation()
                        .position(position_id)
                        .cloned()
                        .map(|position| Selection {
                            position,
                            partner: partner.clone(),
                        });
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        message = "page.select",
                        slot = %position_id,
                        occupied = partner.is_some()
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitchside_core::event::KeyCode;
    use pitchside_core::timer::millis;
    use pitchside_widgets::IntroPhase;

    fn poku() -> Partner {
        Partner::new("poku-kesse", "Poku Kesse", "st2").with_logo("/pkafro.png")
    }

    #[test]
    fn starts_with_prompt() {
        let page = PartnersPage::new(None, Some(vec![poku()]));
        assert!(matches!(page.information(), PartnerInformation::Prompt { .. }));
        assert!(page.selection().is_none());
    }

    #[test]
    fn selecting_occupied_slot_shows_partner() {
        let mut page = PartnersPage::new(None, Some(vec![poku()]));
        page.handle_slot_event("st2", &Event::Click);
        let sel = page.selection().unwrap();
        assert_eq!(sel.position.id, "st2");
        match page.information() {
            PartnerInformation::Partner { name, website, .. } => {
                assert_eq!(name, "Poku Kesse");
                assert!(website.is_none());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn selecting_vacant_slot_shows_opportunity() {
        let mut page = PartnersPage::new(None, Some(vec![poku()]));
        page.handle_slot_event("rb", &Event::key(KeyCode::Char(' ')));
        match page.information() {
            PartnerInformation::Opportunity { role, .. } => assert_eq!(role, "Right Back"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn hover_tracks_focus() {
        let mut page = PartnersPage::new(None, Some(vec![poku()]));
        page.handle_slot_event("st2", &Event::Focus(true));
        assert_eq!(page.hovered(), Some(&poku()));
        page.handle_key(&KeyEvent::new(KeyCode::Left));
        assert_eq!(page.hovered(), None);
    }

    #[test]
    fn intro_runs_alongside_layout() {
        let mut page = PartnersPage::new(None, None);
        assert_eq!(page.splash().phase(), IntroPhase::Animating);
        page.tick(millis(100));
        assert!(page.layout().is_loaded());
        page.tick(millis(2900));
        assert_eq!(page.splash().phase(), IntroPhase::FadingOut);
    }

    #[test]
    fn config_disables_intro() {
        let mut config = PitchConfig::default();
        config.intro.show_on_load = false;
        let page = PartnersPage::with_config(&config, None, None);
        assert!(!page.splash().is_visible());
    }
}
