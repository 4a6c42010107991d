#![forbid(unsafe_code)]

//! Formation pitch: slot cards over the pitch artwork, one roving tab stop.
//!
//! [`PitchLayout`] resolves its inputs once (missing or invalid formation
//! becomes the built-in 4-4-2, missing partners become an empty list), builds
//! one [`PartnerCard`] per slot, and owns:
//!
//! - the slot-id to occupant lookup, rebuilt whenever partners change;
//! - the [`RovingFocus`] scope that arrow keys, Home, and End move through;
//! - the [`LiveAnnouncer`] behind the container's status region;
//! - the one-shot "loaded" timer that drives the staggered entrance.
//!
//! The entrance is cosmetic: cards accept input and announcements update
//! before the load timer fires.
//!
//! # Signals
//!
//! Card signals are translated for the page: focus and hover both surface as
//! [`LayoutSignal::Hover`], blur as `Hover(None)`, and activation as
//! [`LayoutSignal::Select`] carrying the slot id.

use std::fmt;

use pitchside_core::event::{Event, KeyEvent};
use pitchside_core::geometry::{Rect, Size};
use pitchside_core::timer::{Delay, millis};
use web_time::Duration;

use crate::announcer::LiveAnnouncer;
use crate::focus::{FocusHandle, NavDirection, RovingFocus};
use crate::formation::{Formation, Partner, check_formation, check_partner, default_formation};
use crate::occupants::OccupantMap;
use crate::partner_card::{CardSignal, CardTimings, CardView, PartnerCard};
use crate::pitch_background::{BackgroundView, PitchBackground};
use crate::tooltip::TooltipConfig;

/// Entrance timing, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutTimings {
    /// Delay after mount before the "loaded" flag flips.
    pub load_delay_ms: u64,
    /// Per-slot transition delay step.
    pub stagger_ms: u64,
}

impl Default for LayoutTimings {
    fn default() -> Self {
        Self {
            load_delay_ms: 100,
            stagger_ms: 100,
        }
    }
}

/// Notification for the page hosting the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutSignal {
    /// Hover or focus moved onto a slot (`Some` if occupied) or off one (`None`).
    Hover(Option<Partner>),
    /// A slot was activated.
    Select {
        partner: Option<Partner>,
        position_id: String,
    },
}

/// Result of handling one event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayoutOutcome {
    pub signals: Vec<LayoutSignal>,
    /// The host must suppress the platform default (scrolling).
    pub prevent_default: bool,
}

impl LayoutOutcome {
    pub fn is_ignored(&self) -> bool {
        self.signals.is_empty() && !self.prevent_default
    }
}

/// Resolve the formation to render: the caller's if it validates, otherwise
/// the built-in default.
pub fn resolve_formation(formation: Option<Formation>) -> Formation {
    match formation {
        Some(f) => match check_formation(&f) {
            Ok(()) => f,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    message = "layout.formation_fallback",
                    name = %f.name,
                    reason = %_err
                );
                default_formation().clone()
            }
        },
        None => default_formation().clone(),
    }
}

/// Resolve the partner list: absent becomes empty, invalid entries are dropped.
pub fn resolve_partners(partners: Option<Vec<Partner>>) -> Vec<Partner> {
    let mut partners = partners.unwrap_or_default();
    partners.retain(|p| match check_partner(p) {
        Ok(()) => true,
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(message = "layout.partner_dropped", id = %p.id, reason = %_err);
            false
        }
    });
    partners
}

/// The interactive formation.
pub struct PitchLayout {
    formation: Formation,
    occupants: OccupantMap,
    cards: Vec<PartnerCard>,
    handles: Vec<Option<Box<dyn FocusHandle>>>,
    roving: RovingFocus,
    announcer: LiveAnnouncer,
    background: PitchBackground,
    loaded: bool,
    load_timer: Delay,
    timings: LayoutTimings,
    card_timings: CardTimings,
    tooltip_config: TooltipConfig,
}

impl fmt::Debug for PitchLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PitchLayout")
            .field("formation", &self.formation.name)
            .field("occupied", &self.occupants.len())
            .field("focused", &self.roving.current())
            .field("loaded", &self.loaded)
            .finish_non_exhaustive()
    }
}

impl PitchLayout {
    /// Mount a layout. The load timer starts immediately.
    pub fn new(formation: Option<Formation>, partners: Option<Vec<Partner>>) -> Self {
        let formation = resolve_formation(formation);
        let partners = resolve_partners(partners);
        let timings = LayoutTimings::default();
        let mut layout = Self {
            occupants: OccupantMap::build(&partners),
            cards: Vec::new(),
            handles: Vec::new(),
            roving: RovingFocus::new(formation.len()),
            announcer: LiveAnnouncer::new(),
            background: PitchBackground::default(),
            loaded: false,
            load_timer: Delay::armed(millis(timings.load_delay_ms)),
            timings,
            card_timings: CardTimings::default(),
            tooltip_config: TooltipConfig::default(),
            formation,
        };
        layout.rebuild_cards();
        layout
    }

    /// Override entrance timings. Re-arms the load timer if still pending.
    #[must_use]
    pub fn timings(mut self, timings: LayoutTimings) -> Self {
        self.timings = timings;
        if self.load_timer.is_pending() {
            self.load_timer.arm(millis(timings.load_delay_ms));
        }
        self
    }

    #[must_use]
    pub fn card_timings(mut self, timings: CardTimings) -> Self {
        self.card_timings = timings;
        self.rebuild_cards();
        self
    }

    #[must_use]
    pub fn tooltip_config(mut self, config: TooltipConfig) -> Self {
        self.tooltip_config = config;
        self.rebuild_cards();
        self
    }

    #[must_use]
    pub fn background(mut self, background: PitchBackground) -> Self {
        self.background = background;
        self
    }

    fn rebuild_cards(&mut self) {
        for card in &mut self.cards {
            card.unmount();
        }
        self.cards = self
            .formation
            .positions
            .iter()
            .map(|position| {
                PartnerCard::new(position.clone())
                    .occupant(self.occupants.get(&position.id).cloned())
                    .timings(self.card_timings)
                    .tooltip_config(self.tooltip_config)
            })
            .collect();
        self.handles = (0..self.cards.len()).map(|_| None).collect();
        self.roving = RovingFocus::new(self.cards.len());
    }

    pub fn formation(&self) -> &Formation {
        &self.formation
    }

    pub fn occupants(&self) -> &OccupantMap {
        &self.occupants
    }

    pub fn cards(&self) -> &[PartnerCard] {
        &self.cards
    }

    pub fn card(&self, slot_id: &str) -> Option<&PartnerCard> {
        self.formation.index_of(slot_id).map(|i| &self.cards[i])
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Id of the slot holding the roving tab stop focus, if any.
    pub fn focused_slot(&self) -> Option<&str> {
        self.roving
            .current()
            .map(|i| self.formation.positions[i].id.as_str())
    }

    /// Current live-region text.
    pub fn announcement(&self) -> &str {
        self.announcer.text()
    }

    pub fn announcer(&self) -> &LiveAnnouncer {
        &self.announcer
    }

    /// Replace the partner list and rebuild the occupant lookup.
    pub fn set_partners(&mut self, partners: Option<Vec<Partner>>) {
        let partners = resolve_partners(partners);
        self.occupants = OccupantMap::build(&partners);
        for card in &mut self.cards {
            let occupant = self.occupants.get(&card.position().id).cloned();
            card.set_occupant(occupant);
        }
    }

    /// Replace the formation. Equivalent to remounting: cards, focus, and the
    /// entrance animation all restart.
    pub fn set_formation(&mut self, formation: Option<Formation>) {
        self.formation = resolve_formation(formation);
        self.rebuild_cards();
        self.loaded = false;
        self.load_timer.arm(millis(self.timings.load_delay_ms));
    }

    /// Register the platform focus handle for a slot. Returns `false` for an
    /// unknown slot id.
    pub fn attach_focus_handle(&mut self, slot_id: &str, handle: Box<dyn FocusHandle>) -> bool {
        match self.formation.index_of(slot_id) {
            Some(i) => {
                self.handles[i] = Some(handle);
                true
            }
            None => false,
        }
    }

    /// Host-measured geometry for a slot's tooltip.
    pub fn set_slot_geometry(&mut self, slot_id: &str, bounds: Rect, viewport: Size) {
        if let Some(i) = self.formation.index_of(slot_id) {
            self.cards[i].set_geometry(bounds, viewport);
        }
    }

    /// Container-level key handling: roving focus.
    pub fn handle_key(&mut self, key: &KeyEvent) -> LayoutOutcome {
        let Some(dir) = NavDirection::from_key(key) else {
            return LayoutOutcome::default();
        };
        let Some(target) = self.roving.target(dir) else {
            return LayoutOutcome::default();
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "layout.navigate",
            from = ?self.roving.current(),
            to = target,
            dir = ?dir
        );
        let mut outcome = self.move_focus(target);
        outcome.prevent_default = true;
        outcome
    }

    /// Focus the slot at `index`, blurring the previous one.
    pub fn focus_index(&mut self, index: usize) -> LayoutOutcome {
        if index >= self.cards.len() {
            return LayoutOutcome::default();
        }
        self.move_focus(index)
    }

    fn move_focus(&mut self, target: usize) -> LayoutOutcome {
        let mut outcome = LayoutOutcome::default();
        if let Some(previous) = self.roving.current()
            && previous != target
        {
            let card_outcome = self.cards[previous].handle_event(&Event::Focus(false));
            self.apply_card_signal(previous, card_outcome.signal, &mut outcome);
        }
        let card_outcome = self.cards[target].handle_event(&Event::Focus(true));
        self.apply_card_signal(target, card_outcome.signal, &mut outcome);
        if let Some(handle) = self.handles[target].as_mut() {
            handle.focus();
        }
        outcome
    }

    /// Handle an event targeted at one slot's card.
    ///
    /// Navigation keys bubble to the container, as a keydown on a card would.
    pub fn handle_slot_event(&mut self, slot_id: &str, event: &Event) -> LayoutOutcome {
        let Some(index) = self.formation.index_of(slot_id) else {
            return LayoutOutcome::default();
        };
        if let Event::Key(key) = event
            && NavDirection::from_key(key).is_some()
        {
            return self.handle_key(key);
        }
        let card_outcome = self.cards[index].handle_event(event);
        let mut outcome = LayoutOutcome {
            signals: Vec::new(),
            prevent_default: card_outcome.prevent_default,
        };
        self.apply_card_signal(index, card_outcome.signal, &mut outcome);
        outcome
    }

    /// Window/document events (resize, scroll, Escape) for every tooltip.
    pub fn handle_global(&mut self, event: &Event) {
        for card in &mut self.cards {
            card.tooltip_mut().handle_event(event);
        }
    }

    /// Advance the load timer and every card's timers.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<LayoutSignal> {
        if self.load_timer.tick(elapsed) {
            self.loaded = true;
            let text = loaded_message(&self.formation);
            self.announcer.announce(text);
        }
        let mut signals = Vec::new();
        for card in &mut self.cards {
            if let Some(CardSignal::Hover(partner)) = card.tick(elapsed) {
                signals.push(LayoutSignal::Hover(partner));
            }
        }
        signals
    }

    /// Cancel the load timer and every card timer.
    pub fn unmount(&mut self) {
        self.load_timer.cancel();
        for card in &mut self.cards {
            card.unmount();
        }
        self.roving.clear();
    }

    fn apply_card_signal(
        &mut self,
        index: usize,
        signal: Option<CardSignal>,
        outcome: &mut LayoutOutcome,
    ) {
        let Some(signal) = signal else {
            return;
        };
        let position = &self.formation.positions[index];
        match signal {
            CardSignal::Hover(partner) => outcome.signals.push(LayoutSignal::Hover(partner)),
            CardSignal::Focus(partner) => {
                self.roving.set_current(index);
                self.announcer
                    .announce(focus_message(partner.as_ref(), &position.role));
                outcome.signals.push(LayoutSignal::Hover(partner));
            }
            CardSignal::Blur => outcome.signals.push(LayoutSignal::Hover(None)),
            CardSignal::Click(partner) => {
                self.announcer.announce(select_message(partner.as_ref()));
                outcome.signals.push(LayoutSignal::Select {
                    partner,
                    position_id: position.id.clone(),
                });
            }
        }
    }

    pub fn view(&self) -> PitchView {
        let total = self.cards.len();
        let cells = self
            .cards
            .iter()
            .enumerate()
            .map(|(i, card)| {
                let position = card.position();
                let mut card_view = card.view();
                card_view.tab_index = self.roving.tab_index(i);
                SlotView {
                    left_pct: position.x,
                    top_pct: position.y,
                    z_index: if self.roving.current() == Some(i) { 30 } else { 10 },
                    transition_delay_ms: self.timings.stagger_ms.saturating_mul(i as u64),
                    entered: self.loaded,
                    label: format!("Position {} of {total}", i + 1),
                    card: card_view,
                }
            })
            .collect();
        PitchView {
            aria_label: format!(
                "Football pitch formation {} with {total} partner positions",
                self.formation.name
            ),
            instructions: INSTRUCTIONS,
            announcement: self.announcer.text().to_owned(),
            skip_link: SkipLink::default(),
            formation_badge: self.formation.name.clone(),
            background: self.background.view(),
            grid: GridView {
                label: "Partner positions on football pitch",
                cells,
            },
        }
    }
}

const INSTRUCTIONS: &str = "Navigate between partner positions using Tab, Arrow keys, Home, or End. Press Enter or Space to select a partner position. Use Escape to return to main navigation.";

/// Announcement once the entrance finishes.
pub fn loaded_message(formation: &Formation) -> String {
    format!(
        "Football pitch formation {} loaded with {} positions. Use Tab to navigate between partner positions.",
        formation.name,
        formation.len()
    )
}

/// Announcement when a slot gains focus.
pub fn focus_message(partner: Option<&Partner>, role: &str) -> String {
    match partner {
        Some(p) => format!("Focused on {} in {role} position.", p.name),
        None => format!("Focused on empty {role} position."),
    }
}

/// Announcement when a slot is activated.
pub fn select_message(partner: Option<&Partner>) -> String {
    match partner {
        Some(p) if p.has_website() => format!("Selected {}. Opening partner website.", p.name),
        Some(p) => format!("Selected {}. Partner information displayed.", p.name),
        None => "Selected empty position. This position is available for a new partner.".to_owned(),
    }
}

/// Visually hidden link that jumps past the pitch; first in tab order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipLink {
    pub href: &'static str,
    pub text: &'static str,
}

impl Default for SkipLink {
    fn default() -> Self {
        Self {
            href: "#main-content",
            text: "Skip to main content",
        }
    }
}

/// One positioned grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotView {
    /// CSS `left`, percent of the container.
    pub left_pct: f64,
    /// CSS `top`, percent of the container.
    pub top_pct: f64,
    pub z_index: u8,
    pub transition_delay_ms: u64,
    /// Entrance finished (fully opaque, in place).
    pub entered: bool,
    pub label: String,
    pub card: CardView,
}

impl SlotView {
    pub const ROLE: &'static str = "gridcell";
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridView {
    pub label: &'static str,
    pub cells: Vec<SlotView>,
}

impl GridView {
    pub const ROLE: &'static str = "grid";
}

/// Everything a host needs to draw the pitch.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchView {
    pub aria_label: String,
    pub instructions: &'static str,
    /// Text of the `role="status"` live region.
    pub announcement: String,
    pub skip_link: SkipLink,
    pub formation_badge: String,
    pub background: BackgroundView,
    pub grid: GridView,
}

impl PitchView {
    /// ARIA role of the container.
    pub const ROLE: &'static str = "application";

    /// Focusable elements in tab order: the skip link, then each card.
    pub fn focus_order(&self) -> Vec<&str> {
        std::iter::once(self.skip_link.href)
            .chain(self.grid.cells.iter().map(|c| c.card.test_id.as_str()))
            .collect()
    }
}
