#![forbid(unsafe_code)]

//! A single formation slot: occupied card or empty placeholder.
//!
//! [`PartnerCard`] owns every piece of transient per-slot state: hover and
//! focus flags, the click pulse, the debounced tooltip timer, and the
//! [`PositionTooltip`] itself. Input arrives as [`Event`]s, time arrives via
//! [`PartnerCard::tick`], and the card answers with [`CardSignal`]s for its
//! container. Empty versus filled only changes the rendered face and label,
//! never the interaction contract.
//!
//! # State machine
//!
//! ```text
//! idle ──pointer/touch enter──▶ hovered ──leave──▶ idle
//! idle ──focus────────────────▶ focused ──blur───▶ idle
//! idle ──click/Enter/Space────▶ clicked+animating ──pulse elapses──▶ idle
//! ```
//!
//! The states are independent flags: a card can be hovered, focused, and
//! animating at once.

use bitflags::bitflags;
use pitchside_core::event::{Event, PointerEventKind, TouchPhase};
use pitchside_core::geometry::{Rect, Size};
use pitchside_core::timer::{Delay, millis};
use unicode_segmentation::UnicodeSegmentation;
use web_time::Duration;

use crate::formation::{Partner, Position};
use crate::tooltip::{PositionTooltip, TooltipConfig, TooltipView};

bitflags! {
    /// Transient interaction state of a card.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CardFlags: u8 {
        const HOVERED   = 0b0001;
        const FOCUSED   = 0b0010;
        /// Scale-up pulse after activation.
        const CLICKED   = 0b0100;
        /// Glow overlay after activation.
        const ANIMATING = 0b1000;
    }
}

/// Card timing knobs, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardTimings {
    /// Glow overlay duration after activation.
    pub pulse_ms: u64,
    /// Scale-up duration after activation.
    pub clicked_ms: u64,
    /// Delay before a touch end clears the hover.
    pub touch_clear_ms: u64,
}

impl Default for CardTimings {
    fn default() -> Self {
        Self {
            pulse_ms: 600,
            clicked_ms: 1000,
            touch_clear_ms: 1000,
        }
    }
}

/// A notification for the card's container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardSignal {
    /// Pointer/touch hover changed; `None` when the hover ended or the slot is empty.
    Hover(Option<Partner>),
    /// The card gained focus.
    Focus(Option<Partner>),
    /// The card lost focus.
    Blur,
    /// The card was activated by click, Enter, or Space.
    Click(Option<Partner>),
}

/// Result of handling one event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardOutcome {
    pub signal: Option<CardSignal>,
    /// The host must suppress the platform default (page scroll on Space).
    pub prevent_default: bool,
}

impl CardOutcome {
    fn none() -> Self {
        Self::default()
    }

    fn signal(signal: CardSignal) -> Self {
        Self {
            signal: Some(signal),
            prevent_default: false,
        }
    }
}

/// Interactive slot widget.
#[derive(Debug, Clone)]
pub struct PartnerCard {
    position: Position,
    occupant: Option<Partner>,
    empty: Option<bool>,
    timings: CardTimings,
    tooltip_config: TooltipConfig,
    flags: CardFlags,
    show_tooltip: Delay,
    pulse: Delay,
    clicked: Delay,
    touch_clear: Delay,
    tooltip: PositionTooltip,
}

impl PartnerCard {
    /// Create an empty card for `position`.
    pub fn new(position: Position) -> Self {
        Self {
            tooltip: PositionTooltip::new(position.clone()),
            position,
            occupant: None,
            empty: None,
            timings: CardTimings::default(),
            tooltip_config: TooltipConfig::default(),
            flags: CardFlags::empty(),
            show_tooltip: Delay::idle(),
            pulse: Delay::idle(),
            clicked: Delay::idle(),
            touch_clear: Delay::idle(),
        }
    }

    /// Set the occupant.
    #[must_use]
    pub fn occupant(mut self, occupant: Option<Partner>) -> Self {
        self.occupant = occupant;
        self
    }

    /// Force the empty/filled presentation instead of inferring it.
    #[must_use]
    pub fn empty(mut self, empty: bool) -> Self {
        self.empty = Some(empty);
        self
    }

    #[must_use]
    pub fn timings(mut self, timings: CardTimings) -> Self {
        self.timings = timings;
        self
    }

    #[must_use]
    pub fn tooltip_config(mut self, config: TooltipConfig) -> Self {
        self.tooltip = self.tooltip.config(config);
        self.tooltip_config = config;
        self
    }

    /// Replace the occupant in place (partner list changed).
    pub fn set_occupant(&mut self, occupant: Option<Partner>) {
        self.occupant = occupant;
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn partner(&self) -> Option<&Partner> {
        self.occupant.as_ref()
    }

    /// Explicit override if set, otherwise "no occupant".
    pub fn is_empty(&self) -> bool {
        self.empty.unwrap_or(self.occupant.is_none())
    }

    pub fn flags(&self) -> CardFlags {
        self.flags
    }

    pub fn tooltip(&self) -> &PositionTooltip {
        &self.tooltip
    }

    pub fn tooltip_mut(&mut self) -> &mut PositionTooltip {
        &mut self.tooltip
    }

    /// Host-measured geometry for tooltip placement.
    pub fn set_geometry(&mut self, bounds: Rect, viewport: Size) {
        self.tooltip.set_geometry(bounds, viewport);
    }

    /// Handle an event targeted at this card.
    ///
    /// Window-level events (`Resize`, `Scroll`) and keys other than Enter and
    /// Space are forwarded to the tooltip, which ignores them while hidden.
    pub fn handle_event(&mut self, event: &Event) -> CardOutcome {
        match event {
            Event::Pointer(PointerEventKind::Enter) => self.enter(),
            Event::Pointer(PointerEventKind::Leave) => self.leave(),
            Event::Touch(TouchPhase::Start) => {
                self.touch_clear.cancel();
                self.enter()
            }
            Event::Touch(TouchPhase::End) => {
                self.touch_clear.arm(millis(self.timings.touch_clear_ms));
                CardOutcome::none()
            }
            Event::Focus(true) => self.focus(),
            Event::Focus(false) => self.blur(),
            Event::Click => CardOutcome::signal(self.activate()),
            Event::Key(key) if key.is_press() && key.is_activation() => CardOutcome {
                signal: Some(self.activate()),
                prevent_default: true,
            },
            Event::Key(_) | Event::Resize(_) | Event::Scroll => {
                self.tooltip.handle_event(event);
                CardOutcome::none()
            }
        }
    }

    /// Advance all timers. Returns a deferred signal, if one fired.
    pub fn tick(&mut self, elapsed: Duration) -> Option<CardSignal> {
        if self.show_tooltip.tick(elapsed) {
            self.tooltip.show();
        }
        if self.pulse.tick(elapsed) {
            self.flags.remove(CardFlags::ANIMATING);
        }
        if self.clicked.tick(elapsed) {
            self.flags.remove(CardFlags::CLICKED);
        }
        self.tooltip.tick(elapsed);
        if self.touch_clear.tick(elapsed) {
            self.end_hover();
            return Some(CardSignal::Hover(None));
        }
        None
    }

    /// Cancel every pending timer and reset transient state.
    pub fn unmount(&mut self) {
        #[cfg(feature = "tracing")]
        {
            let pending = [
                &self.show_tooltip,
                &self.pulse,
                &self.clicked,
                &self.touch_clear,
            ]
            .iter()
            .filter(|d| d.is_pending())
            .count();
            tracing::debug!(message = "card.unmount", slot = %self.position.id, pending);
        }
        self.show_tooltip.cancel();
        self.pulse.cancel();
        self.clicked.cancel();
        self.touch_clear.cancel();
        self.tooltip.unmount();
        self.flags = CardFlags::empty();
    }

    fn enter(&mut self) -> CardOutcome {
        self.flags.insert(CardFlags::HOVERED);
        self.tooltip.set_trigger_hovered(true);
        if self.position.description_text().is_some() {
            self.show_tooltip.arm(self.tooltip_config.show_delay());
        }
        CardOutcome::signal(CardSignal::Hover(self.occupant.clone()))
    }

    fn leave(&mut self) -> CardOutcome {
        self.end_hover();
        CardOutcome::signal(CardSignal::Hover(None))
    }

    fn end_hover(&mut self) {
        self.flags.remove(CardFlags::HOVERED);
        self.tooltip.set_trigger_hovered(false);
        self.show_tooltip.cancel();
        self.tooltip.hide();
    }

    fn focus(&mut self) -> CardOutcome {
        self.flags.insert(CardFlags::FOCUSED);
        self.show_tooltip.cancel();
        self.tooltip.show();
        CardOutcome::signal(CardSignal::Focus(self.occupant.clone()))
    }

    fn blur(&mut self) -> CardOutcome {
        self.flags.remove(CardFlags::FOCUSED);
        self.tooltip.hide();
        self.show_tooltip.cancel();
        CardOutcome::signal(CardSignal::Blur)
    }

    fn activate(&mut self) -> CardSignal {
        self.flags.insert(CardFlags::CLICKED | CardFlags::ANIMATING);
        self.pulse.arm(millis(self.timings.pulse_ms));
        self.clicked.arm(millis(self.timings.clicked_ms));
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "card.activate",
            slot = %self.position.id,
            occupied = self.occupant.is_some()
        );
        CardSignal::Click(self.occupant.clone())
    }

    fn display_name(&self) -> &str {
        self.occupant
            .as_ref()
            .map(|p| p.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("Unknown partner")
    }

    /// Accessible name announced for the card.
    pub fn aria_label(&self) -> String {
        let role = &self.position.role;
        if self.is_empty() {
            return format!(
                "Empty {role} position at {}% from left, {}% from top. Press Enter to learn more about this position.",
                self.position.x, self.position.y
            );
        }
        let who = match self.occupant.as_ref().and_then(|p| p.description.as_deref()) {
            Some(description) => format!("{}, {description}", self.display_name()),
            None => self.display_name().to_owned(),
        };
        let action = if self.occupant.as_ref().is_some_and(Partner::has_website) {
            "Press Enter to visit partner website."
        } else {
            "Press Enter for more information."
        };
        format!("{who} in {role} position. {action}")
    }

    /// Longer text referenced by `aria-describedby`.
    pub fn screen_reader_description(&self) -> String {
        let role = &self.position.role;
        if self.is_empty() {
            return format!(
                "This is an available {role} position on the football pitch formation. Currently no partner is assigned to this position."
            );
        }
        let mut text = format!(
            "Partner card for {} positioned as {role} in the formation.",
            self.display_name()
        );
        if let Some(description) = self.occupant.as_ref().and_then(|p| p.description.as_deref()) {
            text.push(' ');
            text.push_str(description);
        }
        text
    }

    /// Visually hidden status line inside the card.
    pub fn status_text(&self) -> String {
        if self.is_empty() {
            return "Available position".to_owned();
        }
        let website = if self.occupant.as_ref().is_some_and(Partner::has_website) {
            " Website available."
        } else {
            ""
        };
        format!(
            "{} in {} position.{website} Partner position filled. Click for more details.",
            self.display_name(),
            self.position.role
        )
    }

    /// First grapheme of the occupant's name, or `?`.
    pub fn initials(&self) -> String {
        self.occupant
            .as_ref()
            .and_then(|p| p.name.graphemes(true).next())
            .unwrap_or("?")
            .to_owned()
    }

    /// Id of the hidden description element.
    pub fn described_by(&self) -> String {
        format!("{}-description", self.position.id)
    }

    pub fn view(&self) -> CardView {
        let face = if self.is_empty() {
            CardFace::Placeholder {
                role: self.position.role.clone(),
            }
        } else {
            match self.occupant.as_ref().and_then(|p| p.logo.clone()) {
                Some(src) => CardFace::Logo {
                    src,
                    alt: format!("{} company logo", self.display_name()),
                },
                None => CardFace::Initials {
                    text: self.initials(),
                    label: format!("{} initials", self.display_name()),
                },
            }
        };
        CardView {
            test_id: format!("partner-card-{}", self.position.id),
            slot_id: self.position.id.clone(),
            occupant_name: self
                .occupant
                .as_ref()
                .filter(|_| !self.is_empty())
                .map(|p| p.name.clone()),
            face,
            border: if self.is_empty() {
                BorderStyle::Dashed
            } else {
                BorderStyle::Solid
            },
            aria_label: self.aria_label(),
            described_by: self.described_by(),
            description: self.screen_reader_description(),
            status: self.status_text(),
            tab_index: 0,
            flags: self.flags,
            tooltip: self.tooltip.view(),
        }
    }
}

/// Border treatment distinguishing empty from filled slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    Dashed,
    Solid,
}

/// What the card face shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardFace {
    /// `+` glyph over the role label.
    Placeholder { role: String },
    /// Occupant logo image.
    Logo { src: String, alt: String },
    /// Occupant initial in a disc.
    Initials { text: String, label: String },
}

impl CardFace {
    /// Glyph drawn on an empty slot.
    pub const PLACEHOLDER_GLYPH: char = '+';

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

/// Render description of one card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub test_id: String,
    pub slot_id: String,
    pub occupant_name: Option<String>,
    pub face: CardFace,
    pub border: BorderStyle,
    pub aria_label: String,
    pub described_by: String,
    pub description: String,
    pub status: String,
    /// `0` for the roving tab stop, `-1` for the rest.
    pub tab_index: i32,
    pub flags: CardFlags,
    pub tooltip: Option<TooltipView>,
}

impl CardView {
    /// ARIA role of the card element.
    pub const ROLE: &'static str = "button";
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitchside_core::event::{KeyCode, KeyEvent};

    fn striker() -> Position {
        Position::new("st1", 40.0, 20.0, "Striker").with_description("Growth partner.")
    }

    fn carl() -> Partner {
        Partner::new("carl-anthony", "Carl Anthony", "st1")
            .with_logo("/breezyafro.png")
            .with_website("https://affilliasports.com")
    }

    #[test]
    fn empty_card_face_and_label() {
        let card = PartnerCard::new(striker());
        assert!(card.is_empty());
        let view = card.view();
        assert!(view.face.is_placeholder());
        assert_eq!(view.border, BorderStyle::Dashed);
        assert_eq!(
            view.aria_label,
            "Empty Striker position at 40% from left, 20% from top. Press Enter to learn more about this position."
        );
        assert_eq!(view.status, "Available position");
        assert_eq!(view.test_id, "partner-card-st1");
        assert_eq!(view.occupant_name, None);
    }

    #[test]
    fn filled_card_with_website() {
        let card = PartnerCard::new(striker()).occupant(Some(carl()));
        let view = card.view();
        assert_eq!(view.border, BorderStyle::Solid);
        assert_eq!(
            view.face,
            CardFace::Logo {
                src: "/breezyafro.png".into(),
                alt: "Carl Anthony company logo".into()
            }
        );
        assert_eq!(
            view.aria_label,
            "Carl Anthony in Striker position. Press Enter to visit partner website."
        );
        assert!(view.status.contains("Website available."));
        assert_eq!(view.occupant_name.as_deref(), Some("Carl Anthony"));
    }

    #[test]
    fn filled_card_with_description_and_no_website() {
        let partner = Partner::new("p", "Poku Kesse", "st1").with_description("Founder.");
        let card = PartnerCard::new(striker()).occupant(Some(partner));
        assert_eq!(
            card.aria_label(),
            "Poku Kesse, Founder. in Striker position. Press Enter for more information."
        );
        assert_eq!(
            card.screen_reader_description(),
            "Partner card for Poku Kesse positioned as Striker in the formation. Founder."
        );
    }

    #[test]
    fn initials_fallbacks() {
        let card = PartnerCard::new(striker()).occupant(Some(Partner::new("p", "Éa", "st1")));
        assert_eq!(card.initials(), "É");
        assert!(matches!(card.view().face, CardFace::Initials { ref text, .. } if text == "É"));
        let card = PartnerCard::new(striker()).empty(false);
        assert_eq!(card.initials(), "?");
        assert!(card.aria_label().starts_with("Unknown partner in Striker"));
    }

    #[test]
    fn explicit_empty_overrides_occupant() {
        let card = PartnerCard::new(striker()).occupant(Some(carl())).empty(true);
        assert!(card.is_empty());
        assert!(card.view().face.is_placeholder());
    }

    #[test]
    fn hover_signals_and_debounced_tooltip() {
        let mut card = PartnerCard::new(striker()).occupant(Some(carl()));
        let out = card.handle_event(&Event::Pointer(PointerEventKind::Enter));
        assert_eq!(out.signal, Some(CardSignal::Hover(Some(carl()))));
        assert!(card.flags().contains(CardFlags::HOVERED));
        assert!(!card.tooltip().is_visible());
        card.tick(millis(299));
        assert!(!card.tooltip().is_visible());
        card.tick(millis(1));
        assert!(card.tooltip().is_visible());
    }

    #[test]
    fn leave_cancels_pending_tooltip() {
        let mut card = PartnerCard::new(striker());
        card.handle_event(&Event::Pointer(PointerEventKind::Enter));
        card.tick(millis(200));
        let out = card.handle_event(&Event::Pointer(PointerEventKind::Leave));
        assert_eq!(out.signal, Some(CardSignal::Hover(None)));
        card.tick(millis(500));
        assert!(!card.tooltip().is_visible());
        assert!(!card.flags().contains(CardFlags::HOVERED));
    }

    #[test]
    fn rehover_restarts_debounce() {
        let mut card = PartnerCard::new(striker());
        card.handle_event(&Event::Pointer(PointerEventKind::Enter));
        card.tick(millis(200));
        card.handle_event(&Event::Pointer(PointerEventKind::Enter));
        card.tick(millis(200));
        assert!(!card.tooltip().is_visible());
        card.tick(millis(100));
        assert!(card.tooltip().is_visible());
    }

    #[test]
    fn no_description_never_schedules_tooltip() {
        let mut card = PartnerCard::new(Position::new("gk", 50.0, 90.0, "Goalkeeper"));
        card.handle_event(&Event::Pointer(PointerEventKind::Enter));
        card.tick(millis(1000));
        assert!(card.view().tooltip.is_none());
    }

    #[test]
    fn focus_shows_tooltip_immediately_and_blur_hides() {
        let mut card = PartnerCard::new(striker());
        let out = card.handle_event(&Event::Focus(true));
        assert_eq!(out.signal, Some(CardSignal::Focus(None)));
        assert!(card.tooltip().is_visible());
        let out = card.handle_event(&Event::Focus(false));
        assert_eq!(out.signal, Some(CardSignal::Blur));
        assert!(!card.tooltip().is_visible());
    }

    #[test]
    fn enter_and_space_activate_and_prevent_default() {
        for code in [KeyCode::Enter, KeyCode::Char(' ')] {
            let mut card = PartnerCard::new(striker()).occupant(Some(carl()));
            let out = card.handle_event(&Event::Key(KeyEvent::new(code)));
            assert_eq!(out.signal, Some(CardSignal::Click(Some(carl()))));
            assert!(out.prevent_default);
            assert!(card.flags().contains(CardFlags::CLICKED | CardFlags::ANIMATING));
        }
    }

    #[test]
    fn click_does_not_prevent_default() {
        let mut card = PartnerCard::new(striker());
        let out = card.handle_event(&Event::Click);
        assert_eq!(out.signal, Some(CardSignal::Click(None)));
        assert!(!out.prevent_default);
    }

    #[test]
    fn other_keys_are_not_activation() {
        let mut card = PartnerCard::new(striker());
        let out = card.handle_event(&Event::key(KeyCode::Char('a')));
        assert_eq!(out, CardOutcome::default());
    }

    #[test]
    fn pulse_expires_independently() {
        let mut card = PartnerCard::new(striker());
        card.handle_event(&Event::Click);
        card.tick(millis(600));
        assert!(!card.flags().contains(CardFlags::ANIMATING));
        assert!(card.flags().contains(CardFlags::CLICKED));
        card.tick(millis(400));
        assert!(!card.flags().contains(CardFlags::CLICKED));
    }

    #[test]
    fn touch_end_clears_hover_later() {
        let mut card = PartnerCard::new(striker()).occupant(Some(carl()));
        let out = card.handle_event(&Event::Touch(TouchPhase::Start));
        assert_eq!(out.signal, Some(CardSignal::Hover(Some(carl()))));
        let out = card.handle_event(&Event::Touch(TouchPhase::End));
        assert_eq!(out.signal, None);
        assert_eq!(card.tick(millis(999)), None);
        assert_eq!(card.tick(millis(1)), Some(CardSignal::Hover(None)));
    }

    #[test]
    fn unmount_cancels_every_timer() {
        let mut card = PartnerCard::new(striker());
        card.handle_event(&Event::Pointer(PointerEventKind::Enter));
        card.handle_event(&Event::Click);
        card.handle_event(&Event::Touch(TouchPhase::End));
        card.unmount();
        assert_eq!(card.tick(millis(5_000)), None);
        assert!(card.flags().is_empty());
        assert!(!card.tooltip().is_visible());
    }

    #[test]
    fn escape_reaches_tooltip() {
        let mut card = PartnerCard::new(striker());
        card.handle_event(&Event::Focus(true));
        card.handle_event(&Event::key(KeyCode::Escape));
        assert!(!card.tooltip().is_visible());
        assert!(card.flags().contains(CardFlags::FOCUSED));
    }
}
