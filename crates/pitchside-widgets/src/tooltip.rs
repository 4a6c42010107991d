#![forbid(unsafe_code)]

//! Position tooltip: a floating description panel anchored to a slot card.
//!
//! Placement is a pure function, [`compute_placement`], over measured boxes:
//! the trigger's bounding rectangle, the tooltip's size, and the viewport.
//! [`PositionTooltip`] is the thin stateful adapter around it that tracks
//! visibility, which window/document listeners must be attached, and the
//! grace period that lets the pointer travel between trigger and tooltip.
//!
//! # Placement order
//!
//! 1. `Top` if the space above the trigger exceeds `height + margin + arrow`.
//! 2. `Bottom` if the space below does.
//! 3. `Left` if the space to the left exceeds `width + margin + arrow`.
//! 4. `Right` otherwise.
//!
//! The chosen coordinates are then clamped so the tooltip keeps at least
//! `margin` pixels from every viewport edge whenever it is small enough to.
//!
//! # Example
//!
//! ```
//! use pitchside_core::geometry::{Rect, Size};
//! use pitchside_widgets::tooltip::{Side, compute_placement};
//!
//! let trigger = Rect::new(400.0, 300.0, 80.0, 100.0);
//! let placed = compute_placement(
//!     trigger,
//!     Size::new(200.0, 120.0),
//!     Size::new(1024.0, 768.0),
//!     10.0,
//!     8.0,
//! );
//! assert_eq!(placed.side, Side::Top);
//! assert_eq!(placed.top, 300.0 - 120.0 - 8.0);
//! ```

use bitflags::bitflags;
use pitchside_core::event::{Event, KeyCode, PointerEventKind};
use pitchside_core::geometry::{Rect, Size};
use pitchside_core::timer::{Delay, millis};
use web_time::Duration;

use crate::formation::Position;

/// Which side of the trigger the tooltip sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Edge of the tooltip box that carries the arrow (faces the trigger).
    pub fn arrow_edge(self) -> Side {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Whether this is a vertical (above/below) placement.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Tooltip geometry and timing knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipConfig {
    /// Minimum distance from every viewport edge, in pixels.
    pub margin: f32,
    /// Arrow size; also the gap between trigger and tooltip.
    pub arrow_size: f32,
    /// Hover debounce before the tooltip appears.
    pub show_delay_ms: u64,
    /// Grace period after the pointer leaves the tooltip.
    pub hide_grace_ms: u64,
    /// Size assumed until the host reports a measurement.
    pub estimated_size: Size,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            margin: 10.0,
            arrow_size: 8.0,
            show_delay_ms: 300,
            hide_grace_ms: 100,
            estimated_size: Size::new(320.0, 120.0),
        }
    }
}

impl TooltipConfig {
    pub fn show_delay(&self) -> Duration {
        millis(self.show_delay_ms)
    }

    pub fn hide_grace(&self) -> Duration {
        millis(self.hide_grace_ms)
    }
}

/// Result of [`compute_placement`]: top-left corner plus the chosen side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPlacement {
    pub top: f32,
    pub left: f32,
    pub side: Side,
}

impl TooltipPlacement {
    /// The tooltip's box for a given size.
    pub fn rect(&self, size: Size) -> Rect {
        Rect::new(self.left, self.top, size.width, size.height)
    }
}

/// Place a tooltip of `tooltip` size next to `trigger` inside `viewport`.
///
/// Pure: no measurement, no state. See the module docs for the order in which
/// sides are tried.
pub fn compute_placement(
    trigger: Rect,
    tooltip: Size,
    viewport: Size,
    margin: f32,
    arrow: f32,
) -> TooltipPlacement {
    let needed_v = tooltip.height + margin + arrow;
    let needed_h = tooltip.width + margin + arrow;

    let side = if trigger.top() > needed_v {
        Side::Top
    } else if viewport.height - trigger.bottom() > needed_v {
        Side::Bottom
    } else if trigger.left() > needed_h {
        Side::Left
    } else {
        Side::Right
    };

    let (mut top, mut left) = match side {
        Side::Top => (
            trigger.top() - tooltip.height - arrow,
            trigger.center_x() - tooltip.width / 2.0,
        ),
        Side::Bottom => (
            trigger.bottom() + arrow,
            trigger.center_x() - tooltip.width / 2.0,
        ),
        Side::Left => (
            trigger.center_y() - tooltip.height / 2.0,
            trigger.left() - tooltip.width - arrow,
        ),
        Side::Right => (
            trigger.center_y() - tooltip.height / 2.0,
            trigger.right() + arrow,
        ),
    };

    left = clamp_axis(left, tooltip.width, viewport.width, margin);
    top = clamp_axis(top, tooltip.height, viewport.height, margin);

    TooltipPlacement { top, left, side }
}

/// Clamp one coordinate so `[start, start + extent]` stays `margin` inside
/// `[0, limit]`. The near edge wins when the box cannot fit.
fn clamp_axis(start: f32, extent: f32, limit: f32, margin: f32) -> f32 {
    if start < margin {
        margin
    } else if start + extent > limit - margin {
        limit - extent - margin
    } else {
        start
    }
}

bitflags! {
    /// Global listeners the host must keep attached for a visible tooltip.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Listeners: u8 {
        const WINDOW_RESIZE    = 0b001;
        const WINDOW_SCROLL    = 0b010;
        const DOCUMENT_KEYDOWN = 0b100;
    }
}

/// What handling an event did to the tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipOutcome {
    /// The event did not concern the tooltip.
    Ignored,
    /// Placement was recomputed.
    Repositioned,
    /// The tooltip was hidden.
    Hidden,
}

/// Stateful tooltip for one slot.
#[derive(Debug, Clone)]
pub struct PositionTooltip {
    position: Position,
    config: TooltipConfig,
    visible: bool,
    trigger: Rect,
    viewport: Size,
    size: Size,
    placement: Option<TooltipPlacement>,
    hovering_tooltip: bool,
    trigger_hovered: bool,
    grace: Delay,
}

impl PositionTooltip {
    pub fn new(position: Position) -> Self {
        let config = TooltipConfig::default();
        Self {
            position,
            size: config.estimated_size,
            config,
            visible: false,
            trigger: Rect::default(),
            viewport: Size::new(1024.0, 768.0),
            placement: None,
            hovering_tooltip: false,
            trigger_hovered: false,
            grace: Delay::idle(),
        }
    }

    #[must_use]
    pub fn config(mut self, config: TooltipConfig) -> Self {
        self.size = config.estimated_size;
        self.config = config;
        self
    }

    /// Current trigger box and viewport, as last measured by the host.
    pub fn set_geometry(&mut self, trigger: Rect, viewport: Size) {
        self.trigger = trigger;
        self.viewport = viewport;
        if self.visible {
            self.reposition();
        }
    }

    /// Rendered tooltip size, as measured by the host after layout.
    pub fn measure(&mut self, size: Size) {
        self.size = size;
        if self.visible {
            self.reposition();
        }
    }

    /// Make the tooltip visible and compute its placement.
    pub fn show(&mut self) {
        self.visible = true;
        self.grace.cancel();
        self.reposition();
    }

    /// Hide the tooltip and drop its listeners.
    pub fn hide(&mut self) {
        self.visible = false;
        self.hovering_tooltip = false;
        self.placement = None;
        self.grace.cancel();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether anything would be drawn: visible and the slot has text.
    pub fn is_rendered(&self) -> bool {
        self.visible && self.position.description_text().is_some()
    }

    pub fn placement(&self) -> Option<TooltipPlacement> {
        self.placement
    }

    /// Listeners that must be attached right now. Empty while hidden.
    pub fn listeners(&self) -> Listeners {
        if self.visible {
            Listeners::all()
        } else {
            Listeners::empty()
        }
    }

    /// The trigger reports pointer presence so the grace check can see it.
    pub fn set_trigger_hovered(&mut self, hovered: bool) {
        self.trigger_hovered = hovered;
    }

    /// Pointer entered or left the tooltip itself.
    pub fn handle_pointer(&mut self, kind: PointerEventKind) {
        if !self.visible {
            return;
        }
        match kind {
            PointerEventKind::Enter => {
                self.hovering_tooltip = true;
                self.grace.cancel();
            }
            PointerEventKind::Leave => {
                self.hovering_tooltip = false;
                self.grace.arm(self.config.hide_grace());
            }
        }
    }

    /// Handle a window/document event. Ignored unless the matching listener
    /// is attached, i.e. unless the tooltip is visible.
    pub fn handle_event(&mut self, event: &Event) -> TooltipOutcome {
        if !self.visible {
            return TooltipOutcome::Ignored;
        }
        match event {
            Event::Resize(viewport) => {
                self.viewport = *viewport;
                self.reposition();
                TooltipOutcome::Repositioned
            }
            Event::Scroll => {
                self.reposition();
                TooltipOutcome::Repositioned
            }
            Event::Key(key) if key.is_press() && key.code == KeyCode::Escape => {
                self.hide();
                TooltipOutcome::Hidden
            }
            _ => TooltipOutcome::Ignored,
        }
    }

    /// Advance the grace timer. Returns `true` if the tooltip was hidden.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if self.grace.tick(elapsed) && !self.hovering_tooltip && !self.trigger_hovered {
            self.hide();
            return true;
        }
        false
    }

    /// Cancel the grace timer and hide.
    pub fn unmount(&mut self) {
        self.hide();
    }

    fn reposition(&mut self) {
        let placed = compute_placement(
            self.trigger,
            self.size,
            self.viewport,
            self.config.margin,
            self.config.arrow_size,
        );
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "tooltip.place",
            slot = %self.position.id,
            side = placed.side.as_str(),
            top = placed.top,
            left = placed.left
        );
        self.placement = Some(placed);
    }

    /// Render description, or `None` when nothing should be drawn.
    pub fn view(&self) -> Option<TooltipView> {
        if !self.visible {
            return None;
        }
        let description = self.position.description_text()?;
        let placement = self.placement?;
        Some(TooltipView {
            role: self.position.role.clone(),
            description: description.to_owned(),
            described_by: description_id(&self.position.id),
            top: placement.top,
            left: placement.left,
            side: placement.side,
            arrow_edge: placement.side.arrow_edge(),
            arrow_size: self.config.arrow_size,
        })
    }
}

/// Element id of the tooltip's description paragraph.
pub fn description_id(slot_id: &str) -> String {
    format!("position-{slot_id}-description")
}

/// Everything a host needs to draw a visible tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipView {
    /// Heading text.
    pub role: String,
    pub description: String,
    /// Id the tooltip's `aria-describedby` points at.
    pub described_by: String,
    pub top: f32,
    pub left: f32,
    pub side: Side,
    pub arrow_edge: Side,
    pub arrow_size: f32,
}

impl TooltipView {
    /// ARIA role of the floating panel.
    pub const ROLE: &'static str = "tooltip";
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitchside_core::event::KeyEvent;

    const MARGIN: f32 = 10.0;
    const ARROW: f32 = 8.0;

    fn viewport() -> Size {
        Size::new(1024.0, 768.0)
    }

    fn tip() -> Size {
        Size::new(200.0, 100.0)
    }

    fn place(trigger: Rect) -> TooltipPlacement {
        compute_placement(trigger, tip(), viewport(), MARGIN, ARROW)
    }

    fn described() -> Position {
        Position::new("st1", 40.0, 20.0, "Striker").with_description("Scores goals.")
    }

    #[test]
    fn top_when_room_above() {
        let trigger = Rect::new(400.0, 300.0, 80.0, 100.0);
        let p = place(trigger);
        assert_eq!(p.side, Side::Top);
        assert_eq!(p.top, 300.0 - 100.0 - ARROW);
        assert_eq!(p.left, 440.0 - 100.0);
    }

    #[test]
    fn bottom_when_no_room_above() {
        let trigger = Rect::new(400.0, 50.0, 80.0, 100.0);
        let p = place(trigger);
        assert_eq!(p.side, Side::Bottom);
        assert_eq!(p.top, 150.0 + ARROW);
    }

    #[test]
    fn space_must_strictly_exceed() {
        // Exactly height + margin + arrow above is not enough.
        let trigger = Rect::new(400.0, 118.0, 80.0, 100.0);
        assert_eq!(place(trigger).side, Side::Bottom);
        let trigger = Rect::new(400.0, 118.5, 80.0, 100.0);
        assert_eq!(place(trigger).side, Side::Top);
    }

    #[test]
    fn left_when_tall_trigger_blocks_vertical() {
        let trigger = Rect::new(600.0, 50.0, 80.0, 700.0);
        let p = place(trigger);
        assert_eq!(p.side, Side::Left);
        assert_eq!(p.left, 600.0 - 200.0 - ARROW);
    }

    #[test]
    fn right_as_last_resort() {
        let trigger = Rect::new(50.0, 50.0, 80.0, 700.0);
        let p = place(trigger);
        assert_eq!(p.side, Side::Right);
        assert_eq!(p.left, 130.0 + ARROW);
    }

    #[test]
    fn clamps_horizontally_at_left_edge() {
        let trigger = Rect::new(0.0, 300.0, 40.0, 40.0);
        let p = place(trigger);
        assert_eq!(p.side, Side::Top);
        assert_eq!(p.left, MARGIN);
    }

    #[test]
    fn clamps_horizontally_at_right_edge() {
        let trigger = Rect::new(1000.0, 300.0, 24.0, 40.0);
        let p = place(trigger);
        assert_eq!(p.left, 1024.0 - 200.0 - MARGIN);
    }

    #[test]
    fn clamps_vertically_for_side_placements() {
        let trigger = Rect::new(600.0, 0.0, 80.0, 768.0);
        let p = place(trigger);
        assert_eq!(p.side, Side::Left);
        assert!(p.top >= MARGIN);
        assert!(p.top + 100.0 <= 768.0 - MARGIN);
    }

    #[test]
    fn arrow_faces_trigger() {
        assert_eq!(Side::Top.arrow_edge(), Side::Bottom);
        assert_eq!(Side::Bottom.arrow_edge(), Side::Top);
        assert_eq!(Side::Left.arrow_edge(), Side::Right);
        assert_eq!(Side::Right.arrow_edge(), Side::Left);
        assert!(Side::Top.is_vertical());
        assert!(!Side::Left.is_vertical());
    }

    #[test]
    fn hidden_tooltip_renders_nothing_and_has_no_listeners() {
        let tt = PositionTooltip::new(described());
        assert!(tt.view().is_none());
        assert!(tt.listeners().is_empty());
    }

    #[test]
    fn no_description_renders_nothing_even_when_visible() {
        let mut tt = PositionTooltip::new(Position::new("gk", 50.0, 90.0, "Goalkeeper"));
        tt.show();
        assert!(tt.is_visible());
        assert!(!tt.is_rendered());
        assert!(tt.view().is_none());
    }

    #[test]
    fn show_attaches_listeners_and_hide_releases() {
        let mut tt = PositionTooltip::new(described());
        tt.set_geometry(Rect::new(400.0, 300.0, 80.0, 100.0), viewport());
        tt.show();
        assert_eq!(tt.listeners(), Listeners::all());
        let view = tt.view().unwrap();
        assert_eq!(view.role, "Striker");
        assert_eq!(view.described_by, "position-st1-description");
        tt.hide();
        assert!(tt.listeners().is_empty());
    }

    #[test]
    fn escape_hides() {
        let mut tt = PositionTooltip::new(described());
        tt.show();
        assert_eq!(
            tt.handle_event(&Event::key(KeyCode::Escape)),
            TooltipOutcome::Hidden
        );
        assert!(!tt.is_visible());
    }

    #[test]
    fn events_ignored_while_hidden() {
        let mut tt = PositionTooltip::new(described());
        assert_eq!(
            tt.handle_event(&Event::key(KeyCode::Escape)),
            TooltipOutcome::Ignored
        );
        assert_eq!(tt.handle_event(&Event::Scroll), TooltipOutcome::Ignored);
    }

    #[test]
    fn resize_repositions() {
        let mut tt = PositionTooltip::new(described());
        tt.measure(tip());
        tt.set_geometry(Rect::new(900.0, 300.0, 80.0, 100.0), viewport());
        tt.show();
        let before = tt.placement().unwrap();
        let outcome = tt.handle_event(&Event::Resize(Size::new(800.0, 768.0)));
        assert_eq!(outcome, TooltipOutcome::Repositioned);
        let after = tt.placement().unwrap();
        assert_ne!(before.left, after.left);
        assert_eq!(after.left, 800.0 - 200.0 - MARGIN);
    }

    #[test]
    fn release_key_does_not_hide() {
        use pitchside_core::event::KeyEventKind;
        let mut tt = PositionTooltip::new(described());
        tt.show();
        let release = KeyEvent::new(KeyCode::Escape).with_kind(KeyEventKind::Release);
        assert_eq!(tt.handle_event(&Event::Key(release)), TooltipOutcome::Ignored);
        assert!(tt.is_visible());
    }

    #[test]
    fn grace_period_hides_after_leaving_both() {
        let mut tt = PositionTooltip::new(described());
        tt.show();
        tt.handle_pointer(PointerEventKind::Enter);
        tt.handle_pointer(PointerEventKind::Leave);
        assert!(!tt.tick(millis(50)));
        assert!(tt.is_visible());
        assert!(tt.tick(millis(50)));
        assert!(!tt.is_visible());
    }

    #[test]
    fn grace_period_keeps_open_when_back_on_trigger() {
        let mut tt = PositionTooltip::new(described());
        tt.show();
        tt.handle_pointer(PointerEventKind::Enter);
        tt.handle_pointer(PointerEventKind::Leave);
        tt.set_trigger_hovered(true);
        assert!(!tt.tick(millis(200)));
        assert!(tt.is_visible());
    }

    #[test]
    fn reentering_tooltip_cancels_grace() {
        let mut tt = PositionTooltip::new(described());
        tt.show();
        tt.handle_pointer(PointerEventKind::Enter);
        tt.handle_pointer(PointerEventKind::Leave);
        tt.handle_pointer(PointerEventKind::Enter);
        assert!(!tt.tick(millis(500)));
        assert!(tt.is_visible());
    }

    #[test]
    fn unmount_cancels_grace() {
        let mut tt = PositionTooltip::new(described());
        tt.show();
        tt.handle_pointer(PointerEventKind::Enter);
        tt.handle_pointer(PointerEventKind::Leave);
        tt.unmount();
        assert!(!tt.tick(millis(500)));
        assert!(tt.listeners().is_empty());
    }
}
