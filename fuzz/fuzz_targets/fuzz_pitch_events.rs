#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pitchside_core::event::{Event, KeyCode, KeyEvent, PointerEventKind, TouchPhase};
use pitchside_core::geometry::{Rect, Size};
use pitchside_core::timer::millis;
use pitchside_widgets::{Partner, PitchLayout, default_formation};

#[derive(Debug, Arbitrary)]
enum Op {
    Key(u8),
    Enter(u8),
    Leave(u8),
    TouchStart(u8),
    TouchEnd(u8),
    Focus(u8, bool),
    Click(u8),
    Geometry(u8, u16, u16, u16, u16),
    Resize(u16, u16),
    Scroll,
    Escape,
    Tick(u16),
    Partners(u16),
}

fn key(b: u8) -> KeyCode {
    match b % 9 {
        0 => KeyCode::Right,
        1 => KeyCode::Left,
        2 => KeyCode::Up,
        3 => KeyCode::Down,
        4 => KeyCode::Home,
        5 => KeyCode::End,
        6 => KeyCode::Enter,
        7 => KeyCode::Char(' '),
        _ => KeyCode::Tab,
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let ids: Vec<String> = default_formation()
        .positions
        .iter()
        .map(|p| p.id.clone())
        .collect();
    let slot = |b: u8| ids[b as usize % ids.len()].clone();
    let mut layout = PitchLayout::new(None, None);

    for op in ops.iter().take(512) {
        match *op {
            Op::Key(b) => {
                layout.handle_key(&KeyEvent::new(key(b)));
            }
            Op::Enter(s) => {
                layout.handle_slot_event(&slot(s), &Event::Pointer(PointerEventKind::Enter));
            }
            Op::Leave(s) => {
                layout.handle_slot_event(&slot(s), &Event::Pointer(PointerEventKind::Leave));
            }
            Op::TouchStart(s) => {
                layout.handle_slot_event(&slot(s), &Event::Touch(TouchPhase::Start));
            }
            Op::TouchEnd(s) => {
                layout.handle_slot_event(&slot(s), &Event::Touch(TouchPhase::End));
            }
            Op::Focus(s, on) => {
                layout.handle_slot_event(&slot(s), &Event::Focus(on));
            }
            Op::Click(s) => {
                layout.handle_slot_event(&slot(s), &Event::Click);
            }
            Op::Geometry(s, x, y, w, h) => layout.set_slot_geometry(
                &slot(s),
                Rect::new(
                    f32::from(x % 2000),
                    f32::from(y % 2000),
                    f32::from(w % 400),
                    f32::from(h % 400),
                ),
                Size::new(1280.0, 800.0),
            ),
            Op::Resize(w, h) => {
                layout.handle_global(&Event::Resize(Size::new(f32::from(w), f32::from(h))));
            }
            Op::Scroll => layout.handle_global(&Event::Scroll),
            Op::Escape => layout.handle_global(&Event::key(KeyCode::Escape)),
            Op::Tick(ms) => {
                layout.tick(millis(u64::from(ms)));
            }
            Op::Partners(mask) => {
                let partners = ids
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(i, id)| {
                        Partner::new(format!("p{i}"), format!("Partner {i}"), id.clone())
                    })
                    .collect();
                layout.set_partners(Some(partners));
            }
        }

        let view = layout.view();
        let stops = view
            .grid
            .cells
            .iter()
            .filter(|c| c.card.tab_index == 0)
            .count();
        assert_eq!(stops, 1, "exactly one tab stop");
        let raised = view.grid.cells.iter().filter(|c| c.z_index == 30).count();
        assert!(raised <= 1, "at most one raised cell");
    }

    layout.unmount();
    assert!(layout.tick(millis(60_000)).is_empty());
});
