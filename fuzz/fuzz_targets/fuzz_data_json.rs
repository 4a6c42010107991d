#![no_main]

use libfuzzer_sys::fuzz_target;
use pitchside::data::{formation_from_json, partners_from_json};
use pitchside_widgets::{PitchLayout, validate_formation};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let formation = formation_from_json(text).ok();
    if let Some(f) = &formation {
        assert!(validate_formation(f), "decoded formation must validate");
    }
    let partners = partners_from_json(text).ok();

    // Mounting arbitrary input never panics and always yields a valid pitch.
    let layout = PitchLayout::new(formation, partners);
    assert!(validate_formation(layout.formation()));
    let view = layout.view();
    assert_eq!(view.grid.cells.len(), layout.formation().len());
});
