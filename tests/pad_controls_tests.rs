use eframe::egui::{pos2, Event, Rect, TouchDeviceId, TouchId, TouchPhase};

use ink_pad::pad::{ActiveTool, BrushFamily, PadCommand, SketchPad};
use ink_pad::settings::{PadColor, PadSettings};

fn canvas() -> Rect {
    Rect::from_min_max(pos2(0.0, 0.0), pos2(400.0, 600.0))
}

fn touch(id: u64, phase: TouchPhase, x: f32, y: f32, force: Option<f32>) -> Event {
    Event::Touch {
        device_id: TouchDeviceId(0),
        id: TouchId(id),
        phase,
        pos: pos2(x, y),
        force,
    }
}

fn draw_stroke(pad: &mut SketchPad, x: f32, t: f64) {
    pad.pump_events(&[touch(1, TouchPhase::Start, x, 50.0, None)], canvas(), t);
    pad.pump_events(&[touch(1, TouchPhase::Move, x + 40.0, 50.0, None)], canvas(), t + 0.016);
    pad.pump_events(&[touch(1, TouchPhase::End, x + 40.0, 50.0, None)], canvas(), t + 0.032);
}

#[test]
fn undo_removes_only_the_newest_stroke() {
    let mut pad = SketchPad::new(&PadSettings::default());
    draw_stroke(&mut pad, 10.0, 0.0);
    draw_stroke(&mut pad, 100.0, 1.0);
    draw_stroke(&mut pad, 200.0, 2.0);

    pad.apply(PadCommand::Undo);
    assert_eq!(pad.strokes().len(), 2);
    let xs: Vec<f32> = pad.strokes().iter().map(|s| s.points[0].pos.x).collect();
    assert_eq!(xs, vec![10.0, 100.0]);
}

#[test]
fn undo_and_clear_on_an_empty_pad_are_noops() {
    let mut pad = SketchPad::new(&PadSettings::default());
    let rev = pad.store().revision();
    pad.apply(PadCommand::Undo);
    pad.apply(PadCommand::Clear);
    assert_eq!(pad.store().revision(), rev);
    assert!(pad.strokes().is_empty());
}

#[test]
fn clear_empties_the_pad_in_one_step() {
    let mut pad = SketchPad::new(&PadSettings::default());
    draw_stroke(&mut pad, 10.0, 0.0);
    draw_stroke(&mut pad, 100.0, 1.0);

    pad.apply(PadCommand::Clear);
    assert!(pad.strokes().is_empty());
}

#[test]
fn undone_strokes_are_gone_for_good() {
    let mut pad = SketchPad::new(&PadSettings::default());
    draw_stroke(&mut pad, 10.0, 0.0);
    pad.apply(PadCommand::Undo);
    assert!(pad.strokes().is_empty());

    // A new stroke starts a fresh tail; nothing comes back.
    draw_stroke(&mut pad, 100.0, 1.0);
    assert_eq!(pad.strokes().len(), 1);
    assert_eq!(pad.strokes()[0].points[0].pos.x, 100.0);
}

#[test]
fn eraser_strokes_carry_the_background_color() {
    let settings = PadSettings::default();
    let mut pad = SketchPad::new(&settings);
    pad.apply(PadCommand::SelectEraser);
    draw_stroke(&mut pad, 10.0, 0.0);

    let stroke = &pad.strokes()[0];
    assert_eq!(stroke.brush.color, settings.background.to_color32());
    assert_eq!(stroke.brush.family, BrushFamily::Marker);
    assert_eq!(stroke.brush.size, settings.eraser_size);
}

#[test]
fn erasing_is_undoable_like_any_stroke() {
    let mut pad = SketchPad::new(&PadSettings::default());
    draw_stroke(&mut pad, 10.0, 0.0);
    pad.apply(PadCommand::SelectEraser);
    draw_stroke(&mut pad, 10.0, 1.0);
    assert_eq!(pad.strokes().len(), 2);

    pad.apply(PadCommand::Undo);
    assert_eq!(pad.strokes().len(), 1, "the erase pass is removed first");
    assert_ne!(
        pad.strokes()[0].brush.color,
        pad.settings().background.to_color32()
    );
}

#[test]
fn pen_selection_outside_the_palette_is_ignored() {
    let mut pad = SketchPad::new(&PadSettings::default());
    pad.apply(PadCommand::SelectPen(1));
    pad.apply(PadCommand::SelectPen(42));
    assert_eq!(pad.active_tool(), ActiveTool::Pen(1));
}

#[test]
fn custom_palette_drives_pen_brushes() {
    let mut settings = PadSettings::default();
    settings.pen_palette = vec![PadColor::rgb(1, 2, 3), PadColor::rgb(9, 8, 7)];
    let mut pad = SketchPad::new(&settings);

    pad.apply(PadCommand::SelectPen(1));
    draw_stroke(&mut pad, 10.0, 0.0);
    assert_eq!(
        pad.strokes()[0].brush.color,
        PadColor::rgb(9, 8, 7).to_color32()
    );
}

#[test]
fn disabling_pressure_flattens_stroke_widths() {
    let mut settings = PadSettings::default();
    settings.pressure_enabled = false;
    let mut pad = SketchPad::new(&settings);

    pad.pump_events(&[touch(1, TouchPhase::Start, 10.0, 50.0, Some(0.2))], canvas(), 0.0);
    pad.pump_events(&[touch(1, TouchPhase::Move, 60.0, 50.0, Some(0.9))], canvas(), 0.016);
    pad.pump_events(&[touch(1, TouchPhase::End, 60.0, 50.0, None)], canvas(), 0.032);

    let stroke = &pad.strokes()[0];
    assert!(stroke.points.iter().all(|p| p.width == settings.pen_size));
}

#[test]
fn disabling_prediction_leaves_no_preview() {
    let mut settings = PadSettings::default();
    settings.prediction_enabled = false;
    let mut pad = SketchPad::new(&settings);

    pad.pump_events(&[touch(1, TouchPhase::Start, 10.0, 50.0, None)], canvas(), 0.0);
    pad.pump_events(&[touch(1, TouchPhase::Move, 60.0, 50.0, None)], canvas(), 0.016);
    assert!(pad.live()[0].preview.is_none());
}
