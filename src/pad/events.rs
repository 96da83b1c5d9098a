use eframe::egui::{Event, PointerButton, Pos2, Rect, TouchPhase};

use crate::pad::model::{InputSample, PointerEvent, PointerId, PointerPhase};

/// Translates raw frame events into canvas-local pointer events.
///
/// Touch contacts and the emulated mouse pointer arrive interleaved in the
/// same frame queue, and the platform layer synthesizes pointer events from
/// the primary touch. The first touch event therefore marks the session as
/// touch-driven and the mouse fallback stays disabled from then on, so one
/// physical contact never inks twice.
#[derive(Debug)]
pub struct EventTranslator {
    pressure_enabled: bool,
    touch_session: bool,
    mouse_down: bool,
}

impl EventTranslator {
    pub fn new(pressure_enabled: bool) -> Self {
        Self {
            pressure_enabled,
            touch_session: false,
            mouse_down: false,
        }
    }

    /// Translate one frame's events. `canvas` is the pad rect in screen
    /// points and `now` the frame clock in seconds.
    ///
    /// Contacts that go down outside the canvas are never picked up; once a
    /// contact is down, the rest of its gesture is forwarded even when it
    /// wanders off the canvas, matching how a view keeps receiving the
    /// gesture it accepted.
    pub fn translate(&mut self, events: &[Event], canvas: Rect, now: f64) -> Vec<PointerEvent> {
        let mut out = Vec::new();

        if !self.touch_session && events.iter().any(|e| matches!(e, Event::Touch { .. })) {
            self.touch_session = true;
            if self.mouse_down {
                self.mouse_down = false;
                out.push(mouse_event(PointerPhase::Cancel, canvas.min, canvas, now));
            }
        }

        for event in events {
            match event {
                Event::Touch {
                    id, phase, pos, force, ..
                } => {
                    if let Some(ev) = self.translate_touch(id.0, *phase, *pos, *force, canvas, now)
                    {
                        out.push(ev);
                    }
                }
                _ if self.touch_session => {}
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed: true,
                    ..
                } if !self.mouse_down && canvas.contains(*pos) => {
                    self.mouse_down = true;
                    out.push(mouse_event(PointerPhase::Down, *pos, canvas, now));
                }
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed: false,
                    ..
                } if self.mouse_down => {
                    self.mouse_down = false;
                    out.push(mouse_event(PointerPhase::Up, *pos, canvas, now));
                }
                Event::PointerMoved(pos) if self.mouse_down => {
                    out.push(mouse_event(PointerPhase::Move, *pos, canvas, now));
                }
                Event::PointerGone if self.mouse_down => {
                    self.mouse_down = false;
                    out.push(mouse_event(PointerPhase::Cancel, canvas.min, canvas, now));
                }
                _ => {}
            }
        }
        out
    }

    fn translate_touch(
        &self,
        id: u64,
        phase: TouchPhase,
        pos: Pos2,
        force: Option<f32>,
        canvas: Rect,
        now: f64,
    ) -> Option<PointerEvent> {
        let phase = match phase {
            TouchPhase::Start => {
                if !canvas.contains(pos) {
                    return None;
                }
                PointerPhase::Down
            }
            TouchPhase::Move => PointerPhase::Move,
            TouchPhase::End => PointerPhase::Up,
            TouchPhase::Cancel => PointerPhase::Cancel,
        };
        let pressure = if self.pressure_enabled { force } else { None };
        Some(PointerEvent::new(
            PointerId(id),
            phase,
            sample_at(pos, pressure, canvas, now),
        ))
    }
}

fn mouse_event(phase: PointerPhase, pos: Pos2, canvas: Rect, now: f64) -> PointerEvent {
    // The emulated mouse contact reports no force.
    PointerEvent::new(PointerId::MOUSE, phase, sample_at(pos, None, canvas, now))
}

fn sample_at(pos: Pos2, pressure: Option<f32>, canvas: Rect, now: f64) -> InputSample {
    InputSample::new((pos - canvas.min).to_pos2(), pressure, now)
}
