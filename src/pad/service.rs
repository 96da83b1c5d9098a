use eframe::egui::{Event, Rect};
use tracing::{debug, error, info, trace};

use crate::pad::events::EventTranslator;
use crate::pad::ink::{InkSurface, LiveStroke};
use crate::pad::input::{StrokeTracker, Transition};
use crate::pad::model::Stroke;
use crate::pad::predict::MotionPredictor;
use crate::pad::store::StrokeStore;
use crate::pad::toolbar::{self, ActiveTool, PadCommand, ToolState};
use crate::settings::PadSettings;

/// The whole pad behind one UI-thread facade: event translation, motion
/// prediction, stroke tracking, wet ink and the finished-stroke store.
///
/// The shell feeds it raw events and commands each frame and paints from
/// its accessors. Nothing in here touches the screen.
pub struct SketchPad {
    settings: PadSettings,
    translator: EventTranslator,
    predictor: MotionPredictor,
    tracker: StrokeTracker,
    ink: InkSurface,
    store: StrokeStore,
    tools: ToolState,
}

impl SketchPad {
    pub fn new(settings: &PadSettings) -> Self {
        Self {
            settings: settings.clone(),
            translator: EventTranslator::new(settings.pressure_enabled),
            predictor: MotionPredictor::new(
                settings.prediction_enabled,
                settings.prediction_look_ahead_ms,
            ),
            tracker: StrokeTracker::new(),
            ink: InkSurface::new(),
            store: StrokeStore::new(),
            tools: ToolState::from_settings(settings),
        }
    }

    /// Run one frame's raw events through the stroke pipeline and commit
    /// whatever finished.
    ///
    /// Faults are logged and swallowed here: a misrouted event must never
    /// take the pad down, and the event is consumed either way.
    pub fn pump_events(&mut self, events: &[Event], canvas: Rect, now: f64) {
        let translated = self.translator.translate(events, canvas, now);
        for ev in &translated {
            self.predictor.record(ev);
            let predicted = self.predictor.predict(ev.pointer);
            match self
                .tracker
                .handle(ev, predicted, &self.tools.brush, &mut self.ink)
            {
                Ok(Transition::Started { pointer, stroke }) => {
                    debug!(%pointer, %stroke, "stroke started");
                }
                Ok(Transition::Extended { .. }) => {}
                Ok(Transition::Finished { pointer, stroke }) => {
                    debug!(%pointer, %stroke, "stroke finished");
                }
                Ok(Transition::Cancelled { pointer, stroke }) => {
                    debug!(%pointer, %stroke, "stroke cancelled");
                }
                Ok(Transition::Ignored(reason)) => {
                    trace!(?reason, pointer = %ev.pointer, phase = ?ev.phase, "event ignored");
                }
                Err(fault) => {
                    debug_assert!(false, "stroke fault: {fault}");
                    error!(%fault, pointer = %ev.pointer, phase = ?ev.phase, "stroke fault, dropping stroke");
                }
            }
        }

        let finished = self.ink.take_finished();
        if !finished.is_empty() {
            debug!(
                committed = finished.len(),
                total = self.store.len() + finished.len(),
                "strokes committed to store"
            );
            self.store.append_all(finished);
        }
    }

    /// Apply one control command through the toolbar reducer.
    pub fn apply(&mut self, command: PadCommand) {
        let changed = toolbar::apply_command(command, &mut self.tools, &mut self.store, &self.settings);
        match command {
            PadCommand::Clear | PadCommand::Undo if changed => {
                info!(?command, strokes = self.store.len(), "store updated");
            }
            _ if changed => debug!(?command, "tool selected"),
            _ => debug!(?command, "command had no effect"),
        }
    }

    pub fn settings(&self) -> &PadSettings {
        &self.settings
    }

    pub fn active_tool(&self) -> ActiveTool {
        self.tools.active
    }

    /// True while a contact owns a stroke; the shell keeps frames coming
    /// as long as this holds so wet ink follows the contact.
    pub fn is_drawing(&self) -> bool {
        self.tracker.is_drawing()
    }

    pub fn strokes(&self) -> &[Stroke] {
        self.store.strokes()
    }

    pub fn live(&self) -> &[LiveStroke] {
        self.ink.live()
    }

    pub fn store(&self) -> &StrokeStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pad::model::PointerId;
    use eframe::egui::{pos2, Modifiers, PointerButton, Rect};

    fn canvas() -> Rect {
        Rect::from_min_max(pos2(0.0, 0.0), pos2(400.0, 600.0))
    }

    fn press(x: f32, y: f32, pressed: bool) -> Event {
        Event::PointerButton {
            pos: pos2(x, y),
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        }
    }

    #[test]
    fn mouse_drag_commits_one_stroke() {
        let mut pad = SketchPad::new(&PadSettings::default());
        pad.pump_events(&[press(10.0, 10.0, true)], canvas(), 0.0);
        assert!(pad.is_drawing());
        assert_eq!(pad.live()[0].pointer, PointerId::MOUSE);

        pad.pump_events(&[Event::PointerMoved(pos2(60.0, 60.0))], canvas(), 0.016);
        pad.pump_events(&[press(60.0, 60.0, false)], canvas(), 0.032);
        assert!(!pad.is_drawing());
        assert_eq!(pad.strokes().len(), 1);
        assert!(pad.live().is_empty());
    }

    #[test]
    fn commands_flow_through_the_reducer() {
        let mut pad = SketchPad::new(&PadSettings::default());
        pad.apply(PadCommand::SelectEraser);
        assert_eq!(pad.active_tool(), ActiveTool::Eraser);
        pad.apply(PadCommand::SelectPen(1));
        assert_eq!(pad.active_tool(), ActiveTool::Pen(1));
    }
}
