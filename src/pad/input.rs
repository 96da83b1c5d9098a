use crate::pad::brush::BrushSpec;
use crate::pad::ink::{InkAuthor, StrokeFault};
use crate::pad::model::{InputSample, PointerEvent, PointerId, PointerPhase, StrokeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrackerState {
    Idle,
    Drawing { pointer: PointerId, stroke: StrokeId },
}

/// Why an event produced no transition. These are expected outcomes of
/// multi-contact input, not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A second contact went down while a stroke was in progress.
    ExtraContact,
    /// The event belongs to a pointer that does not own the active stroke.
    ForeignPointer,
    /// Move, up or cancel arrived while no stroke was in progress.
    NotDrawing,
}

/// Outcome of routing one pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Started { pointer: PointerId, stroke: StrokeId },
    Extended { stroke: StrokeId },
    Finished { pointer: PointerId, stroke: StrokeId },
    Cancelled { pointer: PointerId, stroke: StrokeId },
    Ignored(IgnoreReason),
}

/// Routes pointer events into stroke lifecycle calls.
///
/// At most one contact owns a stroke at a time. The first contact down
/// takes ownership and keeps it until its up or cancel; everything from
/// other pointers is ignored while it holds the pad.
#[derive(Debug)]
pub struct StrokeTracker {
    state: TrackerState,
}

impl Default for StrokeTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokeTracker {
    pub fn new() -> Self {
        Self {
            state: TrackerState::Idle,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, TrackerState::Drawing { .. })
    }

    /// The contact and stroke currently being written, if any.
    pub fn active(&self) -> Option<(PointerId, StrokeId)> {
        match self.state {
            TrackerState::Idle => None,
            TrackerState::Drawing { pointer, stroke } => Some((pointer, stroke)),
        }
    }

    /// Route one event. `predicted` is forwarded to the ink surface on
    /// moves of the owning pointer and ignored otherwise.
    ///
    /// A fault leaves the tracker idle: a stroke the surface no longer
    /// holds cannot be extended or sealed, so ownership is dropped rather
    /// than re-faulting on every following event.
    pub fn handle<I: InkAuthor>(
        &mut self,
        event: &PointerEvent,
        predicted: Option<InputSample>,
        brush: &BrushSpec,
        ink: &mut I,
    ) -> Result<Transition, StrokeFault> {
        match (self.state, event.phase) {
            (TrackerState::Idle, PointerPhase::Down) => {
                let stroke = ink.start_stroke(event.pointer, brush, event.sample)?;
                self.state = TrackerState::Drawing {
                    pointer: event.pointer,
                    stroke,
                };
                Ok(Transition::Started {
                    pointer: event.pointer,
                    stroke,
                })
            }
            (TrackerState::Drawing { .. }, PointerPhase::Down) => {
                Ok(Transition::Ignored(IgnoreReason::ExtraContact))
            }
            (TrackerState::Drawing { pointer, stroke }, PointerPhase::Move)
                if pointer == event.pointer =>
            {
                match ink.extend_stroke(stroke, event.sample, predicted) {
                    Ok(()) => Ok(Transition::Extended { stroke }),
                    Err(fault) => {
                        self.state = TrackerState::Idle;
                        Err(fault)
                    }
                }
            }
            (TrackerState::Drawing { pointer, stroke }, PointerPhase::Up)
                if pointer == event.pointer =>
            {
                self.state = TrackerState::Idle;
                ink.finish_stroke(stroke, event.sample)?;
                Ok(Transition::Finished { pointer, stroke })
            }
            (TrackerState::Drawing { pointer, stroke }, PointerPhase::Cancel)
                if pointer == event.pointer =>
            {
                self.state = TrackerState::Idle;
                ink.cancel_stroke(stroke)?;
                Ok(Transition::Cancelled { pointer, stroke })
            }
            (TrackerState::Drawing { .. }, _) => {
                Ok(Transition::Ignored(IgnoreReason::ForeignPointer))
            }
            (TrackerState::Idle, _) => Ok(Transition::Ignored(IgnoreReason::NotDrawing)),
        }
    }
}
