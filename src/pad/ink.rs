use thiserror::Error;

use crate::pad::brush::BrushSpec;
use crate::pad::model::{InputSample, PointerId, Stroke, StrokeId, StrokePoint};

/// Faults raised at the ink-surface boundary.
///
/// The event pump logs these and keeps running; they never unwind into the
/// UI loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrokeFault {
    #[error("ink surface holds no stroke {0}")]
    UnknownStroke(StrokeId),
    #[error("ink surface rejected stroke input: {0}")]
    Rejected(String),
}

/// Authoring interface of an ink surface.
///
/// The stroke tracker drives this seam, so tests can substitute a scripted
/// surface and production code an [`InkSurface`].
pub trait InkAuthor {
    /// Open a new stroke at `sample`. The brush is captured by value; later
    /// tool changes must not restyle this stroke.
    fn start_stroke(
        &mut self,
        pointer: PointerId,
        brush: &BrushSpec,
        sample: InputSample,
    ) -> Result<StrokeId, StrokeFault>;

    /// Append `sample` to an open stroke. `predicted` is a provisional
    /// look-ahead sample shown as wet ink but never committed.
    fn extend_stroke(
        &mut self,
        stroke: StrokeId,
        sample: InputSample,
        predicted: Option<InputSample>,
    ) -> Result<(), StrokeFault>;

    /// Seal an open stroke with its final sample and queue it for pickup.
    fn finish_stroke(&mut self, stroke: StrokeId, sample: InputSample) -> Result<(), StrokeFault>;

    /// Discard an open stroke without committing anything.
    fn cancel_stroke(&mut self, stroke: StrokeId) -> Result<(), StrokeFault>;
}

/// An in-progress stroke owned by the ink surface.
#[derive(Debug, Clone)]
pub struct LiveStroke {
    pub id: StrokeId,
    pub pointer: PointerId,
    pub brush: BrushSpec,
    pub points: Vec<StrokePoint>,
    /// Predicted tail vertex, repainted every frame and dropped on finish.
    pub preview: Option<StrokePoint>,
}

/// Holds wet ink while contacts are down and queues finished strokes until
/// the shell drains them into the store.
#[derive(Debug, Default)]
pub struct InkSurface {
    next_stroke: u64,
    live: Vec<LiveStroke>,
    finished: Vec<Stroke>,
}

fn should_append(last: &StrokePoint, sample: &InputSample, min_move_sq: f32) -> bool {
    (sample.pos - last.pos).length_sq() >= min_move_sq
}

impl InkSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strokes currently being written, for wet-ink painting.
    pub fn live(&self) -> &[LiveStroke] {
        &self.live
    }

    /// Drain strokes finished since the last call.
    pub fn take_finished(&mut self) -> Vec<Stroke> {
        std::mem::take(&mut self.finished)
    }

    fn live_index(&self, stroke: StrokeId) -> Result<usize, StrokeFault> {
        self.live
            .iter()
            .position(|s| s.id == stroke)
            .ok_or(StrokeFault::UnknownStroke(stroke))
    }
}

impl InkAuthor for InkSurface {
    fn start_stroke(
        &mut self,
        pointer: PointerId,
        brush: &BrushSpec,
        sample: InputSample,
    ) -> Result<StrokeId, StrokeFault> {
        let id = StrokeId(self.next_stroke);
        self.next_stroke += 1;
        let first = StrokePoint::new(sample.pos, brush.point_width(sample.pressure));
        self.live.push(LiveStroke {
            id,
            pointer,
            brush: *brush,
            points: vec![first],
            preview: None,
        });
        Ok(id)
    }

    fn extend_stroke(
        &mut self,
        stroke: StrokeId,
        sample: InputSample,
        predicted: Option<InputSample>,
    ) -> Result<(), StrokeFault> {
        let idx = self.live_index(stroke)?;
        let live = &mut self.live[idx];
        let width = live.brush.point_width(sample.pressure);
        match live.points.last() {
            Some(last) if !should_append(last, &sample, live.brush.min_move_sq()) => {}
            _ => live.points.push(StrokePoint::new(sample.pos, width)),
        }
        live.preview = predicted
            .map(|p| StrokePoint::new(p.pos, live.brush.point_width(p.pressure)));
        Ok(())
    }

    fn finish_stroke(&mut self, stroke: StrokeId, sample: InputSample) -> Result<(), StrokeFault> {
        let idx = self.live_index(stroke)?;
        let mut live = self.live.remove(idx);
        let width = live.brush.point_width(sample.pressure);
        match live.points.last() {
            Some(last) if !should_append(last, &sample, live.brush.min_move_sq()) => {}
            _ => live.points.push(StrokePoint::new(sample.pos, width)),
        }
        self.finished.push(Stroke::new(live.brush, live.points));
        Ok(())
    }

    fn cancel_stroke(&mut self, stroke: StrokeId) -> Result<(), StrokeFault> {
        let idx = self.live_index(stroke)?;
        self.live.remove(idx);
        Ok(())
    }
}
