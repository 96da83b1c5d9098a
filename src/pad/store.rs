use crate::pad::model::Stroke;

/// Ordered store of finished strokes.
///
/// Strokes append in completion order and leave only through undo or
/// clear. There is no redo; an undone stroke is gone. The revision bumps
/// on every visible change so callers can tell mutation from no-op.
#[derive(Debug, Default)]
pub struct StrokeStore {
    strokes: Vec<Stroke>,
    revision: u64,
}

impl StrokeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn append(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
        self.revision += 1;
    }

    /// Append a drained batch in order, bumping the revision once.
    pub fn append_all(&mut self, strokes: impl IntoIterator<Item = Stroke>) {
        let before = self.strokes.len();
        self.strokes.extend(strokes);
        if self.strokes.len() != before {
            self.revision += 1;
        }
    }

    /// Remove and return the most recent stroke. No-op when empty.
    pub fn undo(&mut self) -> Option<Stroke> {
        let popped = self.strokes.pop();
        if popped.is_some() {
            self.revision += 1;
        }
        popped
    }

    /// Remove every stroke, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.strokes.len();
        if removed > 0 {
            self.strokes.clear();
            self.revision += 1;
        }
        removed
    }
}
