use std::collections::HashMap;

use crate::pad::model::{InputSample, PointerEvent, PointerId, PointerPhase};

/// Upper bound on extrapolation, in seconds. Longer horizons throw the
/// preview visibly ahead of the contact on fast moves.
const MAX_LOOK_AHEAD: f64 = 0.050;

#[derive(Debug, Clone, Copy)]
struct SamplePair {
    prev: Option<InputSample>,
    last: InputSample,
}

/// Constant-velocity extrapolator feeding the wet-ink preview.
///
/// Every translated event is recorded; on request the owning contact's
/// position is projected one look-ahead interval past its last sample.
/// Projections are provisional display state and are never committed.
#[derive(Debug)]
pub struct MotionPredictor {
    enabled: bool,
    look_ahead: f64,
    windows: HashMap<PointerId, SamplePair>,
}

impl MotionPredictor {
    pub fn new(enabled: bool, look_ahead_ms: u64) -> Self {
        Self {
            enabled,
            look_ahead: (look_ahead_ms as f64 / 1000.0).min(MAX_LOOK_AHEAD),
            windows: HashMap::new(),
        }
    }

    /// Feed one event. Up and cancel close the contact's sample window.
    pub fn record(&mut self, event: &PointerEvent) {
        if !self.enabled {
            return;
        }
        match event.phase {
            PointerPhase::Down => {
                self.windows.insert(
                    event.pointer,
                    SamplePair {
                        prev: None,
                        last: event.sample,
                    },
                );
            }
            PointerPhase::Move => match self.windows.get_mut(&event.pointer) {
                Some(pair) => {
                    if event.sample.time > pair.last.time {
                        pair.prev = Some(pair.last);
                        pair.last = event.sample;
                    } else {
                        // Same-frame resample: move the head, keep the
                        // velocity basis.
                        pair.last = event.sample;
                    }
                }
                None => {
                    self.windows.insert(
                        event.pointer,
                        SamplePair {
                            prev: None,
                            last: event.sample,
                        },
                    );
                }
            },
            PointerPhase::Up | PointerPhase::Cancel => {
                self.windows.remove(&event.pointer);
            }
        }
    }

    /// Projected sample for `pointer`. `None` until the contact has two
    /// samples with distinct timestamps, and always `None` when disabled.
    pub fn predict(&self, pointer: PointerId) -> Option<InputSample> {
        if !self.enabled {
            return None;
        }
        let pair = self.windows.get(&pointer)?;
        let prev = pair.prev?;
        let dt = (pair.last.time - prev.time).max(0.001);
        let velocity = (pair.last.pos - prev.pos) / dt as f32;
        Some(InputSample::new(
            pair.last.pos + velocity * self.look_ahead as f32,
            pair.last.pressure,
            pair.last.time + self.look_ahead,
        ))
    }
}
