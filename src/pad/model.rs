use std::fmt;

use eframe::egui::Pos2;

use crate::pad::brush::BrushSpec;

/// Identity of one touch contact or the emulated mouse contact.
///
/// Touch ids come straight from the windowing layer and are only unique
/// while the contact is down; the mouse uses a reserved id so it can never
/// collide with a real contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

impl PointerId {
    /// Reserved id for the primary-mouse-button fallback contact.
    pub const MOUSE: PointerId = PointerId(u64::MAX);
}

impl fmt::Display for PointerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == PointerId::MOUSE {
            write!(f, "mouse")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Identity of one stroke, unique for the lifetime of the ink surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StrokeId(pub u64);

impl fmt::Display for StrokeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One input position in canvas-local points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSample {
    pub pos: Pos2,
    /// Normalized contact pressure, `None` when the device reports none.
    pub pressure: Option<f32>,
    /// Seconds since app start, taken from the frame clock.
    pub time: f64,
}

impl InputSample {
    pub fn new(pos: Pos2, pressure: Option<f32>, time: f64) -> Self {
        Self {
            pos,
            pressure,
            time,
        }
    }
}

/// Lifecycle stage of a contact event after translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// A translated contact event, ready for the stroke tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer: PointerId,
    pub phase: PointerPhase,
    pub sample: InputSample,
}

impl PointerEvent {
    pub fn new(pointer: PointerId, phase: PointerPhase, sample: InputSample) -> Self {
        Self {
            pointer,
            phase,
            sample,
        }
    }
}

/// One vertex of a finished or in-progress stroke.
///
/// `width` is the fully resolved brush width at this vertex, so painting
/// needs no access to the pressure curve that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokePoint {
    pub pos: Pos2,
    pub width: f32,
}

impl StrokePoint {
    pub fn new(pos: Pos2, width: f32) -> Self {
        Self { pos, width }
    }
}

/// A completed stroke as stored and rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub brush: BrushSpec,
    pub points: Vec<StrokePoint>,
}

impl Stroke {
    pub fn new(brush: BrushSpec, points: Vec<StrokePoint>) -> Self {
        Self { brush, points }
    }
}
