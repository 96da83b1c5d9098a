pub mod brush;
pub mod events;
pub mod ink;
pub mod input;
pub mod model;
pub mod predict;
pub mod render;
pub mod service;
pub mod store;
pub mod toolbar;

pub use brush::{BrushFamily, BrushSpec};
pub use events::EventTranslator;
pub use ink::{InkAuthor, InkSurface, LiveStroke, StrokeFault};
pub use input::{IgnoreReason, StrokeTracker, Transition};
pub use model::{
    InputSample, PointerEvent, PointerId, PointerPhase, Stroke, StrokeId, StrokePoint,
};
pub use predict::MotionPredictor;
pub use service::SketchPad;
pub use store::StrokeStore;
pub use toolbar::{ActiveTool, PadCommand, ToolState};
