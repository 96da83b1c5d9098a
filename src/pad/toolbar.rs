use crate::pad::brush::BrushSpec;
use crate::pad::store::StrokeStore;
use crate::settings::PadSettings;

/// Which control-row tool is active. Drives button highlighting and which
/// brush new strokes capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTool {
    Pen(usize),
    Eraser,
}

/// One control-row action, produced by buttons or keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadCommand {
    Clear,
    Undo,
    SelectPen(usize),
    SelectEraser,
}

/// The active tool and the brush it builds. Strokes capture the brush by
/// value when they start, so mutating this mid-stroke is always safe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolState {
    pub active: ActiveTool,
    pub brush: BrushSpec,
}

impl ToolState {
    /// Starts on the first palette pen.
    pub fn from_settings(settings: &PadSettings) -> Self {
        Self {
            active: ActiveTool::Pen(0),
            brush: pen_brush(settings, 0).unwrap_or_default(),
        }
    }
}

/// Brush for palette slot `index`, or `None` when the slot does not exist.
pub fn pen_brush(settings: &PadSettings, index: usize) -> Option<BrushSpec> {
    settings.pen_palette.get(index).map(|color| {
        BrushSpec::pressure_pen(
            color.to_color32(),
            settings.pen_size,
            settings.smoothing_epsilon,
        )
    })
}

/// The eraser is a wide marker in the canvas background color. It paints
/// over ink rather than deleting it, and an erasing pass is itself a
/// stroke that undo removes.
pub fn eraser_brush(settings: &PadSettings) -> BrushSpec {
    BrushSpec::marker(
        settings.background.to_color32(),
        settings.eraser_size,
        settings.smoothing_epsilon,
    )
}

/// Apply one command. Returns whether it changed anything, so the caller
/// can log no-ops at a quieter level.
pub fn apply_command(
    command: PadCommand,
    tools: &mut ToolState,
    store: &mut StrokeStore,
    settings: &PadSettings,
) -> bool {
    match command {
        PadCommand::Clear => store.clear() > 0,
        PadCommand::Undo => store.undo().is_some(),
        PadCommand::SelectPen(index) => match pen_brush(settings, index) {
            Some(brush) => {
                tools.active = ActiveTool::Pen(index);
                tools.brush = brush;
                true
            }
            None => false,
        },
        PadCommand::SelectEraser => {
            tools.active = ActiveTool::Eraser;
            tools.brush = eraser_brush(settings);
            true
        }
    }
}
