use eframe::egui::{
    self, Button, CentralPanel, Color32, Frame, Key, RichText, Sense, TopBottomPanel, Ui,
};

use crate::pad::{render, ActiveTool, PadCommand, SketchPad};
use crate::settings::PadSettings;

const PEN_KEYS: [Key; 8] = [
    Key::Num1,
    Key::Num2,
    Key::Num3,
    Key::Num4,
    Key::Num5,
    Key::Num6,
    Key::Num7,
    Key::Num8,
];

/// The eframe shell: a header with the control rows above a full-bleed
/// canvas. All stroke behaviour lives in [`SketchPad`]; this file only
/// lays out widgets, forwards input and paints.
pub struct PadApp {
    pad: SketchPad,
}

impl PadApp {
    pub fn new(settings: PadSettings) -> Self {
        Self {
            pad: SketchPad::new(&settings),
        }
    }

    fn keyboard_commands(&self, ctx: &egui::Context, commands: &mut Vec<PadCommand>) {
        ctx.input(|i| {
            if i.modifiers.command && i.key_pressed(Key::Z) {
                commands.push(PadCommand::Undo);
            }
            if i.key_pressed(Key::E) {
                commands.push(PadCommand::SelectEraser);
            }
            let pens = self.pad.settings().pen_palette.len().min(PEN_KEYS.len());
            for (index, key) in PEN_KEYS.iter().take(pens).enumerate() {
                if i.key_pressed(*key) {
                    commands.push(PadCommand::SelectPen(index));
                }
            }
        });
    }

    fn control_rows(&self, ui: &mut Ui, commands: &mut Vec<PadCommand>) {
        ui.horizontal(|ui| {
            if ui.button("Clear").clicked() {
                commands.push(PadCommand::Clear);
            }
            if ui.button("Undo").clicked() {
                commands.push(PadCommand::Undo);
            }
            let erasing = self.pad.active_tool() == ActiveTool::Eraser;
            if ui.selectable_label(erasing, "Eraser").clicked() {
                commands.push(PadCommand::SelectEraser);
            }
        });
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            for (index, color) in self.pad.settings().pen_palette.iter().enumerate() {
                let fill = color.to_color32();
                let label =
                    RichText::new(format!("Pen {}", index + 1)).color(button_text_color(fill));
                let mut button = Button::new(label).fill(fill);
                if self.pad.active_tool() == ActiveTool::Pen(index) {
                    button = button.stroke(egui::Stroke::new(2.0, ui.visuals().strong_text_color()));
                }
                if ui.add(button).clicked() {
                    commands.push(PadCommand::SelectPen(index));
                }
            }
        });
    }
}

fn button_text_color(fill: Color32) -> Color32 {
    // Rec. 601 luma.
    let luma = 0.299 * fill.r() as f32 + 0.587 * fill.g() as f32 + 0.114 * fill.b() as f32;
    if luma < 128.0 {
        Color32::WHITE
    } else {
        Color32::BLACK
    }
}

impl eframe::App for PadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut commands = Vec::new();
        self.keyboard_commands(ctx, &mut commands);

        TopBottomPanel::top("pad_controls").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.vertical_centered(|ui| {
                ui.heading("Ink Pad");
            });
            ui.add_space(4.0);
            self.control_rows(ui, &mut commands);
            ui.add_space(6.0);
        });

        for command in commands {
            self.pad.apply(command);
        }

        CentralPanel::default()
            .frame(Frame::none())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
                let canvas = response.rect;
                let painter = painter.with_clip_rect(canvas);

                render::paint_background(
                    &painter,
                    canvas,
                    self.pad.settings().background.to_color32(),
                );

                let (events, now) = ctx.input(|i| (i.events.clone(), i.time));
                self.pad.pump_events(&events, canvas, now);

                render::paint_finished(&painter, canvas.min, self.pad.strokes());
                render::paint_live(&painter, canvas.min, self.pad.live());
            });

        // Touch moves coalesce with frame pacing; keep frames coming while
        // a stroke is open so wet ink tracks the contact closely.
        if self.pad.is_drawing() {
            ctx.request_repaint();
        }
    }
}
