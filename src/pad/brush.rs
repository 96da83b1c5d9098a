use eframe::egui::Color32;

/// Width behaviour of a brush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushFamily {
    /// Width scales with reported contact pressure.
    PressurePen,
    /// Constant width regardless of pressure.
    Marker,
}

/// Scale applied to a pressure-pen width at zero pressure. Reported
/// pressure interpolates linearly from here up to the full brush size.
const LIGHT_TOUCH_SCALE: f32 = 0.25;

/// Everything the ink surface needs to know about the active tool.
///
/// Captured by value when a stroke starts, so switching tools mid-stroke
/// never restyles ink that is already wet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushSpec {
    pub family: BrushFamily,
    pub color: Color32,
    /// Full stroke width in canvas points.
    pub size: f32,
    /// Minimum distance in points between recorded vertices.
    pub epsilon: f32,
}

impl BrushSpec {
    pub fn pressure_pen(color: Color32, size: f32, epsilon: f32) -> Self {
        Self {
            family: BrushFamily::PressurePen,
            color,
            size,
            epsilon,
        }
    }

    pub fn marker(color: Color32, size: f32, epsilon: f32) -> Self {
        Self {
            family: BrushFamily::Marker,
            color,
            size,
            epsilon,
        }
    }

    /// Resolved width for one vertex given the sample's pressure.
    pub fn point_width(&self, pressure: Option<f32>) -> f32 {
        match self.family {
            BrushFamily::Marker => self.size,
            BrushFamily::PressurePen => match pressure {
                None => self.size,
                Some(p) => {
                    let p = p.clamp(0.0, 1.0);
                    self.size * (LIGHT_TOUCH_SCALE + (1.0 - LIGHT_TOUCH_SCALE) * p)
                }
            },
        }
    }

    /// Squared smoothing threshold, for distance-squared comparisons.
    pub fn min_move_sq(&self) -> f32 {
        self.epsilon * self.epsilon
    }
}

impl Default for BrushSpec {
    fn default() -> Self {
        Self::pressure_pen(Color32::BLACK, 5.0, 0.1)
    }
}
