use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE_NAME: &str = "pad_settings.json";

/// Most pens the control row will offer, however long the configured
/// palette is.
pub const MAX_PENS: usize = 8;

const MAX_LOOK_AHEAD_MS: u64 = 50;

/// RGBA color as written in the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PadColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl PadColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn to_color32(self) -> Color32 {
        Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

fn default_background() -> PadColor {
    PadColor::rgb(255, 255, 255)
}

fn default_palette() -> Vec<PadColor> {
    vec![
        PadColor::rgb(0, 0, 0),
        PadColor::rgb(255, 0, 0),
        PadColor::rgb(0, 0, 255),
        PadColor::rgb(0, 255, 0),
    ]
}

fn default_pen_size() -> f32 {
    5.0
}

fn default_eraser_size() -> f32 {
    20.0
}

fn default_epsilon() -> f32 {
    0.1
}

fn default_true() -> bool {
    true
}

fn default_look_ahead_ms() -> u64 {
    15
}

/// Pad configuration, stored as JSON next to the executable. Every field
/// has a default, so a partial or empty file still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PadSettings {
    #[serde(default)]
    pub debug_logging: bool,
    /// Canvas fill color. The eraser paints in this color.
    #[serde(default = "default_background")]
    pub background: PadColor,
    /// Pen colors offered in the control row, in order.
    #[serde(default = "default_palette")]
    pub pen_palette: Vec<PadColor>,
    #[serde(default = "default_pen_size")]
    pub pen_size: f32,
    #[serde(default = "default_eraser_size")]
    pub eraser_size: f32,
    /// Minimum distance in points between recorded stroke vertices.
    #[serde(default = "default_epsilon")]
    pub smoothing_epsilon: f32,
    #[serde(default = "default_true")]
    pub pressure_enabled: bool,
    #[serde(default = "default_true")]
    pub prediction_enabled: bool,
    #[serde(default = "default_look_ahead_ms")]
    pub prediction_look_ahead_ms: u64,
}

impl Default for PadSettings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            background: default_background(),
            pen_palette: default_palette(),
            pen_size: default_pen_size(),
            eraser_size: default_eraser_size(),
            smoothing_epsilon: default_epsilon(),
            pressure_enabled: true,
            prediction_enabled: true,
            prediction_look_ahead_ms: default_look_ahead_ms(),
        }
    }
}

impl PadSettings {
    /// Pull hand-edited values back into usable ranges.
    pub fn sanitize(&mut self) {
        if self.pen_palette.is_empty() {
            self.pen_palette = default_palette();
        }
        self.pen_palette.truncate(MAX_PENS);
        if !self.pen_size.is_finite() || self.pen_size <= 0.0 {
            self.pen_size = default_pen_size();
        }
        if !self.eraser_size.is_finite() || self.eraser_size <= 0.0 {
            self.eraser_size = default_eraser_size();
        }
        if !self.smoothing_epsilon.is_finite() || self.smoothing_epsilon < 0.0 {
            self.smoothing_epsilon = default_epsilon();
        }
        self.prediction_look_ahead_ms = self.prediction_look_ahead_ms.min(MAX_LOOK_AHEAD_MS);
    }
}

pub fn settings_path_from_exe_path(exe_path: &Path) -> Result<PathBuf> {
    let dir = exe_path.parent().ok_or_else(|| {
        anyhow!(
            "executable path {} has no parent directory",
            exe_path.display()
        )
    })?;
    Ok(dir.join(SETTINGS_FILE_NAME))
}

pub fn resolve_settings_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("resolve current executable path")?;
    settings_path_from_exe_path(&exe)
}

/// Load and sanitize settings from `path`. A missing file is `Ok(None)`.
pub fn load_from_path(path: &Path) -> Result<Option<PadSettings>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read settings file {}", path.display()))?;
    let mut settings: PadSettings = serde_json::from_str(&raw)
        .with_context(|| format!("parse settings file {}", path.display()))?;
    settings.sanitize();
    Ok(Some(settings))
}

pub fn save_to_path(path: &Path, settings: &PadSettings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings).context("serialize settings")?;
    fs::write(path, json).with_context(|| format!("write settings file {}", path.display()))?;
    Ok(())
}

/// Load settings from next to the executable. On first run the defaults
/// are written back, best effort, so there is a file to edit.
pub fn load_or_init() -> Result<PadSettings> {
    let path = resolve_settings_path()?;
    match load_from_path(&path)? {
        Some(settings) => Ok(settings),
        None => {
            let settings = PadSettings::default();
            let _ = save_to_path(&path, &settings);
            Ok(settings)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_returns_none_when_file_is_missing() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(SETTINGS_FILE_NAME);
        assert_eq!(load_from_path(&path).expect("load"), None);
    }

    #[test]
    fn settings_roundtrip_through_disk() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(SETTINGS_FILE_NAME);

        let mut settings = PadSettings::default();
        settings.debug_logging = true;
        settings.pen_size = 7.5;
        settings.background = PadColor::rgb(10, 20, 30);

        save_to_path(&path, &settings).expect("save");
        let loaded = load_from_path(&path).expect("load").expect("some");
        assert_eq!(loaded, settings);
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, r#"{ "pen_size": 9.0 }"#).expect("write");

        let loaded = load_from_path(&path).expect("load").expect("some");
        assert_eq!(loaded.pen_size, 9.0);
        assert_eq!(loaded.eraser_size, default_eraser_size());
        assert_eq!(loaded.pen_palette, default_palette());
        assert!(loaded.pressure_enabled);
    }

    #[test]
    fn sanitize_repairs_unusable_values() {
        let mut settings = PadSettings {
            pen_palette: Vec::new(),
            pen_size: -3.0,
            eraser_size: f32::NAN,
            smoothing_epsilon: -1.0,
            prediction_look_ahead_ms: 10_000,
            ..PadSettings::default()
        };
        settings.sanitize();
        assert_eq!(settings.pen_palette, default_palette());
        assert_eq!(settings.pen_size, default_pen_size());
        assert_eq!(settings.eraser_size, default_eraser_size());
        assert_eq!(settings.smoothing_epsilon, default_epsilon());
        assert_eq!(settings.prediction_look_ahead_ms, MAX_LOOK_AHEAD_MS);
    }

    #[test]
    fn oversized_palette_is_truncated() {
        let mut settings = PadSettings::default();
        settings.pen_palette = vec![PadColor::rgb(1, 1, 1); MAX_PENS + 4];
        settings.sanitize();
        assert_eq!(settings.pen_palette.len(), MAX_PENS);
    }

    #[test]
    fn settings_path_sits_next_to_the_executable() {
        let path = settings_path_from_exe_path(Path::new("/opt/pad/ink_pad")).expect("path");
        assert_eq!(path, Path::new("/opt/pad").join(SETTINGS_FILE_NAME));
    }
}
