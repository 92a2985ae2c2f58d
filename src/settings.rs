//! Game settings and tuning
//!
//! Loaded from an optional JSON file; any missing field falls back to the
//! built-in default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::ShapeKind;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting: {0}")]
    Invalid(String),
}

/// Game settings/tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Round ===
    /// Seconds the player gets to draw each copy
    pub timer_length: f32,
    /// Percent correct required to pass a round (0 - 100)
    pub minimum_percent: f32,
    /// Samples per axis in the scoring grid
    pub scoring_grid_width: u32,

    // === Generation ===
    /// Cells span [-cell_range, cell_range] on each axis
    pub cell_range: i32,
    /// Canvas-local distance between neighbouring cells
    pub cell_spacing: f32,
    /// Canvas-local size of an unscaled sprite
    pub sprite_size: f32,
    /// Scale applied to each primitive sprite
    pub primitive_scale: f32,
    /// Shapes the generator may pick from
    pub palette: Vec<ShapeKind>,

    // === Drawing ===
    /// Scale applied to each ink dot sprite
    pub ink_dot_scale: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timer_length: TIMER_LENGTH,
            minimum_percent: MINIMUM_PERCENT,
            scoring_grid_width: SCORING_GRID_WIDTH,

            cell_range: CELL_RANGE,
            cell_spacing: CELL_SPACING,
            sprite_size: SPRITE_SIZE,
            primitive_scale: PRIMITIVE_SCALE,
            palette: ShapeKind::ALL.to_vec(),

            ink_dot_scale: INK_DOT_SCALE,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file and validate them
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse settings from a JSON string and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.timer_length > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "timer_length must be positive, got {}",
                self.timer_length
            )));
        }
        if !(0.0..=100.0).contains(&self.minimum_percent) {
            return Err(SettingsError::Invalid(format!(
                "minimum_percent must be within 0-100, got {}",
                self.minimum_percent
            )));
        }
        if !(1..=MAX_SCORING_GRID_WIDTH).contains(&self.scoring_grid_width) {
            return Err(SettingsError::Invalid(format!(
                "scoring_grid_width must be within 1-{MAX_SCORING_GRID_WIDTH}, got {}",
                self.scoring_grid_width
            )));
        }
        if !(0..=MAX_CELL_RANGE).contains(&self.cell_range) {
            return Err(SettingsError::Invalid(format!(
                "cell_range must be within 0-{MAX_CELL_RANGE}, got {}",
                self.cell_range
            )));
        }
        for (name, value) in [
            ("cell_spacing", self.cell_spacing),
            ("sprite_size", self.sprite_size),
            ("primitive_scale", self.primitive_scale),
            ("ink_dot_scale", self.ink_dot_scale),
        ] {
            if !(value > 0.0) {
                return Err(SettingsError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.palette.is_empty() {
            return Err(SettingsError::Invalid("palette must not be empty".into()));
        }
        Ok(())
    }

    /// Radius of one ink dot in canvas-local units
    pub fn ink_dot_radius(&self) -> f32 {
        self.sprite_size * self.ink_dot_scale * 0.5
    }
}
