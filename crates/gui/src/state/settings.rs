//! Application settings

use serde::{Deserialize, Serialize};

use crate::geometry::{ARROW_HEAD_LENGTH, GRID_HALF_RANGE, UNITS_VISIBLE_PER_AXIS};
use crate::i18n::Lang;

/// Grid display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    /// Grid units spanning the canvas along each axis
    pub units_visible: f64,
    /// Number of grid lines in each direction from origin
    pub half_range: i32,
    /// Stroke width of ordinary grid lines
    pub minor_stroke: f32,
    /// Stroke width of the two axis lines
    pub axis_stroke: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            units_visible: UNITS_VISIBLE_PER_AXIS,
            half_range: GRID_HALF_RANGE,
            minor_stroke: 1.0,
            axis_stroke: 1.5,
        }
    }
}

/// Vector arrow settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowSettings {
    /// Wing length in screen units
    pub head_length: f64,
    /// Angle between shaft and wing, degrees
    pub head_half_angle_deg: f64,
    /// Shaft and wing stroke width
    pub stroke: f32,
    /// Draw arrowheads on flattened 3D vectors
    pub draw_heads_3d: bool,
}

impl Default for ArrowSettings {
    fn default() -> Self {
        Self {
            head_length: ARROW_HEAD_LENGTH,
            head_half_angle_deg: 30.0,
            stroke: 2.3,
            draw_heads_3d: false,
        }
    }
}

impl ArrowSettings {
    pub fn head_half_angle(&self) -> f64 {
        self.head_half_angle_deg.to_radians()
    }
}

/// Label placement settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSettings {
    /// Offset from the arrow tip, screen units
    pub offset: [f64; 2],
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self { offset: [7.0, -7.0] }
    }
}

/// Tap hit-testing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickingSettings {
    /// Maximum distance from an arrow for a tap to hit it, pixels
    pub tolerance_px: f64,
}

impl Default for PickingSettings {
    fn default() -> Self {
        Self { tolerance_px: 6.0 }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
    pub language: Lang,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            language: Lang::En,
        }
    }
}

/// All application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub grid: GridSettings,
    #[serde(default)]
    pub arrows: ArrowSettings,
    #[serde(default)]
    pub labels: LabelSettings,
    #[serde(default)]
    pub picking: PickingSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

impl AppSettings {
    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        if let Some(dirs) = directories::ProjectDirs::from("com", "vecviz", "vecviz") {
            let config_path = dirs.config_dir().join("settings.json");
            if let Ok(json) = std::fs::read_to_string(&config_path) {
                match serde_json::from_str(&json) {
                    Ok(settings) => return settings,
                    Err(e) => {
                        tracing::warn!("Ignoring malformed settings {}: {e}", config_path.display())
                    }
                }
            }
        }
        Self::default()
    }

    /// Save settings to file
    pub fn save(&self) {
        if let Some(dirs) = directories::ProjectDirs::from("com", "vecviz", "vecviz") {
            let config_dir = dirs.config_dir();
            if let Err(e) = std::fs::create_dir_all(config_dir) {
                tracing::warn!("Cannot create config dir {}: {e}", config_dir.display());
                return;
            }
            let config_path = config_dir.join("settings.json");
            if let Ok(json) = serde_json::to_string_pretty(self) {
                if let Err(e) = std::fs::write(&config_path, json) {
                    tracing::warn!("Failed to save settings {}: {e}", config_path.display());
                }
            }
        }
    }
}
