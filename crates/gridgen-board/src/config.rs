use gridgen_core::Point;
use gridgen_footprint::Rotation;
use gridgen_placement::{GridContext, Instance};
use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// A perfboard and the footprints placed on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub grid: GridConfig,
    #[serde(default)]
    pub placements: Vec<PlacementConfig>,
    #[serde(default)]
    pub labels: LabelConfig,
    #[serde(default)]
    pub pin_labels: PinLabelConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub pitch: f64,
    #[serde(default)]
    pub origin: Point,
    pub cols: u32,
    pub rows: u32,
}

impl GridConfig {
    #[must_use]
    pub fn context(&self) -> GridContext {
        GridContext::new(self.origin, self.pitch)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementConfig {
    pub footprint: String,
    pub col: i32,
    pub row: i32,
    /// Clockwise quarter turns; any integer is normalised.
    #[serde(default)]
    pub rotation: Rotation,
}

impl PlacementConfig {
    #[must_use]
    pub fn instance(&self) -> Instance {
        Instance::new(self.col, self.row, self.rotation)
    }
}

/// Column letters and row numbers around the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub enabled: bool,
    pub height: f64,
    /// Gap between the outermost grid row/column and the label.
    pub margin: f64,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            height: 1.0,
            margin: 1.5,
        }
    }
}

/// Adapter pin names printed next to each through pin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinLabelConfig {
    pub enabled: bool,
    pub height: f64,
    pub offset: Point,
}

impl Default for PinLabelConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            height: 0.8,
            offset: Point::new(0.0, 1.2),
        }
    }
}

impl BoardConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, BoardError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self, BoardError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject grids that cannot hold a single pad. Placements are checked
    /// later, against the catalog, and skipped rather than rejected.
    pub fn validate(&self) -> Result<(), BoardError> {
        let grid = &self.grid;
        if !grid.pitch.is_finite() || grid.pitch <= 0.0 {
            return Err(BoardError::InvalidPitch { pitch: grid.pitch });
        }
        if grid.cols == 0 || grid.rows == 0 {
            return Err(BoardError::EmptyGrid {
                cols: grid.cols,
                rows: grid.rows,
            });
        }
        if self.labels.enabled && self.labels.height <= 0.0 {
            return Err(BoardError::InvalidLabelHeight {
                at: "labels",
                height: self.labels.height,
            });
        }
        if self.pin_labels.enabled && self.pin_labels.height <= 0.0 {
            return Err(BoardError::InvalidLabelHeight {
                at: "pin_labels",
                height: self.pin_labels.height,
            });
        }
        Ok(())
    }
}
