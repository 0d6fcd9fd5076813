use gridgen_core::{FeatureSet, GridPos, Outline, Point};
use serde::{Deserialize, Serialize};

/// One catalog record. Immutable once loaded; rotation produces new values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintDefinition {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Grid spacing in millimetres this footprint was drawn for.
    pub pitch: f64,
    /// Number of grid positions spanned horizontally (last column is `width_pins - 1`).
    pub width_pins: u32,
    /// Number of grid positions spanned vertically.
    pub height_pins: u32,
    pub outline: Outline,
    /// Offset of the outline centre from the pin-grid centre.
    #[serde(default)]
    pub outline_offset: Point,
    #[serde(flatten)]
    pub kind: FootprintKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FootprintKind {
    /// Through-hole module; pins come from linear row rules.
    Module {
        #[serde(rename = "pinRows")]
        pin_rows: Vec<PinRow>,
    },
    /// SMD adapter; explicit through pins plus manufacturing features.
    Adapter {
        #[serde(rename = "throughPins")]
        through_pins: Vec<ThroughPin>,
        #[serde(default)]
        features: FeatureSet,
    },
}

/// `count` pins starting at (`x`, `y`) and stepping by (`dx`, `dy`) grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinRow {
    pub x: i32,
    pub y: i32,
    pub count: u32,
    #[serde(default)]
    pub dx: i32,
    #[serde(default)]
    pub dy: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThroughPin {
    pub col: i32,
    pub row: i32,
    #[serde(default)]
    pub label: String,
}

impl ThroughPin {
    #[must_use]
    pub fn pos(&self) -> GridPos {
        GridPos::new(self.col, self.row)
    }
}

impl FootprintDefinition {
    #[must_use]
    pub fn is_adapter(&self) -> bool {
        matches!(self.kind, FootprintKind::Adapter { .. })
    }

    /// Manufacturing features; modules have none.
    #[must_use]
    pub fn features(&self) -> Option<&FeatureSet> {
        match &self.kind {
            FootprintKind::Module { .. } => None,
            FootprintKind::Adapter { features, .. } => Some(features),
        }
    }

    #[must_use]
    pub fn max_col(&self) -> i32 {
        grid_span(self.width_pins) - 1
    }

    #[must_use]
    pub fn max_row(&self) -> i32 {
        grid_span(self.height_pins) - 1
    }

    /// Centre of the pin-grid bounding rectangle, relative to the origin pin.
    #[must_use]
    pub fn center_mm(&self) -> Point {
        Point::new(
            f64::from(self.max_col()) * self.pitch / 2.0,
            f64::from(self.max_row()) * self.pitch / 2.0,
        )
    }

    /// Pin labels in pin order. Module pins are unlabelled.
    #[must_use]
    pub fn pin_labels(&self) -> Vec<Option<&str>> {
        match &self.kind {
            FootprintKind::Module { .. } => vec![None; crate::resolve_pins(self).len()],
            FootprintKind::Adapter { through_pins, .. } => through_pins
                .iter()
                .map(|p| Some(p.label.as_str()).filter(|l| !l.is_empty()))
                .collect(),
        }
    }

    #[must_use]
    pub fn fits_pitch(&self, pitch: f64) -> bool {
        (self.pitch - pitch).abs() < 1e-6
    }
}

fn grid_span(pins: u32) -> i32 {
    i32::try_from(pins).unwrap_or(i32::MAX)
}
