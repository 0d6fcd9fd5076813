//! Absolute board geometry for placed footprints.
//!
//! Every function here composes the grid-to-millimetre mapping of a
//! [`GridContext`] with footprint-local coordinates. The composition is a
//! plain translation, so moving an instance by `n` columns moves every output
//! x coordinate by `n * pitch`.

use gridgen_core::{FeatureSet, GridPos, Point, Polyline};
use gridgen_footprint::{resolve_pins, rotate, Catalog, FootprintDefinition, Rotation};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Where grid cell (0,0) sits on the board and how far apart cells are.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridContext {
    #[serde(default)]
    pub origin: Point,
    pub pitch: f64,
}

impl GridContext {
    #[must_use]
    pub const fn new(origin: Point, pitch: f64) -> Self {
        Self { origin, pitch }
    }

    #[must_use]
    pub fn cell_mm(&self, cell: GridPos) -> Point {
        cell.to_mm(self.origin, self.pitch)
    }
}

/// One placement of a footprint on the board grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    pub col: i32,
    pub row: i32,
    #[serde(default)]
    pub rotation: Rotation,
}

impl Instance {
    #[must_use]
    pub const fn new(col: i32, row: i32, rotation: Rotation) -> Self {
        Self { col, row, rotation }
    }

    #[must_use]
    pub fn cell(&self) -> GridPos {
        GridPos::new(self.col, self.row)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPin {
    pub x: f64,
    pub y: f64,
    /// Absolute board column.
    pub col: i32,
    /// Absolute board row.
    pub row: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl PlacedPin {
    #[must_use]
    pub fn cell(&self) -> GridPos {
        GridPos::new(self.col, self.row)
    }
}

/// Preview body rectangle in board millimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedOutline {
    pub center: Point,
    pub width: f64,
    pub height: f64,
    /// Closed rectangle, counter-clockwise from the bottom-left corner.
    pub corners: Polyline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedFootprint {
    pub id: String,
    pub instance: Instance,
    pub pins: Vec<PlacedPin>,
    pub features: FeatureSet,
    pub outline: PlacedOutline,
}

/// Board position of the footprint's origin pin.
fn instance_origin(instance: &Instance, ctx: &GridContext) -> Point {
    ctx.cell_mm(instance.cell())
}

/// Absolute through-hole positions, in pin order.
///
/// `footprint` is used as given; rotate it first if the instance is rotated.
#[must_use]
pub fn place_through_holes(
    footprint: &FootprintDefinition,
    instance: &Instance,
    ctx: &GridContext,
) -> Vec<PlacedPin> {
    resolve_pins(footprint)
        .into_iter()
        .zip(footprint.pin_labels())
        .map(|(offset, label)| {
            let cell = instance.cell() + offset;
            let mm = ctx.cell_mm(cell);
            PlacedPin {
                x: mm.x,
                y: mm.y,
                col: cell.col,
                row: cell.row,
                label: label.map(str::to_string),
            }
        })
        .collect()
}

/// Absolute copper, mask and silk features. Modules have none.
#[must_use]
pub fn place_features(
    footprint: &FootprintDefinition,
    instance: &Instance,
    ctx: &GridContext,
) -> FeatureSet {
    let Some(features) = footprint.features() else {
        return FeatureSet::default();
    };
    let origin = instance_origin(instance, ctx);
    features.map(|f| f.translate(origin))
}

/// Preview outline, centred on the pin-grid centre shifted by the outline offset.
#[must_use]
pub fn place_outline(
    footprint: &FootprintDefinition,
    instance: &Instance,
    ctx: &GridContext,
) -> PlacedOutline {
    let center = instance_origin(instance, ctx) + footprint.center_mm() + footprint.outline_offset;
    let (hw, hh) = (footprint.outline.width / 2.0, footprint.outline.height / 2.0);
    let corners = vec![
        center.offset(-hw, -hh),
        center.offset(hw, -hh),
        center.offset(hw, hh),
        center.offset(-hw, hh),
        center.offset(-hw, -hh),
    ];
    PlacedOutline {
        center,
        width: footprint.outline.width,
        height: footprint.outline.height,
        corners,
    }
}

/// Rotate `def` by the instance rotation and place it.
#[must_use]
pub fn place(def: &FootprintDefinition, instance: &Instance, ctx: &GridContext) -> PlacedFootprint {
    let footprint = rotate(def, instance.rotation);
    if instance.rotation != Rotation::R0 {
        debug!(id = %def.id, degrees = instance.rotation.degrees(), "rotated footprint");
    }
    let placed = PlacedFootprint {
        id: def.id.clone(),
        instance: *instance,
        pins: place_through_holes(&footprint, instance, ctx),
        features: place_features(&footprint, instance, ctx),
        outline: place_outline(&footprint, instance, ctx),
    };
    trace!(
        id = %placed.id,
        pins = placed.pins.len(),
        features = placed.features.len(),
        "placed footprint"
    );
    placed
}

/// Look up `id` and place it. `None` when the catalog has no such footprint.
#[must_use]
pub fn place_by_id(
    catalog: &Catalog,
    id: &str,
    instance: &Instance,
    ctx: &GridContext,
) -> Option<PlacedFootprint> {
    catalog.get(id).map(|def| place(def, instance, ctx))
}
