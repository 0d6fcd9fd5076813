use std::borrow::Cow;

use gridgen_core::{Feature, GridPos, Point};
use serde::{Deserialize, Serialize};

use crate::definition::{FootprintDefinition, FootprintKind, PinRow, ThroughPin};

/// A quarter-turn orientation, clockwise.
///
/// Serialized as its step count (0..=3); any integer deserializes and wraps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// Normalize a step count, so `-1` is `R270` and `5` is `R90`.
    #[must_use]
    pub fn from_steps(steps: i32) -> Self {
        match steps.rem_euclid(4) {
            1 => Rotation::R90,
            2 => Rotation::R180,
            3 => Rotation::R270,
            _ => Rotation::R0,
        }
    }

    #[must_use]
    pub fn steps(self) -> i32 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 1,
            Rotation::R180 => 2,
            Rotation::R270 => 3,
        }
    }

    #[must_use]
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }

    /// The rotation reached by applying `self` and then `next`.
    #[must_use]
    pub fn then(self, next: Rotation) -> Rotation {
        Rotation::from_steps(self.steps() + next.steps())
    }

    /// Whether width and height trade places.
    #[must_use]
    pub fn swaps_axes(self) -> bool {
        match self {
            Rotation::R0 | Rotation::R180 => false,
            Rotation::R90 | Rotation::R270 => true,
        }
    }

    /// Rotate a grid cell inside a `max_col` x `max_row` rectangle. Exact.
    #[must_use]
    pub fn grid_point(self, p: GridPos, max_col: i32, max_row: i32) -> GridPos {
        match self {
            Rotation::R0 => p,
            Rotation::R90 => GridPos::new(p.row, max_col - p.col),
            Rotation::R180 => GridPos::new(max_col - p.col, max_row - p.row),
            Rotation::R270 => GridPos::new(max_row - p.row, p.col),
        }
    }

    /// Rotate a grid step vector.
    #[must_use]
    pub fn grid_step(self, dx: i32, dy: i32) -> (i32, i32) {
        match self {
            Rotation::R0 => (dx, dy),
            Rotation::R90 => (dy, -dx),
            Rotation::R180 => (-dx, -dy),
            Rotation::R270 => (-dy, dx),
        }
    }

    /// Rotate a millimetre vector.
    #[must_use]
    pub fn vector(self, v: Point) -> Point {
        match self {
            Rotation::R0 => v,
            Rotation::R90 => Point::new(v.y, -v.x),
            Rotation::R180 => Point::new(-v.x, -v.y),
            Rotation::R270 => Point::new(-v.y, v.x),
        }
    }
}

impl From<i32> for Rotation {
    fn from(steps: i32) -> Self {
        Rotation::from_steps(steps)
    }
}

impl From<Rotation> for i32 {
    fn from(rotation: Rotation) -> Self {
        rotation.steps()
    }
}

/// Geometry of the rotation for one footprint: pivot before and after.
struct Frame {
    rotation: Rotation,
    max_col: i32,
    max_row: i32,
    center: Point,
    new_center: Point,
}

impl Frame {
    fn new(def: &FootprintDefinition, rotation: Rotation) -> Self {
        let center = def.center_mm();
        let new_center = if rotation.swaps_axes() {
            Point::new(center.y, center.x)
        } else {
            center
        };
        Self {
            rotation,
            max_col: def.max_col(),
            max_row: def.max_row(),
            center,
            new_center,
        }
    }

    fn point(&self, p: Point) -> Point {
        self.new_center + self.rotation.vector(p - self.center)
    }

    fn pin_row(&self, row: &PinRow) -> PinRow {
        let start = self
            .rotation
            .grid_point(GridPos::new(row.x, row.y), self.max_col, self.max_row);
        let (dx, dy) = self.rotation.grid_step(row.dx, row.dy);
        PinRow {
            x: start.col,
            y: start.row,
            count: row.count,
            dx,
            dy,
        }
    }

    fn through_pin(&self, pin: &ThroughPin) -> ThroughPin {
        let pos = self
            .rotation
            .grid_point(pin.pos(), self.max_col, self.max_row);
        ThroughPin {
            col: pos.col,
            row: pos.row,
            label: pin.label.clone(),
        }
    }

    fn feature(&self, feature: &Feature) -> Feature {
        let rotated = feature.map_points(|p| self.point(p));
        match rotated {
            Feature::Pad { x, y, w, h } if self.rotation.swaps_axes() => Feature::Pad { x, y, w: h, h: w },
            other => other,
        }
    }
}

/// Rotate a footprint clockwise about the centre of its pin-grid rectangle.
///
/// Pin offsets, pin rules, features, outline and outline offset are all
/// rotated; at 90/270 degrees the grid span, outline size and pad sizes swap.
/// `R0` borrows the source. The source is never modified.
#[must_use]
pub fn rotate(def: &FootprintDefinition, rotation: Rotation) -> Cow<'_, FootprintDefinition> {
    if rotation == Rotation::R0 {
        return Cow::Borrowed(def);
    }
    let frame = Frame::new(def, rotation);

    let kind = match &def.kind {
        FootprintKind::Module { pin_rows } => FootprintKind::Module {
            pin_rows: pin_rows.iter().map(|r| frame.pin_row(r)).collect(),
        },
        FootprintKind::Adapter {
            through_pins,
            features,
        } => FootprintKind::Adapter {
            through_pins: through_pins.iter().map(|p| frame.through_pin(p)).collect(),
            features: features.map(|f| frame.feature(f)),
        },
    };

    let (width_pins, height_pins, outline) = if rotation.swaps_axes() {
        (def.height_pins, def.width_pins, def.outline.swapped())
    } else {
        (def.width_pins, def.height_pins, def.outline)
    };

    Cow::Owned(FootprintDefinition {
        id: def.id.clone(),
        name: def.name.clone(),
        category: def.category.clone(),
        color: def.color.clone(),
        pitch: def.pitch,
        width_pins,
        height_pins,
        outline,
        outline_offset: rotation.vector(def.outline_offset),
        kind,
    })
}

impl FootprintDefinition {
    /// Shorthand for [`rotate`].
    #[must_use]
    pub fn rotated(&self, rotation: Rotation) -> Cow<'_, FootprintDefinition> {
        rotate(self, rotation)
    }
}
