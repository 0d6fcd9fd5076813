use gridgen_core::GridPos;

use crate::definition::{FootprintDefinition, FootprintKind, PinRow};

impl PinRow {
    /// Grid offsets generated by this rule, in step order.
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        (0..self.count).map(move |i| {
            let i = i32::try_from(i).unwrap_or(i32::MAX);
            GridPos::new(self.x + i * self.dx, self.y + i * self.dy)
        })
    }
}

/// Grid offsets of every pin relative to the footprint origin.
///
/// Module rows are expanded rule by rule; adapter pins keep catalog order.
/// Overlaps and out-of-bounds pins are not checked.
#[must_use]
pub fn resolve_pins(def: &FootprintDefinition) -> Vec<GridPos> {
    match &def.kind {
        FootprintKind::Module { pin_rows } => pin_rows.iter().flat_map(|r| r.positions()).collect(),
        FootprintKind::Adapter { through_pins, .. } => {
            through_pins.iter().map(|p| p.pos()).collect()
        }
    }
}
