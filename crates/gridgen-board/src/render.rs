use std::collections::BTreeSet;

use gridgen_core::{GridPos, Polyline};
use gridgen_footprint::{Catalog, FootprintDefinition};
use gridgen_placement::{place, PlacedFootprint};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{BoardConfig, PlacementConfig};
use crate::labels::{grid_labels, pin_labels};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    UnknownFootprint,
    PitchMismatch { footprint_pitch: f64, grid_pitch: f64 },
}

/// A board placement that produced no geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedPlacement {
    /// Position in `BoardConfig::placements`.
    pub index: usize,
    pub footprint: String,
    #[serde(flatten)]
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardOutput {
    pub placements: Vec<PlacedFootprint>,
    /// Grid column and row labels.
    pub labels: Vec<Polyline>,
    pub pin_labels: Vec<Polyline>,
    /// Cells covered by a through pin; plain grid pads are omitted there.
    pub occupied: Vec<GridPos>,
    pub skipped: Vec<SkippedPlacement>,
}

/// Place every footprint on the board and add its silkscreen labels.
///
/// Placements whose footprint is missing from `catalog` or drawn for another
/// pitch are skipped and reported in [`BoardOutput::skipped`].
#[must_use]
pub fn render_board(config: &BoardConfig, catalog: &Catalog) -> BoardOutput {
    let ctx = config.grid.context();
    let mut out = BoardOutput {
        labels: grid_labels(&config.grid, &config.labels),
        ..BoardOutput::default()
    };
    let mut occupied = BTreeSet::new();

    for (index, placement) in config.placements.iter().enumerate() {
        let def = match check(placement, catalog, ctx.pitch) {
            Ok(def) => def,
            Err(reason) => {
                warn!(index, footprint = %placement.footprint, ?reason, "skipping placement");
                out.skipped.push(SkippedPlacement {
                    index,
                    footprint: placement.footprint.clone(),
                    reason,
                });
                continue;
            }
        };

        let placed = place(def, &placement.instance(), &ctx);
        occupied.extend(placed.pins.iter().map(|pin| pin.cell()));
        out.pin_labels.extend(pin_labels(&placed.pins, &config.pin_labels));
        out.placements.push(placed);
    }

    out.occupied = occupied.into_iter().collect();
    debug!(
        placed = out.placements.len(),
        skipped = out.skipped.len(),
        occupied = out.occupied.len(),
        "board rendered"
    );
    out
}

fn check<'a>(
    placement: &PlacementConfig,
    catalog: &'a Catalog,
    grid_pitch: f64,
) -> Result<&'a FootprintDefinition, SkipReason> {
    let def = catalog
        .get(&placement.footprint)
        .ok_or(SkipReason::UnknownFootprint)?;
    if !def.fits_pitch(grid_pitch) {
        return Err(SkipReason::PitchMismatch {
            footprint_pitch: def.pitch,
            grid_pitch,
        });
    }
    Ok(def)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GridConfig, LabelConfig, PinLabelConfig};
    use gridgen_core::Point;
    use gridgen_footprint::Rotation;

    fn board(placements: Vec<PlacementConfig>) -> BoardConfig {
        BoardConfig {
            grid: GridConfig {
                pitch: 2.54,
                origin: Point::default(),
                cols: 20,
                rows: 20,
            },
            placements,
            labels: LabelConfig {
                enabled: false,
                ..LabelConfig::default()
            },
            pin_labels: PinLabelConfig::default(),
        }
    }

    fn at(footprint: &str, col: i32, row: i32) -> PlacementConfig {
        PlacementConfig {
            footprint: footprint.into(),
            col,
            row,
            rotation: Rotation::R0,
        }
    }

    #[test]
    fn unknown_ids_are_skipped_not_fatal() {
        let catalog = Catalog::builtin().unwrap();
        let out = render_board(&board(vec![at("nope", 0, 0), at("dip8", 2, 2)]), &catalog);
        assert_eq!(out.placements.len(), 1);
        assert_eq!(out.placements[0].id, "dip8");
        assert_eq!(
            out.skipped,
            vec![SkippedPlacement {
                index: 0,
                footprint: "nope".into(),
                reason: SkipReason::UnknownFootprint,
            }]
        );
    }

    #[test]
    fn pitch_mismatch_is_skipped() {
        let catalog = Catalog::builtin().unwrap();
        let mut config = board(vec![at("dip8", 0, 0)]);
        config.grid.pitch = 2.0;
        let out = render_board(&config, &catalog);
        assert!(out.placements.is_empty());
        assert!(matches!(
            out.skipped[0].reason,
            SkipReason::PitchMismatch { grid_pitch, .. } if grid_pitch == 2.0
        ));
    }

    #[test]
    fn occupied_cells_are_sorted_and_unique() {
        let catalog = Catalog::builtin().unwrap();
        // same footprint twice on the same cells
        let out = render_board(&board(vec![at("sot23-3", 5, 5), at("sot23-3", 5, 5)]), &catalog);
        assert_eq!(
            out.occupied,
            vec![GridPos::new(5, 5), GridPos::new(5, 6), GridPos::new(7, 5)]
        );
    }

    #[test]
    fn pin_labels_follow_config() {
        let catalog = Catalog::builtin().unwrap();
        let mut config = board(vec![at("sot23-3", 0, 0), at("dip8", 4, 4)]);
        assert!(render_board(&config, &catalog).pin_labels.is_empty());

        config.pin_labels.enabled = true;
        let with_labels = render_board(&config, &catalog);
        assert!(!with_labels.pin_labels.is_empty());
    }
}
