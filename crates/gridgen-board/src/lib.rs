//! Whole-board rendering: a [`BoardConfig`] plus a footprint [`Catalog`]
//! becomes placed footprints, silkscreen labels and the set of occupied grid
//! cells, ready for a serializer.
//!
//! [`Catalog`]: gridgen_footprint::Catalog

mod config;
mod error;
mod labels;
mod render;

pub use config::{BoardConfig, GridConfig, LabelConfig, PinLabelConfig, PlacementConfig};
pub use error::BoardError;
pub use labels::{grid_labels, pin_labels};
pub use render::{render_board, BoardOutput, SkipReason, SkippedPlacement};
