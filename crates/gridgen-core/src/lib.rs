//! Geometry primitives shared by the GridGen crates.
//!
//! Everything here is in board millimetres except [`GridPos`], which counts
//! grid positions.

pub mod feature;
pub mod point;

pub use feature::{Feature, FeatureSet, Layer, Outline};
pub use point::{round4, GridPos, Point, Polyline};
