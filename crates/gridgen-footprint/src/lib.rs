//! Footprint definitions for GridGen: the catalog, pin layout resolution and
//! quarter-turn rotation.
//!
//! A [`FootprintDefinition`] is either a through-hole *module* described by
//! linear pin rows, or an SMD *adapter* with an explicit pin list and copper,
//! mask and silk features. Both variants share [`rotate`] and the placement
//! code in `gridgen-placement`.

mod catalog;
mod definition;
mod error;
mod pins;
mod rotation;

pub use catalog::Catalog;
pub use definition::{FootprintDefinition, FootprintKind, PinRow, ThroughPin};
pub use error::CatalogError;
pub use pins::resolve_pins;
pub use rotation::{rotate, Rotation};
