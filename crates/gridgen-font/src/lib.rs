//! Silkscreen text for GridGen.
//!
//! [`layout_text`] turns a string into stroke polylines in board millimetres
//! using a small built-in vector font; [`column_label`] names grid columns the
//! way spreadsheets do.

mod glyphs;
mod label;
mod layout;

pub use glyphs::{glyph, Glyph, GLYPH_HEIGHT, GLYPH_WIDTH};
pub use label::column_label;
pub use layout::{layout_text, Anchor, ParseAnchorError};
