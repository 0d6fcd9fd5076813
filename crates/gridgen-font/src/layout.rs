use std::str::FromStr;

use gridgen_core::{Point, Polyline};
use serde::{Deserialize, Serialize};

use crate::glyphs::{glyph, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Advance per character in design units: 2 units of glyph plus a 2 unit gap.
const ADVANCE: f64 = 4.0;

/// Which point of the rendered string the `x` passed to [`layout_text`] refers to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// Left edge of the first glyph.
    #[default]
    Left,
    /// Horizontal midpoint of the rendered string.
    Center,
    /// Right edge of the last glyph.
    Right,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown text anchor \"{0}\" (expected left, center or right)")]
pub struct ParseAnchorError(String);

impl FromStr for Anchor {
    type Err = ParseAnchorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Anchor::Left),
            "center" => Ok(Anchor::Center),
            "right" => Ok(Anchor::Right),
            other => Err(ParseAnchorError(other.to_string())),
        }
    }
}

/// Lay out `text` as stroke polylines in board millimetres.
///
/// `y` is the vertical centre of the text and `height_mm` the full glyph
/// height. Characters without a glyph are skipped but keep their slot, so
/// `"A B"` leaves a gap where the space would be. Coordinates are rounded to
/// 4 decimal places.
#[must_use]
pub fn layout_text(text: &str, x: f64, y: f64, height_mm: f64, anchor: Anchor) -> Vec<Polyline> {
    let count = text.chars().count();
    if count == 0 {
        return Vec::new();
    }

    let scale = height_mm / GLYPH_HEIGHT;
    let advance = ADVANCE * scale;
    let extent = (count - 1) as f64 * advance + GLYPH_WIDTH * scale;

    let left = match anchor {
        Anchor::Left => x,
        Anchor::Center => x - extent / 2.0,
        Anchor::Right => x - extent,
    };
    let baseline = y - GLYPH_HEIGHT / 2.0 * scale;

    let mut strokes = Vec::new();
    for (idx, ch) in text.chars().enumerate() {
        let Some(strokes_of_glyph) = glyph(ch) else {
            continue;
        };
        let cell_x = left + idx as f64 * advance;
        for stroke in strokes_of_glyph {
            strokes.push(
                stroke
                    .iter()
                    .map(|[gx, gy]| Point::new(cell_x + gx * scale, baseline + gy * scale).rounded())
                    .collect(),
            );
        }
    }
    strokes
}
