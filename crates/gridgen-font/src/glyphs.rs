/// Width of the glyph design cell.
pub const GLYPH_WIDTH: f64 = 3.0;
/// Height of the glyph design cell.
pub const GLYPH_HEIGHT: f64 = 5.0;

/// The strokes of one character. Each stroke is a polyline in design units,
/// origin at the bottom-left of the cell.
pub type Glyph = &'static [&'static [[f64; 2]]];

/// Strokes for `ch`, looked up case-insensitively.
#[must_use]
pub fn glyph(ch: char) -> Option<Glyph> {
    let g: Glyph = match ch.to_ascii_uppercase() {
        '0' => &[
            &[[0.0, 0.0], [0.0, 5.0], [3.0, 5.0], [3.0, 0.0], [0.0, 0.0]],
            &[[0.0, 0.0], [3.0, 5.0]],
        ],
        '1' => &[&[[1.0, 4.0], [1.5, 5.0], [1.5, 0.0]], &[[0.0, 0.0], [3.0, 0.0]]],
        '2' => &[&[[0.0, 4.0], [0.0, 5.0], [3.0, 5.0], [3.0, 3.0], [0.0, 0.0], [3.0, 0.0]]],
        '3' => &[
            &[[0.0, 5.0], [3.0, 5.0], [3.0, 0.0], [0.0, 0.0]],
            &[[0.0, 2.5], [3.0, 2.5]],
        ],
        '4' => &[&[[0.0, 5.0], [0.0, 2.5], [3.0, 2.5]], &[[3.0, 5.0], [3.0, 0.0]]],
        '5' => &[&[[3.0, 5.0], [0.0, 5.0], [0.0, 2.5], [3.0, 2.5], [3.0, 0.0], [0.0, 0.0]]],
        '6' => &[&[[3.0, 5.0], [0.0, 5.0], [0.0, 0.0], [3.0, 0.0], [3.0, 2.5], [0.0, 2.5]]],
        '7' => &[&[[0.0, 5.0], [3.0, 5.0], [1.0, 0.0]]],
        '8' => &[
            &[[0.0, 0.0], [0.0, 5.0], [3.0, 5.0], [3.0, 0.0], [0.0, 0.0]],
            &[[0.0, 2.5], [3.0, 2.5]],
        ],
        '9' => &[&[[0.0, 0.0], [3.0, 0.0], [3.0, 5.0], [0.0, 5.0], [0.0, 2.5], [3.0, 2.5]]],
        'A' => &[
            &[[0.0, 0.0], [0.0, 4.0], [1.5, 5.0], [3.0, 4.0], [3.0, 0.0]],
            &[[0.0, 2.5], [3.0, 2.5]],
        ],
        'B' => &[
            &[
                [0.0, 0.0],
                [0.0, 5.0],
                [2.5, 5.0],
                [3.0, 4.5],
                [3.0, 3.5],
                [2.5, 3.0],
                [0.0, 2.5],
            ],
            &[[0.0, 2.5], [2.5, 2.5], [3.0, 1.5], [3.0, 0.5], [2.5, 0.0], [0.0, 0.0]],
        ],
        'C' => &[&[
            [3.0, 4.0],
            [2.0, 5.0],
            [1.0, 5.0],
            [0.0, 4.0],
            [0.0, 1.0],
            [1.0, 0.0],
            [2.0, 0.0],
            [3.0, 1.0],
        ]],
        'D' => &[&[
            [0.0, 0.0],
            [0.0, 5.0],
            [2.0, 5.0],
            [3.0, 4.0],
            [3.0, 1.0],
            [2.0, 0.0],
            [0.0, 0.0],
        ]],
        'E' => &[&[[3.0, 5.0], [0.0, 5.0], [0.0, 0.0], [3.0, 0.0]], &[[0.0, 2.5], [2.0, 2.5]]],
        'F' => &[&[[3.0, 5.0], [0.0, 5.0], [0.0, 0.0]], &[[0.0, 2.5], [2.0, 2.5]]],
        'G' => &[&[
            [3.0, 4.0],
            [2.0, 5.0],
            [1.0, 5.0],
            [0.0, 4.0],
            [0.0, 1.0],
            [1.0, 0.0],
            [2.0, 0.0],
            [3.0, 1.0],
            [3.0, 2.5],
            [1.5, 2.5],
        ]],
        'H' => &[
            &[[0.0, 0.0], [0.0, 5.0]],
            &[[3.0, 0.0], [3.0, 5.0]],
            &[[0.0, 2.5], [3.0, 2.5]],
        ],
        'I' => &[
            &[[0.0, 5.0], [3.0, 5.0]],
            &[[1.5, 5.0], [1.5, 0.0]],
            &[[0.0, 0.0], [3.0, 0.0]],
        ],
        'J' => &[&[[1.0, 5.0], [3.0, 5.0], [3.0, 0.0], [2.0, 0.0], [1.0, 0.0], [0.0, 1.0]]],
        'K' => &[&[[0.0, 0.0], [0.0, 5.0]], &[[3.0, 5.0], [0.0, 2.5], [3.0, 0.0]]],
        'L' => &[&[[0.0, 5.0], [0.0, 0.0], [3.0, 0.0]]],
        'M' => &[&[[0.0, 0.0], [0.0, 5.0], [1.5, 3.0], [3.0, 5.0], [3.0, 0.0]]],
        'N' => &[&[[0.0, 0.0], [0.0, 5.0], [3.0, 0.0], [3.0, 5.0]]],
        'O' => &[&[
            [0.0, 1.0],
            [0.0, 4.0],
            [1.0, 5.0],
            [2.0, 5.0],
            [3.0, 4.0],
            [3.0, 1.0],
            [2.0, 0.0],
            [1.0, 0.0],
            [0.0, 1.0],
        ]],
        'P' => &[&[[0.0, 0.0], [0.0, 5.0], [3.0, 5.0], [3.0, 2.5], [0.0, 2.5]]],
        'Q' => &[
            &[
                [0.0, 1.0],
                [0.0, 4.0],
                [1.0, 5.0],
                [2.0, 5.0],
                [3.0, 4.0],
                [3.0, 1.0],
                [2.0, 0.0],
                [1.0, 0.0],
                [0.0, 1.0],
            ],
            &[[2.0, 1.0], [3.0, 0.0]],
        ],
        'R' => &[
            &[[0.0, 0.0], [0.0, 5.0], [3.0, 5.0], [3.0, 2.5], [0.0, 2.5]],
            &[[1.5, 2.5], [3.0, 0.0]],
        ],
        'S' => &[&[
            [3.0, 4.0],
            [2.0, 5.0],
            [1.0, 5.0],
            [0.0, 4.0],
            [0.0, 3.0],
            [1.0, 2.5],
            [2.0, 2.5],
            [3.0, 2.0],
            [3.0, 1.0],
            [2.0, 0.0],
            [1.0, 0.0],
            [0.0, 1.0],
        ]],
        'T' => &[&[[0.0, 5.0], [3.0, 5.0]], &[[1.5, 5.0], [1.5, 0.0]]],
        'U' => &[&[[0.0, 5.0], [0.0, 1.0], [1.0, 0.0], [2.0, 0.0], [3.0, 1.0], [3.0, 5.0]]],
        'V' => &[&[[0.0, 5.0], [1.5, 0.0], [3.0, 5.0]]],
        'W' => &[&[[0.0, 5.0], [0.75, 0.0], [1.5, 3.0], [2.25, 0.0], [3.0, 5.0]]],
        'X' => &[&[[0.0, 0.0], [3.0, 5.0]], &[[0.0, 5.0], [3.0, 0.0]]],
        'Y' => &[&[[0.0, 5.0], [1.5, 2.5], [3.0, 5.0]], &[[1.5, 2.5], [1.5, 0.0]]],
        'Z' => &[&[[0.0, 5.0], [3.0, 5.0], [0.0, 0.0], [3.0, 0.0]]],
        _ => return None,
    };
    Some(g)
}
