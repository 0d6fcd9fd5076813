use gridgen_core::Polyline;
use gridgen_font::{column_label, layout_text, Anchor};
use gridgen_placement::PlacedPin;

use crate::config::{GridConfig, LabelConfig, PinLabelConfig};

/// Column letters under row 0 and 1-based row numbers left of column 0.
#[must_use]
pub fn grid_labels(grid: &GridConfig, labels: &LabelConfig) -> Vec<Polyline> {
    if !labels.enabled {
        return Vec::new();
    }
    let origin = grid.origin;
    let mut strokes = Vec::new();

    let below = origin.y - labels.margin;
    for col in 0..grid.cols {
        let x = origin.x + f64::from(col) * grid.pitch;
        strokes.extend(layout_text(
            &column_label(col as usize),
            x,
            below,
            labels.height,
            Anchor::Center,
        ));
    }

    let left = origin.x - labels.margin;
    for row in 0..grid.rows {
        let y = origin.y + f64::from(row) * grid.pitch;
        strokes.extend(layout_text(
            &(row + 1).to_string(),
            left,
            y,
            labels.height,
            Anchor::Right,
        ));
    }
    strokes
}

/// Pin names centred at each labelled pin plus the configured offset.
#[must_use]
pub fn pin_labels(pins: &[PlacedPin], config: &PinLabelConfig) -> Vec<Polyline> {
    if !config.enabled {
        return Vec::new();
    }
    pins.iter()
        .filter_map(|pin| pin.label.as_deref().map(|label| (pin, label)))
        .flat_map(|(pin, label)| {
            layout_text(
                label,
                pin.x + config.offset.x,
                pin.y + config.offset.y,
                config.height,
                Anchor::Center,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use gridgen_core::Point;

    fn grid() -> GridConfig {
        GridConfig {
            pitch: 2.54,
            origin: Point::new(10.0, 10.0),
            cols: 3,
            rows: 2,
        }
    }

    fn bounds(strokes: &[Polyline]) -> (Point, Point) {
        let mut min = Point::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in strokes.iter().flatten() {
            min = Point::new(min.x.min(p.x), min.y.min(p.y));
            max = Point::new(max.x.max(p.x), max.y.max(p.y));
        }
        (min, max)
    }

    #[test]
    fn disabled_labels_are_empty() {
        let labels = LabelConfig {
            enabled: false,
            ..LabelConfig::default()
        };
        assert!(grid_labels(&grid(), &labels).is_empty());
        assert!(pin_labels(&[], &PinLabelConfig::default()).is_empty());
    }

    #[test]
    fn column_labels_sit_below_the_grid() {
        let labels = LabelConfig {
            height: 5.0,
            ..LabelConfig::default()
        };
        let one_col = GridConfig { cols: 1, rows: 0, ..grid() };
        let strokes = grid_labels(&one_col, &labels);
        // "A" centred on x = 10, vertical centre 1.5 below row 0
        let (min, max) = bounds(&strokes);
        assert_abs_diff_eq!(min.x, 8.5, epsilon = 1e-9);
        assert_abs_diff_eq!(max.x, 11.5, epsilon = 1e-9);
        assert_abs_diff_eq!((min.y + max.y) / 2.0, 8.5, epsilon = 1e-9);
    }

    #[test]
    fn row_numbers_end_left_of_the_grid() {
        let labels = LabelConfig::default();
        let one_row = GridConfig { cols: 0, rows: 1, ..grid() };
        let (_, max) = bounds(&grid_labels(&one_row, &labels));
        assert_abs_diff_eq!(max.x, 10.0 - 1.5, epsilon = 1e-9);
    }

    #[test]
    fn every_row_and_column_gets_a_label() {
        let only_cols = GridConfig { rows: 0, ..grid() };
        let only_rows = GridConfig { cols: 0, ..grid() };
        let labels = LabelConfig::default();
        assert!(!grid_labels(&only_cols, &labels).is_empty());
        let all = grid_labels(&grid(), &labels);
        assert_eq!(
            all.len(),
            grid_labels(&only_cols, &labels).len() + grid_labels(&only_rows, &labels).len()
        );
    }

    #[test]
    fn unlabelled_pins_are_skipped() {
        let config = PinLabelConfig {
            enabled: true,
            ..PinLabelConfig::default()
        };
        let pins = vec![
            PlacedPin {
                x: 0.0,
                y: 0.0,
                col: 0,
                row: 0,
                label: None,
            },
            PlacedPin {
                x: 5.0,
                y: 5.0,
                col: 2,
                row: 2,
                label: Some("1".into()),
            },
        ];
        let strokes = pin_labels(&pins, &config);
        assert!(!strokes.is_empty());
        let (min, max) = bounds(&strokes);
        assert_abs_diff_eq!((min.y + max.y) / 2.0, 6.2, epsilon = 1e-4);
        assert!(min.x > 4.0 && max.x < 6.0);
    }
}
