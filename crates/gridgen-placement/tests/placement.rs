use approx::assert_abs_diff_eq;
use gridgen_core::{Feature, FeatureSet, Point};
use gridgen_footprint::{rotate, Catalog, Rotation};
use gridgen_placement::{
    place, place_by_id, place_features, place_through_holes, GridContext, Instance,
};
use proptest::prelude::*;

fn catalog() -> Catalog {
    Catalog::builtin().expect("builtin catalog parses")
}

fn xs(set: &FeatureSet) -> Vec<f64> {
    let mut out = Vec::new();
    for (_, features) in set.layers() {
        for f in features {
            match f {
                Feature::Pad { x, .. } | Feature::Circle { x, .. } => out.push(*x),
                Feature::Trace { x1, x2, .. } => out.extend([*x1, *x2]),
                Feature::Poly { points } => out.extend(points.iter().map(|p| p.x)),
                Feature::Other(_) => {}
            }
        }
    }
    out
}

#[test]
fn sot23_pin_three_lands_two_columns_right() {
    let catalog = catalog();
    let def = catalog.get("sot23-3").unwrap();
    let ctx = GridContext::new(Point::new(10.0, 10.0), 2.54);
    let pins = place_through_holes(def, &Instance::default(), &ctx);

    let pin3 = pins
        .iter()
        .find(|p| p.label.as_deref() == Some("3"))
        .expect("pin 3");
    assert_eq!((pin3.col, pin3.row), (2, 0));
    assert_abs_diff_eq!(pin3.x, 15.08, epsilon = 1e-9);
    assert_abs_diff_eq!(pin3.y, 10.0, epsilon = 1e-9);
}

#[test]
fn sot23_features_are_offset_by_instance_origin() {
    let catalog = catalog();
    let def = catalog.get("sot23-3").unwrap();
    let ctx = GridContext::new(Point::new(10.0, 10.0), 2.54);
    let placed = place_features(def, &Instance::new(1, 2, Rotation::R0), &ctx);

    let Feature::Pad { x, y, w, h } = placed.copper[0] else {
        panic!("pad expected");
    };
    assert_abs_diff_eq!(x, 10.0 + 2.54 + 1.84, epsilon = 1e-9);
    assert_abs_diff_eq!(y, 10.0 + 5.08 + 0.795, epsilon = 1e-9);
    assert_abs_diff_eq!(w, 1.0);
    assert_abs_diff_eq!(h, 0.6);

    let Feature::Trace { x2, y2, w, .. } = placed.copper[4] else {
        panic!("trace expected");
    };
    // ends on through pin 1
    assert_abs_diff_eq!(x2, 12.54, epsilon = 1e-9);
    assert_abs_diff_eq!(y2, 15.08, epsilon = 1e-9);
    assert_abs_diff_eq!(w, 0.3);
}

#[test]
fn layer_and_feature_order_is_preserved() {
    let catalog = catalog();
    let def = catalog.get("soic8").unwrap();
    let ctx = GridContext::new(Point::default(), 2.54);
    let placed = place(def, &Instance::new(3, 3, Rotation::R180), &ctx);
    let source = def.features().unwrap();

    assert_eq!(placed.features.copper.len(), source.copper.len());
    assert_eq!(placed.features.mask.len(), source.mask.len());
    assert_eq!(placed.features.silk.len(), source.silk.len());
    let kinds: Vec<&str> = placed.features.copper.iter().map(Feature::kind).collect();
    let source_kinds: Vec<&str> = source.copper.iter().map(Feature::kind).collect();
    assert_eq!(kinds, source_kinds);

    let labels: Vec<_> = placed.pins.iter().map(|p| p.label.clone().unwrap()).collect();
    assert_eq!(labels, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
}

#[test]
fn place_applies_instance_rotation() {
    let catalog = catalog();
    let def = catalog.get("sot23-3").unwrap();
    let ctx = GridContext::new(Point::new(10.0, 10.0), 2.54);
    let inst = Instance::new(4, 0, Rotation::R90);

    let placed = place(def, &inst, &ctx);
    let rotated = rotate(def, Rotation::R90);
    assert_eq!(placed.pins, place_through_holes(&rotated, &inst, &ctx));
    assert_eq!(placed.features, place_features(&rotated, &inst, &ctx));

    // pin 3 sits on the rotated origin cell
    let pin3 = &placed.pins[2];
    assert_eq!((pin3.col, pin3.row), (4, 0));
}

fn trace_ends_on_pins(placed: &gridgen_placement::PlacedFootprint) -> usize {
    let on_pin = |x: f64, y: f64| {
        placed
            .pins
            .iter()
            .any(|p| (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9)
    };
    placed
        .features
        .copper
        .iter()
        .map(|f| match *f {
            Feature::Trace { x1, y1, x2, y2, .. } => {
                usize::from(on_pin(x1, y1)) + usize::from(on_pin(x2, y2))
            }
            _ => 0,
        })
        .sum()
}

#[test]
fn rotated_traces_still_meet_their_pins() {
    let catalog = catalog();
    let def = catalog.get("sot23-5").unwrap();
    let ctx = GridContext::new(Point::new(5.0, 5.0), 2.54);
    let unrotated = trace_ends_on_pins(&place(def, &Instance::new(2, 7, Rotation::R0), &ctx));
    assert_eq!(unrotated, 5);
    for steps in 1..4 {
        let placed = place(def, &Instance::new(2, 7, Rotation::from_steps(steps)), &ctx);
        assert_eq!(trace_ends_on_pins(&placed), unrotated, "steps={steps}");
    }
}

#[test]
fn unknown_footprint_yields_none() {
    let ctx = GridContext::new(Point::default(), 2.54);
    assert!(place_by_id(&catalog(), "sot23-99", &Instance::default(), &ctx).is_none());
}

#[test]
fn placed_footprint_serializes_features_with_tags() {
    let catalog = catalog();
    let ctx = GridContext::new(Point::default(), 2.54);
    let placed = place_by_id(&catalog, "sot23-3", &Instance::default(), &ctx).unwrap();
    let json = serde_json::to_value(&placed).unwrap();
    assert_eq!(json["id"], "sot23-3");
    assert_eq!(json["features"]["copper"][0]["type"], "pad");
    assert_eq!(json["features"]["silk"][0]["type"], "poly");
    assert_eq!(json["pins"][2]["label"], "3");
    assert_eq!(json["instance"]["rotation"], 0);
}

proptest! {
    #[test]
    fn shifting_columns_shifts_every_x(
        col in -20i32..20,
        row in -20i32..20,
        delta in -10i32..10,
        steps in 0i32..4,
        ox in -50.0f64..50.0,
        oy in -50.0f64..50.0,
        idx in 0usize..3,
    ) {
        let catalog = catalog();
        let id = ["sot23-3", "sot23-5", "soic8"][idx];
        let def = catalog.get(id).unwrap();
        let ctx = GridContext::new(Point::new(ox, oy), 2.54);
        let rotation = Rotation::from_steps(steps);

        let a = place(def, &Instance::new(col, row, rotation), &ctx);
        let b = place(def, &Instance::new(col + delta, row, rotation), &ctx);
        let shift = f64::from(delta) * ctx.pitch;

        for (fa, fb) in xs(&a.features).iter().zip(xs(&b.features)) {
            prop_assert!((fa + shift - fb).abs() < 1e-9);
        }
        for (pa, pb) in a.pins.iter().zip(&b.pins) {
            prop_assert!((pa.x + shift - pb.x).abs() < 1e-9);
            prop_assert_eq!(pa.y, pb.y);
            prop_assert_eq!(pa.col + delta, pb.col);
        }
        prop_assert!((a.outline.center.x + shift - b.outline.center.x).abs() < 1e-9);
    }

    #[test]
    fn place_then_measure_equals_measure_then_place(
        col in -20i32..20,
        row in -20i32..20,
        ox in -50.0f64..50.0,
        oy in -50.0f64..50.0,
    ) {
        let catalog = catalog();
        let def = catalog.get("soic8").unwrap();
        let ctx = GridContext::new(Point::new(ox, oy), 2.54);
        let placed = place_features(def, &Instance::new(col, row, Rotation::R0), &ctx);
        let local = def.features().unwrap();
        let origin = ctx.cell_mm(gridgen_core::GridPos::new(col, row));

        for (f_placed, f_local) in placed.copper.iter().zip(&local.copper) {
            if let (Feature::Pad { x: px, y: py, .. }, Feature::Pad { x: lx, y: ly, .. }) = (f_placed, f_local) {
                prop_assert!((px - (origin.x + lx)).abs() < 1e-9);
                prop_assert!((py - (origin.y + ly)).abs() < 1e-9);
            }
        }
    }
}
