use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::point::Point;

/// A manufacturing primitive in millimetres.
///
/// Catalog records tag each feature with a `type` field. Records whose tag is
/// not one of the four known shapes are kept verbatim in [`Feature::Other`] and
/// are returned unchanged by every transform.
#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    /// Axis-aligned rectangle given by its centre and full width/height.
    Pad { x: f64, y: f64, w: f64, h: f64 },
    Circle { x: f64, y: f64, d: f64 },
    /// Straight copper segment with stroke width `w`.
    Trace {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        w: f64,
    },
    Poly { points: Vec<Point> },
    Other(serde_json::Value),
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum KnownFeature {
    Pad { x: f64, y: f64, w: f64, h: f64 },
    Circle { x: f64, y: f64, d: f64 },
    Trace {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        w: f64,
    },
    Poly { points: Vec<Point> },
}

const KNOWN_TAGS: [&str; 4] = ["pad", "circle", "trace", "poly"];

impl Feature {
    /// Apply `f` to every coordinate of the feature. Shape parameters (pad
    /// size, diameter, stroke width) are left alone.
    #[must_use]
    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Feature {
        match self {
            Feature::Pad { x, y, w, h } => {
                let p = f(Point::new(*x, *y));
                Feature::Pad {
                    x: p.x,
                    y: p.y,
                    w: *w,
                    h: *h,
                }
            }
            Feature::Circle { x, y, d } => {
                let p = f(Point::new(*x, *y));
                Feature::Circle {
                    x: p.x,
                    y: p.y,
                    d: *d,
                }
            }
            Feature::Trace { x1, y1, x2, y2, w } => {
                let a = f(Point::new(*x1, *y1));
                let b = f(Point::new(*x2, *y2));
                Feature::Trace {
                    x1: a.x,
                    y1: a.y,
                    x2: b.x,
                    y2: b.y,
                    w: *w,
                }
            }
            Feature::Poly { points } => Feature::Poly {
                points: points.iter().copied().map(f).collect(),
            },
            Feature::Other(raw) => Feature::Other(raw.clone()),
        }
    }

    #[must_use]
    pub fn translate(&self, delta: Point) -> Feature {
        self.map_points(|p| p + delta)
    }

    /// Short name of the variant, as used in catalog tags.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Feature::Pad { .. } => "pad",
            Feature::Circle { .. } => "circle",
            Feature::Trace { .. } => "trace",
            Feature::Poly { .. } => "poly",
            Feature::Other(raw) => raw.get("type").and_then(|t| t.as_str()).unwrap_or("unknown"),
        }
    }
}

impl From<KnownFeature> for Feature {
    fn from(known: KnownFeature) -> Self {
        match known {
            KnownFeature::Pad { x, y, w, h } => Feature::Pad { x, y, w, h },
            KnownFeature::Circle { x, y, d } => Feature::Circle { x, y, d },
            KnownFeature::Trace { x1, y1, x2, y2, w } => Feature::Trace { x1, y1, x2, y2, w },
            KnownFeature::Poly { points } => Feature::Poly { points },
        }
    }
}

impl Serialize for Feature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let known = match self {
            Feature::Other(raw) => return raw.serialize(serializer),
            Feature::Pad { x, y, w, h } => KnownFeature::Pad {
                x: *x,
                y: *y,
                w: *w,
                h: *h,
            },
            Feature::Circle { x, y, d } => KnownFeature::Circle {
                x: *x,
                y: *y,
                d: *d,
            },
            Feature::Trace { x1, y1, x2, y2, w } => KnownFeature::Trace {
                x1: *x1,
                y1: *y1,
                x2: *x2,
                y2: *y2,
                w: *w,
            },
            Feature::Poly { points } => KnownFeature::Poly {
                points: points.clone(),
            },
        };
        known.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Feature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        let known = matches!(
            raw.get("type").and_then(|t| t.as_str()),
            Some(tag) if KNOWN_TAGS.contains(&tag)
        );
        if !known {
            return Ok(Feature::Other(raw));
        }
        serde_json::from_value::<KnownFeature>(raw)
            .map(Feature::from)
            .map_err(D::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Copper,
    Mask,
    Silk,
}

/// Features grouped by layer. Layer order (copper, mask, silk) and the order
/// inside each layer are kept by every transform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    #[serde(default)]
    pub copper: Vec<Feature>,
    #[serde(default)]
    pub mask: Vec<Feature>,
    #[serde(default)]
    pub silk: Vec<Feature>,
}

impl FeatureSet {
    #[must_use]
    pub fn map(&self, f: impl Fn(&Feature) -> Feature) -> FeatureSet {
        FeatureSet {
            copper: self.copper.iter().map(&f).collect(),
            mask: self.mask.iter().map(&f).collect(),
            silk: self.silk.iter().map(&f).collect(),
        }
    }

    #[must_use]
    pub fn layers(&self) -> [(Layer, &[Feature]); 3] {
        [
            (Layer::Copper, self.copper.as_slice()),
            (Layer::Mask, self.mask.as_slice()),
            (Layer::Silk, self.silk.as_slice()),
        ]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.copper.is_empty() && self.mask.is_empty() && self.silk.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.copper.len() + self.mask.len() + self.silk.len()
    }
}

/// Physical package silhouette used for previews, in millimetres.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub width: f64,
    pub height: f64,
}

impl Outline {
    #[must_use]
    pub fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}
