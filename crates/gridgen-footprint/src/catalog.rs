use std::borrow::Cow;

use gridgen_core::GridPos;
use indexmap::IndexMap;
use tracing::debug;

use crate::definition::FootprintDefinition;
use crate::error::CatalogError;
use crate::pins::resolve_pins;
use crate::rotation::{rotate, Rotation};

const BUILTIN_MODULES: &str = include_str!("../catalog/modules.yaml");
const BUILTIN_ADAPTERS: &str = include_str!("../catalog/adapters.yaml");

/// Footprint definitions keyed by id, in load order.
///
/// Lookups of unknown ids return `None`; callers probe optional selections
/// routinely, so a miss is never an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: IndexMap<String, FootprintDefinition>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The module and adapter tables bundled with GridGen.
    pub fn builtin() -> Result<Self, CatalogError> {
        let mut catalog = Self::from_yaml_str(BUILTIN_MODULES)?;
        let adapters: Vec<FootprintDefinition> = serde_yaml::from_str(BUILTIN_ADAPTERS)?;
        catalog.extend_checked(adapters)?;
        Ok(catalog)
    }

    /// Build a catalog, rejecting duplicate ids and degenerate records.
    pub fn from_definitions(
        defs: impl IntoIterator<Item = FootprintDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        catalog.extend_checked(defs)?;
        Ok(catalog)
    }

    /// Parse a YAML list of footprint records.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let defs: Vec<FootprintDefinition> = serde_yaml::from_str(yaml)?;
        Self::from_definitions(defs)
    }

    /// Parse a JSON array of footprint records.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let defs: Vec<FootprintDefinition> = serde_json::from_str(json)?;
        Self::from_definitions(defs)
    }

    fn extend_checked(
        &mut self,
        defs: impl IntoIterator<Item = FootprintDefinition>,
    ) -> Result<(), CatalogError> {
        for def in defs {
            validate(&def)?;
            if self.entries.contains_key(&def.id) {
                return Err(CatalogError::DuplicateId { id: def.id });
            }
            self.entries.insert(def.id.clone(), def);
        }
        debug!(footprints = self.entries.len(), "catalog loaded");
        Ok(())
    }

    /// Add or replace a definition. Returns the replaced one, if any.
    pub fn insert(&mut self, def: FootprintDefinition) -> Option<FootprintDefinition> {
        self.entries.insert(def.id.clone(), def)
    }

    /// Overlay `other` on this catalog: new ids are appended, existing ids are
    /// replaced in place.
    pub fn merge(&mut self, other: Catalog) {
        for (_, def) in other.entries {
            if let Some(old) = self.insert(def) {
                debug!(id = %old.id, "catalog entry overridden");
            }
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FootprintDefinition> {
        self.entries.get(id)
    }

    /// Look up `id` and rotate it.
    #[must_use]
    pub fn rotated(&self, id: &str, rotation: Rotation) -> Option<Cow<'_, FootprintDefinition>> {
        self.get(id).map(|def| rotate(def, rotation))
    }

    /// Pin grid offsets of `id`, unrotated.
    #[must_use]
    pub fn pins(&self, id: &str) -> Option<Vec<GridPos>> {
        self.get(id).map(resolve_pins)
    }

    /// Definitions usable on a grid of the given pitch, in catalog order.
    pub fn compatible_with(&self, pitch: f64) -> impl Iterator<Item = &FootprintDefinition> {
        self.entries.values().filter(move |def| def.fits_pitch(pitch))
    }

    pub fn iter(&self) -> impl Iterator<Item = &FootprintDefinition> {
        self.entries.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate(def: &FootprintDefinition) -> Result<(), CatalogError> {
    if def.width_pins == 0 || def.height_pins == 0 {
        return Err(CatalogError::InvalidDimensions {
            id: def.id.clone(),
            width: def.width_pins,
            height: def.height_pins,
        });
    }
    if !def.pitch.is_finite() || def.pitch <= 0.0 {
        return Err(CatalogError::InvalidPitch {
            id: def.id.clone(),
            pitch: def.pitch,
        });
    }
    Ok(())
}
