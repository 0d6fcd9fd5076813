use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("footprint \"{id}\" defined more than once")]
    DuplicateId { id: String },

    #[error("footprint \"{id}\" must span at least one grid position (got {width}x{height})")]
    InvalidDimensions { id: String, width: u32, height: u32 },

    #[error("footprint \"{id}\" has invalid pitch {pitch}")]
    InvalidPitch { id: String, pitch: f64 },
}
