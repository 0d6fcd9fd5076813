use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("failed to parse board YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse board JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("grid pitch must be positive (got {pitch})")]
    InvalidPitch { pitch: f64 },

    #[error("grid must have at least one column and one row (got {cols}x{rows})")]
    EmptyGrid { cols: u32, rows: u32 },

    #[error("label height must be positive (got {height} at {at})")]
    InvalidLabelHeight { at: &'static str, height: f64 },
}
