use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gridgen_board::BoardConfig;
use gridgen_footprint::Catalog;
use tracing::info;

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn read(path: &Path, what: &str) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Could not read {what} {}", path.display()))
}

pub fn board(path: &Path) -> Result<BoardConfig> {
    let raw = read(path, "board")?;
    let parsed = if is_json(path) {
        BoardConfig::from_json_str(&raw)
    } else {
        BoardConfig::from_yaml_str(&raw)
    };
    parsed.with_context(|| format!("Invalid board {}", path.display()))
}

/// The built-in catalog with each file in `extra` merged over it, in order.
pub fn catalog(extra: &[PathBuf]) -> Result<Catalog> {
    let mut catalog = Catalog::builtin().context("Built-in catalog is invalid")?;
    for path in extra {
        let raw = read(path, "catalog")?;
        let parsed = if is_json(path) {
            Catalog::from_json_str(&raw)
        } else {
            Catalog::from_yaml_str(&raw)
        };
        let user = parsed.with_context(|| format!("Invalid catalog {}", path.display()))?;
        info!(path = %path.display(), footprints = user.len(), "merging catalog");
        catalog.merge(user);
    }
    Ok(catalog)
}
