use std::path::Path;

use anyhow::{Context, Result};
use slicer_types::Layer;

/// Reads a JSON fixture holding the raw layer stack (`Vec<Layer>`). STL
/// loading and mesh slicing are out of this crate's scope (§1); this is the
/// demonstration/testing substitute for a real mesh slicer.
pub fn load_layers(path: &Path) -> Result<Vec<Layer>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading layer fixture {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing layer fixture {}", path.display()))
}
