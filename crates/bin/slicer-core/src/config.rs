use std::path::Path;

use anyhow::{Context, Result};
use slicer_types::SliceConfig;

/// Loads and validates a `SliceConfig` from a TOML file (§6, §7.3). Invalid
/// configuration is surfaced before any layer is processed.
pub fn load_config(path: &Path) -> Result<SliceConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let config: SliceConfig =
        toml::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("config file {} failed validation", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!(
            "slicer-core-config-test-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_a_valid_config() {
        let path = write_temp("extrusion_width = 400\ninset_count = 2\ninfill_overlap_pct = 50\n");
        let config = load_config(&path).unwrap();
        assert_eq!(config.extrusion_width, 400);
        assert_eq!(config.inset_count, 2);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn rejects_a_config_that_fails_validation() {
        let path = write_temp("extrusion_width = 0\ninset_count = 2\ninfill_overlap_pct = 50\n");
        assert!(load_config(&path).is_err());
        std::fs::remove_file(&path).unwrap();
    }
}
