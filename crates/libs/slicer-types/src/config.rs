use serde::{Deserialize, Serialize};

use crate::point::Micrometer;

/// The configuration surface the core consumes (§6). Validated once by the
/// orchestrator before any layer is processed (§7, error kind 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceConfig {
    /// Nominal wall line width. Must be `> 0`.
    pub extrusion_width: Micrometer,
    /// Number of perimeter walls. `0` disables the perimeter modifier.
    pub inset_count: usize,
    /// Percentage of line width by which infill overlaps the innermost
    /// wall. Typical range 0-100, not clamped.
    pub infill_overlap_pct: i64,
}

/// A configuration value failed validation (§7, error kind 3).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("extrusionWidth must be > 0, got {0}")]
    NonPositiveExtrusionWidth(Micrometer),
}

impl SliceConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extrusion_width <= 0 {
            return Err(ConfigError::NonPositiveExtrusionWidth(self.extrusion_width));
        }
        Ok(())
    }
}
