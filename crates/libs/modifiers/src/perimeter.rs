use clipper_core::{inset_layer, offset_paths, partition_paths, ClipperError};
use slicer_types::{Micrometer, PartitionedLayer, SliceConfig};
use tracing::warn;

use crate::error::Result;
use crate::pipeline::Modifier;

/// The canonical modifier (§4.5): fills in `perimeters` and
/// `overlapPerimeters` for every part of every layer.
pub struct PerimeterModifier {
    config: SliceConfig,
}

impl PerimeterModifier {
    pub fn new(config: SliceConfig) -> Self {
        Self { config }
    }

    /// `perimeterOverlap = extrusionWidth · (100 − infillOverlapPct) / 100`,
    /// float-computed then truncated, matching the infill overlap
    /// convention (§4.4, §4.5).
    fn perimeter_overlap(&self) -> Micrometer {
        let extrusion_width = self.config.extrusion_width as f64;
        let pct = self.config.infill_overlap_pct as f64;
        (extrusion_width * (100.0 - pct) / 100.0) as Micrometer
    }
}

impl Modifier for PerimeterModifier {
    fn name(&self) -> &'static str {
        "perimeter"
    }

    fn modify(&mut self, layers: &mut [PartitionedLayer]) -> Result<()> {
        if self.config.inset_count == 0 {
            return Ok(());
        }

        let perimeter_overlap = self.perimeter_overlap();

        for (index, layer) in layers.iter_mut().enumerate() {
            // A geometry failure is non-fatal (§7, error kind 1): it skips
            // this modifier's output for this one layer and processing
            // continues with the rest of the stack.
            match Self::compute_layer(&layer.parts, self.config, perimeter_overlap) {
                Ok((perimeters, overlap_perimeters)) => {
                    layer.attributes.set_perimeters(perimeters);
                    layer.attributes.set_overlap_perimeters(overlap_perimeters);
                }
                Err(err) => {
                    warn!(modifier = self.name(), layer = index, %err, "skipping layer after a geometry failure");
                }
            }
        }

        Ok(())
    }
}

impl PerimeterModifier {
    /// Builds `overlapPerimeters` as `[part][LayerPart]`: one inner `Vec`
    /// per part, holding that part's overlap regions across all of its
    /// walls, so a caller can recover which part a region came from by
    /// indexing this the same way it indexes the layer's `parts` slice.
    fn compute_layer(
        parts: &[slicer_types::LayerPart],
        config: SliceConfig,
        perimeter_overlap: Micrometer,
    ) -> std::result::Result<
        (
            slicer_types::OffsetResult,
            Vec<Vec<slicer_types::LayerPart>>,
        ),
        ClipperError,
    > {
        let perimeters = inset_layer(parts, config.extrusion_width, config.inset_count)?;

        let mut overlap_perimeters = Vec::with_capacity(perimeters.len());
        for part_perimeters in &perimeters {
            let mut part_overlap = Vec::new();
            for wall_insets in part_perimeters {
                let Some(innermost) = wall_insets.last() else {
                    continue;
                };
                if innermost.is_empty() {
                    continue;
                }

                let overlap_region = if perimeter_overlap <= 0 {
                    innermost.clone()
                } else {
                    offset_paths(innermost, perimeter_overlap / 2)?
                };
                if overlap_region.is_empty() {
                    warn!("perimeter: overlap inset collapsed to nothing for a wall");
                    continue;
                }

                let regions = partition_paths(&overlap_region)?;
                part_overlap.extend(regions);
            }
            overlap_perimeters.push(part_overlap);
        }

        Ok((perimeters, overlap_perimeters))
    }
}
