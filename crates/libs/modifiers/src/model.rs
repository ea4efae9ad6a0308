use slicer_types::{Micrometer, Point};

/// Read-only mesh summary handed to every modifier's `init` before the first
/// layer (§4.5). The core never inspects the mesh itself — only this
/// reduced, slicer-agnostic summary.
#[derive(Debug, Clone, Copy)]
pub struct OptimizedModel {
    pub build_volume_min: Point,
    pub build_volume_max: Point,
    pub layer_height: Micrometer,
}
