use serde::Serialize;

use crate::attributes::AttributeBag;
use crate::point::Path;

/// One connected island within a slice: an outer boundary and the holes
/// directly inside it. Immutable after construction — the clip engine is the
/// only producer of `LayerPart` values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerPart {
    outline: Path,
    holes: Vec<Path>,
}

impl LayerPart {
    pub fn new(outline: Path, holes: Vec<Path>) -> Self {
        Self { outline, holes }
    }

    pub fn outline(&self) -> &Path {
        &self.outline
    }

    pub fn holes(&self) -> &[Path] {
        &self.holes
    }

    /// The outline followed by every hole, in the order the clip engine
    /// expects when re-flattening a part back into loose loops.
    pub fn all_paths(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(&self.outline).chain(self.holes.iter())
    }
}

/// The raw slicer output for one slice: a flat, unordered collection of
/// closed loops with no parent/child structure yet.
pub type Layer = Vec<Path>;

/// A slice after partitioning, carrying whatever the modifier pipeline has
/// attached to it so far.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PartitionedLayer {
    pub parts: Vec<LayerPart>,
    pub attributes: AttributeBag,
}

impl PartitionedLayer {
    pub fn new(parts: Vec<LayerPart>) -> Self {
        Self {
            parts,
            attributes: AttributeBag::default(),
        }
    }

    /// Re-flattens every part back into a bag of closed loops, the shape
    /// `Partition` originally consumed. Used by the partitioner's round-trip
    /// idempotence check (R1 in the slicing invariants).
    pub fn to_layer(&self) -> Layer {
        self.parts
            .iter()
            .flat_map(|p| p.all_paths().cloned())
            .collect()
    }
}
