use clipper2_rust::{ClipType, Clipper64, FillRule, Path64, Paths64, PolyTree64};
use geometry_utils::dedup_near_coincident;
use slicer_types::{Layer, LayerPart, Path};
use tracing::warn;

use crate::convert::{ToEnginePaths, ToSlicerPath};
use crate::error::{ClipperError, Result};

/// Partitions an unstructured slice into a forest of outer contours and
/// their holes (§4.2).
///
/// Input loops are de-duplicated and fed into an even-odd union; the
/// resulting polygon tree is walked breadth-first in depth pairs so that
/// outer contours pick up their direct holes as a `LayerPart`, while deeper
/// nesting (islands inside holes) becomes additional top-level parts.
pub fn partition(layer: &Layer) -> Result<Vec<LayerPart>> {
    let cleaned: Vec<Path> = layer
        .iter()
        .map(dedup_near_coincident)
        .filter(|p| p.len() >= 3)
        .collect();

    if cleaned.is_empty() {
        return Ok(Vec::new());
    }

    partition_paths(&cleaned)
}

/// Same algorithm as [`partition`], but taking already-cleaned loops
/// directly. Used by the offset engine to re-derive wall/hole structure
/// from a raw offset result, which needs no further de-duplication, and by
/// the perimeter modifier to re-derive a `LayerPart` from an overlap inset.
pub fn partition_paths(loops: &[Path]) -> Result<Vec<LayerPart>> {
    let subjects: Paths64 = loops.to_vec().to_engine_paths();

    let mut tree = PolyTree64::new();
    let mut open_paths = Paths64::new();
    let mut clipper = Clipper64::new();
    clipper.add_subject(&subjects);
    if !clipper.execute_tree(
        ClipType::Union,
        FillRule::EvenOdd,
        &mut tree,
        &mut open_paths,
    ) {
        warn!("partition: union engine failed to produce a result");
        return Err(ClipperError::UnionFailed);
    }

    let mut parts = Vec::new();
    let mut queue: Vec<usize> = tree.root().children().to_vec();
    while let Some(outline_idx) = queue.pop() {
        let outline: Path64 = tree.nodes[outline_idx].polygon().clone();
        let hole_indices: Vec<usize> = tree.nodes[outline_idx].children().to_vec();
        let holes: Vec<Path> = hole_indices
            .iter()
            .map(|&h| tree.nodes[h].polygon().to_slicer_path())
            .collect();
        for &hole_idx in &hole_indices {
            queue.extend(tree.nodes[hole_idx].children().iter().copied());
        }
        parts.push(LayerPart::new(outline.to_slicer_path(), holes));
    }
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use slicer_types::Point;

    pub(super) fn square(x0: i64, y0: i64, x1: i64, y1: i64) -> Path {
        vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ]
    }

    #[test]
    fn empty_layer_partitions_to_nothing() {
        let parts = partition(&Vec::new()).unwrap();
        assert!(parts.is_empty());
    }

    #[test]
    fn single_square_has_no_holes() {
        let layer = vec![square(0, 0, 10_000, 10_000)];
        let parts = partition(&layer).unwrap();
        assert_eq!(parts.len(), 1);
        assert!(parts[0].holes().is_empty());
    }

    #[test]
    fn square_with_hole_pairs_outline_and_hole() {
        let layer = vec![
            square(0, 0, 10_000, 10_000),
            square(3_000, 3_000, 7_000, 7_000),
        ];
        let parts = partition(&layer).unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].holes().len(), 1);
    }

    #[test]
    fn two_disjoint_squares_are_two_parts() {
        let layer = vec![
            square(0, 0, 1_000, 1_000),
            square(5_000, 5_000, 6_000, 6_000),
        ];
        let parts = partition(&layer).unwrap();
        assert_eq!(parts.len(), 2);
    }

    #[test]
    fn nested_island_inside_a_hole_is_its_own_part() {
        let layer = vec![
            square(0, 0, 10_000, 10_000),
            square(2_000, 2_000, 8_000, 8_000),
            square(4_000, 4_000, 6_000, 6_000),
        ];
        let parts = partition(&layer).unwrap();
        assert_eq!(parts.len(), 2);
        let with_hole = parts.iter().find(|p| !p.holes().is_empty()).unwrap();
        let island = parts.iter().find(|p| p.holes().is_empty()).unwrap();
        assert_eq!(with_hole.holes().len(), 1);
        assert!(!island.outline().is_empty());
    }

    #[test]
    fn near_duplicate_vertices_are_dropped_before_union() {
        let mut loop_ = square(0, 0, 10_000, 10_000);
        loop_.push(Point::new(1, 1));
        let parts = partition(&vec![loop_]).unwrap();
        assert_eq!(parts.len(), 1);
    }

    #[test]
    fn round_trip_partition_is_idempotent() {
        let layer = vec![
            square(0, 0, 10_000, 10_000),
            square(3_000, 3_000, 7_000, 7_000),
        ];
        let once = partition(&layer).unwrap();
        let reflattened: Layer = once.iter().flat_map(|p| p.all_paths().cloned()).collect();
        let twice = partition(&reflattened).unwrap();
        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.holes().len(), b.holes().len());
        }
    }
}
