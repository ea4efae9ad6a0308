use clipper2_rust::{
    point_in_polygon, simplify_paths, ClipperOffset, EndType, JoinType, Paths64, Point64,
    PointInPolygonResult,
};
use geometry_utils::DEFAULT_TOLERANCE;
use slicer_types::{LayerPart, Micrometer, Path, Paths};
use tracing::warn;

use crate::convert::{ToEnginePath, ToEnginePaths, ToSlicerPaths};
use crate::error::{ClipperError, Result};
use crate::partition::partition_paths;

const MITER_LIMIT: f64 = 2.0;

/// One inward offset of a closed loop set: square joins, miter limit 2,
/// closed-polygon ends, output simplified with the default tolerance
/// (§4.1, §4.3).
///
/// `delta` follows the §4.3 sign convention: positive shrinks.
pub fn offset_paths(loops: &Paths, delta: Micrometer) -> Result<Paths> {
    let subject = loops.to_vec().to_engine_paths();
    let mut offsetter = ClipperOffset::new(MITER_LIMIT, 0.0, false, false);
    offsetter.add_paths(&subject, JoinType::Square, EndType::Polygon);

    let mut raw = Paths64::new();
    offsetter.execute(-(delta as f64), &mut raw);
    if offsetter.error_code() != 0 {
        warn!(
            error_code = offsetter.error_code(),
            "offset engine reported an error"
        );
        return Err(ClipperError::OffsetFailed);
    }

    let simplified = simplify_paths(&raw, DEFAULT_TOLERANCE as f64, true);
    Ok(simplified.to_slicer_paths())
}

/// Tracks one disjoint sub-region across successive inset levels so that a
/// sub-region which appears only at a deeper level gets a stable `wall`
/// index, with earlier slots padded empty (§4.3 output shape).
struct WallLineage {
    /// `history[k]` is this wall's content at inset index `leading_gap + k`.
    leading_gap: usize,
    history: Vec<Paths>,
    last_outline: Path,
}

/// Produces `Inset(part, offset, count)`: up to `count` successive inward
/// wall loops, indexed `[wall][inset]`.
pub fn inset(part: &LayerPart, offset: Micrometer, count: usize) -> Result<Vec<Vec<Paths>>> {
    let base: Paths = part.all_paths().cloned().collect();
    let mut lineages: Vec<WallLineage> = Vec::new();

    for i in 0..count {
        let d = offset / 2 + (i as i64) * offset;
        let raw = offset_paths(&base, d)?;
        if raw.is_empty() {
            break;
        }

        let regions = partition_paths(&raw)?;
        let mut matched = vec![false; lineages.len()];

        for region in &regions {
            let content: Paths = region.all_paths().cloned().collect();
            let probe = region.outline().first().copied();

            let mut existing = None;
            if let Some(p) = probe {
                let probe64 = Point64::new(p.x, p.y);
                for (idx, lineage) in lineages.iter().enumerate() {
                    if matched[idx] || lineage.last_outline.len() < 3 {
                        continue;
                    }
                    let engine_outline = lineage.last_outline.to_engine_path();
                    if point_in_polygon(probe64, &engine_outline) != PointInPolygonResult::IsOutside
                    {
                        existing = Some(idx);
                        break;
                    }
                }
            }

            match existing {
                Some(idx) => {
                    matched[idx] = true;
                    lineages[idx].history.push(content);
                    lineages[idx].last_outline = region.outline().clone();
                }
                None => {
                    lineages.push(WallLineage {
                        leading_gap: i,
                        history: vec![content],
                        last_outline: region.outline().clone(),
                    });
                }
            }
        }
    }

    Ok(lineages
        .into_iter()
        .map(|w| {
            let mut padded = vec![Vec::new(); w.leading_gap];
            padded.extend(w.history);
            padded
        })
        .collect())
}

/// `InsetLayer(layer, offset, count)`: [`inset`] applied independently to
/// every part.
pub fn inset_layer(
    parts: &[LayerPart],
    offset: Micrometer,
    count: usize,
) -> Result<Vec<Vec<Vec<Paths>>>> {
    parts
        .iter()
        .map(|part| inset(part, offset, count))
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::tests::square;
    use super::*;
    use clipper2_rust::area_paths;
    use proptest::prelude::*;

    proptest! {
        /// P3: successive insets of a convex part are nested — each step's
        /// area is no larger than the one before it.
        #[test]
        fn successive_insets_shrink_monotonically(
            side in 4_000i64..50_000,
            width in 100i64..900,
            count in 2usize..6,
        ) {
            let part = LayerPart::new(square(0, 0, side, side), Vec::new());
            let walls = inset(&part, width, count).unwrap();
            if let Some(wall) = walls.first() {
                let areas: Vec<f64> = wall
                    .iter()
                    .map(|step| area_paths(&step.to_vec().to_engine_paths()).abs())
                    .collect();
                for pair in areas.windows(2) {
                    prop_assert!(pair[1] <= pair[0] + 1.0);
                }
            }
        }
    }
}
