use clipper2_rust::{ClipType, Clipper64, FillRule, Paths64};
use slicer_types::{paths_size, Micrometer, Path, Paths, Point};
use tracing::warn;

use crate::convert::{ToEnginePaths, ToSlicerPaths};
use crate::error::{ClipperError, Result};
use crate::offset::offset_paths;

/// `Fill(paths, lineWidth, overlapPct)`: parallel zig-zag scan lines across
/// the region, clipped to the (optionally overlap-shrunk) region (§4.4).
pub fn fill(region: &Paths, line_width: Micrometer, overlap_pct: u32) -> Result<Paths> {
    let Some((min, max)) = paths_size(region) else {
        return Ok(Vec::new());
    };

    let clip_region: Paths = if overlap_pct == 0 {
        region.clone()
    } else {
        let overlap =
            (line_width as f64 * (100 - overlap_pct.min(100)) as f64 / 100.0) as Micrometer;
        offset_paths(region, overlap)?
    };
    if clip_region.is_empty() {
        return Ok(Vec::new());
    }

    let mut scan_lines: Paths = Vec::new();
    let mut k: i64 = 0;
    loop {
        let x = min.x + k * line_width;
        if x > max.x {
            break;
        }
        let segment: Path = if k % 2 == 0 {
            vec![Point::new(x, min.y), Point::new(x, max.y)]
        } else {
            vec![Point::new(x, max.y), Point::new(x, min.y)]
        };
        scan_lines.push(segment);
        k += 1;
    }
    if scan_lines.is_empty() {
        return Ok(Vec::new());
    }

    let subjects: Paths64 = scan_lines.to_engine_paths();
    let clip: Paths64 = clip_region.to_engine_paths();

    let mut clipper = Clipper64::new();
    clipper.add_open_subject(&subjects);
    clipper.add_clip(&clip);

    let mut closed = Paths64::new();
    let mut open = Paths64::new();
    let ok = clipper.execute(
        ClipType::Intersection,
        FillRule::EvenOdd,
        &mut closed,
        Some(&mut open),
    );
    if !ok {
        warn!("fill: clip engine failed to intersect scan lines with the region");
        return Err(ClipperError::ClipFailed);
    }

    Ok(open.to_slicer_paths())
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(super) fn square(x0: i64, y0: i64, x1: i64, y1: i64) -> Path {
        vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ]
    }

    #[test]
    fn empty_region_yields_no_lines() {
        let lines = fill(&Vec::new(), 400, 0).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn tiles_a_square_with_parallel_lines() {
        let region = vec![square(0, 0, 10_000, 10_000)];
        let lines = fill(&region, 1_000, 0).unwrap();
        assert!(lines.len() >= 8);
        for line in &lines {
            assert_eq!(line.len(), 2);
        }
    }

    #[test]
    fn zero_overlap_uses_region_as_is() {
        let region = vec![square(0, 0, 10_000, 10_000)];
        let lines = fill(&region, 1_000, 0).unwrap();
        // The scan line lying exactly on the region's boundary edge may be
        // dropped as degenerate by the clip engine; every other grid line
        // up to the far edge must survive.
        assert!(lines.iter().any(|l| l.iter().any(|p| p.x == 9_000)));
        assert!(lines.iter().any(|l| l.iter().any(|p| p.x == 10_000)));
    }

    #[test]
    fn positive_overlap_shrinks_scan_region() {
        let region = vec![square(0, 0, 10_000, 10_000)];
        let full = fill(&region, 1_000, 0).unwrap();
        let shrunk = fill(&region, 1_000, 50).unwrap();
        assert!(shrunk.len() <= full.len());
    }

    #[test]
    fn scan_direction_alternates() {
        let region = vec![square(0, 0, 5_000, 10_000)];
        let lines = fill(&region, 1_000, 0).unwrap();
        assert!(lines.len() >= 2);
        for line in &lines {
            let k = line[0].x / 1_000;
            if k % 2 == 0 {
                assert!(line[0].y < line[1].y, "even k={k} should run min -> max");
            } else {
                assert!(line[0].y > line[1].y, "odd k={k} should run max -> min");
            }
        }
    }
}
