use crate::constants::NEAR_DUPLICATE_THRESHOLD;
use slicer_types::Path;

/// Drops vertices within [`NEAR_DUPLICATE_THRESHOLD`] µm of the previously
/// kept vertex. The first vertex is always kept, so this never moves the
/// contour — it only removes redundant near-duplicates (§4.2 step 1).
///
/// "Closer than" is strict: a gap of exactly the threshold is kept (P6).
pub fn dedup_near_coincident(path: &Path) -> Path {
    let mut kept: Path = Vec::with_capacity(path.len());
    for &pt in path {
        match kept.last() {
            Some(&prev) if (pt - prev).shorter_than_or_equal(NEAR_DUPLICATE_THRESHOLD - 1) => {}
            _ => kept.push(pt),
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use slicer_types::Point;

    #[test]
    fn gap_of_exactly_the_threshold_is_preserved() {
        let path = vec![Point::new(0, 0), Point::new(100, 0)];
        assert_eq!(dedup_near_coincident(&path), path);
    }

    #[test]
    fn gap_of_one_under_the_threshold_is_dropped() {
        let path = vec![Point::new(0, 0), Point::new(99, 0)];
        assert_eq!(dedup_near_coincident(&path), vec![Point::new(0, 0)]);
    }

    #[test]
    fn first_vertex_is_always_kept() {
        let path = vec![Point::new(0, 0), Point::new(1, 0), Point::new(200, 0)];
        assert_eq!(
            dedup_near_coincident(&path),
            vec![Point::new(0, 0), Point::new(200, 0)]
        );
    }
}
