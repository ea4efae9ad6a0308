use std::ops::Sub;

use serde::{Deserialize, Serialize};

/// Length in micrometres (1 µm = 10⁻⁶ m). All core geometry is expressed in
/// this unit; no floating point is persisted in the data model.
pub type Micrometer = i64;

/// A point in the slicing plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: Micrometer,
    pub y: Micrometer,
}

impl Point {
    pub fn new(x: Micrometer, y: Micrometer) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean length, widened to `i128` so it cannot overflow for
    /// any `Micrometer` difference representable in 64 bits.
    pub fn squared_len(self) -> i128 {
        let x = self.x as i128;
        let y = self.y as i128;
        x * x + y * y
    }

    /// `true` if this vector's length is `<= d`. `d` must be no greater than
    /// `1_000_000` µm for the squared comparison to stay within `i128`.
    pub fn shorter_than_or_equal(self, d: Micrometer) -> bool {
        let d = d as i128;
        self.squared_len() <= d * d
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An ordered sequence of points. Closedness (an implicit edge from the last
/// point back to the first) is determined by context, not stored here.
pub type Path = Vec<Point>;

/// An ordered sequence of [`Path`].
pub type Paths = Vec<Path>;

/// Returns the axis-aligned bounding box of every point across all paths, as
/// `(min, max)`. Returns `None` for an empty input.
pub fn paths_size(paths: &[Path]) -> Option<(Point, Point)> {
    let mut points = paths.iter().flatten();
    let first = *points.next()?;
    let (min, max) = points.fold((first, first), |(min, max), p| {
        (
            Point::new(min.x.min(p.x), min.y.min(p.y)),
            Point::new(max.x.max(p.x), max.y.max(p.y)),
        )
    });
    Some((min, max))
}
