use super::Point;

/// Stand-in for `dx` when offsetting a vertical segment.
const VERTICAL_DX: f64 = 0.01;

/// Returns `true` if the closed polygon `points` is clockwise oriented.
///
/// Sums `(x2 - x1)(y2 + y1)` over consecutive edges, wrapping around; a
/// non-positive sum means clockwise. With clockwise winding, the right side
/// of each edge `(points[i], points[i + 1])` is inside the polygon.
#[must_use]
pub fn is_clockwise(points: &[Point]) -> bool {
    let n = points.len();
    if n == 0 {
        return true;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let p = &points[i];
        let q = &points[(i + 1) % n];
        sum += (q.x - p.x) * (q.y + p.y);
    }
    sum <= 0.0
}

/// Translates segment `AB` perpendicular to itself by `distance`.
///
/// The side is picked from the sign of `dx` only: for a clockwise polygon this
/// is the outside of the edge. A vertical `AB` uses a small non-zero `dx`.
#[must_use]
pub fn move_segment_outside(a: &Point, b: &Point, distance: f64) -> (Point, Point) {
    let mut dx = b.x - a.x;
    let dy = b.y - a.y;

    if dx == 0.0 {
        dx = VERTICAL_DX;
    }

    let x = -dy / dx;
    let mut size_factor = distance / (x * x + 1.0).sqrt();
    if dx > 0.0 {
        size_factor = -size_factor;
    }

    (
        Point::new(size_factor * x + a.x, size_factor + a.y),
        Point::new(size_factor * x + b.x, size_factor + b.y),
    )
}
