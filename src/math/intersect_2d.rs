use super::numeric::resolve_quadratic;
use super::{equiv, Point};

/// Result of intersecting two lines or segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Crossing {
    /// No common point.
    None,
    /// A single common point.
    Point(Point),
    /// A common stretch, for collinear inputs.
    Segment(Point, Point),
}

impl Crossing {
    /// Returns the crossing point, if the result is a single point.
    #[must_use]
    pub fn point(&self) -> Option<Point> {
        match self {
            Self::Point(p) => Some(*p),
            _ => None,
        }
    }

    /// Returns `true` if there is no common point.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Intersection of line `AB` with line `CD`.
///
/// With `inside_segment`, both `AB` and `CD` are treated as bounded segments.
///
/// - Collinear inputs yield the overlap: the two middle points of `A, B, C, D`
///   sorted along the shared line (a single point if they coincide), or `AB`
///   itself when the inputs are unbounded.
/// - Parallel, distinct inputs yield [`Crossing::None`].
/// - A crossing parameter within [`EPSILON`](super::EPSILON) of 0 or 1 snaps to
///   the exact input endpoint.
#[must_use]
pub fn line_line_intersect_2d(
    a: &Point,
    b: &Point,
    c: &Point,
    d: &Point,
    inside_segment: bool,
) -> Crossing {
    let ab = b - a;
    let cd = d - c;
    let ca = a - c;

    let num = cd.y * ca.x - cd.x * ca.y;
    let denom = cd.x * ab.y - cd.y * ab.x;

    if equiv(denom, 0.0) {
        if !equiv(num, 0.0) {
            return Crossing::None;
        }
        if !inside_segment {
            return Crossing::Segment(*a, *b);
        }
        return collinear_overlap(a, b, c, d);
    }

    // Parameter of the crossing along AB, then along CD.
    let k = num / denom;
    let k2 = (ab.x * ca.y - ab.y * ca.x) / -denom;

    if inside_segment && (!(0.0..=1.0).contains(&k) || !(0.0..=1.0).contains(&k2)) {
        return Crossing::None;
    }

    if equiv(k, 0.0) {
        return Crossing::Point(*a);
    }
    if equiv(k, 1.0) {
        return Crossing::Point(*b);
    }
    if equiv(k2, 0.0) {
        return Crossing::Point(*c);
    }
    if equiv(k2, 1.0) {
        return Crossing::Point(*d);
    }

    Crossing::Point(*a + ab * k)
}

fn collinear_overlap(a: &Point, b: &Point, c: &Point, d: &Point) -> Crossing {
    let ab = b - a;
    let along_y = equiv(a.x, b.x);
    let param = |p: &Point| {
        if along_y {
            (p.y - a.y) / ab.y
        } else {
            (p.x - a.x) / ab.x
        }
    };

    let mut sorted = [(*a, param(a)), (*b, param(b)), (*c, param(c)), (*d, param(d))];
    sorted.sort_by(|m, n| m.1.total_cmp(&n.1));

    let (first, second) = (sorted[1].0, sorted[2].0);
    if first == second {
        Crossing::Point(first)
    } else {
        Crossing::Segment(first, second)
    }
}

/// Intersections of the infinite line through `a` and `b` with a circle.
///
/// Returns 0, 1 (tangent) or 2 points, ordered by increasing x (by increasing
/// y for a vertical line).
#[must_use]
pub fn line_circle_intersect_2d(a: &Point, b: &Point, center: &Point, radius: f64) -> Vec<Point> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;

    if dx == 0.0 {
        let x = a.x;
        return resolve_quadratic(
            1.0,
            -2.0 * center.y,
            center.y * center.y + (x - center.x).powi(2) - radius * radius,
        )
        .into_iter()
        .map(|y| Point::new(x, y))
        .collect();
    }

    let slope = dy / dx;
    let intercept = a.y - slope * a.x;
    resolve_quadratic(
        1.0 + slope * slope,
        2.0 * (slope * (intercept - center.y) - center.x),
        center.x * center.x + (intercept - center.y).powi(2) - radius * radius,
    )
    .into_iter()
    .map(|x| Point::new(x, slope * x + intercept))
    .collect()
}
