pub mod angle;
pub mod intersect_2d;
pub mod numeric;
pub mod polygon_2d;
pub mod sequence;

/// 2D point type.
pub type Point = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Tolerance, in drawing units, for equality, parallelism and collinearity tests.
pub const EPSILON: f64 = 0.001;

/// Returns `true` if `a` and `b` differ by less than [`EPSILON`].
#[must_use]
pub fn equiv(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns `true` if both coordinates of `p` and `q` are [`equiv`].
#[must_use]
pub fn points_equiv(p: &Point, q: &Point) -> bool {
    equiv(p.x, q.x) && equiv(p.y, q.y)
}

/// Squared euclidean distance between two points.
#[must_use]
pub fn squared_distance(p: &Point, q: &Point) -> f64 {
    (q - p).norm_squared()
}

/// Returns `true` if `p` lies in the rectangle `[0, xmax] × [0, ymax]`.
#[must_use]
pub fn is_inside_bounds(p: &Point, xmax: f64, ymax: f64) -> bool {
    p.x >= 0.0 && p.x <= xmax && p.y >= 0.0 && p.y <= ymax
}
