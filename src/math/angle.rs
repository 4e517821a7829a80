use super::{Point, Vector2};

/// Unsigned angle between `u` and `v`, in `[0, π]`.
///
/// The normalized dot product is clamped to `[-1, 1]` before `acos`.
#[must_use]
pub fn angle_between(u: &Vector2, v: &Vector2) -> f64 {
    let cos = u.dot(v) / (u.norm() * v.norm());
    cos.clamp(-1.0, 1.0).acos()
}

/// Angle between `u` and `v`, signed by the 2D cross product `u × v`.
///
/// Collinear vectors get a non-negative result: `0` when they point the same
/// way, `π` when they are opposite.
#[must_use]
pub fn signed_angle_between(u: &Vector2, v: &Vector2) -> f64 {
    let cross = u.x * v.y - u.y * v.x;
    let angle = angle_between(u, v);
    if cross < 0.0 {
        -angle
    } else {
        angle
    }
}

/// Direction angle of the vector from `from` to `to`, in `(-π, π]`.
#[must_use]
pub fn direction_angle(from: &Point, to: &Point) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}
