use super::{equiv, Point};
use crate::config::DrawingSize;

/// Solves `a·x² + b·x + c = 0`.
///
/// Returns no root for a negative discriminant, a single root when the
/// discriminant is [`equiv`] to zero, and two roots (lower first) otherwise.
#[must_use]
pub fn resolve_quadratic(a: f64, b: f64, c: f64) -> Vec<f64> {
    let delta = b * b - 4.0 * a * c;
    if equiv(delta, 0.0) {
        return vec![-b / (2.0 * a)];
    }
    if delta < 0.0 {
        return Vec::new();
    }

    let delta_sqrt = delta.sqrt();
    let r1 = (-b - delta_sqrt) / (2.0 * a);
    let r2 = (-b + delta_sqrt) / (2.0 * a);
    if r1 <= r2 {
        vec![r1, r2]
    } else {
        vec![r2, r1]
    }
}

/// Point at `angle`/`radius` from `center`.
///
/// With a `drawing_size`, a point falling outside the canvas is pulled back
/// along its ray: the x axis is clamped first, then y (re-deriving x when the
/// y clamp shortened the radius).
#[must_use]
pub fn polar_coordinates(
    angle: f64,
    radius: f64,
    center: &Point,
    drawing_size: Option<&DrawingSize>,
) -> Point {
    if radius == 0.0 {
        return *center;
    }

    let (sin, cos) = angle.sin_cos();
    let mut r = radius;

    let mut x = cos * r + center.x;
    if let Some(size) = drawing_size {
        if x < 0.0 || x > size.x {
            x = x.clamp(0.0, size.x);
            r = (x - center.x) / cos;
        }
    }

    let mut y = sin * r + center.y;
    if let Some(size) = drawing_size {
        if y < 0.0 || y > size.y {
            y = y.clamp(0.0, size.y);
            r = (y - center.y) / sin;
            x = cos * r + center.x;
        }
    }

    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn quadratic_double_root() {
        let roots = resolve_quadratic(1.0, 2.0, 1.0);
        assert_eq!(roots.len(), 1);
        assert_abs_diff_eq!(roots[0], -1.0);

        let roots = resolve_quadratic(4.0, 4.0, 1.0);
        assert_eq!(roots.len(), 1);
        assert_abs_diff_eq!(roots[0], -0.5);
    }

    #[test]
    fn quadratic_no_root() {
        assert!(resolve_quadratic(3.0, 5.0, 7.0).is_empty());
    }

    #[test]
    fn quadratic_two_roots_lower_first() {
        let roots = resolve_quadratic(2.0, 9.0, -5.0);
        assert_eq!(roots.len(), 2);
        assert_abs_diff_eq!(roots[0], -5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(roots[1], 0.5, epsilon = 1e-9);

        let roots = resolve_quadratic(-1.0, 2.0, 3.0);
        assert_abs_diff_eq!(roots[0], -1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(roots[1], 3.0, epsilon = 1e-9);
    }

    fn canvas() -> (Point, DrawingSize) {
        (Point::new(50.0, 50.0), DrawingSize::new(100.0, 100.0))
    }

    #[test]
    fn polar_inside_canvas() {
        let (center, size) = canvas();
        let p = polar_coordinates(0.0, 10.0, &center, Some(&size));
        assert_abs_diff_eq!(p.x, 60.0, epsilon = 0.01);
        assert_abs_diff_eq!(p.y, 50.0, epsilon = 0.01);

        let p = polar_coordinates(PI / 4.0, 10.0, &center, Some(&size));
        assert_abs_diff_eq!(p.x, 57.07, epsilon = 0.01);
        assert_abs_diff_eq!(p.y, 57.07, epsilon = 0.01);

        let p = polar_coordinates(2.0 * PI / 3.0, 10.0, &center, Some(&size));
        assert_abs_diff_eq!(p.x, 45.0, epsilon = 0.01);
        assert_abs_diff_eq!(p.y, 58.66, epsilon = 0.01);
    }

    #[test]
    fn polar_clamped_to_canvas() {
        let (center, size) = canvas();
        let p = polar_coordinates(0.0, 60.0, &center, Some(&size));
        assert_abs_diff_eq!(p.x, 100.0, epsilon = 0.01);
        assert_abs_diff_eq!(p.y, 50.0, epsilon = 0.01);

        let p = polar_coordinates(PI / 4.0, 60.0, &center, Some(&size));
        assert_abs_diff_eq!(p.x, 92.43, epsilon = 0.01);
        assert_abs_diff_eq!(p.y, 92.43, epsilon = 0.01);

        let p = polar_coordinates(2.0 * PI / 3.0, 60.0, &center, Some(&size));
        assert_abs_diff_eq!(p.x, 21.13, epsilon = 0.01);
        assert_abs_diff_eq!(p.y, 100.0, epsilon = 0.01);
    }

    #[test]
    fn polar_zero_radius_is_center() {
        let (center, size) = canvas();
        assert_eq!(polar_coordinates(1.0, 0.0, &center, Some(&size)), center);
    }

    #[test]
    fn polar_without_canvas_is_unclamped() {
        let (center, _) = canvas();
        let p = polar_coordinates(0.0, 60.0, &center, None);
        assert_abs_diff_eq!(p.x, 110.0, epsilon = 1e-9);
    }
}
