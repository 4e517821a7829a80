use crate::config::DrawingParameters;
use crate::math::angle::{direction_angle, signed_angle_between};
use crate::math::Point;

/// Moves `p` along the ray from `base` so that its distance to `base` lies
/// in `[min, max]`.
///
/// `p` is returned unchanged when already in range. A `p` equal to `base`
/// with `min > 0` is pushed `min` units towards negative y.
#[must_use]
pub fn constrain_distance(base: &Point, p: &Point, min: f64, max: f64) -> Point {
    let d = p - base;
    if d.x == 0.0 && d.y == 0.0 && min > 0.0 {
        return Point::new(p.x, p.y - min);
    }

    let squared_length = d.norm_squared();
    let new_length = (min * min).max((max * max).min(squared_length));
    if new_length == squared_length {
        return *p;
    }

    let f = (new_length / squared_length).sqrt() - 1.0;
    Point::new(p.x + f * d.x, p.y + f * d.y)
}

/// Rotates `p` around `base` so that the angle of `(base, p)` respects the
/// dead zone around `previous` and, when `step > 0`, falls on the step grid.
///
/// The distance to `base` is kept. `p` is returned unchanged when the angle
/// needs no correction.
#[must_use]
pub fn constrain_angle(base: &Point, p: &Point, previous: Option<&Point>, min: f64, step: f64) -> Point {
    let current_angle = direction_angle(base, p);
    let mut new_angle = current_angle;
    let mut step_applied = false;

    if let Some(previous) = previous.filter(|_| min > 0.0) {
        let previous_vector = previous - base;
        let previous_angle = direction_angle(base, previous);
        let angle_from_previous = signed_angle_between(&previous_vector, &(p - base));

        // A cursor on the previous edge is rotated counter-clockwise.
        let s = if angle_from_previous < 0.0 { -1.0 } else { 1.0 };
        let mut stepped_min = previous_angle + min * s;
        let mut min_from_previous = min * s;
        if step > 0.0 {
            stepped_min = (stepped_min / step).ceil() * step;
            if s < 0.0 {
                stepped_min -= step;
            }
            min_from_previous = (stepped_min - previous_angle) / s;
        }

        if angle_from_previous.abs() < min_from_previous.abs() {
            new_angle = stepped_min;
            step_applied = true;
        }
    }

    if step > 0.0 && !step_applied {
        new_angle = (new_angle / step).round() * step;
    }

    if new_angle == current_angle {
        return *p;
    }
    let length = (p - base).norm();
    let (sin, cos) = new_angle.sin_cos();
    Point::new(base.x + length * cos, base.y + length * sin)
}

/// Constrains a free cursor position relative to the shape in progress:
/// distance first, then angle. The first vertex is unconstrained.
#[must_use]
pub fn constrain_point_position(p: &Point, current_shape: &[Point], params: &DrawingParameters) -> Point {
    let Some((last, rest)) = current_shape.split_last() else {
        return *p;
    };
    let constrained = constrain_distance(last, p, params.min_stroke, params.max_stroke);
    constrain_angle(last, &constrained, rest.last(), params.min_angle, params.angle_step)
}
