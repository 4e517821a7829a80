use crate::math::intersect_2d::line_circle_intersect_2d;
use crate::math::{equiv, is_inside_bounds, points_equiv, Point};

/// Slope/intercept form `y = a·x + b` of the line through two reference points.
///
/// Derived fields are computed once, on construction; build a new equation
/// whenever a reference point moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineEquation {
    start: Point,
    end: Point,
    dx: f64,
    dy: f64,
    slope: f64,
    intercept: f64,
    squared_length: f64,
}

impl LineEquation {
    /// Creates the equation of the line through `start` and `end`.
    #[must_use]
    pub fn through(start: Point, end: Point) -> Self {
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let slope = dy / dx;
        Self {
            start,
            end,
            dx,
            dy,
            slope,
            intercept: start.y - slope * start.x,
            squared_length: dx * dx + dy * dy,
        }
    }

    /// First reference point.
    #[must_use]
    pub fn start(&self) -> &Point {
        &self.start
    }

    /// Second reference point.
    #[must_use]
    pub fn end(&self) -> &Point {
        &self.end
    }

    #[must_use]
    pub fn dx(&self) -> f64 {
        self.dx
    }

    #[must_use]
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Slope `a`; infinite for a vertical line.
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Intercept `b`; meaningless for a vertical line.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    #[must_use]
    pub fn squared_length(&self) -> f64 {
        self.squared_length
    }

    /// Returns `true` for a vertical line (`dx == 0`).
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.dx == 0.0
    }

    /// Returns `true` for a horizontal line (`dy == 0`).
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.dy == 0.0
    }
}

/// Line math shared by persistent [`LineData`](crate::topology::LineData) and
/// transient [`Segment`](super::Segment)s.
pub trait LineBase {
    /// The equation of the underlying infinite line.
    fn equation(&self) -> &LineEquation;

    /// Ordinate at abscissa `x`; `f64::INFINITY` for a vertical line.
    fn y(&self, x: f64) -> f64 {
        let eq = self.equation();
        if eq.is_vertical() {
            return f64::INFINITY;
        }
        eq.slope * x + eq.intercept
    }

    /// Abscissa at ordinate `y`; `f64::INFINITY` for a horizontal line.
    fn x(&self, y: f64) -> f64 {
        let eq = self.equation();
        if eq.is_vertical() {
            return eq.start.x;
        }
        if eq.is_horizontal() {
            return f64::INFINITY;
        }
        (y - eq.intercept) / eq.slope
    }

    /// Returns `true` if `p` lies on the infinite line, within tolerance.
    fn includes_point(&self, p: &Point) -> bool {
        let eq = self.equation();
        (!eq.is_vertical() && equiv(p.y, self.y(p.x)))
            || (!eq.is_horizontal() && equiv(p.x, self.x(p.y)))
    }

    /// Parametric coordinate `t` of the orthogonal projection of `p`, with
    /// `t = 0` at the start point and `t = 1` at the end point.
    fn projection_parameter(&self, p: &Point) -> f64 {
        let eq = self.equation();
        ((p.x - eq.start.x) * eq.dx + (p.y - eq.start.y) * eq.dy) / eq.squared_length
    }

    /// Orthogonal projection of `p` onto the infinite line.
    fn projection(&self, p: &Point) -> Point {
        let eq = self.equation();
        let t = self.projection_parameter(p);
        Point::new(eq.start.x + t * eq.dx, eq.start.y + t * eq.dy)
    }

    /// The points, at most two, where the infinite line crosses the border
    /// of the rectangle `[0, xmax] × [0, ymax]`.
    fn line_bounds(&self, xmax: f64, ymax: f64) -> Vec<Point> {
        let eq = self.equation();
        if eq.is_vertical() {
            return vec![Point::new(eq.start.x, 0.0), Point::new(eq.start.x, ymax)];
        }
        if eq.is_horizontal() {
            return vec![Point::new(0.0, eq.start.y), Point::new(xmax, eq.start.y)];
        }

        let border_crossings = [
            Point::new(0.0, self.y(0.0)),
            Point::new(self.x(0.0), 0.0),
            Point::new(xmax, self.y(xmax)),
            Point::new(self.x(ymax), ymax),
        ];

        let mut bounds: Vec<Point> = Vec::with_capacity(2);
        for p in border_crossings {
            if bounds.len() == 2 {
                break;
            }
            if bounds.iter().any(|b| points_equiv(b, &p)) {
                continue;
            }
            if is_inside_bounds(&p, xmax, ymax) {
                bounds.push(p);
            }
        }
        bounds
    }

    /// Crossings of the infinite line with a circle: 0, 1 (tangent) or 2 points.
    fn circle_intersections(&self, center: &Point, radius: f64) -> Vec<Point> {
        let eq = self.equation();
        line_circle_intersect_2d(&eq.start, &eq.end, center, radius)
    }
}

impl LineBase for LineEquation {
    fn equation(&self) -> &LineEquation {
        self
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn vertical() -> LineEquation {
        LineEquation::through(Point::new(20.0, 10.0), Point::new(20.0, 50.0))
    }

    fn sloped() -> LineEquation {
        LineEquation::through(Point::new(30.0, 130.0), Point::new(10.0, 140.0))
    }

    #[test]
    fn evaluate_vertical_line() {
        let l = vertical();
        assert!(l.y(100.0).is_infinite());
        assert_abs_diff_eq!(l.x(20.0), 20.0);
    }

    #[test]
    fn evaluate_sloped_line() {
        let l = sloped();
        assert_abs_diff_eq!(l.y(90.0), 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(l.x(100.0), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn evaluate_horizontal_line() {
        let l = LineEquation::through(Point::new(0.0, 5.0), Point::new(10.0, 5.0));
        assert!(l.x(3.0).is_infinite());
        assert_abs_diff_eq!(l.y(42.0), 5.0);
    }

    #[test]
    fn includes_points_on_infinite_line() {
        assert!(vertical().includes_point(&Point::new(20.0, 400.0)));
        assert!(sloped().includes_point(&Point::new(90.0, 100.0)));
        assert!(!vertical().includes_point(&Point::new(30.0, 130.0)));
        assert!(!vertical().includes_point(&Point::new(10.0, 140.0)));
    }

    #[test]
    fn projection_on_infinite_line() {
        let p = vertical().projection(&Point::new(40.0, 200.0));
        assert_abs_diff_eq!(p, Point::new(20.0, 200.0), epsilon = 1e-9);

        let p = sloped().projection(&Point::new(30.0, 80.0));
        assert_abs_diff_eq!(p, Point::new(50.0, 120.0), epsilon = 1e-9);
    }

    #[test]
    fn diagonal_bounds() {
        let l = LineEquation::through(Point::new(10.0, 10.0), Point::new(30.0, 30.0));
        let bounds = l.line_bounds(1000.0, 1000.0);
        assert_eq!(bounds.len(), 2);
        assert_abs_diff_eq!(bounds[0], Point::new(0.0, 0.0), epsilon = 1e-9);
        assert_abs_diff_eq!(bounds[1], Point::new(1000.0, 1000.0), epsilon = 1e-9);
    }

    #[test]
    fn axis_aligned_bounds() {
        let horizontal = LineEquation::through(Point::new(10.0, 10.0), Point::new(30.0, 10.0));
        let bounds = horizontal.line_bounds(1000.0, 1000.0);
        assert_eq!(bounds, vec![Point::new(0.0, 10.0), Point::new(1000.0, 10.0)]);

        let vertical = LineEquation::through(Point::new(10.0, 10.0), Point::new(10.0, 30.0));
        let bounds = vertical.line_bounds(1000.0, 1000.0);
        assert_eq!(bounds, vec![Point::new(10.0, 0.0), Point::new(10.0, 1000.0)]);
    }

    #[test]
    fn line_outside_rectangle_has_no_bounds() {
        let l = LineEquation::through(Point::new(-20.0, -30.0), Point::new(-60.0, -20.0));
        assert!(l.line_bounds(1000.0, 600.0).is_empty());
    }

    #[test]
    fn circle_intersections_use_reference_points() {
        let l = LineEquation::through(Point::new(6.0, 4.0), Point::new(7.0, 2.0));
        let hits = l.circle_intersections(&Point::new(3.0, 7.0), 5.0);
        assert_eq!(hits.len(), 2);
        assert_abs_diff_eq!(hits[0].x, 2.05, epsilon = 0.01);
        assert_abs_diff_eq!(hits[0].y, 11.91, epsilon = 0.01);
        assert_abs_diff_eq!(hits[1].x, 6.35, epsilon = 0.01);
        assert_abs_diff_eq!(hits[1].y, 3.29, epsilon = 0.01);
    }
}
