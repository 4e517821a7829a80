use crate::math::{equiv, is_inside_bounds, squared_distance, Point};
use crate::topology::LineId;

use super::{LineBase, LineEquation};

/// A transient bounded line between two points.
///
/// Segments are never registered in the arrangement. `associated_line` names
/// the persistent line a segment was clipped from, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    equation: LineEquation,
    associated_line: Option<LineId>,
}

impl Segment {
    /// Creates a segment from `a` to `b`.
    #[must_use]
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            equation: LineEquation::through(a, b),
            associated_line: None,
        }
    }

    /// Creates a segment from `a` to `b` clipped from `line`.
    #[must_use]
    pub fn on_line(a: Point, b: Point, line: Option<LineId>) -> Self {
        Self {
            equation: LineEquation::through(a, b),
            associated_line: line,
        }
    }

    /// Start point `A`.
    #[must_use]
    pub fn a(&self) -> &Point {
        self.equation.start()
    }

    /// End point `B`.
    #[must_use]
    pub fn b(&self) -> &Point {
        self.equation.end()
    }

    /// The persistent line this segment was clipped from.
    #[must_use]
    pub fn associated_line(&self) -> Option<LineId> {
        self.associated_line
    }

    /// Moves both endpoints, recomputing the derived line fields.
    pub fn set_endpoints(&mut self, a: Point, b: Point) {
        self.equation = LineEquation::through(a, b);
    }

    /// Pulls endpoints lying outside `[0, xmax] × [0, ymax]` back onto the
    /// rectangle border.
    ///
    /// Each outside endpoint moves to the nearer of the line's two border
    /// crossings. If the line misses the rectangle, it collapses to `(0, 0)`.
    pub fn constrain_to_bounds(&mut self, xmax: f64, ymax: f64) {
        let (mut a, mut b) = (*self.a(), *self.b());
        let a_out = !is_inside_bounds(&a, xmax, ymax);
        let b_out = !is_inside_bounds(&b, xmax, ymax);
        if !a_out && !b_out {
            return;
        }

        let bounds = self.line_bounds(xmax, ymax);
        let nearest_bound = |p: &Point| match bounds.as_slice() {
            [b0, b1] => {
                if squared_distance(p, b0) < squared_distance(p, b1) {
                    *b0
                } else {
                    *b1
                }
            }
            _ => Point::origin(),
        };

        if a_out {
            a = nearest_bound(&a);
        }
        if b_out {
            b = nearest_bound(&b);
        }
        self.set_endpoints(a, b);
    }
}

impl LineBase for Segment {
    fn equation(&self) -> &LineEquation {
        &self.equation
    }

    /// Returns `true` if `p` lies on the segment, endpoints included.
    fn includes_point(&self, p: &Point) -> bool {
        let (a, b) = (self.a(), self.b());
        let cross = (p.y - a.y) * self.equation.dx() - (p.x - a.x) * self.equation.dy();
        equiv(cross.abs(), 0.0)
            && p.x >= a.x.min(b.x)
            && p.x <= a.x.max(b.x)
            && p.y >= a.y.min(b.y)
            && p.y <= a.y.max(b.y)
    }

    /// Closest point of the segment to `p`: the projection clamped to `[A, B]`.
    fn projection(&self, p: &Point) -> Point {
        let t = self.projection_parameter(p);
        if t <= 0.0 {
            return *self.a();
        }
        if t >= 1.0 {
            return *self.b();
        }
        let eq = &self.equation;
        Point::new(eq.start().x + t * eq.dx(), eq.start().y + t * eq.dy())
    }
}
