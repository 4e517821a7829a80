use crate::geometry::{LineBase, LineEquation};
use crate::math::Point;

use super::shape::ShapeId;
use super::vertex::IntersectionId;

slotmap::new_key_type! {
    /// Unique identifier for a line in the arrangement.
    pub struct LineId;
}

/// Data associated with a persistent line.
///
/// The equation is derived from the two reference intersections the line was
/// created with; every other registered intersection is colinear with them
/// within tolerance.
#[derive(Debug, Clone)]
pub struct LineData {
    /// The two reference intersections defining the line.
    pub endpoints: [IntersectionId; 2],
    /// Every intersection registered on this line, reference points first.
    pub intersections: Vec<IntersectionId>,
    /// Parallel lines semantically linked to this one (boundary edge and offset twin).
    pub parallels: Vec<LineId>,
    /// Shapes currently using this line.
    pub linked_shapes: Vec<ShapeId>,
    /// Where the infinite line crosses the drawing rectangle (at most two points).
    pub bounds: Vec<Point>,
    equation: LineEquation,
}

impl LineData {
    /// Creates an unlinked line through the reference intersections `a` and `b`.
    #[must_use]
    pub fn new(a: (IntersectionId, Point), b: (IntersectionId, Point), xmax: f64, ymax: f64) -> Self {
        let equation = LineEquation::through(a.1, b.1);
        Self {
            endpoints: [a.0, b.0],
            intersections: Vec::new(),
            parallels: Vec::new(),
            linked_shapes: Vec::new(),
            bounds: equation.line_bounds(xmax, ymax),
            equation,
        }
    }

    /// Recomputes the equation and bounds after a reference point moved.
    pub fn on_coordinates_changed(&mut self, a: Point, b: Point, xmax: f64, ymax: f64) {
        self.equation = LineEquation::through(a, b);
        self.update_line_bounds(xmax, ymax);
    }

    /// Recomputes `bounds` for a drawing rectangle of `xmax × ymax`.
    pub fn update_line_bounds(&mut self, xmax: f64, ymax: f64) {
        self.bounds = self.equation.line_bounds(xmax, ymax);
    }
}

impl LineBase for LineData {
    fn equation(&self) -> &LineEquation {
        &self.equation
    }
}
