//! Adjacency maintenance and derived queries on the arrangement.

use crate::error::TopologyError;
use crate::geometry::LineBase;
use crate::math::intersect_2d::{line_line_intersect_2d, Crossing};
use crate::math::is_inside_bounds;
use crate::math::sequence::push_unique;
use crate::math::Point;

use super::{Arrangement, IntersectionId, LineId, ShapeId, Vertex};

impl Arrangement {
    /// Registers `vertex` on `line` if it is an intersection; plain and
    /// candidate points are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the line or intersection is not found.
    pub fn add_point(&mut self, line: LineId, vertex: &Vertex) -> Result<(), TopologyError> {
        match vertex {
            Vertex::Intersection(id) => self.register(line, *id),
            Vertex::Point(_) | Vertex::OnLine { .. } => self.line(line).map(|_| ()),
        }
    }

    /// Links `id` and `line` in both directions. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if the line or intersection is not found.
    pub fn register(&mut self, line: LineId, id: IntersectionId) -> Result<(), TopologyError> {
        self.intersection(id)?;
        push_unique(&mut self.line_mut(line)?.intersections, id);
        push_unique(&mut self.intersection_mut(id)?.crossing_lines, line);
        Ok(())
    }

    /// Records `l1` and `l2` as parallels of each other. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if either line is not found.
    pub fn link_parallel_lines(&mut self, l1: LineId, l2: LineId) -> Result<(), TopologyError> {
        self.line(l2)?;
        push_unique(&mut self.line_mut(l1)?.parallels, l2);
        push_unique(&mut self.line_mut(l2)?.parallels, l1);
        Ok(())
    }

    /// The first intersection registered on `line` that `other` also crosses.
    ///
    /// # Errors
    ///
    /// Returns an error if the line or one of its intersections is not found.
    pub fn known_intersection(
        &self,
        line: LineId,
        other: LineId,
    ) -> Result<Option<IntersectionId>, TopologyError> {
        for &id in &self.line(line)?.intersections {
            if self.intersection(id)?.crossing_lines.contains(&other) {
                return Ok(Some(id));
            }
        }
        Ok(None)
    }

    /// Returns the intersection shared by `line` and `other`, creating and
    /// registering it on both when the lines cross but do not share one yet.
    ///
    /// Repeated calls for the same pair return the same intersection.
    /// Parallel and collinear pairs yield `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if either line is not found.
    pub fn get_or_create_intersection(
        &mut self,
        line: LineId,
        other: LineId,
    ) -> Result<Option<IntersectionId>, TopologyError> {
        if let Some(id) = self.known_intersection(line, other)? {
            return Ok(Some(id));
        }

        let (l1, l2) = (self.line(line)?, self.line(other)?);
        let (e1, e2) = (l1.equation(), l2.equation());
        let Crossing::Point(p) = line_line_intersect_2d(e1.start(), e1.end(), e2.start(), e2.end(), false) else {
            return Ok(None);
        };

        // The solver snaps onto reference points, keep their identity.
        let existing = l1
            .endpoints
            .iter()
            .chain(l2.endpoints.iter())
            .copied()
            .find(|&id| self.intersections.get(id).is_some_and(|i| i.position == p));

        let id = match existing {
            Some(id) => id,
            None => self.add_intersection(p),
        };
        self.register(line, id)?;
        self.register(other, id)?;
        Ok(Some(id))
    }

    /// Returns `true` if `vertex` is registered on `line` or lies on the
    /// infinite line within tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the line or the vertex's intersection is not found.
    pub fn line_includes(&self, line: LineId, vertex: &Vertex) -> Result<bool, TopologyError> {
        let data = self.line(line)?;
        match vertex {
            Vertex::Intersection(id) if data.intersections.contains(id) => return Ok(true),
            Vertex::OnLine { line: on, .. } if *on == line => return Ok(true),
            _ => {}
        }
        let p = self.vertex_position(vertex)?;
        Ok(data.includes_point(&p))
    }

    /// Coordinates of any vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex's intersection is not found.
    pub fn vertex_position(&self, vertex: &Vertex) -> Result<Point, TopologyError> {
        match vertex {
            Vertex::Point(p) | Vertex::OnLine { position: p, .. } => Ok(*p),
            Vertex::Intersection(id) => self.position(*id),
        }
    }

    /// Turns `vertex` into a registered intersection.
    ///
    /// A candidate found on a line is registered on that line.
    ///
    /// # Errors
    ///
    /// Returns an error if the referenced intersection or line is not found.
    pub fn promote(&mut self, vertex: &Vertex) -> Result<IntersectionId, TopologyError> {
        match *vertex {
            Vertex::Intersection(id) => self.intersection(id).map(|_| id),
            Vertex::Point(p) => Ok(self.add_intersection(p)),
            Vertex::OnLine { position, line } => {
                self.line(line)?;
                let id = self.add_intersection(position);
                self.register(line, id)?;
                Ok(id)
            }
        }
    }

    /// Recomputes a line's equation and bounds from the current positions of
    /// its two reference intersections.
    ///
    /// # Errors
    ///
    /// Returns an error if the line or a reference intersection is not found.
    pub fn refresh_line(&mut self, id: LineId) -> Result<(), TopologyError> {
        let [a, b] = self.line(id)?.endpoints;
        let (pa, pb) = (self.position(a)?, self.position(b)?);
        let size = self.drawing_size;
        self.line_mut(id)?.on_coordinates_changed(pa, pb, size.x, size.y);
        Ok(())
    }

    /// Distinct boundary and offset lines of every live shape, in first-seen
    /// order.
    #[must_use]
    pub fn shape_lines(&self) -> Vec<LineId> {
        let mut out = Vec::new();
        for shape in self.shapes.values() {
            for line in shape.all_lines() {
                push_unique(&mut out, line);
            }
        }
        out
    }

    /// Distinct intersections of [`shape_lines`](Self::shape_lines) lying
    /// inside the canvas, the snap-point pool of a drawing.
    #[must_use]
    pub fn snapping_intersections(&self) -> Vec<IntersectionId> {
        let size = self.drawing_size;
        let mut out = Vec::new();
        for line in self.shape_lines() {
            let Some(data) = self.lines.get(line) else {
                continue;
            };
            for &id in &data.intersections {
                let inside = self
                    .intersections
                    .get(id)
                    .is_some_and(|i| is_inside_bounds(&i.position, size.x, size.y));
                if inside {
                    push_unique(&mut out, id);
                }
            }
        }
        out
    }

    /// Boundary vertices of a shape as plain coordinates, in input order.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape or one of its vertices is not found.
    pub fn shape_points(&self, id: ShapeId) -> Result<Vec<Point>, TopologyError> {
        self.shape(id)?
            .points
            .iter()
            .map(|&p| self.position(p))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::config::DrawingSize;
    use crate::topology::ShapeData;

    fn arrangement() -> Arrangement {
        Arrangement::new(DrawingSize::new(1000.0, 1000.0))
    }

    fn line(arr: &mut Arrangement, a: (f64, f64), b: (f64, f64)) -> LineId {
        let a = arr.add_intersection(Point::new(a.0, a.1));
        let b = arr.add_intersection(Point::new(b.0, b.1));
        arr.add_line(a, b).unwrap()
    }

    #[test]
    fn add_point_ignores_plain_points() {
        let mut arr = arrangement();
        let l = line(&mut arr, (0.0, 0.0), (10.0, 10.0));
        arr.add_point(l, &Vertex::Point(Point::new(5.0, 5.0))).unwrap();
        assert_eq!(arr.line(l).unwrap().intersections.len(), 2);

        let i = arr.add_intersection(Point::new(5.0, 5.0));
        arr.add_point(l, &Vertex::Intersection(i)).unwrap();
        arr.add_point(l, &Vertex::Intersection(i)).unwrap();
        assert_eq!(arr.line(l).unwrap().intersections.len(), 3);
        assert_eq!(arr.intersection(i).unwrap().crossing_lines, vec![l]);
    }

    #[test]
    fn parallel_links_are_symmetric_and_idempotent() {
        let mut arr = arrangement();
        let l1 = line(&mut arr, (0.0, 0.0), (10.0, 0.0));
        let l2 = line(&mut arr, (0.0, 5.0), (10.0, 5.0));
        arr.link_parallel_lines(l1, l2).unwrap();
        arr.link_parallel_lines(l2, l1).unwrap();
        assert_eq!(arr.line(l1).unwrap().parallels, vec![l2]);
        assert_eq!(arr.line(l2).unwrap().parallels, vec![l1]);
    }

    #[test]
    fn get_or_create_is_idempotent() {
        let mut arr = arrangement();
        let l1 = line(&mut arr, (0.0, 0.0), (10.0, 10.0));
        let l2 = line(&mut arr, (0.0, 10.0), (10.0, 0.0));

        let first = arr.get_or_create_intersection(l1, l2).unwrap().unwrap();
        let second = arr.get_or_create_intersection(l2, l1).unwrap().unwrap();
        assert_eq!(first, second);
        assert_abs_diff_eq!(arr.position(first).unwrap(), Point::new(5.0, 5.0), epsilon = 1e-9);
        assert_eq!(arr.known_intersection(l1, l2).unwrap(), Some(first));
        assert_eq!(arr.intersection(first).unwrap().crossing_lines, vec![l1, l2]);
        assert_eq!(arr.intersection_count(), 5);
    }

    #[test]
    fn crossing_satisfies_both_equations() {
        let mut arr = arrangement();
        let l1 = line(&mut arr, (12.0, 40.0), (300.0, 170.0));
        let l2 = line(&mut arr, (20.0, 500.0), (410.0, 15.0));
        let id = arr.get_or_create_intersection(l1, l2).unwrap().unwrap();
        let p = arr.position(id).unwrap();
        assert!(arr.line(l1).unwrap().includes_point(&p));
        assert!(arr.line(l2).unwrap().includes_point(&p));
    }

    #[test]
    fn crossing_on_reference_point_keeps_identity() {
        let mut arr = arrangement();
        let a = arr.add_intersection(Point::new(0.0, 0.0));
        let b = arr.add_intersection(Point::new(10.0, 0.0));
        let c = arr.add_intersection(Point::new(10.0, 10.0));
        let ab = arr.add_line(a, b).unwrap();
        let d = arr.add_intersection(Point::new(10.0, 20.0));
        let cd = arr.add_line(c, d).unwrap();

        assert_eq!(arr.get_or_create_intersection(ab, cd).unwrap(), Some(b));
        assert!(arr.line(cd).unwrap().intersections.contains(&b));
        assert_eq!(arr.intersection_count(), 4);
    }

    #[test]
    fn parallel_lines_do_not_cross() {
        let mut arr = arrangement();
        let l1 = line(&mut arr, (0.0, 0.0), (10.0, 0.0));
        let l2 = line(&mut arr, (0.0, 5.0), (10.0, 5.0));
        assert_eq!(arr.get_or_create_intersection(l1, l2).unwrap(), None);
        assert_eq!(arr.intersection_count(), 4);
    }

    #[test]
    fn line_includes_registered_and_colinear_points() {
        let mut arr = arrangement();
        let l = line(&mut arr, (0.0, 0.0), (10.0, 10.0));
        let far = arr.add_intersection(Point::new(400.0, 400.0));
        assert!(arr.line_includes(l, &Vertex::Intersection(far)).unwrap());
        assert!(arr.line_includes(l, &Vertex::Point(Point::new(3.0, 3.0))).unwrap());
        assert!(!arr.line_includes(l, &Vertex::Point(Point::new(3.0, 4.0))).unwrap());
    }

    #[test]
    fn promote_candidate_registers_on_its_line() {
        let mut arr = arrangement();
        let l = line(&mut arr, (0.0, 0.0), (10.0, 10.0));
        let candidate = Vertex::OnLine {
            position: Point::new(4.0, 4.0),
            line: l,
        };
        let id = arr.promote(&candidate).unwrap();
        assert!(arr.line(l).unwrap().intersections.contains(&id));
        assert_eq!(arr.intersection(id).unwrap().crossing_lines, vec![l]);
        assert_eq!(arr.promote(&Vertex::Intersection(id)).unwrap(), id);
    }

    #[test]
    fn refresh_line_follows_moved_endpoint() {
        let mut arr = arrangement();
        let l = line(&mut arr, (0.0, 0.0), (10.0, 10.0));
        let [_, b] = arr.line(l).unwrap().endpoints;
        arr.intersection_mut(b).unwrap().position = Point::new(10.0, 0.0);
        arr.refresh_line(l).unwrap();

        let data = arr.line(l).unwrap();
        assert!(data.equation().is_horizontal());
        assert_eq!(data.bounds, vec![Point::new(0.0, 0.0), Point::new(1000.0, 0.0)]);
    }

    #[test]
    fn snapping_pool_skips_points_outside_canvas() {
        let mut arr = arrangement();
        let l1 = line(&mut arr, (10.0, 10.0), (20.0, 10.0));
        let l2 = line(&mut arr, (-50.0, 20.0), (30.0, 20.0));
        arr.add_shape(ShapeData {
            points: Vec::new(),
            lines: vec![l1, l2],
            spaced_lines: vec![l2],
        });

        assert_eq!(arr.shape_lines(), vec![l1, l2]);
        let pool = arr.snapping_intersections();
        assert_eq!(pool.len(), 3);
        assert!(pool
            .iter()
            .all(|&i| arr.position(i).unwrap() != Point::new(-50.0, 20.0)));
    }
}
