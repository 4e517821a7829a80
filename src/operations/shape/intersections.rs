use tracing::debug;

use crate::error::Result;
use crate::topology::{Arrangement, LineId, ShapeId};

/// Intersects every line of a shape with a pool of known lines, creating the
/// shared intersections that are still missing.
pub struct UpdateIntersections {
    shape: ShapeId,
    lines: Vec<LineId>,
}

impl UpdateIntersections {
    /// Creates a new `UpdateIntersections` operation against `lines`.
    #[must_use]
    pub fn new(shape: ShapeId, lines: Vec<LineId>) -> Self {
        Self { shape, lines }
    }

    /// Executes the operation, returning how many intersections were added to
    /// the arrangement.
    ///
    /// Pairs of a line with itself are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape or one of the lines is not found.
    pub fn execute(&self, arr: &mut Arrangement) -> Result<usize> {
        let before = arr.intersection_count();
        let own: Vec<LineId> = arr.shape(self.shape)?.all_lines().collect();

        for &line in &self.lines {
            for &new_line in &own {
                if line != new_line {
                    arr.get_or_create_intersection(line, new_line)?;
                }
            }
        }

        let added = arr.intersection_count() - before;
        debug!(shape = ?self.shape, pool = self.lines.len(), added, "updated intersections");
        Ok(added)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::DrawingSize;
    use crate::geometry::LineBase;
    use crate::math::Point;
    use crate::operations::shape::BuildShape;
    use crate::topology::Vertex;

    fn square(x: f64, y: f64, side: f64) -> Vec<Vertex> {
        [(x, y), (x + side, y), (x + side, y + side), (x, y + side)]
            .into_iter()
            .map(|(x, y)| Vertex::Point(Point::new(x, y)))
            .collect()
    }

    #[test]
    fn crossing_shapes_get_shared_intersections() {
        let mut arr = Arrangement::new(DrawingSize::new(1000.0, 600.0));
        let s1 = BuildShape::new(square(100.0, 100.0, 50.0), 10.0)
            .execute(&mut arr)
            .unwrap();
        let pool = arr.shape_lines();
        let s2 = BuildShape::new(square(300.0, 120.0, 40.0), 10.0)
            .execute(&mut arr)
            .unwrap();

        let added = UpdateIntersections::new(s2, pool.clone())
            .execute(&mut arr)
            .unwrap();
        assert!(added > 0);

        // Every non-parallel pair now shares a registered intersection.
        for &old in &pool {
            for new in arr.shape(s2).unwrap().all_lines().collect::<Vec<_>>() {
                let (l1, l2) = (arr.line(old).unwrap(), arr.line(new).unwrap());
                let flat = |e: &crate::geometry::LineEquation| e.dx().abs() > e.dy().abs();
                let parallel = flat(l1.equation()) == flat(l2.equation());
                let shared = arr.known_intersection(old, new).unwrap();
                assert_eq!(shared.is_some(), !parallel);
            }
        }

        let again = UpdateIntersections::new(s2, pool).execute(&mut arr).unwrap();
        assert_eq!(again, 0);
        assert!(arr.shape(s1).is_ok());
    }

    #[test]
    fn own_lines_are_not_self_intersected() {
        let mut arr = Arrangement::new(DrawingSize::new(1000.0, 600.0));
        let s = BuildShape::new(square(100.0, 100.0, 50.0), 10.0)
            .execute(&mut arr)
            .unwrap();
        let before = arr.intersection_count();
        let own = arr.shape_lines();
        assert_eq!(UpdateIntersections::new(s, own).execute(&mut arr).unwrap(), 0);
        assert_eq!(arr.intersection_count(), before);
    }
}
