mod intersections;
mod offset;
mod remove;

pub use intersections::UpdateIntersections;
pub use remove::RemoveShape;

use tracing::{debug, trace};

use crate::error::{OperationError, Result};
use crate::math::polygon_2d::is_clockwise;
use crate::math::sequence::{cyclic_pairs, cyclic_windows, push_unique};
use crate::math::{points_equiv, Point};
use crate::topology::{Arrangement, IntersectionId, LineId, ShapeData, ShapeId, Vertex};

/// Builds a closed polygon's boundary lines and its offset guide ring, and
/// links both into the arrangement.
pub struct BuildShape {
    points: Vec<Vertex>,
    gap: f64,
}

impl BuildShape {
    /// Creates a new `BuildShape` operation for the ordered boundary `points`,
    /// offset outward by `gap`.
    #[must_use]
    pub fn new(points: Vec<Vertex>, gap: f64) -> Self {
        Self { points, gap }
    }

    /// Executes the operation, creating the shape in the arrangement.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if fewer than 3 vertices are
    /// given or two consecutive vertices coincide, and a topology error if a
    /// vertex refers to an unknown intersection.
    pub fn execute(&self, arr: &mut Arrangement) -> Result<ShapeId> {
        if self.points.len() < 3 {
            return Err(OperationError::InvalidInput(format!(
                "a shape needs at least 3 vertices, got {}",
                self.points.len()
            ))
            .into());
        }

        let positions = self
            .points
            .iter()
            .map(|v| arr.vertex_position(v))
            .collect::<std::result::Result<Vec<Point>, _>>()?;
        if cyclic_pairs(&positions).any(|(p, q)| points_equiv(p, q)) {
            return Err(
                OperationError::InvalidInput("consecutive shape vertices coincide".into()).into(),
            );
        }

        let points = self
            .points
            .iter()
            .map(|v| arr.promote(v))
            .collect::<std::result::Result<Vec<IntersectionId>, _>>()?;

        let mut ring = points.clone();
        if !is_clockwise(&positions) {
            trace!("reversing counter-clockwise boundary");
            ring.reverse();
        }

        // lines[i] joins ring[i] to ring[i + 1].
        let lines = cyclic_pairs(&ring)
            .map(|(&a, &b)| boundary_line(arr, a, b))
            .collect::<Result<Vec<LineId>>>()?;

        let mut spaced_lines = Vec::with_capacity(lines.len());
        for (corners, edges) in cyclic_windows::<_, 4>(&ring, -1).zip(cyclic_windows::<_, 3>(&lines, -1)) {
            let spaced = offset::offset_edge(arr, corners.map(|c| *c), edges.map(|e| *e), self.gap)?;
            spaced_lines.push(spaced);
        }

        for (&l1, &l2) in cyclic_pairs(&spaced_lines) {
            arr.get_or_create_intersection(l1, l2)?;
        }

        let id = arr.add_shape(ShapeData {
            points,
            lines,
            spaced_lines,
        });
        let owned: Vec<LineId> = arr.shape(id)?.all_lines().collect();
        for line in owned {
            push_unique(&mut arr.line_mut(line)?.linked_shapes, id);
        }

        debug!(vertices = ring.len(), "built shape");
        Ok(id)
    }
}

/// The line joining `a` to `b`: an existing line through one of them that
/// includes the other, or a new one.
fn boundary_line(arr: &mut Arrangement, a: IntersectionId, b: IntersectionId) -> Result<LineId> {
    let existing = match find_line_through(arr, a, b)? {
        Some(line) => Some(line),
        None => find_line_through(arr, b, a)?,
    };
    match existing {
        Some(line) => {
            trace!(?line, "reusing boundary line");
            arr.register(line, a)?;
            arr.register(line, b)?;
            Ok(line)
        }
        None => Ok(arr.add_line(a, b)?),
    }
}

fn find_line_through(
    arr: &Arrangement,
    from: IntersectionId,
    to: IntersectionId,
) -> Result<Option<LineId>> {
    for &line in &arr.intersection(from)?.crossing_lines {
        if arr.line_includes(line, &Vertex::Intersection(to))? {
            return Ok(Some(line));
        }
    }
    Ok(None)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::DrawingSize;
    use crate::geometry::LineBase;

    fn v(x: f64, y: f64) -> Vertex {
        Vertex::Point(Point::new(x, y))
    }

    fn triangle() -> Vec<Vertex> {
        vec![v(150.0, 150.0), v(180.0, 130.0), v(160.0, 180.0)]
    }

    fn undirected_edges(arr: &Arrangement, shape: ShapeId) -> Vec<[(i64, i64); 2]> {
        let mut edges: Vec<[(i64, i64); 2]> = arr
            .shape(shape)
            .unwrap()
            .lines
            .iter()
            .map(|&l| {
                let eq = *arr.line(l).unwrap().equation();
                #[allow(clippy::cast_possible_truncation)]
                let key = |p: &Point| (p.x.round() as i64, p.y.round() as i64);
                let mut pair = [key(eq.start()), key(eq.end())];
                pair.sort_unstable();
                pair
            })
            .collect();
        edges.sort_unstable();
        edges
    }

    #[test]
    fn triangle_has_three_lines_and_three_offsets() {
        let mut arr = Arrangement::new(DrawingSize::new(1000.0, 600.0));
        let s = BuildShape::new(triangle(), 10.0).execute(&mut arr).unwrap();
        let shape = arr.shape(s).unwrap();

        assert_eq!(shape.points.len(), 3);
        assert_eq!(shape.lines.len(), 3);
        assert_eq!(shape.spaced_lines.len(), 3);
        for (&line, &spaced) in shape.lines.iter().zip(&shape.spaced_lines) {
            let data = arr.line(line).unwrap();
            assert_eq!(data.parallels, vec![spaced]);
            assert_eq!(data.intersections.len(), 4);
            assert_eq!(data.linked_shapes, vec![s]);
            assert_eq!(arr.line(spaced).unwrap().intersections.len(), 4);
        }
        assert_eq!(arr.line_count(), 6);
    }

    #[test]
    fn offsets_are_parallel_and_outside() {
        let mut arr = Arrangement::new(DrawingSize::new(1000.0, 600.0));
        let s = BuildShape::new(triangle(), 10.0).execute(&mut arr).unwrap();
        let shape = arr.shape(s).unwrap();
        let centroid = Point::new(490.0 / 3.0, 460.0 / 3.0);

        for (&line, &spaced) in shape.lines.iter().zip(&shape.spaced_lines) {
            let boundary = arr.line(line).unwrap();
            let offset = arr.line(spaced).unwrap();
            let on_offset = *offset.equation().start();
            let foot = boundary.projection(&on_offset);
            approx::assert_abs_diff_eq!((on_offset - foot).norm(), 10.0, epsilon = 1e-6);

            let inner = boundary.projection(&centroid);
            assert!((on_offset - foot).dot(&(centroid - inner)) < 0.0);
        }
    }

    #[test]
    fn reversed_input_gives_same_edges() {
        let mut arr = Arrangement::new(DrawingSize::new(1000.0, 600.0));
        let clockwise = BuildShape::new(triangle(), 10.0).execute(&mut arr).unwrap();

        let mut other = Arrangement::new(DrawingSize::new(1000.0, 600.0));
        let mut reversed = triangle();
        reversed.reverse();
        let counter = BuildShape::new(reversed.clone(), 10.0)
            .execute(&mut other)
            .unwrap();

        assert_eq!(
            undirected_edges(&arr, clockwise),
            undirected_edges(&other, counter)
        );
        let stored = other.shape_points(counter).unwrap();
        let given: Vec<Point> = reversed
            .iter()
            .map(|v| other.vertex_position(v).unwrap())
            .collect();
        assert_eq!(stored, given);
    }

    #[test]
    fn shapes_sharing_an_edge_share_its_guide() {
        let mut arr = Arrangement::new(DrawingSize::new(1000.0, 600.0));
        let s1 = BuildShape::new(triangle(), 10.0).execute(&mut arr).unwrap();
        let (l0, s0) = {
            let shape = arr.shape(s1).unwrap();
            (shape.lines[0], shape.spaced_lines[0])
        };

        // The guide of the first edge becomes a boundary edge of the new shape.
        let d = arr.line(s0).unwrap().intersections[0];
        let e = arr.line(s0).unwrap().intersections[1];
        let s2 = BuildShape::new(
            vec![Vertex::Intersection(e), Vertex::Intersection(d), v(200.0, 0.0)],
            10.0,
        )
        .execute(&mut arr)
        .unwrap();

        let shape = arr.shape(s2).unwrap();
        assert_eq!(shape.lines[0], s0);
        assert_eq!(shape.spaced_lines[0], l0);
        assert_eq!(arr.line(s0).unwrap().linked_shapes, vec![s1, s2]);
        assert_eq!(arr.line(l0).unwrap().linked_shapes, vec![s1, s2]);
    }

    #[test]
    fn rejects_degenerate_input() {
        let mut arr = Arrangement::default();
        assert!(BuildShape::new(vec![v(0.0, 0.0), v(10.0, 0.0)], 10.0)
            .execute(&mut arr)
            .is_err());
        assert!(
            BuildShape::new(vec![v(0.0, 0.0), v(0.0, 0.0), v(10.0, 10.0)], 10.0)
                .execute(&mut arr)
                .is_err()
        );
        assert_eq!(arr.intersection_count(), 0);
    }
}
