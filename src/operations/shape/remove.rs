use tracing::debug;

use crate::error::Result;
use crate::math::sequence::{distinct, push_unique, remove_first};
use crate::topology::{Arrangement, IntersectionId, LineId, ShapeData, ShapeId};

/// Removes a shape and every part of the arrangement only it was using.
///
/// Lines shared with another shape survive and just forget this shape.
/// Intersections on the dropped lines survive while they still matter to the
/// remaining graph: a reference point of a surviving line, a vertex of a live
/// shape, or a crossing of at least two surviving lines.
pub struct RemoveShape {
    shape: ShapeId,
}

impl RemoveShape {
    /// Creates a new `RemoveShape` operation.
    #[must_use]
    pub fn new(shape: ShapeId) -> Self {
        Self { shape }
    }

    /// Executes the operation, returning the removed shape's data.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape or one of its lines is not found.
    pub fn execute(&self, arr: &mut Arrangement) -> Result<ShapeData> {
        let id = self.shape;
        let own = distinct(&arr.shape(id)?.all_lines().collect::<Vec<_>>());

        let mut exclusive: Vec<LineId> = Vec::new();
        for line in own {
            let data = arr.line_mut(line)?;
            if data.linked_shapes == [id] {
                exclusive.push(line);
            } else {
                remove_first(&mut data.linked_shapes, &id);
            }
        }

        let mut orphans: Vec<IntersectionId> = Vec::new();
        for &line in &exclusive {
            let data = arr.line(line)?;
            let parallels = data.parallels.clone();
            for &i in &data.intersections {
                push_unique(&mut orphans, i);
            }
            for p in parallels {
                if let Ok(twin) = arr.line_mut(p) {
                    remove_first(&mut twin.parallels, &line);
                }
            }
        }

        let kept_vertices: Vec<IntersectionId> = arr
            .shapes()
            .filter(|(s, _)| *s != id)
            .flat_map(|(_, shape)| shape.points.iter().copied())
            .collect();

        let mut freed = 0;
        for i in orphans {
            let crossing = &mut arr.intersection_mut(i)?.crossing_lines;
            crossing.retain(|l| !exclusive.contains(l));
            let remaining = crossing.clone();

            let is_reference = remaining
                .iter()
                .any(|&l| arr.line(l).is_ok_and(|data| data.endpoints.contains(&i)));
            if remaining.len() >= 2 || is_reference || kept_vertices.contains(&i) {
                continue;
            }

            for l in remaining {
                remove_first(&mut arr.line_mut(l)?.intersections, &i);
            }
            arr.remove_intersection(i);
            freed += 1;
        }

        for &line in &exclusive {
            arr.remove_line(line);
        }
        debug!(shape = ?id, lines = exclusive.len(), intersections = freed, "removed shape");

        let data = arr.shape(id)?.clone();
        arr.remove_shape(id);
        Ok(data)
    }
}
