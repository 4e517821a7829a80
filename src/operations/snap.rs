use crate::error::Result;
use crate::geometry::LineBase;
use crate::math::{squared_distance, Point};
use crate::operations::constraint::SnappingElements;
use crate::topology::{Arrangement, Vertex};

/// Picks the snap target nearest to a cursor, within a distance threshold.
///
/// Points win over segments: a segment is only considered when no point lies
/// within the threshold.
pub struct NearestSnap {
    cursor: Point,
    threshold: f64,
}

impl NearestSnap {
    /// Creates a new `NearestSnap` query.
    #[must_use]
    pub fn new(cursor: Point, threshold: f64) -> Self {
        Self { cursor, threshold }
    }

    /// Executes the query against the result of a region query.
    ///
    /// A hit on a segment derived from a known line is returned as a candidate
    /// on that line, so it can be promoted later.
    ///
    /// # Errors
    ///
    /// Returns an error if a point refers to an unknown intersection.
    pub fn execute(&self, arr: &Arrangement, elements: &SnappingElements) -> Result<Option<Vertex>> {
        let max2 = self.threshold * self.threshold;

        let mut best: Option<(f64, Vertex)> = None;
        for v in &elements.points {
            let d2 = squared_distance(&self.cursor, &arr.vertex_position(v)?);
            if d2 <= max2 && best.is_none_or(|(b, _)| d2 < b) {
                best = Some((d2, *v));
            }
        }
        if best.is_some() {
            return Ok(best.map(|(_, v)| v));
        }

        for s in &elements.segments {
            let position = s.projection(&self.cursor);
            let d2 = squared_distance(&self.cursor, &position);
            if d2 <= max2 && best.is_none_or(|(b, _)| d2 < b) {
                let v = match s.associated_line() {
                    Some(line) => Vertex::OnLine { position, line },
                    None => Vertex::Point(position),
                };
                best = Some((d2, v));
            }
        }
        Ok(best.map(|(_, v)| v))
    }
}
