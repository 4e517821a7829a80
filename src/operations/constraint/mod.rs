mod point;
mod region;
mod steps;

pub use point::{constrain_angle, constrain_distance, constrain_point_position};
pub use region::{intersect_line_with_donut, DonutClip};
pub use steps::step_segments;

use tracing::trace;

use crate::config::DrawingParameters;
use crate::error::Result;
use crate::geometry::Segment;
use crate::math::angle::direction_angle;
use crate::math::Point;
use crate::topology::{Arrangement, LineId, Vertex};

/// Snap targets legal for the next vertex of the shape in progress.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnappingElements {
    pub points: Vec<Vertex>,
    pub segments: Vec<Segment>,
}

/// The last vertex of the shape in progress and the one before it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Anchor {
    pub vertex: Vertex,
    pub last: Point,
    pub previous: Option<Point>,
    /// Direction from `last` to `previous`, when a dead zone applies.
    pub last_angle: Option<f64>,
}

/// Restricts a pool of snap points and lines to the region allowed for the
/// next vertex of the shape in progress.
pub struct SnappingRegion {
    points: Vec<Vertex>,
    lines: Vec<LineId>,
    current_shape: Vec<Vertex>,
}

impl SnappingRegion {
    /// Creates a new `SnappingRegion` query.
    #[must_use]
    pub fn new(points: Vec<Vertex>, lines: Vec<LineId>, current_shape: Vec<Vertex>) -> Self {
        Self {
            points,
            lines,
            current_shape,
        }
    }

    /// Executes the query.
    ///
    /// With an empty shape in progress every point is returned, and every line
    /// as a segment across the canvas. Otherwise `angle_step` selects between
    /// the continuous donut region and the stepped spokes.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` fails validation, or if a vertex or line
    /// refers to an unknown entity.
    pub fn execute(&self, arr: &Arrangement, params: &DrawingParameters) -> Result<SnappingElements> {
        params.validate()?;
        let Some(anchor) = self.anchor(arr, params)? else {
            let mut segments = Vec::with_capacity(self.lines.len());
            for &line in &self.lines {
                if let [a, b, ..] = arr.line(line)?.bounds.as_slice() {
                    segments.push(Segment::on_line(*a, *b, Some(line)));
                }
            }
            return Ok(SnappingElements {
                points: self.points.clone(),
                segments,
            });
        };

        if params.angle_step == 0.0 {
            trace!(points = self.points.len(), lines = self.lines.len(), "continuous region query");
            region::allowed_region(arr, &self.points, &self.lines, &anchor, params)
        } else {
            trace!(points = self.points.len(), lines = self.lines.len(), "stepped region query");
            steps::angle_steps(arr, &self.points, &self.lines, &anchor, params)
        }
    }

    fn anchor(&self, arr: &Arrangement, params: &DrawingParameters) -> Result<Option<Anchor>> {
        let Some((vertex, rest)) = self.current_shape.split_last() else {
            return Ok(None);
        };
        let last = arr.vertex_position(vertex)?;
        let previous = match rest.last() {
            Some(v) => Some(arr.vertex_position(v)?),
            None => None,
        };
        let last_angle = previous
            .filter(|_| params.min_angle > 0.0)
            .map(|p| direction_angle(&last, &p));
        Ok(Some(Anchor {
            vertex: *vertex,
            last,
            previous,
            last_angle,
        }))
    }
}
