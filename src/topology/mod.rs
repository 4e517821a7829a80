pub mod line;
mod links;
pub mod shape;
pub mod vertex;

pub use line::{LineData, LineId};
pub use shape::{ShapeData, ShapeId};
pub use vertex::{IntersectionData, IntersectionId, Vertex};

use crate::config::DrawingSize;
use crate::error::TopologyError;
use crate::math::Point;
use slotmap::SlotMap;

/// Central arena owning the persistent planar arrangement of one drawing
/// session.
///
/// Intersections, lines and shapes reference each other via typed IDs
/// (generational indices), so the bidirectional point/line graph needs no
/// shared ownership.
#[derive(Debug, Default)]
pub struct Arrangement {
    drawing_size: DrawingSize,
    intersections: SlotMap<IntersectionId, IntersectionData>,
    lines: SlotMap<LineId, LineData>,
    shapes: SlotMap<ShapeId, ShapeData>,
}

impl Arrangement {
    /// Creates an empty arrangement for a canvas of `drawing_size`.
    #[must_use]
    pub fn new(drawing_size: DrawingSize) -> Self {
        Self {
            drawing_size,
            ..Self::default()
        }
    }

    /// The canvas size line bounds are computed against.
    #[must_use]
    pub fn drawing_size(&self) -> DrawingSize {
        self.drawing_size
    }

    /// Changes the canvas size and recomputes every line's `bounds`.
    pub fn set_drawing_size(&mut self, drawing_size: DrawingSize) {
        self.drawing_size = drawing_size;
        for line in self.lines.values_mut() {
            line.update_line_bounds(drawing_size.x, drawing_size.y);
        }
    }

    // --- Intersection operations ---

    /// Inserts an intersection at `position`, crossed by no line yet.
    pub fn add_intersection(&mut self, position: Point) -> IntersectionId {
        self.intersections.insert(IntersectionData::new(position))
    }

    /// Returns a reference to the intersection data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the arrangement.
    pub fn intersection(&self, id: IntersectionId) -> Result<&IntersectionData, TopologyError> {
        self.intersections
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("intersection".into()))
    }

    /// Returns a mutable reference to the intersection data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the arrangement.
    pub fn intersection_mut(
        &mut self,
        id: IntersectionId,
    ) -> Result<&mut IntersectionData, TopologyError> {
        self.intersections
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("intersection".into()))
    }

    /// Position of a registered intersection.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the arrangement.
    pub fn position(&self, id: IntersectionId) -> Result<Point, TopologyError> {
        Ok(self.intersection(id)?.position)
    }

    /// Drops an intersection from the arena. Adjacency must be detached first.
    pub(crate) fn remove_intersection(&mut self, id: IntersectionId) -> Option<IntersectionData> {
        self.intersections.remove(id)
    }

    /// Iterates over every live intersection.
    pub fn intersections(&self) -> impl Iterator<Item = (IntersectionId, &IntersectionData)> {
        self.intersections.iter()
    }

    #[must_use]
    pub fn intersection_count(&self) -> usize {
        self.intersections.len()
    }

    // --- Line operations ---

    /// Creates a line through two registered intersections and registers both
    /// on it.
    ///
    /// # Errors
    ///
    /// Returns an error if either intersection is not found in the arrangement.
    pub fn add_line(&mut self, a: IntersectionId, b: IntersectionId) -> Result<LineId, TopologyError> {
        let pa = self.position(a)?;
        let pb = self.position(b)?;
        let size = self.drawing_size;
        let id = self
            .lines
            .insert(LineData::new((a, pa), (b, pb), size.x, size.y));
        self.register(id, a)?;
        self.register(id, b)?;
        Ok(id)
    }

    /// Returns a reference to the line data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the arrangement.
    pub fn line(&self, id: LineId) -> Result<&LineData, TopologyError> {
        self.lines
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("line".into()))
    }

    /// Returns a mutable reference to the line data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the arrangement.
    pub fn line_mut(&mut self, id: LineId) -> Result<&mut LineData, TopologyError> {
        self.lines
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("line".into()))
    }

    /// Drops a line from the arena. Adjacency must be detached first.
    pub(crate) fn remove_line(&mut self, id: LineId) -> Option<LineData> {
        self.lines.remove(id)
    }

    /// Iterates over every live line.
    pub fn lines(&self) -> impl Iterator<Item = (LineId, &LineData)> {
        self.lines.iter()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    // --- Shape operations ---

    /// Inserts a shape and returns its ID.
    pub fn add_shape(&mut self, data: ShapeData) -> ShapeId {
        self.shapes.insert(data)
    }

    /// Returns a reference to the shape data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the arrangement.
    pub fn shape(&self, id: ShapeId) -> Result<&ShapeData, TopologyError> {
        self.shapes
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("shape".into()))
    }

    /// Drops a shape from the arena. Line ownership must be released first.
    pub(crate) fn remove_shape(&mut self, id: ShapeId) -> Option<ShapeData> {
        self.shapes.remove(id)
    }

    /// Iterates over every live shape, in no particular order.
    pub fn shapes(&self) -> impl Iterator<Item = (ShapeId, &ShapeData)> {
        self.shapes.iter()
    }

    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }
}
