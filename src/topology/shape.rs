use super::line::LineId;
use super::vertex::IntersectionId;

slotmap::new_key_type! {
    /// Unique identifier for a shape in the arrangement.
    pub struct ShapeId;
}

/// Data associated with a closed polygonal shape.
#[derive(Debug, Clone)]
pub struct ShapeData {
    /// Boundary vertices, in the order they were given.
    pub points: Vec<IntersectionId>,
    /// Boundary edges, one per consecutive pair of the clockwise vertex ring.
    pub lines: Vec<LineId>,
    /// Offset edges; `spaced_lines[i]` is parallel to `lines[i]`.
    pub spaced_lines: Vec<LineId>,
}

impl ShapeData {
    /// Boundary and offset lines, boundary first. A line may appear twice when
    /// it serves as both.
    pub fn all_lines(&self) -> impl Iterator<Item = LineId> + '_ {
        self.lines.iter().chain(self.spaced_lines.iter()).copied()
    }
}
