use crate::math::Point;

use super::line::LineId;

slotmap::new_key_type! {
    /// Unique identifier for an intersection in the arrangement.
    pub struct IntersectionId;
}

/// A point registered in the arrangement, shared by every line through it.
#[derive(Debug, Clone)]
pub struct IntersectionData {
    /// The position of the intersection.
    pub position: Point,
    /// Lines passing through this intersection (unique, unordered).
    pub crossing_lines: Vec<LineId>,
}

impl IntersectionData {
    /// Creates an intersection at `position`, crossed by no line yet.
    #[must_use]
    pub fn new(position: Point) -> Self {
        Self {
            position,
            crossing_lines: Vec::new(),
        }
    }
}

/// A point as handed between the engine and its callers.
///
/// Only the `Intersection` variant is part of the persistent graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Vertex {
    /// A plain coordinate.
    Point(Point),
    /// A registered intersection.
    Intersection(IntersectionId),
    /// A position known to lie on `line`, not registered yet.
    OnLine { position: Point, line: LineId },
}

impl From<Point> for Vertex {
    fn from(p: Point) -> Self {
        Self::Point(p)
    }
}

impl From<IntersectionId> for Vertex {
    fn from(id: IntersectionId) -> Self {
        Self::Intersection(id)
    }
}

impl Vertex {
    /// Returns the intersection handle, for the `Intersection` variant.
    #[must_use]
    pub fn intersection(&self) -> Option<IntersectionId> {
        match self {
            Self::Intersection(id) => Some(*id),
            _ => None,
        }
    }
}
