mod line_base;
mod segment;

pub use line_base::{LineBase, LineEquation};
pub use segment::Segment;
