pub mod constraint;
pub mod shape;
mod snap;

pub use constraint::{
    constrain_angle, constrain_distance, constrain_point_position, SnappingElements, SnappingRegion,
};
pub use shape::{BuildShape, RemoveShape, UpdateIntersections};
pub use snap::NearestSnap;
