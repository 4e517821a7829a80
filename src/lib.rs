pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod topology;

pub use config::{DrawingParameters, DrawingSize};
pub use error::{Result, SnapguideError};
