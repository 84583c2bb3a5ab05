//! Geometry primitives: coordinates, bound points, extents and ring patterns

pub mod transform;
pub mod types;

pub use transform::{full_circle_separation, RingPattern};
pub use types::{BoundPoint, Coordinate, Extent};
