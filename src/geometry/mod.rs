//! Geometry primitives and their wireframe decompositions.

pub mod vec3;
pub mod wireframe;

pub use vec3::Vec3;
pub use wireframe::{LineSegment, LineSegmentSet};
