//! Perspective projection of world-space segments onto the canvas plane.

use crate::geometry::{LineSegment, Vec3};

/// Pinhole camera on the +Z axis looking at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub distance: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self { distance: 5.0 }
    }
}

impl Camera {
    /// Returns None for points at or behind the camera.
    pub fn project(&self, point: Vec3) -> Option<(f64, f64)> {
        let depth = self.distance - point.z;
        if depth <= 0.05 {
            return None;
        }
        let k = self.distance / depth;
        Some(((point.x * k) as f64, (point.y * k) as f64))
    }

    pub fn project_segment(&self, segment: &LineSegment) -> Option<((f64, f64), (f64, f64))> {
        Some((self.project(segment.start)?, self.project(segment.end)?))
    }
}

/// Canvas x/y bounds that keep world units square on a terminal, whose
/// cells are roughly twice as tall as they are wide.
pub fn canvas_bounds(width: u16, height: u16, half_height: f64) -> ([f64; 2], [f64; 2]) {
    let aspect = if height == 0 {
        1.0
    } else {
        width as f64 / (height as f64 * 2.0)
    };
    let half_width = half_height * aspect;
    ([-half_width, half_width], [-half_height, half_height])
}
