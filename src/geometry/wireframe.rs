//! Wireframe decompositions of the decorative primitives.
//!
//! Both primitives are triangulated first and then reduced to their unique
//! edges, so the segment layout matches what a scene-graph renderer draws for
//! a wireframe of the same mesh (including the triangle diagonals).

use super::vec3::Vec3;
use std::collections::HashSet;
use std::f32::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Vec3,
    pub end: Vec3,
}

impl LineSegment {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    pub fn midpoint(&self) -> Vec3 {
        (self.start + self.end) * 0.5
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Ordered, immutable list of segments flattened out of a mesh.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineSegmentSet {
    segments: Vec<LineSegment>,
}

impl LineSegmentSet {
    pub fn new(segments: Vec<LineSegment>) -> Self {
        Self { segments }
    }

    /// UV sphere wireframe. Zero segment counts produce an empty set; other
    /// counts are raised to the renderer's minimum of 3 around and 2 down.
    pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        if width_segments == 0 || height_segments == 0 {
            return Self::default();
        }
        let ws = width_segments.max(3) as usize;
        let hs = height_segments.max(2) as usize;

        let mut vertices = Vec::with_capacity((ws + 1) * (hs + 1));
        for iy in 0..=hs {
            let v = iy as f32 / hs as f32;
            for ix in 0..=ws {
                let u = ix as f32 / ws as f32;
                vertices.push(Vec3::new(
                    -radius * (u * 2.0 * PI).cos() * (v * PI).sin(),
                    radius * (v * PI).cos(),
                    radius * (u * 2.0 * PI).sin() * (v * PI).sin(),
                ));
            }
        }

        let index = |ix: usize, iy: usize| iy * (ws + 1) + ix;
        let mut triangles = Vec::new();
        for iy in 0..hs {
            for ix in 0..ws {
                let a = index(ix + 1, iy);
                let b = index(ix, iy);
                let c = index(ix, iy + 1);
                let d = index(ix + 1, iy + 1);
                // Pole rows collapse one triangle of the quad
                if iy != 0 {
                    triangles.push([a, b, d]);
                }
                if iy != hs - 1 {
                    triangles.push([b, c, d]);
                }
            }
        }

        Self::from_triangles(&vertices, &triangles)
    }

    /// Plane wireframe in the XY plane, centered on the origin.
    pub fn rectangle(width: f32, height: f32, width_segments: u32, height_segments: u32) -> Self {
        if width_segments == 0 || height_segments == 0 {
            return Self::default();
        }
        let gx = width_segments as usize;
        let gy = height_segments as usize;
        let seg_w = width / gx as f32;
        let seg_h = height / gy as f32;

        let mut vertices = Vec::with_capacity((gx + 1) * (gy + 1));
        for iy in 0..=gy {
            let y = iy as f32 * seg_h - height / 2.0;
            for ix in 0..=gx {
                let x = ix as f32 * seg_w - width / 2.0;
                vertices.push(Vec3::new(x, -y, 0.0));
            }
        }

        let mut triangles = Vec::with_capacity(gx * gy * 2);
        for iy in 0..gy {
            for ix in 0..gx {
                let a = ix + (gx + 1) * iy;
                let b = ix + (gx + 1) * (iy + 1);
                let c = (ix + 1) + (gx + 1) * (iy + 1);
                let d = (ix + 1) + (gx + 1) * iy;
                triangles.push([a, b, d]);
                triangles.push([b, c, d]);
            }
        }

        Self::from_triangles(&vertices, &triangles)
    }

    /// Unique triangle edges in first-seen order.
    fn from_triangles(vertices: &[Vec3], triangles: &[[usize; 3]]) -> Self {
        let mut seen = HashSet::new();
        let mut segments = Vec::new();
        for tri in triangles {
            for (i, j) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let key = (i.min(j), i.max(j));
                if seen.insert(key) {
                    segments.push(LineSegment::new(vertices[i], vertices[j]));
                }
            }
        }
        Self { segments }
    }

    /// Copy of the set with every endpoint rotated by Euler angles.
    pub fn rotated(&self, rotation: Vec3) -> Self {
        let segments = self
            .segments
            .iter()
            .map(|s| LineSegment::new(s.start.rotate_euler(rotation), s.end.rotate_euler(rotation)))
            .collect();
        Self { segments }
    }

    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    pub fn get(&self, index: usize) -> Option<&LineSegment> {
        self.segments.get(index)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Largest distance from the bounding box center to any endpoint.
    pub fn bounding_radius(&self) -> f32 {
        if self.segments.is_empty() {
            return 0.0;
        }
        let mut min = Vec3::new(f32::MAX, f32::MAX, f32::MAX);
        let mut max = Vec3::new(f32::MIN, f32::MIN, f32::MIN);
        for p in self.endpoints() {
            min = Vec3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z));
            max = Vec3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z));
        }
        let center = (min + max) * 0.5;
        self.endpoints()
            .map(|p| p.distance(center))
            .fold(0.0, f32::max)
    }

    fn endpoints(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.segments.iter().flat_map(|s| [s.start, s.end])
    }
}
