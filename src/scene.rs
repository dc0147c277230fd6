//! Render scene: the shared container of drawable line sets.
//!
//! Effects add drawables and get back a [`DrawableId`]; only the owner of an id
//! removes it again. The host renders whatever is in the scene each frame.

use crate::geometry::{LineSegment, Vec3};
use std::collections::BTreeMap;

/// Plain 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Color scaled toward black by `opacity`, for hosts without alpha blending.
    pub fn faded(self, opacity: f32) -> Rgb {
        let k = opacity.clamp(0.0, 1.0);
        let scale = |c: u8| (c as f32 * k).round() as u8;
        Rgb(scale(self.0), scale(self.1), scale(self.2))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians, XYZ order.
    pub rotation: Vec3,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

impl Transform {
    pub fn apply(&self, point: Vec3) -> Vec3 {
        (point * self.scale).rotate_euler(self.rotation) + self.position
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    pub segments: Vec<LineSegment>,
    pub transform: Transform,
    pub color: Rgb,
    pub opacity: f32,
}

impl Drawable {
    pub fn new(segments: Vec<LineSegment>, color: Rgb) -> Self {
        Self {
            segments,
            transform: Transform::default(),
            color,
            opacity: 1.0,
        }
    }

    /// Segments with the transform applied.
    pub fn world_segments(&self) -> impl Iterator<Item = LineSegment> + '_ {
        self.segments.iter().map(|s| {
            LineSegment::new(self.transform.apply(s.start), self.transform.apply(s.end))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DrawableId(u64);

#[derive(Debug, Default)]
pub struct Scene {
    next_id: u64,
    drawables: BTreeMap<DrawableId, Drawable>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, drawable: Drawable) -> DrawableId {
        let id = DrawableId(self.next_id);
        self.next_id += 1;
        self.drawables.insert(id, drawable);
        id
    }

    pub fn remove(&mut self, id: DrawableId) -> Option<Drawable> {
        self.drawables.remove(&id)
    }

    pub fn get(&self, id: DrawableId) -> Option<&Drawable> {
        self.drawables.get(&id)
    }

    pub fn get_mut(&mut self, id: DrawableId) -> Option<&mut Drawable> {
        self.drawables.get_mut(&id)
    }

    pub fn contains(&self, id: DrawableId) -> bool {
        self.drawables.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    /// Drawables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (DrawableId, &Drawable)> {
        self.drawables.iter().map(|(id, d)| (*id, d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_segment() -> Vec<LineSegment> {
        vec![LineSegment::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0))]
    }

    #[test]
    fn test_add_and_remove() {
        let mut scene = Scene::new();
        let a = scene.add(Drawable::new(unit_segment(), Rgb(255, 255, 255)));
        let b = scene.add(Drawable::new(unit_segment(), Rgb(0, 255, 0)));
        assert_ne!(a, b);
        assert_eq!(scene.len(), 2);

        assert!(scene.remove(a).is_some());
        assert!(scene.remove(a).is_none());
        assert!(!scene.contains(a));
        assert!(scene.contains(b));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut scene = Scene::new();
        let a = scene.add(Drawable::new(unit_segment(), Rgb(1, 1, 1)));
        scene.remove(a);
        let b = scene.add(Drawable::new(unit_segment(), Rgb(1, 1, 1)));
        assert_ne!(a, b);
    }

    #[test]
    fn test_world_segments_apply_transform() {
        let mut d = Drawable::new(unit_segment(), Rgb(1, 1, 1));
        d.transform.position = Vec3::new(0.0, 5.0, 0.0);
        d.transform.scale = 2.0;
        let s: Vec<_> = d.world_segments().collect();
        assert_eq!(s[0].start, Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(s[0].end, Vec3::new(2.0, 5.0, 0.0));
    }

    #[test]
    fn test_faded_color() {
        assert_eq!(Rgb(200, 100, 50).faded(0.5), Rgb(100, 50, 25));
        assert_eq!(Rgb(200, 100, 50).faded(2.0), Rgb(200, 100, 50));
        assert_eq!(Rgb(200, 100, 50).faded(-1.0), Rgb(0, 0, 0));
    }
}
