//! A single shatter fragment and its per-tick motion.

use super::selection::SizeClass;
use crate::constants::FADE_THRESHOLD;
use crate::geometry::Vec3;
use crate::scene::{DrawableId, Scene, Transform};
use std::time::Duration;

/// Whether fragments fall under gravity or coast in a straight line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Drift,
    /// Subtracts `gravity` from `velocity.y` every tick.
    Burst { gravity: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Age {
    pub ticks: u32,
    pub elapsed: Duration,
}

/// Motion state for one drawable owned by a shatter effect.
#[derive(Debug, Clone)]
pub struct Fragment {
    pub drawable: DrawableId,
    pub size_class: SizeClass,
    /// Indices into the source segment set this fragment copied.
    pub source_indices: Vec<usize>,
    pub transform: Transform,
    pub velocity: Vec3,
    pub angular_velocity: Vec3,
    pub opacity: f32,
    pub fade_rate: f32,
    pub age: Age,
}

impl Fragment {
    pub fn segment_count(&self) -> usize {
        self.source_indices.len()
    }

    pub fn is_faded(&self) -> bool {
        self.opacity < FADE_THRESHOLD
    }

    /// Advances one tick. Returns false once the fragment has faded out.
    pub fn step(&mut self, motion: Motion, elapsed: Duration) -> bool {
        if let Motion::Burst { gravity } = motion {
            self.velocity.y -= gravity;
        }
        self.transform.position += self.velocity;
        self.transform.rotation += self.angular_velocity;
        self.opacity *= self.fade_rate;
        self.age.ticks += 1;
        self.age.elapsed += elapsed;
        !self.is_faded()
    }

    /// Copies transform and opacity onto the drawable in the scene.
    pub fn sync(&self, scene: &mut Scene) {
        if let Some(drawable) = scene.get_mut(self.drawable) {
            drawable.transform = self.transform;
            drawable.opacity = self.opacity;
        }
    }
}

/// Ticks until `opacity * fade_rate^n` drops below the fade threshold.
/// None when the fragment never fades (`fade_rate >= 1`).
pub fn ticks_to_fade(opacity: f32, fade_rate: f32) -> Option<u32> {
    if opacity < FADE_THRESHOLD {
        return Some(0);
    }
    if !(0.0..1.0).contains(&fade_rate) {
        return None;
    }
    let mut o = opacity;
    let mut ticks = 0;
    while o >= FADE_THRESHOLD {
        o *= fade_rate;
        ticks += 1;
    }
    Some(ticks)
}
