//! Host-facing tick scheduler.
//!
//! Effects never hook into a render callback themselves. Whatever loop the
//! host has (terminal frame loop, test harness, headless timer) calls
//! [`Animator::advance`] once per frame.

use crate::scene::Scene;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    Running,
    Finished,
}

pub trait Animation {
    /// Advances one tick. `elapsed` is the wall-clock time since the last tick.
    fn advance(&mut self, scene: &mut Scene, elapsed: Duration) -> TickStatus;

    /// Releases everything the animation added to the scene, immediately.
    fn cleanup(&mut self, scene: &mut Scene);
}

#[derive(Default)]
pub struct Animator {
    animations: Vec<Box<dyn Animation>>,
}

impl std::fmt::Debug for Animator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Animator")
            .field("active", &self.animations.len())
            .finish()
    }
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, animation: impl Animation + 'static) {
        self.animations.push(Box::new(animation));
    }

    /// Ticks every animation and drops the ones that finished.
    pub fn advance(&mut self, scene: &mut Scene, elapsed: Duration) {
        self.animations
            .retain_mut(|a| a.advance(scene, elapsed) == TickStatus::Running);
    }

    /// Cancels all animations, bypassing any fade-out.
    pub fn cleanup(&mut self, scene: &mut Scene) {
        for mut animation in self.animations.drain(..) {
            animation.cleanup(scene);
        }
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_idle(&self) -> bool {
        self.animations.is_empty()
    }
}
