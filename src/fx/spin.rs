//! Idle rotation of an intact wireframe.

use super::animator::{Animation, TickStatus};
use crate::geometry::Vec3;
use crate::scene::{DrawableId, Scene};
use std::time::Duration;

/// Turns one drawable by a fixed angle per tick. Finishes on its own once the
/// drawable leaves the scene (for example when it gets shattered).
#[derive(Debug, Clone)]
pub struct Spin {
    pub drawable: DrawableId,
    pub angular_velocity: Vec3,
}

impl Spin {
    pub fn new(drawable: DrawableId, angular_velocity: Vec3) -> Self {
        Self {
            drawable,
            angular_velocity,
        }
    }
}

impl Animation for Spin {
    fn advance(&mut self, scene: &mut Scene, _elapsed: Duration) -> TickStatus {
        match scene.get_mut(self.drawable) {
            Some(drawable) => {
                drawable.transform.rotation += self.angular_velocity;
                TickStatus::Running
            }
            None => TickStatus::Finished,
        }
    }

    // The spun drawable belongs to whoever added it.
    fn cleanup(&mut self, _scene: &mut Scene) {}
}
