//! The retro desktop: a spinning wireframe sphere next to a wireframe window,
//! both of which can be shattered.

use super::projection::{canvas_bounds, Camera};
use crate::constants::*;
use crate::fx::{shatter, Animation, Animator, ShatterConfig, Spin};
use crate::geometry::{LineSegmentSet, Vec3};
use crate::scene::{Drawable, DrawableId, Rgb, Scene};
use rand::Rng;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    widgets::canvas::{Canvas, Line as CanvasLine},
    widgets::{Block, Borders},
    Frame,
};
use std::time::Duration;

const SPHERE_POSITION: Vec3 = Vec3::new(-1.2, 0.0, 0.0);
const WINDOW_POSITION: Vec3 = Vec3::new(1.4, 0.1, 0.0);
const SPHERE_SPIN: Vec3 = Vec3::new(0.003, 0.012, 0.0);
const SPHERE_COLOR: Rgb = Rgb(120, 255, 160);
const WINDOW_COLOR: Rgb = Rgb(200, 200, 255);
const VIEW_HALF_HEIGHT: f64 = 1.6;

/// What a shatter request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShatterOutcome {
    /// Nothing intact to shatter right now.
    Ignored,
    Shattered,
    /// Shattered while another shatter was still running.
    ShatteredDuringAnother,
}

pub struct DesktopScene {
    scene: Scene,
    effects: Animator,
    camera: Camera,
    sphere_geometry: LineSegmentSet,
    window_geometry: LineSegmentSet,
    sphere: Option<DrawableId>,
    sphere_spin: Option<Spin>,
    window: Option<DrawableId>,
    shatter_count: u32,
    spin_time: Duration,
}

impl Default for DesktopScene {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopScene {
    pub fn new() -> Self {
        let mut desktop = Self {
            scene: Scene::new(),
            effects: Animator::new(),
            camera: Camera::default(),
            sphere_geometry: LineSegmentSet::sphere(SPHERE_RADIUS, SPHERE_SEGMENTS, SPHERE_SEGMENTS),
            window_geometry: LineSegmentSet::rectangle(
                WINDOW_WIDTH,
                WINDOW_HEIGHT,
                WINDOW_SEGMENTS_X,
                WINDOW_SEGMENTS_Y,
            ),
            sphere: None,
            sphere_spin: None,
            window: None,
            shatter_count: 0,
            spin_time: Duration::ZERO,
        };
        desktop.spawn_sphere();
        desktop.spawn_window();
        desktop
    }

    fn spawn_sphere(&mut self) {
        let mut drawable = Drawable::new(self.sphere_geometry.segments().to_vec(), SPHERE_COLOR);
        drawable.transform.position = SPHERE_POSITION;
        let id = self.scene.add(drawable);
        self.sphere = Some(id);
        self.sphere_spin = Some(Spin::new(id, SPHERE_SPIN));
    }

    fn spawn_window(&mut self) {
        let mut drawable = Drawable::new(self.window_geometry.segments().to_vec(), WINDOW_COLOR);
        drawable.transform.position = WINDOW_POSITION;
        drawable.transform.rotation = Vec3::new(0.0, -0.35, 0.0);
        self.window = Some(self.scene.add(drawable));
    }

    pub fn shatter_sphere(&mut self, rng: &mut impl Rng) -> ShatterOutcome {
        let Some(id) = self.sphere.take() else {
            return ShatterOutcome::Ignored;
        };
        self.sphere_spin = None;
        self.shatter_drawable(id, ShatterConfig::sphere(), rng)
    }

    pub fn shatter_window(&mut self, rng: &mut impl Rng) -> ShatterOutcome {
        let Some(id) = self.window.take() else {
            return ShatterOutcome::Ignored;
        };
        self.shatter_drawable(id, ShatterConfig::window(), rng)
    }

    /// Swaps an intact drawable for fragments that start where it was.
    fn shatter_drawable(
        &mut self,
        id: DrawableId,
        config: ShatterConfig,
        rng: &mut impl Rng,
    ) -> ShatterOutcome {
        let Some(intact) = self.scene.remove(id) else {
            return ShatterOutcome::Ignored;
        };
        let busy = !self.effects.is_idle();

        // Bake the current pose in so fragments start exactly where the lines were
        let source = LineSegmentSet::new(intact.segments).rotated(intact.transform.rotation);
        let config = ShatterConfig {
            offset: intact.transform.position,
            scale: intact.transform.scale,
            color: intact.color,
            ..config
        };
        let effect = shatter(&source, &config, &mut self.scene, rng);
        self.effects.push(effect);
        self.shatter_count += 1;

        if busy {
            ShatterOutcome::ShatteredDuringAnother
        } else {
            ShatterOutcome::Shattered
        }
    }

    /// Advances spin and shatter effects; respawns shattered objects once
    /// every effect has finished.
    pub fn tick(&mut self, elapsed: Duration) {
        if let Some(spin) = self.sphere_spin.as_mut() {
            spin.advance(&mut self.scene, elapsed);
            self.spin_time += elapsed;
        }
        self.effects.advance(&mut self.scene, elapsed);

        if self.effects.is_idle() {
            if self.sphere.is_none() {
                self.spawn_sphere();
            }
            if self.window.is_none() {
                self.spawn_window();
            }
        }
    }

    /// Drops running effects without waiting for them to fade.
    pub fn cleanup(&mut self) {
        self.effects.cleanup(&mut self.scene);
    }

    pub fn shatter_count(&self) -> u32 {
        self.shatter_count
    }

    /// Total time the sphere has spent spinning intact.
    pub fn spin_time(&self) -> Duration {
        self.spin_time
    }

    pub fn is_shattering(&self) -> bool {
        !self.effects.is_idle()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" ~/desktop ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green));
        let inner = block.inner(area);
        let (x_bounds, y_bounds) = canvas_bounds(inner.width, inner.height, VIEW_HALF_HEIGHT);

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                for (_, drawable) in self.scene.iter() {
                    let Rgb(r, g, b) = drawable.color.faded(drawable.opacity);
                    let color = Color::Rgb(r, g, b);
                    for segment in drawable.world_segments() {
                        if let Some(((x1, y1), (x2, y2))) = self.camera.project_segment(&segment) {
                            ctx.draw(&CanvasLine {
                                x1,
                                y1,
                                x2,
                                y2,
                                color,
                            });
                        }
                    }
                }
            });
        frame.render_widget(canvas, area);
    }
}

impl Drop for DesktopScene {
    fn drop(&mut self) {
        self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn tick() -> Duration {
        Duration::from_millis(TICK_INTERVAL_MS)
    }

    #[test]
    fn test_starts_with_sphere_and_window() {
        let desktop = DesktopScene::new();
        assert_eq!(desktop.scene().len(), 2);
        assert!(!desktop.is_shattering());
    }

    #[test]
    fn test_shatter_sphere_replaces_it_with_fragments() {
        let mut desktop = DesktopScene::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        assert_eq!(desktop.shatter_sphere(&mut rng), ShatterOutcome::Shattered);
        assert!(desktop.is_shattering());
        assert!(desktop.scene().len() > 2);
        // nothing left to shatter until it respawns
        assert_eq!(desktop.shatter_sphere(&mut rng), ShatterOutcome::Ignored);
        assert_eq!(desktop.shatter_count(), 1);
    }

    #[test]
    fn test_second_shatter_while_busy() {
        let mut desktop = DesktopScene::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        desktop.shatter_sphere(&mut rng);
        assert_eq!(
            desktop.shatter_window(&mut rng),
            ShatterOutcome::ShatteredDuringAnother
        );
    }

    #[test]
    fn test_respawn_after_timeout() {
        let mut desktop = DesktopScene::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        desktop.shatter_sphere(&mut rng);
        desktop.shatter_window(&mut rng);

        for _ in 0..(DEFAULT_SHATTER_TIMEOUT_MS / TICK_INTERVAL_MS + 2) {
            desktop.tick(tick());
        }
        assert!(!desktop.is_shattering());
        assert_eq!(desktop.scene().len(), 2);
        assert_eq!(desktop.shatter_sphere(&mut rng), ShatterOutcome::Shattered);
    }

    #[test]
    fn test_spin_time_only_counts_intact_sphere() {
        let mut desktop = DesktopScene::new();
        desktop.tick(tick());
        assert_eq!(desktop.spin_time(), tick());

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        desktop.shatter_sphere(&mut rng);
        desktop.tick(tick());
        assert_eq!(desktop.spin_time(), tick());
    }

    #[test]
    fn test_cleanup_removes_fragments() {
        let mut desktop = DesktopScene::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        desktop.shatter_sphere(&mut rng);
        desktop.cleanup();
        // only the intact window is left
        assert_eq!(desktop.scene().len(), 1);
        assert!(!desktop.is_shattering());
    }
}
