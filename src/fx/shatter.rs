//! Shatter effect: splits a wireframe into fragments that fly apart and fade.

use super::animator::{Animation, TickStatus};
use super::fragment::{Age, Fragment, Motion};
use super::selection::{SegmentPool, SizeClass};
use crate::constants::*;
use crate::geometry::{LineSegmentSet, Vec3};
use crate::scene::{Drawable, Rgb, Scene, Transform};
use rand::Rng;
use std::f32::consts::TAU;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct ShatterConfig {
    pub fragment_count: usize,
    /// Upper bound on linear speed per tick.
    pub velocity_scale: f32,
    /// Upper bound on rotation per tick, per axis.
    pub angular_velocity_scale: f32,
    pub fade_rate: f32,
    pub color: Rgb,
    pub opacity: f32,
    pub offset: Vec3,
    pub scale: f32,
    pub motion: Motion,
    pub timeout: Duration,
}

impl Default for ShatterConfig {
    fn default() -> Self {
        Self {
            fragment_count: DEFAULT_FRAGMENT_COUNT,
            velocity_scale: DEFAULT_VELOCITY_SCALE,
            angular_velocity_scale: DEFAULT_ANGULAR_VELOCITY_SCALE,
            fade_rate: DEFAULT_FADE_RATE,
            color: Rgb(120, 255, 160),
            opacity: 1.0,
            offset: Vec3::ZERO,
            scale: 1.0,
            motion: Motion::Drift,
            timeout: Duration::from_millis(DEFAULT_SHATTER_TIMEOUT_MS),
        }
    }
}

impl ShatterConfig {
    /// Slow drifting shards for the decorative sphere.
    pub fn sphere() -> Self {
        Self {
            fragment_count: 16,
            ..Self::default()
        }
    }

    /// Window panes that burst outward and fall.
    pub fn window() -> Self {
        Self {
            fragment_count: 10,
            velocity_scale: 0.06,
            fade_rate: 0.985,
            color: Rgb(200, 200, 255),
            motion: Motion::Burst {
                gravity: WINDOW_GRAVITY,
            },
            timeout: Duration::from_millis(3000),
            ..Self::default()
        }
    }
}

/// One running shatter. Owns its fragments' drawables until they fade,
/// the timeout passes, or [`ShatterEffect::cleanup`] is called.
#[derive(Debug)]
pub struct ShatterEffect {
    fragments: Vec<Fragment>,
    created: usize,
    motion: Motion,
    timeout: Duration,
    elapsed: Duration,
    finished: bool,
}

/// Splits `source` into fragments, adds one drawable per fragment to `scene`,
/// and returns the effect that animates them. An empty source yields an
/// effect that is already finished.
pub fn shatter(
    source: &LineSegmentSet,
    config: &ShatterConfig,
    scene: &mut Scene,
    rng: &mut impl Rng,
) -> ShatterEffect {
    let mut pool = SegmentPool::new(source);
    // Every fragment takes at least one segment
    let mut fragments = Vec::with_capacity(config.fragment_count.min(source.len()));

    for _ in 0..config.fragment_count {
        if pool.remaining() == 0 {
            break;
        }
        let size_class = SizeClass::random(rng);
        let indices = pool.take(size_class, rng);
        if indices.is_empty() {
            continue;
        }

        let segments = indices.iter().map(|&i| source.segments()[i]).collect();
        let transform = Transform {
            position: config.offset,
            rotation: Vec3::ZERO,
            scale: config.scale,
        };
        let mut drawable = Drawable::new(segments, config.color);
        drawable.transform = transform;
        drawable.opacity = config.opacity;
        let id = scene.add(drawable);

        fragments.push(Fragment {
            drawable: id,
            size_class,
            source_indices: indices,
            transform,
            velocity: random_velocity(config.velocity_scale, rng),
            angular_velocity: random_spin(config.angular_velocity_scale, rng),
            opacity: config.opacity,
            fade_rate: config.fade_rate,
            age: Age::default(),
        });
    }

    debug!(
        requested = config.fragment_count,
        created = fragments.len(),
        source_segments = source.len(),
        "shatter started"
    );

    let created = fragments.len();
    ShatterEffect {
        finished: fragments.is_empty(),
        fragments,
        created,
        motion: config.motion,
        timeout: config.timeout,
        elapsed: Duration::ZERO,
    }
}

/// Isotropic direction with a speed in `[0, scale]`.
fn random_velocity(scale: f32, rng: &mut impl Rng) -> Vec3 {
    let scale = scale.max(0.0);
    let z: f32 = rng.gen_range(-1.0..=1.0);
    let theta: f32 = rng.gen_range(0.0..TAU);
    let r = (1.0 - z * z).max(0.0).sqrt();
    let speed: f32 = rng.gen_range(0.0..=scale);
    Vec3::new(r * theta.cos(), r * theta.sin(), z) * speed
}

fn random_spin(scale: f32, rng: &mut impl Rng) -> Vec3 {
    let scale = scale.max(0.0);
    Vec3::new(
        rng.gen_range(-scale..=scale),
        rng.gen_range(-scale..=scale),
        rng.gen_range(-scale..=scale),
    )
}

impl ShatterEffect {
    /// Fragments still on screen.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn live_count(&self) -> usize {
        self.fragments.len()
    }

    /// Fragments produced when the effect started.
    pub fn created_count(&self) -> usize {
        self.created
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn release_all(&mut self, scene: &mut Scene) {
        for fragment in self.fragments.drain(..) {
            scene.remove(fragment.drawable);
        }
        self.finished = true;
    }
}

impl Animation for ShatterEffect {
    fn advance(&mut self, scene: &mut Scene, elapsed: Duration) -> TickStatus {
        if self.finished {
            return TickStatus::Finished;
        }

        let motion = self.motion;
        self.fragments.retain_mut(|fragment| {
            if fragment.step(motion, elapsed) {
                fragment.sync(scene);
                true
            } else {
                scene.remove(fragment.drawable);
                false
            }
        });

        self.elapsed += elapsed;
        if self.fragments.is_empty() || self.elapsed >= self.timeout {
            debug!(
                remaining = self.fragments.len(),
                elapsed_ms = self.elapsed.as_millis() as u64,
                "shatter finished"
            );
            self.release_all(scene);
            return TickStatus::Finished;
        }
        TickStatus::Running
    }

    fn cleanup(&mut self, scene: &mut Scene) {
        self.release_all(scene);
    }
}
