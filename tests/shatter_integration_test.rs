//! Integration tests for the fragmentation engine driven through the
//! animator, the way the desktop scene drives it.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use retrodesk::constants::{FADE_THRESHOLD, TICK_INTERVAL_MS};
use retrodesk::fx::{shatter, ticks_to_fade, Animation, Animator, Motion, ShatterConfig, TickStatus};
use retrodesk::geometry::LineSegmentSet;
use retrodesk::scene::Scene;
use std::collections::HashSet;
use std::time::Duration;

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

fn tick() -> Duration {
    Duration::from_millis(TICK_INTERVAL_MS)
}

#[test]
fn test_sphere_shatter_respects_requested_count() {
    let source = LineSegmentSet::sphere(1.0, 32, 32);
    let mut scene = Scene::new();
    let mut rng = create_test_rng();
    let config = ShatterConfig {
        fragment_count: 16,
        ..ShatterConfig::default()
    };
    let effect = shatter(&source, &config, &mut scene, &mut rng);

    assert!(effect.live_count() <= 16);
    assert!(effect.live_count() > 0);
    assert!(effect.fragments().iter().all(|f| f.segment_count() > 0));

    let used: usize = effect.fragments().iter().map(|f| f.segment_count()).sum();
    assert!(used <= source.len());
    assert_eq!(scene.len(), effect.live_count());
}

#[test]
fn test_no_segment_in_two_fragments_across_seeds() {
    let sources = [
        LineSegmentSet::sphere(1.0, 32, 32),
        LineSegmentSet::sphere(1.0, 8, 6),
        LineSegmentSet::rectangle(1.6, 1.0, 12, 8),
    ];
    for source in &sources {
        for seed in 0..20 {
            let mut scene = Scene::new();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let effect = shatter(source, &ShatterConfig::default(), &mut scene, &mut rng);

            let mut seen = HashSet::new();
            for fragment in effect.fragments() {
                for &i in &fragment.source_indices {
                    assert!(i < source.len());
                    assert!(seen.insert(i), "seed {}: segment {} reused", seed, i);
                }
            }
        }
    }
}

#[test]
fn test_fragments_fade_out_and_leave_scene() {
    let source = LineSegmentSet::sphere(1.0, 16, 12);
    let mut scene = Scene::new();
    let mut rng = create_test_rng();
    let config = ShatterConfig {
        fade_rate: 0.9,
        timeout: Duration::from_secs(3600),
        ..ShatterConfig::default()
    };
    let mut effect = shatter(&source, &config, &mut scene, &mut rng);
    let expected = ticks_to_fade(config.opacity, config.fade_rate).unwrap();

    let mut ticks = 0;
    while effect.advance(&mut scene, tick()) == TickStatus::Running {
        ticks += 1;
        for fragment in effect.fragments() {
            assert!(fragment.opacity >= FADE_THRESHOLD);
            assert_eq!(scene.get(fragment.drawable).unwrap().opacity, fragment.opacity);
        }
        assert!(ticks <= expected, "still running after {} ticks", ticks);
    }
    // The last advance removes every fragment at once
    assert_eq!(ticks + 1, expected);
    assert!(scene.is_empty());
    assert!(effect.is_finished());
    assert_eq!(effect.advance(&mut scene, tick()), TickStatus::Finished);
}

#[test]
fn test_timeout_releases_remaining_fragments() {
    let source = LineSegmentSet::sphere(1.0, 16, 12);
    let mut scene = Scene::new();
    let mut rng = create_test_rng();
    let config = ShatterConfig {
        fade_rate: 0.9999,
        timeout: Duration::from_millis(160),
        ..ShatterConfig::default()
    };
    let mut effect = shatter(&source, &config, &mut scene, &mut rng);

    let mut status = TickStatus::Running;
    for _ in 0..10 {
        status = effect.advance(&mut scene, tick());
    }
    assert_eq!(status, TickStatus::Finished);
    assert!(scene.is_empty());
}

#[test]
fn test_burst_fragments_fall() {
    let source = LineSegmentSet::rectangle(1.6, 1.0, 12, 8);
    let mut scene = Scene::new();
    let mut rng = create_test_rng();
    let config = ShatterConfig::window();
    let gravity = match config.motion {
        Motion::Burst { gravity } => gravity,
        Motion::Drift => panic!("window preset should burst"),
    };
    let mut effect = shatter(&source, &config, &mut scene, &mut rng);
    let start: Vec<f32> = effect.fragments().iter().map(|f| f.velocity.y).collect();

    effect.advance(&mut scene, tick());
    for (fragment, before) in effect.fragments().iter().zip(start) {
        assert!((fragment.velocity.y - (before - gravity)).abs() < 1e-6);
    }
}

#[test]
fn test_cleanup_removes_only_effect_drawables() {
    let source = LineSegmentSet::sphere(1.0, 16, 12);
    let mut scene = Scene::new();
    let other = scene.add(retrodesk::scene::Drawable::new(
        LineSegmentSet::rectangle(1.0, 1.0, 1, 1).segments().to_vec(),
        retrodesk::scene::Rgb(255, 255, 255),
    ));
    let mut rng = create_test_rng();
    let mut effect = shatter(&source, &ShatterConfig::default(), &mut scene, &mut rng);
    assert!(scene.len() > 1);

    effect.cleanup(&mut scene);
    assert_eq!(scene.len(), 1);
    assert!(scene.contains(other));
    assert_eq!(effect.live_count(), 0);
}

#[test]
fn test_animator_runs_overlapping_shatters() {
    let mut scene = Scene::new();
    let mut rng = create_test_rng();
    let mut animator = Animator::new();

    let sphere = LineSegmentSet::sphere(1.0, 32, 32);
    let window = LineSegmentSet::rectangle(1.6, 1.0, 12, 8);
    animator.push(shatter(&sphere, &ShatterConfig::sphere(), &mut scene, &mut rng));
    animator.push(shatter(&window, &ShatterConfig::window(), &mut scene, &mut rng));
    assert_eq!(animator.len(), 2);

    // The window preset times out first
    let window_ticks = 3000 / TICK_INTERVAL_MS as u32 + 2;
    for _ in 0..window_ticks {
        animator.advance(&mut scene, tick());
    }
    assert!(animator.len() <= 1);

    animator.cleanup(&mut scene);
    assert!(animator.is_idle());
    assert!(scene.is_empty());
}

#[test]
fn test_empty_source_is_finished_immediately() {
    let source = LineSegmentSet::sphere(1.0, 0, 0);
    let mut scene = Scene::new();
    let mut rng = create_test_rng();
    let mut effect = shatter(&source, &ShatterConfig::default(), &mut scene, &mut rng);

    assert!(effect.is_finished());
    assert_eq!(effect.created_count(), 0);
    assert_eq!(effect.advance(&mut scene, tick()), TickStatus::Finished);
    assert!(scene.is_empty());
}
