//! Input handling for the desktop screen, and the achievements it triggers.
//!
//! Keeps dispatch out of main.rs so the key-to-unlock rules can be tested
//! without a terminal.

use crate::achievements::AchievementEngine;
use crate::ui::achievement_grid_scene::AchievementGridState;
use crate::ui::desktop_scene::{DesktopScene, ShatterOutcome};
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;
use std::collections::VecDeque;
use std::time::Duration;

const KONAMI_CODE: [KeyCode; 10] = [
    KeyCode::Up,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Char('b'),
    KeyCode::Char('a'),
];

const RAGE_QUIT_SHATTERS: u32 = 10;
const PATIENCE_SPIN: Duration = Duration::from_secs(60);

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Watches the most recent keys for the Konami code.
#[derive(Debug, Clone, Default)]
pub struct KonamiTracker {
    recent: VecDeque<KeyCode>,
}

impl KonamiTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true on the key that completes the code.
    pub fn feed(&mut self, code: KeyCode) -> bool {
        if self.recent.len() == KONAMI_CODE.len() {
            self.recent.pop_front();
        }
        self.recent.push_back(normalize(code));
        if self.recent.iter().eq(KONAMI_CODE.iter()) {
            self.recent.clear();
            return true;
        }
        false
    }
}

fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

/// Modal dialog over the desktop. At most one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DesktopOverlay {
    #[default]
    None,
    ResetConfirm,
}

/// Everything the desktop screen's input touches.
pub struct DesktopInput<'a, R: Rng> {
    pub desktop: &'a mut DesktopScene,
    pub engine: &'a mut AchievementEngine,
    pub grid: &'a mut AchievementGridState,
    pub overlay: &'a mut DesktopOverlay,
    pub konami: &'a mut KonamiTracker,
    pub rng: &'a mut R,
}

/// Main dispatcher for desktop input. The reset dialog, then the grid
/// overlay, take every key except the Konami tracker's copy.
pub fn handle_desktop_input<R: Rng>(key: KeyEvent, ctx: DesktopInput<'_, R>) -> InputResult {
    if ctx.konami.feed(key.code) {
        ctx.engine.unlock("konami");
    }

    if *ctx.overlay == DesktopOverlay::ResetConfirm {
        handle_reset_confirm(key, ctx.engine, ctx.overlay);
        return InputResult::Continue;
    }

    if ctx.grid.showing {
        let size = ctx.engine.grid_size();
        match key.code {
            KeyCode::Esc | KeyCode::Char('a') | KeyCode::Char('A') => ctx.grid.close(),
            KeyCode::Up => ctx.grid.move_up(),
            KeyCode::Down => ctx.grid.move_down(size),
            KeyCode::Left => ctx.grid.move_left(),
            KeyCode::Right => ctx.grid.move_right(size),
            _ => {}
        }
        return InputResult::Continue;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return InputResult::Quit,
        KeyCode::Char('s') | KeyCode::Char('S') => {
            let outcome = ctx.desktop.shatter_sphere(ctx.rng);
            record_shatter(ctx.engine, outcome, "sphere-smasher");
        }
        KeyCode::Char('w') | KeyCode::Char('W') => {
            let outcome = ctx.desktop.shatter_window(ctx.rng);
            record_shatter(ctx.engine, outcome, "pane-breaker");
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            ctx.grid.open();
            ctx.engine.unlock("grid-gazer");
        }
        KeyCode::Char('r') | KeyCode::Char('R') => *ctx.overlay = DesktopOverlay::ResetConfirm,
        KeyCode::Char('t') | KeyCode::Char('T') => {
            ctx.engine.unlock("terminal-velocity");
        }
        KeyCode::Char('v') | KeyCode::Char('V') => {
            ctx.engine.unlock("view-source");
        }
        _ => {}
    }
    InputResult::Continue
}

/// Y wipes progress, anything else backs out.
fn handle_reset_confirm(
    key: KeyEvent,
    engine: &mut AchievementEngine,
    overlay: &mut DesktopOverlay,
) {
    if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
        engine.reset_all();
        engine.unlock("rm-rf");
    }
    *overlay = DesktopOverlay::None;
}

fn record_shatter(engine: &mut AchievementEngine, outcome: ShatterOutcome, id: &str) {
    match outcome {
        ShatterOutcome::Ignored => {}
        ShatterOutcome::Shattered => {
            engine.unlock(id);
        }
        ShatterOutcome::ShatteredDuringAnother => {
            engine.unlock(id);
            engine.unlock("chain-reaction");
        }
    }
}

/// Unlocks that depend on accumulated desktop state rather than one key.
pub fn check_desktop_achievements(desktop: &DesktopScene, engine: &mut AchievementEngine) {
    if desktop.shatter_count() >= RAGE_QUIT_SHATTERS {
        engine.unlock("rage-quit");
    }
    if desktop.spin_time() >= PATIENCE_SPIN {
        engine.unlock("patience");
    }
    check_completionist(engine);
}

/// Achievements unlocked just by starting up at `hour` (local time, 0-23).
pub fn check_startup_achievements(engine: &mut AchievementEngine, hour: u32) {
    engine.unlock("first-login");
    if hour < 4 {
        engine.unlock("night-owl");
    }
    check_completionist(engine);
}

fn check_completionist(engine: &mut AchievementEngine) {
    if !engine.is_unlocked("completionist")
        && engine.unlocked_count() + 1 == engine.total_count()
    {
        engine.unlock("completionist");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::{Catalog, ALL_ACHIEVEMENTS};
    use crossterm::event::KeyModifiers;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    struct Harness {
        desktop: DesktopScene,
        engine: AchievementEngine,
        grid: AchievementGridState,
        overlay: DesktopOverlay,
        konami: KonamiTracker,
        rng: ChaCha8Rng,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                desktop: DesktopScene::new(),
                engine: AchievementEngine::in_memory(&Catalog::standard(), true),
                grid: AchievementGridState::new(),
                overlay: DesktopOverlay::None,
                konami: KonamiTracker::new(),
                rng: ChaCha8Rng::seed_from_u64(12345),
            }
        }

        fn press(&mut self, code: KeyCode) -> InputResult {
            let ctx = DesktopInput {
                desktop: &mut self.desktop,
                engine: &mut self.engine,
                grid: &mut self.grid,
                overlay: &mut self.overlay,
                konami: &mut self.konami,
                rng: &mut self.rng,
            };
            handle_desktop_input(KeyEvent::new(code, KeyModifiers::NONE), ctx)
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut h = Harness::new();
        assert_eq!(h.press(KeyCode::Char('x')), InputResult::Continue);
        assert_eq!(h.press(KeyCode::Char('q')), InputResult::Quit);
        assert_eq!(h.press(KeyCode::Esc), InputResult::Quit);
    }

    #[test]
    fn test_shatter_keys_unlock() {
        let mut h = Harness::new();
        h.press(KeyCode::Char('s'));
        assert!(h.engine.is_unlocked("sphere-smasher"));
        assert!(!h.engine.is_unlocked("chain-reaction"));

        h.press(KeyCode::Char('w'));
        assert!(h.engine.is_unlocked("pane-breaker"));
        assert!(h.engine.is_unlocked("chain-reaction"));
    }

    #[test]
    fn test_grid_overlay_captures_keys() {
        let mut h = Harness::new();
        h.press(KeyCode::Char('a'));
        assert!(h.grid.showing);
        assert!(h.engine.is_unlocked("grid-gazer"));

        // 'q' does not quit and 's' does not shatter while the grid is open
        assert_eq!(h.press(KeyCode::Char('q')), InputResult::Continue);
        h.press(KeyCode::Char('s'));
        assert!(!h.desktop.is_shattering());

        h.press(KeyCode::Right);
        h.press(KeyCode::Down);
        assert_eq!((h.grid.cursor_x, h.grid.cursor_y), (1, 1));

        h.press(KeyCode::Esc);
        assert!(!h.grid.showing);
    }

    #[test]
    fn test_reset_asks_before_wiping() {
        let mut h = Harness::new();
        h.press(KeyCode::Char('s'));
        h.press(KeyCode::Char('r'));
        assert_eq!(h.overlay, DesktopOverlay::ResetConfirm);
        assert!(h.engine.is_unlocked("sphere-smasher"));

        // the dialog swallows keys that would otherwise quit or shatter
        assert_eq!(h.press(KeyCode::Char('q')), InputResult::Continue);
        assert_eq!(h.overlay, DesktopOverlay::None);
        assert!(h.engine.is_unlocked("sphere-smasher"));
        assert!(!h.engine.is_unlocked("rm-rf"));
    }

    #[test]
    fn test_confirmed_reset_leaves_only_rm_rf() {
        let mut h = Harness::new();
        h.press(KeyCode::Char('s'));
        h.press(KeyCode::Char('a'));
        h.press(KeyCode::Esc);
        h.press(KeyCode::Char('r'));
        h.press(KeyCode::Char('Y'));
        assert_eq!(h.overlay, DesktopOverlay::None);
        assert_eq!(h.engine.unlocked_count(), 1);
        assert!(h.engine.is_unlocked("rm-rf"));
    }

    #[test]
    fn test_terminal_keys_unlock() {
        let mut h = Harness::new();
        h.press(KeyCode::Char('t'));
        h.press(KeyCode::Char('V'));
        assert!(h.engine.is_unlocked("terminal-velocity"));
        assert!(h.engine.is_unlocked("view-source"));
    }

    #[test]
    fn test_konami_code() {
        let mut tracker = KonamiTracker::new();
        for code in &KONAMI_CODE[..9] {
            assert!(!tracker.feed(*code));
        }
        // letters match either case
        assert!(tracker.feed(KeyCode::Char('A')));
        assert!(!tracker.feed(KeyCode::Up));
    }

    #[test]
    fn test_konami_with_extra_leading_up() {
        let mut tracker = KonamiTracker::new();
        assert!(!tracker.feed(KeyCode::Up));
        let mut detected = false;
        for code in KONAMI_CODE {
            detected = tracker.feed(code);
        }
        assert!(detected);
    }

    #[test]
    fn test_konami_after_broken_attempt() {
        let mut tracker = KonamiTracker::new();
        for code in &KONAMI_CODE[..6] {
            tracker.feed(*code);
        }
        assert!(!tracker.feed(KeyCode::Char('x')));
        let mut detected = false;
        for code in KONAMI_CODE {
            detected = tracker.feed(code);
        }
        assert!(detected);
    }

    #[test]
    fn test_konami_through_input_handler() {
        let mut h = Harness::new();
        for code in KONAMI_CODE {
            h.press(code);
        }
        assert!(h.engine.is_unlocked("konami"));
    }

    #[test]
    fn test_startup_achievements() {
        let mut engine = AchievementEngine::in_memory(&Catalog::standard(), true);
        check_startup_achievements(&mut engine, 13);
        assert!(engine.is_unlocked("first-login"));
        assert!(!engine.is_unlocked("night-owl"));

        check_startup_achievements(&mut engine, 2);
        assert!(engine.is_unlocked("night-owl"));
    }

    #[test]
    fn test_rage_quit_after_ten_shatters() {
        let mut h = Harness::new();
        let tick = Duration::from_millis(16);
        while h.desktop.shatter_count() < RAGE_QUIT_SHATTERS {
            h.press(KeyCode::Char('s'));
            h.press(KeyCode::Char('w'));
            h.desktop.tick(tick);
        }
        check_desktop_achievements(&h.desktop, &mut h.engine);
        assert!(h.engine.is_unlocked("rage-quit"));
    }

    #[test]
    fn test_completionist_unlocks_last() {
        let mut engine = AchievementEngine::in_memory(&Catalog::standard(), true);
        for def in ALL_ACHIEVEMENTS.iter().filter(|d| d.id != "completionist") {
            engine.unlock(def.id);
        }
        let desktop = DesktopScene::new();
        check_desktop_achievements(&desktop, &mut engine);
        assert_eq!(engine.unlocked_count(), engine.total_count());
    }
}
