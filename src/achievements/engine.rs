//! Achievement engine: unlock state, grid queries, and unlock listeners.
//!
//! The engine is an ordinary value. Whoever needs achievements holds one (or
//! borrows it) instead of reaching for a process-wide instance, so tests can
//! build as many independent engines as they like.

use super::persistence::{clear_progress, load_progress, save_progress};
use super::types::{Achievement, AchievementProgress, Catalog};
use crate::storage::KeyValueStore;
use tracing::{debug, warn};

pub type UnlockListener = Box<dyn FnMut(&Achievement)>;

/// Handle returned by [`AchievementEngine::on_achievement_unlocked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub struct AchievementEngine {
    achievements: Vec<Achievement>,
    grid_size: usize,
    enabled: bool,
    /// None outside a context with local storage: state then lives only in memory.
    store: Option<Box<dyn KeyValueStore>>,
    listeners: Vec<(ListenerId, UnlockListener)>,
    next_listener: u64,
}

impl std::fmt::Debug for AchievementEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AchievementEngine")
            .field("total", &self.achievements.len())
            .field("unlocked", &self.unlocked_count())
            .field("enabled", &self.enabled)
            .field("persistent", &self.store.is_some())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl AchievementEngine {
    /// Seeds the catalog and merges any persisted unlock state.
    pub fn new(catalog: &Catalog, store: Option<Box<dyn KeyValueStore>>, enabled: bool) -> Self {
        let progress = match store.as_deref() {
            Some(store) => load_progress(store, catalog),
            None => AchievementProgress::default(),
        };

        let achievements = catalog
            .defs()
            .iter()
            .map(|def| {
                let mut achievement = Achievement::from(def);
                if let Some(record) = progress.get(def.id) {
                    achievement.unlocked = record.unlocked;
                    achievement.unlocked_at = if record.unlocked {
                        record.unlocked_at
                    } else {
                        None
                    };
                }
                achievement
            })
            .collect();

        Self {
            achievements,
            grid_size: catalog.grid_size(),
            enabled,
            store,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// In-memory engine with no persistence.
    pub fn in_memory(catalog: &Catalog, enabled: bool) -> Self {
        Self::new(catalog, None, enabled)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Unlocks `id` if achievements are enabled, the id exists, and it is
    /// still locked. Returns true only when state changed; listeners run
    /// after the new state is persisted.
    pub fn unlock(&mut self, id: &str) -> bool {
        if !self.enabled {
            return false;
        }
        let Some(index) = self.achievements.iter().position(|a| a.id == id) else {
            return false;
        };
        if self.achievements[index].unlocked {
            return false;
        }

        let achievement = &mut self.achievements[index];
        achievement.unlocked = true;
        achievement.unlocked_at = Some(chrono::Utc::now().timestamp_millis());
        debug!(id, "achievement unlocked");

        self.persist();

        let snapshot = self.achievements[index].clone();
        for (_, listener) in self.listeners.iter_mut() {
            listener(&snapshot);
        }
        true
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.achievement(id).is_some_and(|a| a.unlocked)
    }

    pub fn achievement(&self, id: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    /// Copy of every achievement, in catalog order.
    pub fn all_achievements(&self) -> Vec<Achievement> {
        self.achievements.clone()
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }

    pub fn total_count(&self) -> usize {
        self.achievements.len()
    }

    /// Get unlock percentage (0.0 - 100.0).
    pub fn unlock_percentage(&self) -> f32 {
        let total = self.total_count();
        if total == 0 {
            return 0.0;
        }
        (self.unlocked_count() as f32 / total as f32) * 100.0
    }

    /// Achievements laid out as `grid[y][x]`; empty cells are None.
    pub fn grid(&self) -> Vec<Vec<Option<Achievement>>> {
        let mut grid = vec![vec![None; self.grid_size]; self.grid_size];
        for achievement in &self.achievements {
            grid[achievement.y][achievement.x] = Some(achievement.clone());
        }
        grid
    }

    pub fn at(&self, x: usize, y: usize) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.x == x && a.y == y)
    }

    /// Neighbors above, below, left and right that exist in the catalog.
    /// Edges do not wrap.
    pub fn cardinal_neighbors(&self, achievement: &Achievement) -> Vec<&Achievement> {
        let (x, y) = (achievement.x, achievement.y);
        let mut cells = Vec::with_capacity(4);
        if y > 0 {
            cells.push((x, y - 1));
        }
        if y + 1 < self.grid_size {
            cells.push((x, y + 1));
        }
        if x > 0 {
            cells.push((x - 1, y));
        }
        if x + 1 < self.grid_size {
            cells.push((x + 1, y));
        }
        cells
            .into_iter()
            .filter_map(|(cx, cy)| self.at(cx, cy))
            .collect()
    }

    /// Locked, but next to at least one unlocked achievement.
    pub fn is_hinted(&self, achievement: &Achievement) -> bool {
        !achievement.unlocked
            && self
                .cardinal_neighbors(achievement)
                .iter()
                .any(|n| n.unlocked)
    }

    /// Locks everything again and erases the persisted record. Listeners are
    /// not told about resets.
    pub fn reset_all(&mut self) {
        for achievement in &mut self.achievements {
            achievement.unlocked = false;
            achievement.unlocked_at = None;
        }
        if let Some(store) = self.store.as_deref_mut() {
            if let Err(e) = clear_progress(store) {
                warn!(error = %e, "could not erase achievement progress");
            }
        }
        debug!("achievements reset");
    }

    /// Registers a callback run synchronously once per successful unlock.
    pub fn on_achievement_unlocked(
        &mut self,
        listener: impl FnMut(&Achievement) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the listener was already gone.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn persist(&mut self) {
        let Some(store) = self.store.as_deref_mut() else {
            return;
        };
        let progress = AchievementProgress::from_achievements(&self.achievements);
        if let Err(e) = save_progress(store, &progress) {
            warn!(error = %e, "could not save achievement progress");
        }
    }
}
