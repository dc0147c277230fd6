//! Achievement system module.
//!
//! A fixed catalog of badges on a square grid. Unlock state is kept in an
//! [`AchievementEngine`] and persisted under the `achievements` key of a local
//! key-value store (`~/.retrodesk/achievements.json` for the terminal host).

pub mod data;
pub mod engine;
pub mod persistence;
pub mod types;

pub use data::{get_achievement_def, ALL_ACHIEVEMENTS};
pub use engine::{AchievementEngine, ListenerId, UnlockListener};
pub use persistence::{clear_progress, load_progress, save_progress};
pub use types::{Achievement, AchievementDef, AchievementProgress, Catalog, UnlockRecord};
