//! Achievement progress persistence through a [`KeyValueStore`].

use super::types::{AchievementProgress, Catalog};
use crate::constants::PROGRESS_KEY;
use crate::error::StoreError;
use crate::storage::KeyValueStore;
use tracing::warn;

/// Load progress, keeping only ids the catalog knows. A missing key,
/// unreadable store, or malformed JSON all load as empty progress.
pub fn load_progress(store: &dyn KeyValueStore, catalog: &Catalog) -> AchievementProgress {
    let json = match store.get(PROGRESS_KEY) {
        Ok(Some(json)) => json,
        Ok(None) => return AchievementProgress::default(),
        Err(e) => {
            warn!(error = %e, "could not read achievement progress");
            return AchievementProgress::default();
        }
    };

    let mut progress: AchievementProgress = match serde_json::from_str(&json) {
        Ok(progress) => progress,
        Err(e) => {
            warn!(error = %e, "discarding malformed achievement progress");
            return AchievementProgress::default();
        }
    };
    progress.retain_known(catalog);
    progress
}

pub fn save_progress(
    store: &mut dyn KeyValueStore,
    progress: &AchievementProgress,
) -> Result<(), StoreError> {
    let json = serde_json::to_string(progress)?;
    store.set(PROGRESS_KEY, &json)
}

pub fn clear_progress(store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
    store.remove(PROGRESS_KEY)
}
