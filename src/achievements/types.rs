//! Achievement system types and data structures.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Static definition of an achievement. Identity and grid cell never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub x: usize,
    pub y: usize,
    pub icon: &'static str,
}

/// Runtime view of an achievement: its definition plus unlock state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub x: usize,
    pub y: usize,
    pub icon: String,
    pub unlocked: bool,
    /// Unix milliseconds.
    pub unlocked_at: Option<i64>,
}

impl From<&AchievementDef> for Achievement {
    fn from(def: &AchievementDef) -> Self {
        Self {
            id: def.id.to_string(),
            title: def.title.to_string(),
            description: def.description.to_string(),
            x: def.x,
            y: def.y,
            icon: def.icon.to_string(),
            unlocked: false,
            unlocked_at: None,
        }
    }
}

/// Persisted unlock state for one achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UnlockRecord {
    pub unlocked: bool,
    #[serde(default)]
    pub unlocked_at: Option<i64>,
}

/// The part of the achievement set that survives across sessions:
/// achievement id to unlock record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct AchievementProgress {
    pub records: BTreeMap<String, UnlockRecord>,
}

impl AchievementProgress {
    /// Snapshot of every achievement's state.
    pub fn from_achievements(achievements: &[Achievement]) -> Self {
        let records = achievements
            .iter()
            .map(|a| {
                (
                    a.id.clone(),
                    UnlockRecord {
                        unlocked: a.unlocked,
                        unlocked_at: a.unlocked_at,
                    },
                )
            })
            .collect();
        Self { records }
    }

    pub fn get(&self, id: &str) -> Option<&UnlockRecord> {
        self.records.get(id)
    }

    /// Drops records whose id is not in the catalog.
    pub fn retain_known(&mut self, catalog: &Catalog) {
        self.records.retain(|id, _| catalog.contains(id));
    }
}

/// Validated set of definitions on a square grid.
#[derive(Debug, Clone)]
pub struct Catalog {
    defs: Vec<AchievementDef>,
    grid_size: usize,
}

impl Catalog {
    /// Checks that ids are unique, every cell lies inside the grid, and no
    /// two achievements share a cell.
    pub fn new(defs: &[AchievementDef], grid_size: usize) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        let mut cells: HashMap<(usize, usize), &str> = HashMap::new();

        for def in defs {
            if !ids.insert(def.id) {
                return Err(CatalogError::DuplicateId(def.id.to_string()));
            }
            if def.x >= grid_size || def.y >= grid_size {
                return Err(CatalogError::OutOfGrid {
                    id: def.id.to_string(),
                    x: def.x,
                    y: def.y,
                    grid_size,
                });
            }
            if let Some(first) = cells.insert((def.x, def.y), def.id) {
                return Err(CatalogError::CellTaken {
                    x: def.x,
                    y: def.y,
                    first: first.to_string(),
                    second: def.id.to_string(),
                });
            }
        }

        Ok(Self {
            defs: defs.to_vec(),
            grid_size,
        })
    }

    pub(crate) fn from_static(defs: &'static [AchievementDef], grid_size: usize) -> Self {
        Self {
            defs: defs.to_vec(),
            grid_size,
        }
    }

    pub fn defs(&self) -> &[AchievementDef] {
        &self.defs
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.defs.iter().any(|d| d.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn def(id: &'static str, x: usize, y: usize) -> AchievementDef {
        AchievementDef {
            id,
            title: "Title",
            description: "Description",
            x,
            y,
            icon: "*",
        }
    }

    #[test]
    fn test_catalog_accepts_valid_defs() {
        let catalog = Catalog::new(&[def("a", 0, 0), def("b", 4, 4)], 5).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("b"));
        assert!(!catalog.contains("c"));
    }

    #[test]
    fn test_catalog_rejects_duplicate_id() {
        let err = Catalog::new(&[def("a", 0, 0), def("a", 1, 0)], 5).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId("a".to_string()));
    }

    #[test]
    fn test_catalog_rejects_out_of_grid() {
        let err = Catalog::new(&[def("a", 5, 0)], 5).unwrap_err();
        assert!(matches!(err, CatalogError::OutOfGrid { x: 5, .. }));
    }

    #[test]
    fn test_catalog_rejects_shared_cell() {
        let err = Catalog::new(&[def("a", 1, 1), def("b", 1, 1)], 5).unwrap_err();
        assert!(matches!(err, CatalogError::CellTaken { .. }));
    }

    #[test]
    fn test_progress_json_shape() {
        let mut achievement = Achievement::from(&def("first-login", 2, 2));
        achievement.unlocked = true;
        achievement.unlocked_at = Some(1_700_000_000_000);

        let progress = AchievementProgress::from_achievements(&[achievement]);
        let json = serde_json::to_string(&progress).unwrap();
        assert_eq!(
            json,
            r#"{"first-login":{"unlocked":true,"unlockedAt":1700000000000}}"#
        );
    }

    #[test]
    fn test_progress_tolerates_missing_timestamp() {
        let progress: AchievementProgress =
            serde_json::from_str(r#"{"a":{"unlocked":false}}"#).unwrap();
        assert_eq!(progress.get("a"), Some(&UnlockRecord::default()));
    }

    #[test]
    fn test_retain_known_drops_unknown_ids() {
        let catalog = Catalog::new(&[def("a", 0, 0)], 5).unwrap();
        let mut progress: AchievementProgress = serde_json::from_str(
            r#"{"a":{"unlocked":true,"unlockedAt":1},"ghost":{"unlocked":true,"unlockedAt":2}}"#,
        )
        .unwrap();

        progress.retain_known(&catalog);
        assert!(progress.get("a").is_some());
        assert!(progress.get("ghost").is_none());
    }
}
