use thiserror::Error;

/// Failures of the local key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("home directory not found: set HOME or RETRODESK_DATA_DIR")]
    HomeNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Problems with an achievement catalog definition table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate achievement id: {0}")]
    DuplicateId(String),

    #[error("achievement '{id}' at ({x}, {y}) is outside the {grid_size}x{grid_size} grid")]
    OutOfGrid {
        id: String,
        x: usize,
        y: usize,
        grid_size: usize,
    },

    #[error("two achievements share cell ({x}, {y}): {first} and {second}")]
    CellTaken {
        x: usize,
        y: usize,
        first: String,
        second: String,
    },
}
