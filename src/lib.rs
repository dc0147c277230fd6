//! Retrodesk - a wireframe retro desktop for the terminal
//!
//! A spinning sphere and a window that shatter into fading line fragments,
//! plus a grid of unlockable achievements that persist between runs.

pub mod achievements;
pub mod build_info;
pub mod config;
pub mod constants;
pub mod error;
pub mod fx;
pub mod geometry;
pub mod input;
pub mod scene;
pub mod storage;
pub mod ui;
