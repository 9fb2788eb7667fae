//! Settings model and persistence
//!
//! - **model**: `ClockSettings`, the one record of every configurable option
//! - **store**: JSON load/save at a fixed per-user path, tolerant of missing
//!   or corrupt files

pub mod model;
pub mod store;

// Re-export commonly used types
pub use model::{ClockSettings, TextEffect, TopMostMode};
pub use store::{SettingsStore, StorageError};
