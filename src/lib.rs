#![forbid(unsafe_code)]

//! Core of a borderless desktop clock overlay.
//!
//! This crate owns the mutable settings model, derives the complete window
//! presentation from it, persists it as JSON in the user's config directory,
//! and keeps the window above the taskbar when the OS keeps demoting it.
//! The actual window, tray icon, and dialogs live in the embedding
//! application and are reached through the [`surface::WindowSurface`] trait.

pub mod app;
pub mod clock;
pub mod color;
pub mod config;
pub mod constants;
pub mod enforcer;
pub mod presentation;
pub mod surface;

pub use app::{ClockApp, ControlCommand};
pub use clock::ClockText;
pub use color::{ColorParseError, Rgb};
pub use config::{ClockSettings, SettingsStore, StorageError, TextEffect, TopMostMode};
pub use enforcer::{EnforcerState, TopmostEnforcer};
pub use presentation::{Presentation, TextEffectSpec};
pub use surface::WindowSurface;
