//! # Hearth Launcher Library
//!
//! Launcher-side glue for the Hearth home screen: configuration,
//! preferences, and the dynamic theme pipeline that derives the active
//! color palette from a wallpaper-style color scheme and the dark-mode
//! decision. Network-facing search pieces live in `hearth-core`.
//!
//! ## Modules
//!
//! - [`config`] - Configuration loading, sections, and validation
//! - [`error`] - Error types and the `AppResult` alias
//! - [`logger`] - Logging setup
//! - [`platform`] - System dark-mode and wallpaper capability signals
//! - [`prefs`] - Reactive preference store with change subscriptions
//! - [`search`] - Active-provider resolution and suggestion service
//! - [`theme`] - Color schemes, palette resolution, and the theme manager
//! - [`validation`] - Input validation trait
//!
//! This library interface enables integration testing by providing access
//! to internal modules.

pub mod config;
pub mod error;
pub mod logger;
pub mod platform;
pub mod prefs;
pub mod search;
pub mod theme;
pub mod validation;

// Re-export commonly used types for easier access in tests
pub use error::{AppError, AppResult};
pub use validation::Validator;
