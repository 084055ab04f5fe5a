//! # Hearth Core Library
//!
//! Core library for the Hearth launcher's web search integration.
//! This library provides the search provider registry and the remote
//! suggestion client used by the launcher front end.
//!
//! ## Modules
//!
//! - [`provider`] - Search provider descriptors and the static registry
//! - [`suggestion`] - Remote search suggestion client
//! - [`common`] - Common error types shared across the crate

pub mod common;
pub mod provider;
pub mod suggestion;

pub use common::errors::SearchError;
pub use provider::{ProviderKind, SearchProvider, ThemingMethod};
pub use suggestion::SuggestionClient;
