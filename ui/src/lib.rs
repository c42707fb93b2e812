//! # Cutlass UI Library
//!
//! Preferences layer of the Cutlass reverse-engineering front end: persisted
//! user settings, the Native/Dark/Light interface themes, color themes, and
//! the mirror of display options into the disassembly engine.
//!
//! ## Features
//!
//! - Durable settings store with write-through semantics
//! - Interface themes with per-theme stylesheet, palette and color overrides
//! - Color themes resolved by the engine and cached locally
//! - Engine option mirroring with persisted overrides over static defaults
//! - Synchronous change notifications
//! - Translation discovery
//!
//! ## Modules
//!
//! - [`config`] - Application config loading (`cutlass.toml`, environment)
//! - [`configuration`] - The [`Configuration`] context object
//! - [`constants`] - Environment variable names
//! - [`error`] - Error types and centralized error reporting
//! - [`events`] - Change notifications
//! - [`logger`] - Logging setup
//! - [`lookup`] - Values that may have been substituted by a fallback
//! - [`options`] - Catalog of engine options persisted by the preferences layer
//! - [`store`] - Durable settings store
//! - [`theme`] - Interface themes and their loading routines
//! - [`translations`] - Installed translation discovery
//! - [`validation`] - Input validation

pub mod config;
pub mod configuration;
pub mod constants;
pub mod error;
pub mod events;
pub mod logger;
pub mod lookup;
pub mod options;
pub mod store;
pub mod theme;
pub mod translations;
pub mod validation;

pub use configuration::Configuration;
pub use error::AppError;
pub use events::ConfigEvent;
pub use lookup::Lookup;
pub use validation::Validator;
