//! Configuration module for spendtrack
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SpendPaths;
pub use settings::Settings;
