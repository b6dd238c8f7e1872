//! Study Configuration Module
//!
//! The case-study table and analysis settings, loaded from TOML.
//!
//! ## Loading Order
//!
//! 1. `DFAM_CONFIG` environment variable (path to TOML file)
//! 2. `study_config.toml` in the current working directory
//! 3. Built-in defaults (the four SLS/FDM case studies, alpha = 0.05)
//!
//! An explicit path (`--config`) bypasses the search and fails hard via
//! `StudyConfig::load_from_file`.

mod study_config;
pub mod defaults;
pub mod validation;

pub use study_config::*;
