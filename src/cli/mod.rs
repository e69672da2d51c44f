// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for rendering and scoring pose files.
//!
//! This module contains the command-line interface logic, including argument parsing
//! and the `render`, `score` and `references` command implementations.

// Modules
/// CLI arguments.
pub mod args;

/// Console output macros.
pub mod logging;

/// Built-in reference listing.
pub mod references;

/// Avatar rendering logic.
pub mod render;

/// Pose scoring logic.
pub mod score;
