// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Ultralytics Avatar
//!
//! Stylized avatar rendering driven by body and hand landmarks, plus a pose
//! similarity scorer for "match the target pose" games.
//!
//! A pose estimator produces 33 normalized body landmarks per frame and up to
//! two sets of 21 hand landmarks. This crate turns each frame into a cartoon
//! figure (monkey, human, cat, dog or bird head on a line-art body) drawn onto
//! any [`Surface`], and scores how close the body is to a [`ReferencePose`].
//!
//! ## Quick Start (Library)
//!
//! ```
//! use ultralytics_avatar::{
//!     AvatarRenderer, AvatarStyle, Feedback, PoseScorer, RecordingSurface, ReferencePose,
//! };
//!
//! let target = ReferencePose::find("t-pose").unwrap();
//! let live = target.to_pose();
//!
//! // Draw the live pose as a cat
//! let renderer = AvatarRenderer::default();
//! let mut surface = RecordingSurface::new(640, 480);
//! renderer.render(&mut surface, Some(&live), AvatarStyle::Cat);
//! assert!(!surface.is_blank());
//!
//! // Compare against the target
//! let report = PoseScorer::default().evaluate(&live.landmarks, &target.landmarks);
//! assert_eq!(report.score, 100);
//! assert_eq!(report.feedback, Feedback::Exact);
//! assert!(report.celebrate);
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Render every frame of a pose file as a dog and save PNGs
//! ultralytics-avatar render --pose frames.json --style dog --save
//!
//! # Enhanced fidelity in a window
//! ultralytics-avatar render --pose frames.jsonl --enhanced --show
//!
//! # Score frames against a target pose
//! ultralytics-avatar score --pose frames.json --reference arms-up
//!
//! # List the built-in targets and save their outlines
//! ultralytics-avatar references --save
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust
//! use ultralytics_avatar::{Fidelity, RenderConfig, ScoringConfig};
//!
//! let render = RenderConfig::new()
//!     .with_size(1280, 720)
//!     .with_fidelity(Fidelity::Enhanced)
//!     .with_head_scale(1.2);
//!
//! let scoring = ScoringConfig::new()
//!     .with_visibility_threshold(0.6)
//!     .with_celebrate_threshold(90);
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`landmarks`] | [`Landmark`], [`LandmarkSet`], [`Pose`] and named indices |
//! | [`render`] | [`AvatarRenderer`] drawing order and body geometry |
//! | [`head`] | Per-style head routines |
//! | [`style`] | [`AvatarStyle`] palettes and dispatch table |
//! | [`surface`] | [`Surface`] trait and drawing [`Primitive`]s |
//! | [`scoring`] | [`PoseScorer`], [`Feedback`] bands, celebration |
//! | [`reference`] | Built-in [`ReferencePose`] catalog |
//! | [`config`] | [`RenderConfig`] and [`ScoringConfig`] |
//! | [`io`] | Pose file loading and frame saving |
//! | [`error`] | Error types ([`AvatarError`], [`Result`]) |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `annotate` | Raster [`ImageSurface`](annotate::ImageSurface) (default) |
//! | `visualize` | Real-time window display (default) |
//!
//! ## License
//!
//! This project is dual-licensed under [AGPL-3.0](https://github.com/ultralytics/avatar/blob/main/LICENSE)
//! for open-source use or [Ultralytics Enterprise License](https://ultralytics.com/license)
//! for commercial applications.

// Modules
#[cfg(feature = "annotate")]
pub mod annotate;
pub mod cli;
pub mod config;
pub mod error;
pub mod head;
pub mod io;
pub mod landmarks;
pub mod reference;
pub mod render;
pub mod scoring;
pub mod style;
pub mod surface;
pub mod utils;
pub mod visualizer;

// Re-export main types for convenience
pub use config::{Fidelity, RenderConfig, ScoringConfig};
pub use error::{AvatarError, Result};
pub use landmarks::{HandLandmark, HandLandmarkSet, Landmark, LandmarkSet, Pose, PoseLandmark, Side};
pub use reference::ReferencePose;
pub use render::AvatarRenderer;
pub use scoring::{Feedback, PoseScorer, ScoreReport, Severity, score, should_celebrate};
pub use style::{AvatarStyle, Palette};
pub use surface::{Point, Primitive, RecordingSurface, Surface};

#[cfg(feature = "annotate")]
pub use annotate::ImageSurface;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
