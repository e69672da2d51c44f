// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Rendering and scoring configuration.
//!
//! This module defines [`RenderConfig`], which controls the avatar surface size and
//! drawing fidelity, and [`ScoringConfig`], which holds the tunable thresholds
//! of the pose similarity metric.

use std::fmt;
use std::str::FromStr;

use crate::error::{AvatarError, Result};
use crate::visualizer::Color;

/// Default logical surface width.
pub const DEFAULT_WIDTH: u32 = 640;

/// Default logical surface height.
pub const DEFAULT_HEIGHT: u32 = 480;

/// Limb and joint rendering fidelity.
///
/// Independent of the avatar style: every style can be drawn at either level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Fidelity {
    /// Solid rounded strokes and flat joint markers.
    #[default]
    Basic,
    /// Gradient limbs with a drop shadow, glowing joints and layered eyes.
    Enhanced,
}

impl Fidelity {
    /// Returns the string representation used on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Enhanced => "enhanced",
        }
    }
}

impl fmt::Display for Fidelity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Fidelity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" | "simple" => Ok(Self::Basic),
            "enhanced" | "hd" => Ok(Self::Enhanced),
            _ => Err(format!("invalid fidelity '{s}', expected one of: basic, enhanced")),
        }
    }
}

/// Configuration for the avatar renderer.
///
/// # Example
///
/// ```rust
/// use ultralytics_avatar::{Fidelity, RenderConfig};
///
/// let config = RenderConfig::new()
///     .with_size(1280, 720)
///     .with_fidelity(Fidelity::Enhanced)
///     .with_head_scale(1.2);
/// ```
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Logical surface width. Normalized x coordinates are multiplied by this.
    pub width: u32,
    /// Logical surface height. Normalized y coordinates are multiplied by this.
    pub height: u32,
    /// Limb and joint fidelity.
    pub fidelity: Fidelity,
    /// Color the raster surface is cleared to.
    pub background: Color,
    /// Multiplier applied to the shoulder-derived head radius.
    pub head_scale: f32,
    /// Draw detailed hands when hand landmarks are present.
    pub draw_hands: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fidelity: Fidelity::Basic,
            background: Color::SLATE,
            head_scale: 1.0,
            draw_hands: true,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the logical surface size.
    ///
    /// # Arguments
    ///
    /// * `width` - Surface width in pixels.
    /// * `height` - Surface height in pixels.
    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the rendering fidelity.
    #[must_use]
    pub const fn with_fidelity(mut self, fidelity: Fidelity) -> Self {
        self.fidelity = fidelity;
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Set the head size multiplier.
    #[must_use]
    pub const fn with_head_scale(mut self, scale: f32) -> Self {
        self.head_scale = scale;
        self
    }

    /// Enable or disable detailed hand rendering.
    #[must_use]
    pub const fn with_hands(mut self, draw_hands: bool) -> Self {
        self.draw_hands = draw_hands;
        self
    }

    /// Check that the configuration can produce a visible frame.
    ///
    /// # Errors
    ///
    /// Returns [`AvatarError::ConfigError`] for a zero-sized surface or a
    /// non-positive head scale.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(AvatarError::ConfigError(format!(
                "surface size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.head_scale.is_finite() && self.head_scale > 0.0) {
            return Err(AvatarError::ConfigError(format!(
                "head scale must be positive, got {}",
                self.head_scale
            )));
        }
        Ok(())
    }
}

/// Configuration for the pose similarity scorer.
///
/// The defaults have no physical derivation; they are tuned values kept for
/// compatibility with existing reference poses.
///
/// # Example
///
/// ```rust
/// use ultralytics_avatar::ScoringConfig;
///
/// let config = ScoringConfig::new().with_visibility_threshold(0.6);
/// assert_eq!(config.celebrate_threshold, 85);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Minimum visibility on both sides for a joint to be compared.
    pub visibility_threshold: f32,
    /// Distance, in normalized units, at which a joint's similarity reaches zero.
    pub distance_scale: f32,
    /// Weight applied to the squared depth difference.
    pub depth_weight: f32,
    /// Lowest score that triggers a celebration.
    pub celebrate_threshold: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: 0.5,
            distance_scale: 0.3,
            depth_weight: 0.3,
            celebrate_threshold: 85,
        }
    }
}

impl ScoringConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the visibility threshold.
    ///
    /// # Arguments
    ///
    /// * `threshold` - Minimum visibility (0.0 to 1.0) for a joint to count.
    #[must_use]
    pub const fn with_visibility_threshold(mut self, threshold: f32) -> Self {
        self.visibility_threshold = threshold;
        self
    }

    /// Set the distance at which per-joint similarity bottoms out.
    #[must_use]
    pub const fn with_distance_scale(mut self, scale: f32) -> Self {
        self.distance_scale = scale;
        self
    }

    /// Set the depth attenuation weight.
    #[must_use]
    pub const fn with_depth_weight(mut self, weight: f32) -> Self {
        self.depth_weight = weight;
        self
    }

    /// Set the celebration threshold.
    #[must_use]
    pub const fn with_celebrate_threshold(mut self, threshold: u8) -> Self {
        self.celebrate_threshold = threshold;
        self
    }
}
