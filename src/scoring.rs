// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Pose similarity scoring.
//!
//! A live pose is compared with a reference pose over a fixed set of limb joints.
//! Each eligible joint contributes a similarity in `[0, 1]` that falls linearly
//! with distance; the mean is reported as an integer percentage.

use std::fmt;

use crate::config::ScoringConfig;
use crate::landmarks::{Landmark, LandmarkSet, Pose, PoseLandmark};

/// Joints compared by the scorer.
pub const SCORED_JOINTS: [PoseLandmark; 12] = [
    PoseLandmark::LeftShoulder,
    PoseLandmark::RightShoulder,
    PoseLandmark::LeftElbow,
    PoseLandmark::RightElbow,
    PoseLandmark::LeftWrist,
    PoseLandmark::RightWrist,
    PoseLandmark::LeftHip,
    PoseLandmark::RightHip,
    PoseLandmark::LeftKnee,
    PoseLandmark::RightKnee,
    PoseLandmark::LeftAnkle,
    PoseLandmark::RightAnkle,
];

/// Severity attached to a feedback band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Positive outcome.
    Success,
    /// Neutral progress.
    Info,
    /// Needs improvement.
    Warning,
    /// Not matching.
    Error,
}

impl Severity {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Qualitative band a score falls into.
///
/// Bands are contiguous and closed on their lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// 90 and above.
    Exact,
    /// 75 to 89.
    Strong,
    /// 60 to 74.
    Moderate,
    /// 40 to 59.
    Weak,
    /// Below 40.
    Mismatch,
}

impl Feedback {
    /// Band for a score.
    ///
    /// # Examples
    ///
    /// ```
    /// use ultralytics_avatar::Feedback;
    ///
    /// assert_eq!(Feedback::from_score(90), Feedback::Exact);
    /// assert_eq!(Feedback::from_score(89), Feedback::Strong);
    /// assert_eq!(Feedback::from_score(39), Feedback::Mismatch);
    /// ```
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            90.. => Self::Exact,
            75.. => Self::Strong,
            60.. => Self::Moderate,
            40.. => Self::Weak,
            _ => Self::Mismatch,
        }
    }

    /// Lowest score in this band.
    #[must_use]
    pub const fn floor(&self) -> u8 {
        match self {
            Self::Exact => 90,
            Self::Strong => 75,
            Self::Moderate => 60,
            Self::Weak => 40,
            Self::Mismatch => 0,
        }
    }

    /// Message shown to the user.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Exact => "Perfect match! 🎉",
            Self::Strong => "Great job! Almost there!",
            Self::Moderate => "Good! Keep adjusting!",
            Self::Weak => "Getting closer...",
            Self::Mismatch => "Try to match the pose",
        }
    }

    /// Severity tier.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Exact | Self::Strong => Severity::Success,
            Self::Moderate => Severity::Info,
            Self::Weak => Severity::Warning,
            Self::Mismatch => Severity::Error,
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Whether a score is high enough to celebrate, using the default threshold.
///
/// The threshold sits below the [`Feedback::Exact`] floor on purpose.
#[must_use]
pub fn should_celebrate(score: u8) -> bool {
    score >= ScoringConfig::default().celebrate_threshold
}

/// Per-frame scoring outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreReport {
    /// Similarity score in `[0, 100]`.
    pub score: u8,
    /// Feedback band for `score`.
    pub feedback: Feedback,
    /// Whether the caller should celebrate this frame.
    pub celebrate: bool,
}

/// Similarity of one compared joint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointSimilarity {
    /// Compared joint.
    pub joint: PoseLandmark,
    /// Weighted distance in normalized units.
    pub distance: f32,
    /// Similarity in `[0, 1]`.
    pub similarity: f32,
}

/// Compares live poses against reference poses.
#[derive(Debug, Clone, Default)]
pub struct PoseScorer {
    config: ScoringConfig,
}

impl PoseScorer {
    /// Create a scorer with the given configuration.
    #[must_use]
    pub const fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Scorer configuration.
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Similarity of every eligible joint.
    ///
    /// A joint is eligible when both sets contain it and both visibilities meet
    /// the threshold. Ineligible joints are left out entirely.
    #[must_use]
    pub fn joint_similarities(&self, live: &LandmarkSet, reference: &LandmarkSet) -> Vec<JointSimilarity> {
        SCORED_JOINTS
            .iter()
            .filter_map(|&joint| {
                let a = live.joint(joint)?;
                let b = reference.joint(joint)?;
                if !self.visible(a) || !self.visible(b) {
                    return None;
                }
                let distance = self.distance(a, b);
                if !distance.is_finite() {
                    return None;
                }
                let similarity = (1.0 - distance / self.config.distance_scale).clamp(0.0, 1.0);
                Some(JointSimilarity {
                    joint,
                    distance,
                    similarity,
                })
            })
            .collect()
    }

    /// Similarity score in `[0, 100]`. Returns `0` when no joint is eligible.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn score(&self, live: &LandmarkSet, reference: &LandmarkSet) -> u8 {
        let joints = self.joint_similarities(live, reference);
        if joints.is_empty() {
            return 0;
        }
        let mean = joints.iter().map(|j| j.similarity).sum::<f32>() / joints.len() as f32;
        (mean * 100.0).round().clamp(0.0, 100.0) as u8
    }

    /// Score two optional poses. A missing pose scores `0`.
    #[must_use]
    pub fn score_poses(&self, live: Option<&Pose>, reference: Option<&Pose>) -> u8 {
        match (live, reference) {
            (Some(live), Some(reference)) => self.score(&live.landmarks, &reference.landmarks),
            _ => 0,
        }
    }

    /// Whether a score reaches the configured celebration threshold.
    #[must_use]
    pub const fn should_celebrate(&self, score: u8) -> bool {
        score >= self.config.celebrate_threshold
    }

    /// Score, feedback band and celebration flag for one frame.
    #[must_use]
    pub fn evaluate(&self, live: &LandmarkSet, reference: &LandmarkSet) -> ScoreReport {
        let score = self.score(live, reference);
        ScoreReport {
            score,
            feedback: Feedback::from_score(score),
            celebrate: self.should_celebrate(score),
        }
    }

    fn visible(&self, landmark: &Landmark) -> bool {
        landmark.confidence() >= self.config.visibility_threshold
    }

    /// Euclidean distance with the squared depth term attenuated.
    fn distance(&self, a: &Landmark, b: &Landmark) -> f32 {
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        let dz = a.depth() - b.depth();
        (dz * dz)
            .mul_add(self.config.depth_weight, dx.mul_add(dx, dy * dy))
            .sqrt()
    }
}

/// Score `live` against `reference` with the default configuration.
#[must_use]
pub fn score(live: &LandmarkSet, reference: &LandmarkSet) -> u8 {
    PoseScorer::default().score(live, reference)
}
