// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Static catalog of target poses.
//!
//! Reference poses are hand-authored: every landmark starts at the neutral
//! frame center and only the anatomically relevant indices are overridden.

use std::sync::LazyLock;

use crate::landmarks::{Landmark, LandmarkSet, POSE_LANDMARK_COUNT, Pose, PoseLandmark};

/// A named target pose.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferencePose {
    /// Stable identifier used by selectors.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line instruction for the user.
    pub description: &'static str,
    /// Target body landmarks (33 entries).
    pub landmarks: LandmarkSet,
}

/// Neutral starting point for every reference landmark.
const NEUTRAL: Landmark = Landmark::new(0.5, 0.5).with_z(0.0);

/// Landmarks shared by all catalog poses: head, hips and legs.
const STANDING: [(PoseLandmark, f32, f32); 9] = [
    (PoseLandmark::Nose, 0.5, 0.15),
    (PoseLandmark::LeftShoulder, 0.4, 0.3),
    (PoseLandmark::RightShoulder, 0.6, 0.3),
    (PoseLandmark::LeftHip, 0.45, 0.6),
    (PoseLandmark::RightHip, 0.55, 0.6),
    (PoseLandmark::LeftKnee, 0.45, 0.75),
    (PoseLandmark::RightKnee, 0.55, 0.75),
    (PoseLandmark::LeftAnkle, 0.45, 0.9),
    (PoseLandmark::RightAnkle, 0.55, 0.9),
];

static CATALOG: LazyLock<Vec<ReferencePose>> = LazyLock::new(|| {
    vec![
        ReferencePose::build(
            "t-pose",
            "T-Pose",
            "Stretch both arms straight out to the sides",
            &[
                (PoseLandmark::LeftElbow, 0.25, 0.3),
                (PoseLandmark::RightElbow, 0.75, 0.3),
                (PoseLandmark::LeftWrist, 0.1, 0.3),
                (PoseLandmark::RightWrist, 0.9, 0.3),
            ],
        ),
        ReferencePose::build(
            "arms-up",
            "Victory",
            "Raise both arms overhead in a V",
            &[
                (PoseLandmark::LeftElbow, 0.3, 0.15),
                (PoseLandmark::RightElbow, 0.7, 0.15),
                (PoseLandmark::LeftWrist, 0.2, 0.02),
                (PoseLandmark::RightWrist, 0.8, 0.02),
            ],
        ),
        ReferencePose::build(
            "one-arm-up",
            "Reach",
            "Raise your left arm up and keep your right arm down",
            &[
                (PoseLandmark::LeftElbow, 0.38, 0.15),
                (PoseLandmark::RightElbow, 0.63, 0.45),
                (PoseLandmark::LeftWrist, 0.37, 0.02),
                (PoseLandmark::RightWrist, 0.64, 0.58),
            ],
        ),
    ]
});

impl ReferencePose {
    fn build(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        arms: &[(PoseLandmark, f32, f32)],
    ) -> Self {
        let mut landmarks = LandmarkSet::filled(POSE_LANDMARK_COUNT, NEUTRAL);
        for &(joint, x, y) in STANDING.iter().chain(arms) {
            landmarks.set(joint.index(), Landmark::new(x, y).with_z(0.0));
        }
        Self {
            id,
            name,
            description,
            landmarks,
        }
    }

    /// Every built-in reference pose.
    #[must_use]
    pub fn catalog() -> &'static [Self] {
        &CATALOG
    }

    /// Look up a reference pose by id (case-insensitive).
    #[must_use]
    pub fn find(id: &str) -> Option<&'static Self> {
        CATALOG.iter().find(|r| r.id.eq_ignore_ascii_case(id.trim()))
    }

    /// Wrap the landmarks as a [`Pose`] for APIs that take one.
    #[must_use]
    pub fn to_pose(&self) -> Pose {
        Pose::new(self.landmarks.clone())
    }
}
