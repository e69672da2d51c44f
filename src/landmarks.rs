// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Landmark data types shared by the renderer and the scorer.
//!
//! Landmarks arrive from an upstream pose/hand detector as normalized image
//! coordinates. Index numbering is fixed by that detector: body sets carry 33
//! points and hand sets carry 21. The [`PoseLandmark`] and [`HandLandmark`]
//! enums name every index so drawing and scoring code never uses raw numbers.

use serde::{Deserialize, Serialize};

/// Number of landmarks in a body set.
pub const POSE_LANDMARK_COUNT: usize = 33;

/// Number of landmarks in a hand set.
pub const HAND_LANDMARK_COUNT: usize = 21;

/// A single normalized anatomical point.
///
/// `x` and `y` are in `[0, 1]` relative to the frame width and height. `z` is an
/// arbitrary-scale depth and `visibility` a confidence in `[0, 1]`; both may be
/// absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Normalized horizontal position.
    pub x: f32,
    /// Normalized vertical position.
    pub y: f32,
    /// Normalized depth, if the detector reported one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f32>,
    /// Detector confidence that the point is observed rather than guessed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f32>,
}

impl Landmark {
    /// Create a planar landmark with no depth and full confidence.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            z: None,
            visibility: None,
        }
    }

    /// Set the depth coordinate.
    #[must_use]
    pub const fn with_z(mut self, z: f32) -> Self {
        self.z = Some(z);
        self
    }

    /// Set the visibility value.
    #[must_use]
    pub const fn with_visibility(mut self, visibility: f32) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Depth, treating a missing value as `0.0`.
    #[must_use]
    pub fn depth(&self) -> f32 {
        self.z.unwrap_or(0.0)
    }

    /// Visibility, treating a missing value as full confidence.
    #[must_use]
    pub fn confidence(&self) -> f32 {
        self.visibility.unwrap_or(1.0)
    }
}

/// An ordered landmark sequence for one body or one hand in one frame.
///
/// Entries may be `None` (serialized as `null`) and the sequence may be shorter
/// than the detector contract. Both cases read as "absent" through [`get`].
///
/// [`get`]: LandmarkSet::get
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkSet(Vec<Option<Landmark>>);

/// A 21-point hand landmark set. Shares the representation of body sets.
pub type HandLandmarkSet = LandmarkSet;

impl LandmarkSet {
    /// Create a set from fully populated landmarks.
    #[must_use]
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self(landmarks.into_iter().map(Some).collect())
    }

    /// Create a set that may contain missing entries.
    #[must_use]
    pub const fn from_optional(landmarks: Vec<Option<Landmark>>) -> Self {
        Self(landmarks)
    }

    /// Create a set of `len` copies of one landmark.
    #[must_use]
    pub fn filled(len: usize, landmark: Landmark) -> Self {
        Self(vec![Some(landmark); len])
    }

    /// Landmark at `index`, or `None` if it is out of range or missing.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.0.get(index).and_then(Option::as_ref)
    }

    /// Landmark for a named body joint.
    #[must_use]
    pub fn joint(&self, joint: PoseLandmark) -> Option<&Landmark> {
        self.get(joint.index())
    }

    /// Landmark for a named hand point.
    #[must_use]
    pub fn hand_point(&self, point: HandLandmark) -> Option<&Landmark> {
        self.get(point.index())
    }

    /// Replace the landmark at `index`, growing the set with `None` if needed.
    pub fn set(&mut self, index: usize, landmark: Landmark) {
        if index >= self.0.len() {
            self.0.resize(index + 1, None);
        }
        self.0[index] = Some(landmark);
    }

    /// Number of entries, including missing ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the set has no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of entries that are present.
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.0.iter().filter(|l| l.is_some()).count()
    }

    /// Iterate over all entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&Landmark>> {
        self.0.iter().map(Option::as_ref)
    }
}

/// Which hand a [`HandLandmarkSet`] belongs to, as labelled upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The subject's left side.
    Left,
    /// The subject's right side.
    Right,
}

impl Side {
    /// Body wrist index for this side.
    #[must_use]
    pub const fn wrist(self) -> PoseLandmark {
        match self {
            Self::Left => PoseLandmark::LeftWrist,
            Self::Right => PoseLandmark::RightWrist,
        }
    }

    /// Body ankle index for this side.
    #[must_use]
    pub const fn ankle(self) -> PoseLandmark {
        match self {
            Self::Left => PoseLandmark::LeftAnkle,
            Self::Right => PoseLandmark::RightAnkle,
        }
    }
}

/// One detection cycle's output for a single person.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pose {
    /// Normalized body landmarks.
    #[serde(default)]
    pub landmarks: LandmarkSet,
    /// World-space body landmarks, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world_landmarks: Option<LandmarkSet>,
    /// Left hand landmarks, if a left hand was detected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_hand: Option<HandLandmarkSet>,
    /// Right hand landmarks, if a right hand was detected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_hand: Option<HandLandmarkSet>,
}

impl Pose {
    /// Create a pose from body landmarks only.
    #[must_use]
    pub fn new(landmarks: LandmarkSet) -> Self {
        Self {
            landmarks,
            ..Self::default()
        }
    }

    /// Attach a hand set for one side.
    #[must_use]
    pub fn with_hand(mut self, side: Side, hand: HandLandmarkSet) -> Self {
        match side {
            Side::Left => self.left_hand = Some(hand),
            Side::Right => self.right_hand = Some(hand),
        }
        self
    }

    /// Hand set for one side.
    #[must_use]
    pub const fn hand(&self, side: Side) -> Option<&HandLandmarkSet> {
        match side {
            Side::Left => self.left_hand.as_ref(),
            Side::Right => self.right_hand.as_ref(),
        }
    }

    /// Check if there is nothing to draw or score.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }
}

macro_rules! landmark_names {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident { $($variant:ident = $idx:expr => $label:literal,)* }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                #[doc = $label]
                $variant = $idx,
            )*
        }

        impl $name {
            /// Every named point in index order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Position of this point in the detector's landmark array.
            #[must_use]
            pub const fn index(self) -> usize {
                self as usize
            }

            /// Snake-case anatomical name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)*
                }
            }

            /// Look up a point by array position.
            #[must_use]
            pub fn from_index(index: usize) -> Option<Self> {
                Self::ALL.get(index).copied()
            }
        }
    };
}

landmark_names! {
    /// Body landmark numbering used by the upstream pose detector.
    pub enum PoseLandmark {
        Nose = 0 => "nose",
        LeftEyeInner = 1 => "left_eye_inner",
        LeftEye = 2 => "left_eye",
        LeftEyeOuter = 3 => "left_eye_outer",
        RightEyeInner = 4 => "right_eye_inner",
        RightEye = 5 => "right_eye",
        RightEyeOuter = 6 => "right_eye_outer",
        LeftEar = 7 => "left_ear",
        RightEar = 8 => "right_ear",
        MouthLeft = 9 => "mouth_left",
        MouthRight = 10 => "mouth_right",
        LeftShoulder = 11 => "left_shoulder",
        RightShoulder = 12 => "right_shoulder",
        LeftElbow = 13 => "left_elbow",
        RightElbow = 14 => "right_elbow",
        LeftWrist = 15 => "left_wrist",
        RightWrist = 16 => "right_wrist",
        LeftPinky = 17 => "left_pinky",
        RightPinky = 18 => "right_pinky",
        LeftIndex = 19 => "left_index",
        RightIndex = 20 => "right_index",
        LeftThumb = 21 => "left_thumb",
        RightThumb = 22 => "right_thumb",
        LeftHip = 23 => "left_hip",
        RightHip = 24 => "right_hip",
        LeftKnee = 25 => "left_knee",
        RightKnee = 26 => "right_knee",
        LeftAnkle = 27 => "left_ankle",
        RightAnkle = 28 => "right_ankle",
        LeftHeel = 29 => "left_heel",
        RightHeel = 30 => "right_heel",
        LeftFootIndex = 31 => "left_foot_index",
        RightFootIndex = 32 => "right_foot_index",
    }
}

landmark_names! {
    /// Hand landmark numbering used by the upstream hand detector.
    pub enum HandLandmark {
        Wrist = 0 => "wrist",
        ThumbCmc = 1 => "thumb_cmc",
        ThumbMcp = 2 => "thumb_mcp",
        ThumbIp = 3 => "thumb_ip",
        ThumbTip = 4 => "thumb_tip",
        IndexMcp = 5 => "index_finger_mcp",
        IndexPip = 6 => "index_finger_pip",
        IndexDip = 7 => "index_finger_dip",
        IndexTip = 8 => "index_finger_tip",
        MiddleMcp = 9 => "middle_finger_mcp",
        MiddlePip = 10 => "middle_finger_pip",
        MiddleDip = 11 => "middle_finger_dip",
        MiddleTip = 12 => "middle_finger_tip",
        RingMcp = 13 => "ring_finger_mcp",
        RingPip = 14 => "ring_finger_pip",
        RingDip = 15 => "ring_finger_dip",
        RingTip = 16 => "ring_finger_tip",
        PinkyMcp = 17 => "pinky_mcp",
        PinkyPip = 18 => "pinky_pip",
        PinkyDip = 19 => "pinky_dip",
        PinkyTip = 20 => "pinky_tip",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_tables_are_complete() {
        assert_eq!(PoseLandmark::ALL.len(), POSE_LANDMARK_COUNT);
        assert_eq!(HandLandmark::ALL.len(), HAND_LANDMARK_COUNT);
        for (i, joint) in PoseLandmark::ALL.iter().enumerate() {
            assert_eq!(joint.index(), i);
        }
        for (i, point) in HandLandmark::ALL.iter().enumerate() {
            assert_eq!(point.index(), i);
        }
    }

    #[test]
    fn test_named_indices() {
        assert_eq!(PoseLandmark::Nose.index(), 0);
        assert_eq!(PoseLandmark::LeftShoulder.index(), 11);
        assert_eq!(PoseLandmark::RightAnkle.index(), 28);
        assert_eq!(PoseLandmark::from_index(15), Some(PoseLandmark::LeftWrist));
        assert_eq!(PoseLandmark::from_index(33), None);
        assert_eq!(PoseLandmark::RightHip.name(), "right_hip");
        assert_eq!(HandLandmark::PinkyTip.index(), 20);
        assert_eq!(HandLandmark::IndexMcp.name(), "index_finger_mcp");
    }

    #[test]
    fn test_landmark_defaults() {
        let lm = Landmark::new(0.2, 0.4);
        assert!((lm.confidence() - 1.0).abs() < f32::EPSILON);
        assert!(lm.depth().abs() < f32::EPSILON);

        let lm = lm.with_z(-0.1).with_visibility(0.3);
        assert!((lm.depth() + 0.1).abs() < f32::EPSILON);
        assert!((lm.confidence() - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn test_missing_entries_read_as_absent() {
        let set = LandmarkSet::from_optional(vec![Some(Landmark::new(0.5, 0.5)), None]);
        assert!(set.get(0).is_some());
        assert!(set.get(1).is_none());
        assert!(set.get(40).is_none());
        assert_eq!(set.len(), 2);
        assert_eq!(set.present_count(), 1);
    }

    #[test]
    fn test_set_grows() {
        let mut set = LandmarkSet::default();
        set.set(PoseLandmark::LeftElbow.index(), Landmark::new(0.1, 0.1));
        assert_eq!(set.len(), 14);
        assert!(set.joint(PoseLandmark::LeftElbow).is_some());
        assert!(set.joint(PoseLandmark::Nose).is_none());
    }

    #[test]
    fn test_pose_json() {
        let json = r#"{
            "landmarks": [{"x": 0.5, "y": 0.2, "visibility": 0.9}, null],
            "rightHand": [{"x": 0.6, "y": 0.5, "z": 0.01}]
        }"#;
        let pose: Pose = serde_json::from_str(json).unwrap();
        assert_eq!(pose.landmarks.len(), 2);
        assert!(pose.landmarks.get(1).is_none());
        assert!(pose.hand(Side::Left).is_none());
        let hand = pose.hand(Side::Right).unwrap();
        assert!((hand.get(0).unwrap().depth() - 0.01).abs() < f32::EPSILON);
        assert!(pose.world_landmarks.is_none());
    }

    #[test]
    fn test_side_lookup() {
        assert_eq!(Side::Left.wrist(), PoseLandmark::LeftWrist);
        assert_eq!(Side::Right.ankle(), PoseLandmark::RightAnkle);
    }
}
