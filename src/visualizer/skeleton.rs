// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use crate::landmarks::{HandLandmark, PoseLandmark};

/// A limb drawn as one stroke between two body landmarks.
pub type Limb = (PoseLandmark, PoseLandmark);

/// Torso limbs, in draw order: shoulder line, left torso, right torso, hip line.
pub const TORSO: [Limb; 4] = [
    (PoseLandmark::LeftShoulder, PoseLandmark::RightShoulder),
    (PoseLandmark::LeftShoulder, PoseLandmark::LeftHip),
    (PoseLandmark::RightShoulder, PoseLandmark::RightHip),
    (PoseLandmark::LeftHip, PoseLandmark::RightHip),
];

/// Arm limbs: left upper arm, left forearm, right upper arm, right forearm.
pub const ARMS: [Limb; 4] = [
    (PoseLandmark::LeftShoulder, PoseLandmark::LeftElbow),
    (PoseLandmark::LeftElbow, PoseLandmark::LeftWrist),
    (PoseLandmark::RightShoulder, PoseLandmark::RightElbow),
    (PoseLandmark::RightElbow, PoseLandmark::RightWrist),
];

/// Leg limbs: left thigh, left shin, right thigh, right shin.
pub const LEGS: [Limb; 4] = [
    (PoseLandmark::LeftHip, PoseLandmark::LeftKnee),
    (PoseLandmark::LeftKnee, PoseLandmark::LeftAnkle),
    (PoseLandmark::RightHip, PoseLandmark::RightKnee),
    (PoseLandmark::RightKnee, PoseLandmark::RightAnkle),
];

/// Joints marked on the full avatar. Wrists and ankles are also drawn as
/// extremities.
pub const JOINTS: [PoseLandmark; 10] = [
    PoseLandmark::LeftShoulder,
    PoseLandmark::RightShoulder,
    PoseLandmark::LeftElbow,
    PoseLandmark::RightElbow,
    PoseLandmark::LeftHip,
    PoseLandmark::RightHip,
    PoseLandmark::LeftKnee,
    PoseLandmark::RightKnee,
    PoseLandmark::LeftAnkle,
    PoseLandmark::RightAnkle,
];

/// Joints marked by the minimal reference renderer.
pub const MINIMAL_JOINTS: [PoseLandmark; 12] = [
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

/// Palm outline: wrist followed by the four base knuckles.
pub const PALM: [HandLandmark; 5] = [
    HandLandmark::Wrist,
    HandLandmark::IndexMcp,
    HandLandmark::MiddleMcp,
    HandLandmark::RingMcp,
    HandLandmark::PinkyMcp,
];

/// Finger chains from the wrist to each fingertip (4 segments each), thumb first.
pub const FINGERS: [[HandLandmark; 5]; 5] = [
    [
        HandLandmark::Wrist,
        HandLandmark::ThumbCmc,
        HandLandmark::ThumbMcp,
        HandLandmark::ThumbIp,
        HandLandmark::ThumbTip,
    ],
    [
        HandLandmark::Wrist,
        HandLandmark::IndexMcp,
        HandLandmark::IndexPip,
        HandLandmark::IndexDip,
        HandLandmark::IndexTip,
    ],
    [
        HandLandmark::Wrist,
        HandLandmark::MiddleMcp,
        HandLandmark::MiddlePip,
        HandLandmark::MiddleDip,
        HandLandmark::MiddleTip,
    ],
    [
        HandLandmark::Wrist,
        HandLandmark::RingMcp,
        HandLandmark::RingPip,
        HandLandmark::RingDip,
        HandLandmark::RingTip,
    ],
    [
        HandLandmark::Wrist,
        HandLandmark::PinkyMcp,
        HandLandmark::PinkyPip,
        HandLandmark::PinkyDip,
        HandLandmark::PinkyTip,
    ],
];

/// Fingertip markers.
pub const FINGERTIPS: [HandLandmark; 5] = [
    HandLandmark::ThumbTip,
    HandLandmark::IndexTip,
    HandLandmark::MiddleTip,
    HandLandmark::RingTip,
    HandLandmark::PinkyTip,
];

/// Base knuckle markers.
pub const KNUCKLES: [HandLandmark; 5] = [
    HandLandmark::ThumbCmc,
    HandLandmark::IndexMcp,
    HandLandmark::MiddleMcp,
    HandLandmark::RingMcp,
    HandLandmark::PinkyMcp,
];
