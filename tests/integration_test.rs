// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Integration tests for the avatar library

use ultralytics_avatar::{
    AvatarRenderer, AvatarStyle, Feedback, Fidelity, Landmark, LandmarkSet, Point, Pose, PoseLandmark,
    PoseScorer, Primitive, RecordingSurface, ReferencePose, Side, Surface, score, should_celebrate,
};

fn t_pose() -> LandmarkSet {
    ReferencePose::find("t-pose").unwrap().landmarks.clone()
}

fn without(set: &LandmarkSet, joint: PoseLandmark) -> LandmarkSet {
    let mut entries: Vec<Option<Landmark>> = set.iter().map(|lm| lm.copied()).collect();
    entries[joint.index()] = None;
    LandmarkSet::from_optional(entries)
}

fn recorded(pose: Option<&Pose>, style: AvatarStyle) -> RecordingSurface {
    let mut surface = RecordingSurface::new(640, 480);
    AvatarRenderer::default().render(&mut surface, pose, style);
    surface
}

#[test]
fn test_missing_elbow_skips_only_its_limbs() {
    let full = recorded(Some(&Pose::new(t_pose())), AvatarStyle::Human);
    let partial = recorded(
        Some(&Pose::new(without(&t_pose(), PoseLandmark::LeftElbow))),
        AvatarStyle::Human,
    );

    // Upper arm and forearm go, along with the elbow joint marker.
    assert_eq!(full.count("stroke") - partial.count("stroke"), 2);
    assert_eq!(full.count("circle") - partial.count("circle"), 1);
}

#[test]
fn test_short_landmark_set_draws_what_it_can() {
    let short: Vec<Landmark> = t_pose().iter().take(13).map(|lm| *lm.unwrap()).collect();
    let surface = recorded(Some(&Pose::new(LandmarkSet::new(short))), AvatarStyle::Dog);
    assert!(!surface.is_blank());

    let full = recorded(Some(&Pose::new(t_pose())), AvatarStyle::Dog);
    assert!(surface.primitives.len() < full.primitives.len());
}

#[test]
fn test_null_pose_only_clears() {
    let mut surface = RecordingSurface::new(640, 480);
    let renderer = AvatarRenderer::default();
    renderer.render(&mut surface, Some(&Pose::new(t_pose())), AvatarStyle::Bird);
    assert!(!surface.is_blank());

    renderer.render(&mut surface, None, AvatarStyle::Bird);
    assert!(surface.is_blank());
    assert_eq!(surface.clears, 2);
}

#[test]
fn test_unknown_style_matches_default() {
    let pose = Pose::new(t_pose());
    let renderer = AvatarRenderer::default();

    let mut unknown = RecordingSurface::new(640, 480);
    renderer.render_style_id(&mut unknown, Some(&pose), "unicorn");
    let default = recorded(Some(&pose), AvatarStyle::default());

    assert_eq!(unknown.primitives, default.primitives);
}

#[test]
fn test_styles_differ() {
    let pose = Pose::new(t_pose());
    let monkey = recorded(Some(&pose), AvatarStyle::Monkey);
    let cat = recorded(Some(&pose), AvatarStyle::Cat);
    assert_ne!(monkey.primitives, cat.primitives);
}

#[test]
fn test_hand_replaces_wrist_marker() {
    let body = t_pose();
    let wrist = *body.joint(PoseLandmark::LeftWrist).unwrap();
    let hand = LandmarkSet::new(
        (0..21u8)
            .map(|i| Landmark::new(wrist.x - 0.002 * f32::from(i), wrist.y + 0.001 * f32::from(i)))
            .collect(),
    );
    let bare = recorded(Some(&Pose::new(body.clone())), AvatarStyle::Monkey);
    let with_hand = recorded(
        Some(&Pose::new(body).with_hand(Side::Left, hand)),
        AvatarStyle::Monkey,
    );
    assert!(with_hand.count("polygon") > bare.count("polygon"));
    assert!(with_hand.primitives.len() > bare.primitives.len());
}

#[test]
fn test_identical_poses_score_100() {
    for reference in ReferencePose::catalog() {
        assert_eq!(score(&reference.landmarks, &reference.landmarks), 100, "{}", reference.id);
    }
}

#[test]
fn test_score_is_symmetric() {
    let live = ReferencePose::find("one-arm-up").unwrap();
    let target = ReferencePose::find("arms-up").unwrap();
    assert_eq!(
        score(&live.landmarks, &target.landmarks),
        score(&target.landmarks, &live.landmarks)
    );
}

#[test]
fn test_displaced_by_scale_scores_zero() {
    let reference = t_pose();
    let mut live = reference.clone();
    for (i, lm) in reference.iter().enumerate() {
        if let Some(lm) = lm {
            live.set(i, Landmark::new(lm.x + 0.3, lm.y).with_z(0.0));
        }
    }
    assert_eq!(score(&live, &reference), 0);
}

#[test]
fn test_low_visibility_is_ignored() {
    let reference = t_pose();
    let mut live = LandmarkSet::default();
    for (i, lm) in reference.iter().enumerate() {
        if let Some(lm) = lm {
            live.set(i, lm.with_visibility(0.2));
        }
    }
    // No eligible joints at all.
    assert_eq!(score(&live, &reference), 0);
    assert!(PoseScorer::default().joint_similarities(&live, &reference).is_empty());
}

#[test]
fn test_celebration_boundary() {
    assert!(!should_celebrate(84));
    assert!(should_celebrate(85));
}

#[test]
fn test_feedback_bands() {
    assert_eq!(Feedback::from_score(90), Feedback::Exact);
    assert_eq!(Feedback::from_score(89), Feedback::Strong);
    assert_eq!(Feedback::from_score(60), Feedback::Moderate);
    assert_eq!(Feedback::from_score(39), Feedback::Mismatch);
}

#[test]
fn test_pose_json_drives_renderer() {
    let json = r#"{
        "landmarks": [{"x": 0.5, "y": 0.15, "z": -0.1, "visibility": 0.99}],
        "rightHand": null
    }"#;
    let pose: Pose = serde_json::from_str(json).unwrap();
    assert!(pose.right_hand.is_none());

    let mut surface = RecordingSurface::new(320, 240);
    AvatarRenderer::default().render(&mut surface, Some(&pose), AvatarStyle::Human);
    // Nose only: the head is drawn, no limb has both endpoints.
    assert_eq!(surface.size(), (320, 240));
    assert!(!surface.is_blank());
    // Projected onto the 320x240 surface, not the configured 640x480.
    let head = AvatarStyle::Human.head(Point::new(160.0, 36.0), 35.0, Fidelity::Basic);
    assert_eq!(surface.primitives, head);
}

#[test]
fn test_figure_fits_smaller_surface() {
    let pose = Pose::new(t_pose());
    let renderer = AvatarRenderer::default();
    for (width, height) in [(320, 240), (1280, 720)] {
        let mut surface = RecordingSurface::new(width, height);
        renderer.render(&mut surface, Some(&pose), AvatarStyle::Cat);
        #[allow(clippy::cast_precision_loss)]
        let (w, h) = (width as f32, height as f32);
        for primitive in &surface.primitives {
            let inside = |p: &Point| p.x >= 0.0 && p.x <= w && p.y >= 0.0 && p.y <= h;
            match primitive {
                Primitive::Circle { center, .. } => assert!(inside(center), "{primitive:?}"),
                Primitive::Stroke { from, to, .. } => {
                    assert!(inside(from) && inside(to), "{primitive:?}");
                }
                _ => {}
            }
        }
    }
}

#[test]
fn test_empty_hand_falls_back_to_wrist_marker() {
    let bare = recorded(Some(&Pose::new(t_pose())), AvatarStyle::Monkey);
    let empty_hand = recorded(
        Some(&Pose::new(t_pose()).with_hand(Side::Left, LandmarkSet::default())),
        AvatarStyle::Monkey,
    );
    assert_eq!(empty_hand.primitives, bare.primitives);

    let pose: Pose = serde_json::from_str(r#"{"landmarks": [{"x": 0.5, "y": 0.5}], "leftHand": []}"#).unwrap();
    assert!(pose.left_hand.is_some());
}
