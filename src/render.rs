// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Landmark-driven skeletal renderer.
//!
//! [`AvatarRenderer::compose`] turns one frame's [`Pose`] into an ordered list of
//! primitives; [`AvatarRenderer::render`] clears a [`Surface`] and draws them.
//! Draw order matters because later primitives occlude earlier ones:
//!
//! 1. torso (shoulder line, left torso, right torso, hip line)
//! 2. arms
//! 3. legs
//! 4. head
//! 5. joints
//! 6. extremities (hands, then feet)
//!
//! A limb, joint or hand point whose landmark is absent is skipped. The renderer
//! keeps no state between frames.

use crate::config::{Fidelity, RenderConfig};
use crate::landmarks::{HandLandmark, HandLandmarkSet, LandmarkSet, Pose, PoseLandmark, Side};
use crate::style::{AvatarStyle, Palette};
use crate::surface::{Point, Primitive, Surface};
use crate::utils::to_screen;
use crate::visualizer::Color;
use crate::visualizer::skeleton::{
    ARMS, FINGERS, FINGERTIPS, JOINTS, KNUCKLES, LEGS, Limb, MINIMAL_JOINTS, PALM, TORSO,
};

const TORSO_WIDTH: f32 = 12.0;
const ARM_WIDTH: f32 = 10.0;
const LEG_WIDTH: f32 = 12.0;
const JOINT_RADIUS: f32 = 7.0;
const WRIST_RADIUS: f32 = 8.0;
const FOOT_RADIUS: f32 = 10.0;
const THUMB_WIDTH: f32 = 5.0;
const FINGER_WIDTH: f32 = 3.5;
const HAND_MARKER_RADIUS: f32 = 3.0;
const SHADOW_OFFSET: f32 = 3.0;
const SHADOW_ALPHA: f32 = 0.3;
const GLOW_SCALE: f32 = 1.8;
const GLOW_ALPHA: f32 = 0.3;
const DEFAULT_HEAD_RADIUS: f32 = 35.0;
const MIN_HEAD_RADIUS: f32 = 18.0;
const MAX_HEAD_RADIUS: f32 = 90.0;
/// Head radius as a fraction of the projected shoulder width.
const HEAD_TO_SHOULDER: f32 = 0.4;

/// Neutral color for the minimal reference renderer.
const REFERENCE_COLOR: Color = Color(160, 174, 192);

/// Logical size the landmarks are projected onto for one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Canvas {
    width: u32,
    height: u32,
}

impl Canvas {
    fn point(self, set: &LandmarkSet, joint: PoseLandmark) -> Option<Point> {
        set.joint(joint).map(|lm| to_screen(lm, self.width, self.height))
    }

    fn hand_point(self, set: &HandLandmarkSet, point: HandLandmark) -> Option<Point> {
        set.hand_point(point).map(|lm| to_screen(lm, self.width, self.height))
    }
}

/// Renders stylized avatars from pose landmarks.
///
/// Landmarks are projected onto the size reported by the surface being drawn
/// on. The configured size is only used by the `compose*` methods, which have no
/// surface to ask.
#[derive(Debug, Clone, Default)]
pub struct AvatarRenderer {
    config: RenderConfig,
}

impl AvatarRenderer {
    /// Create a renderer with the given configuration.
    #[must_use]
    pub const fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Renderer configuration.
    #[must_use]
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Clear `surface` and draw the avatar for `pose`.
    ///
    /// A `None` pose, or one without landmarks, leaves the surface cleared and
    /// otherwise untouched.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, pose: Option<&Pose>, style: AvatarStyle) {
        let (width, height) = surface.size();
        surface.clear();
        for primitive in self.compose_sized(pose, style, width, height) {
            surface.draw(&primitive);
        }
    }

    /// Like [`render`](Self::render), selecting the style by id. Unknown ids use
    /// the default style.
    pub fn render_style_id<S: Surface + ?Sized>(&self, surface: &mut S, pose: Option<&Pose>, style_id: &str) {
        self.render(surface, pose, AvatarStyle::resolve(style_id));
    }

    /// Render onto a surface that may not be available. Without a surface this
    /// is a no-op.
    pub fn render_optional<S: Surface + ?Sized>(
        &self,
        surface: Option<&mut S>,
        pose: Option<&Pose>,
        style: AvatarStyle,
    ) {
        if let Some(surface) = surface {
            self.render(surface, pose, style);
        }
    }

    /// Build the primitives for one frame at the configured size.
    #[must_use]
    pub fn compose(&self, pose: Option<&Pose>, style: AvatarStyle) -> Vec<Primitive> {
        self.compose_sized(pose, style, self.config.width, self.config.height)
    }

    /// Build the primitives for one frame on a `width` x `height` surface.
    #[must_use]
    pub fn compose_sized(&self, pose: Option<&Pose>, style: AvatarStyle, width: u32, height: u32) -> Vec<Primitive> {
        let Some(pose) = pose.filter(|p| !p.is_empty()) else {
            return Vec::new();
        };
        let canvas = Canvas { width, height };
        let palette = style.palette();
        let body = &pose.landmarks;
        let mut out = Vec::new();

        for limb in TORSO {
            self.limb(&mut out, canvas, body, limb, TORSO_WIDTH, palette);
        }
        for limb in ARMS {
            self.limb(&mut out, canvas, body, limb, ARM_WIDTH, palette);
        }
        for limb in LEGS {
            self.limb(&mut out, canvas, body, limb, LEG_WIDTH, palette);
        }

        if let Some(center) = canvas.point(body, PoseLandmark::Nose) {
            out.extend(style.head(center, self.head_radius(canvas, body), self.config.fidelity));
        }

        for joint in JOINTS {
            if let Some(center) = canvas.point(body, joint) {
                self.joint(&mut out, center, JOINT_RADIUS, palette.accent);
            }
        }

        for side in [Side::Left, Side::Right] {
            let hand = pose
                .hand(side)
                .filter(|hand| self.config.draw_hands && hand.present_count() > 0);
            match hand {
                Some(hand) => Self::hand(&mut out, canvas, hand, palette),
                None => {
                    if let Some(center) = canvas.point(body, side.wrist()) {
                        self.joint(&mut out, center, WRIST_RADIUS, palette.skin);
                    }
                }
            }
        }
        for side in [Side::Left, Side::Right] {
            if let Some(center) = canvas.point(body, side.ankle()) {
                self.joint(&mut out, center, FOOT_RADIUS, palette.secondary);
            }
        }

        out
    }

    /// Build a low-fidelity figure of a target pose at the configured size: flat
    /// limbs, a plain head circle and joints including wrists, all in one
    /// neutral color.
    #[must_use]
    pub fn compose_reference(&self, landmarks: &LandmarkSet) -> Vec<Primitive> {
        self.reference_figure(
            Canvas {
                width: self.config.width,
                height: self.config.height,
            },
            landmarks,
        )
    }

    /// Clear `surface` and draw the minimal reference figure.
    pub fn render_reference<S: Surface + ?Sized>(&self, surface: &mut S, landmarks: &LandmarkSet) {
        let (width, height) = surface.size();
        surface.clear();
        for primitive in self.reference_figure(Canvas { width, height }, landmarks) {
            surface.draw(&primitive);
        }
    }

    fn reference_figure(&self, canvas: Canvas, landmarks: &LandmarkSet) -> Vec<Primitive> {
        let mut out = Vec::new();
        for (a, b) in TORSO.iter().chain(&ARMS).chain(&LEGS) {
            if let (Some(from), Some(to)) = (canvas.point(landmarks, *a), canvas.point(landmarks, *b)) {
                out.push(Primitive::stroke(from, to, ARM_WIDTH * 0.6, REFERENCE_COLOR));
            }
        }
        if let Some(center) = canvas.point(landmarks, PoseLandmark::Nose) {
            out.push(Primitive::circle(center, self.head_radius(canvas, landmarks) * 0.8, REFERENCE_COLOR));
        }
        for joint in MINIMAL_JOINTS {
            if let Some(center) = canvas.point(landmarks, joint) {
                out.push(Primitive::circle(center, JOINT_RADIUS * 0.7, Color::WHITE));
            }
        }
        out
    }

    /// Head radius from the projected shoulder width, or a fixed default when a
    /// shoulder is missing.
    fn head_radius(&self, canvas: Canvas, body: &LandmarkSet) -> f32 {
        let base = match (
            canvas.point(body, PoseLandmark::LeftShoulder),
            canvas.point(body, PoseLandmark::RightShoulder),
        ) {
            (Some(l), Some(r)) => {
                (l.distance(r) * HEAD_TO_SHOULDER).clamp(MIN_HEAD_RADIUS, MAX_HEAD_RADIUS)
            }
            _ => DEFAULT_HEAD_RADIUS,
        };
        base * self.config.head_scale
    }

    fn limb(
        &self,
        out: &mut Vec<Primitive>,
        canvas: Canvas,
        body: &LandmarkSet,
        (a, b): Limb,
        width: f32,
        palette: Palette,
    ) {
        let (Some(from), Some(to)) = (canvas.point(body, a), canvas.point(body, b)) else {
            return;
        };
        match self.config.fidelity {
            Fidelity::Basic => out.push(Primitive::stroke(from, to, width, palette.primary)),
            Fidelity::Enhanced => {
                let shadow = (
                    from.offset(SHADOW_OFFSET, SHADOW_OFFSET),
                    to.offset(SHADOW_OFFSET, SHADOW_OFFSET),
                );
                out.push(
                    Primitive::stroke(shadow.0, shadow.1, width, Color::BLACK).with_alpha(SHADOW_ALPHA),
                );
                out.push(
                    Primitive::stroke(from, to, width, palette.primary).with_gradient(palette.secondary),
                );
            }
        }
    }

    fn joint(&self, out: &mut Vec<Primitive>, center: Point, radius: f32, color: Color) {
        if self.config.fidelity == Fidelity::Enhanced {
            out.push(Primitive::circle(center, radius * GLOW_SCALE, color).with_alpha(GLOW_ALPHA));
        }
        out.push(Primitive::circle(center, radius, color));
    }

    fn hand(out: &mut Vec<Primitive>, canvas: Canvas, hand: &HandLandmarkSet, palette: Palette) {
        // The palm is drawn only when every vertex is present.
        let palm: Option<Vec<Point>> = PALM.iter().map(|p| canvas.hand_point(hand, *p)).collect();
        if let Some(palm) = palm {
            out.push(Primitive::polygon(palm, palette.skin));
        }

        for (i, chain) in FINGERS.iter().enumerate() {
            let width = if i == 0 { THUMB_WIDTH } else { FINGER_WIDTH };
            for pair in chain.windows(2) {
                if let (Some(from), Some(to)) =
                    (canvas.hand_point(hand, pair[0]), canvas.hand_point(hand, pair[1]))
                {
                    out.push(Primitive::stroke(from, to, width, palette.skin));
                }
            }
        }

        for point in FINGERTIPS {
            if let Some(center) = canvas.hand_point(hand, point) {
                out.push(Primitive::circle(center, HAND_MARKER_RADIUS, palette.accent));
            }
        }
        for point in KNUCKLES {
            if let Some(center) = canvas.hand_point(hand, point) {
                out.push(Primitive::circle(center, HAND_MARKER_RADIUS * 0.8, palette.primary));
            }
        }
    }
}
