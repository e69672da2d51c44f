// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Per-style head drawing routines.
//!
//! Every routine is a pure function of [`HeadParams`] and returns primitives in
//! back-to-front order. Offsets are expressed as fractions of the head radius so
//! the head scales with the figure.

use std::f32::consts::PI;

use crate::config::Fidelity;
use crate::style::Palette;
use crate::surface::{Point, Primitive};
use crate::utils::arc_points;
use crate::visualizer::Color;

/// Geometry and paint handed to a head routine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadParams {
    /// Head center in surface coordinates.
    pub center: Point,
    /// Head radius in pixels.
    pub size: f32,
    /// Style palette.
    pub palette: Palette,
    /// Eye detail level.
    pub fidelity: Fidelity,
}

impl HeadParams {
    /// Point offset from the center by fractions of the head radius.
    fn at(&self, fx: f32, fy: f32) -> Point {
        self.center.offset(fx * self.size, fy * self.size)
    }

    /// Length as a fraction of the head radius.
    fn len(&self, fraction: f32) -> f32 {
        fraction * self.size
    }

    /// Outline width that stays visible on small heads.
    fn line_width(&self) -> f32 {
        self.len(0.06).max(1.5)
    }
}

/// Eye placement for [`eyes`].
struct EyeLayout {
    spacing: f32,
    height: f32,
    radius: f32,
    iris: Color,
}

/// A pair of eyes: flat dots in basic fidelity, white/iris/pupil/highlight
/// layers in enhanced fidelity.
fn eyes(p: &HeadParams, layout: &EyeLayout) -> Vec<Primitive> {
    let mut out = Vec::new();
    for side in [-1.0, 1.0] {
        let c = p.at(side * layout.spacing, layout.height);
        let r = p.len(layout.radius);
        match p.fidelity {
            Fidelity::Basic => out.push(Primitive::circle(c, r, Color::INK)),
            Fidelity::Enhanced => {
                out.push(Primitive::circle(c, r * 1.5, Color::WHITE));
                out.push(Primitive::circle(c, r, layout.iris));
                out.push(Primitive::circle(c, r * 0.55, Color::INK));
                out.push(Primitive::circle(c.offset(-r * 0.3, -r * 0.3), r * 0.3, Color::WHITE));
            }
        }
    }
    out
}

/// Downward-curving smile centered at `(0, fy)`.
fn smile(p: &HeadParams, fy: f32, radius: f32, color: Color) -> Primitive {
    let points = arc_points(p.at(0.0, fy), p.len(radius), PI * 0.15, PI * 0.85, 10);
    Primitive::polyline(points, p.line_width(), color)
}

/// Triangle shrunk towards its centroid by `factor`.
fn inset(points: &[Point; 3], factor: f32) -> Vec<Point> {
    let cx = (points[0].x + points[1].x + points[2].x) / 3.0;
    let cy = (points[0].y + points[1].y + points[2].y) / 3.0;
    let centroid = Point::new(cx, cy);
    points.iter().map(|pt| centroid.lerp(*pt, factor)).collect()
}

/// Primate head: round ears, muzzle, nostrils and a grin.
#[must_use]
pub fn monkey(p: &HeadParams) -> Vec<Primitive> {
    let pal = p.palette;
    let mut out = Vec::new();
    for side in [-1.0, 1.0] {
        out.push(Primitive::circle(p.at(side * 0.95, -0.1), p.len(0.38), pal.primary));
        out.push(Primitive::circle(p.at(side * 0.95, -0.1), p.len(0.22), pal.skin));
    }
    out.push(Primitive::circle(p.center, p.size, pal.primary));
    out.push(Primitive::ellipse(p.at(0.0, 0.15), p.len(0.7), p.len(0.6), 0.0, pal.skin));
    out.extend(eyes(
        p,
        &EyeLayout {
            spacing: 0.3,
            height: -0.1,
            radius: 0.12,
            iris: pal.secondary,
        },
    ));
    for side in [-1.0, 1.0] {
        out.push(Primitive::circle(p.at(side * 0.08, 0.25), p.len(0.04), Color::INK));
    }
    out.push(smile(p, 0.3, 0.25, Color::INK));
    out
}

/// Human head: hair silhouette, ears, nose and lips.
#[must_use]
pub fn human(p: &HeadParams) -> Vec<Primitive> {
    let pal = p.palette;
    let mut out = vec![Primitive::ellipse(
        p.at(0.0, -0.3),
        p.len(1.08),
        p.len(0.8),
        0.0,
        pal.secondary,
    )];
    for side in [-1.0, 1.0] {
        out.push(Primitive::circle(p.at(side * 0.98, 0.05), p.len(0.18), pal.skin));
    }
    out.push(Primitive::circle(p.center, p.size, pal.skin));
    out.push(Primitive::ellipse(p.at(0.0, -0.72), p.len(0.85), p.len(0.33), 0.0, pal.secondary));
    out.extend(eyes(
        p,
        &EyeLayout {
            spacing: 0.35,
            height: -0.05,
            radius: 0.1,
            iris: pal.primary,
        },
    ));
    out.push(Primitive::circle(p.at(0.0, 0.15), p.len(0.07), pal.skin.lerp(Color::INK, 0.25)));
    out.push(smile(p, 0.25, 0.28, pal.accent));
    out
}

/// Feline head: triangular ears with inner-ear detail, muzzle, nose and whiskers.
#[must_use]
pub fn cat(p: &HeadParams) -> Vec<Primitive> {
    let pal = p.palette;
    let mut out = Vec::new();
    for side in [-1.0, 1.0] {
        let ear = [p.at(side * 0.9, -0.3), p.at(side * 0.75, -1.25), p.at(side * 0.2, -0.85)];
        out.push(Primitive::polygon(ear.to_vec(), pal.primary));
        out.push(Primitive::polygon(inset(&ear, 0.55), pal.accent));
    }
    out.push(Primitive::circle(p.center, p.size, pal.primary));
    out.push(Primitive::ellipse(p.at(0.0, 0.35), p.len(0.45), p.len(0.3), 0.0, pal.skin));
    out.extend(eyes(
        p,
        &EyeLayout {
            spacing: 0.38,
            height: -0.1,
            radius: 0.14,
            iris: Color::new(124, 200, 60),
        },
    ));
    out.push(Primitive::polygon(
        vec![p.at(-0.1, 0.18), p.at(0.1, 0.18), p.at(0.0, 0.3)],
        pal.accent,
    ));
    for side in [-1.0, 1.0] {
        for k in 0..3 {
            #[allow(clippy::cast_precision_loss)]
            let k = k as f32;
            out.push(
                Primitive::stroke(
                    p.at(side * 0.25, k.mul_add(0.08, 0.3)),
                    p.at(side * 1.05, k.mul_add(0.15, 0.18)),
                    1.5,
                    Color::INK,
                )
                .with_alpha(0.8),
            );
        }
    }
    out.push(smile(p, 0.32, 0.15, Color::INK));
    out
}

/// Canine head: snout, floppy ears, nose and tongue.
#[must_use]
pub fn dog(p: &HeadParams) -> Vec<Primitive> {
    let pal = p.palette;
    let mut out = vec![
        Primitive::circle(p.center, p.size, pal.primary),
        Primitive::ellipse(p.at(0.0, 0.35), p.len(0.45), p.len(0.32), 0.0, pal.skin),
    ];
    for side in [-1.0, 1.0] {
        out.push(Primitive::ellipse(
            p.at(side * 0.85, 0.15),
            p.len(0.3),
            p.len(0.65),
            side * 0.35,
            pal.secondary,
        ));
    }
    out.extend(eyes(
        p,
        &EyeLayout {
            spacing: 0.35,
            height: -0.15,
            radius: 0.13,
            iris: Color::new(101, 67, 33),
        },
    ));
    out.push(Primitive::ellipse(p.at(0.0, 0.22), p.len(0.14), p.len(0.1), 0.0, Color::INK));
    out.push(smile(p, 0.3, 0.2, Color::INK));
    out.push(Primitive::ellipse(p.at(0.0, 0.58), p.len(0.1), p.len(0.14), 0.0, pal.accent));
    out
}

/// Avian head: feathered crest, face patch and beak.
#[must_use]
pub fn bird(p: &HeadParams) -> Vec<Primitive> {
    let pal = p.palette;
    let mut out = Vec::new();
    for k in [-1.0_f32, 0.0, 1.0] {
        out.push(Primitive::ellipse(
            p.at(k * 0.25, -1.05),
            p.len(0.12),
            p.len(0.35),
            k * 0.4,
            pal.accent,
        ));
    }
    out.push(Primitive::circle(p.center, p.size, pal.primary));
    out.push(Primitive::ellipse(p.at(0.0, 0.1), p.len(0.6), p.len(0.55), 0.0, pal.skin));
    out.extend(eyes(
        p,
        &EyeLayout {
            spacing: 0.35,
            height: -0.15,
            radius: 0.13,
            iris: Color::new(30, 30, 30),
        },
    ));
    out.push(Primitive::polygon(
        vec![p.at(-0.18, 0.1), p.at(0.18, 0.1), p.at(0.0, 0.45)],
        pal.accent,
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::AvatarStyle;

    fn params(fidelity: Fidelity) -> HeadParams {
        HeadParams {
            center: Point::new(200.0, 100.0),
            size: 40.0,
            palette: AvatarStyle::Cat.palette(),
            fidelity,
        }
    }

    fn circles(prims: &[Primitive]) -> usize {
        prims.iter().filter(|p| p.kind() == "circle").count()
    }

    #[test]
    fn test_enhanced_eyes_are_layered() {
        let basic = eyes(&params(Fidelity::Basic), &EyeLayout {
            spacing: 0.3,
            height: 0.0,
            radius: 0.1,
            iris: Color::WHITE,
        });
        let enhanced = eyes(&params(Fidelity::Enhanced), &EyeLayout {
            spacing: 0.3,
            height: 0.0,
            radius: 0.1,
            iris: Color::WHITE,
        });
        assert_eq!(basic.len(), 2);
        assert_eq!(enhanced.len(), 8);
    }

    #[test]
    fn test_cat_has_ears_with_inner_detail() {
        let prims = cat(&params(Fidelity::Basic));
        // two outer ears, two inner ears, one nose
        assert_eq!(prims.iter().filter(|p| p.kind() == "polygon").count(), 5);
        assert_eq!(prims.iter().filter(|p| p.kind() == "stroke").count(), 6);
    }

    #[test]
    fn test_inner_ear_inside_outer_ear() {
        let ear = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(5.0, 9.0)];
        let inner = inset(&ear, 0.5);
        assert_eq!(inner.len(), 3);
        assert!(inner[0].x > 0.0 && inner[0].y > 0.0);
        assert!(inner[1].x < 10.0);
        assert!(inner[2].y < 9.0);
    }

    #[test]
    fn test_dog_ears_are_rotated_ellipses() {
        let prims = dog(&params(Fidelity::Basic));
        let rotated = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Ellipse { rotation, .. } if rotation.abs() > 0.0))
            .count();
        assert_eq!(rotated, 2);
    }

    #[test]
    fn test_head_scales_with_size() {
        let mut small = params(Fidelity::Basic);
        small.size = 10.0;
        let big = params(Fidelity::Basic);
        let radius = |prims: &[Primitive]| match prims.iter().find(|p| p.kind() == "circle") {
            Some(Primitive::Circle { radius, .. }) => *radius,
            _ => 0.0,
        };
        assert!(radius(&monkey(&big)) > radius(&monkey(&small)));
    }

    #[test]
    fn test_fidelity_only_changes_eyes() {
        let basic = bird(&params(Fidelity::Basic));
        let enhanced = bird(&params(Fidelity::Enhanced));
        assert_eq!(circles(&enhanced) - circles(&basic), 6);
        assert_eq!(enhanced.len() - basic.len(), 6);
    }

    #[test]
    fn test_human_hair_drawn_behind_face() {
        let prims = human(&params(Fidelity::Basic));
        assert_eq!(prims[0].kind(), "ellipse");
        let face = prims
            .iter()
            .position(|p| matches!(p, Primitive::Circle { radius, .. } if (*radius - 40.0).abs() < f32::EPSILON))
            .unwrap();
        assert!(face > 0);
    }
}
