// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Utility functions for the avatar library

use std::f32::consts::TAU;

use crate::landmarks::Landmark;
use crate::surface::Point;

/// Project a normalized landmark onto a `width` x `height` surface.
///
/// Depth is ignored: the projection is orthographic.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_screen(landmark: &Landmark, width: u32, height: u32) -> Point {
    Point::new(landmark.x * width as f32, landmark.y * height as f32)
}

/// Sample `segments + 1` points along a circular arc.
///
/// Angles are in radians, measured clockwise from the positive x axis in screen
/// space (y grows downward).
///
/// # Arguments
///
/// * `center` - Arc center.
/// * `radius` - Arc radius.
/// * `start` - Start angle.
/// * `end` - End angle.
/// * `segments` - Number of straight pieces approximating the arc.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn arc_points(center: Point, radius: f32, start: f32, end: f32, segments: usize) -> Vec<Point> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| {
            let angle = (end - start).mul_add(i as f32 / segments as f32, start);
            Point::new(
                radius.mul_add(angle.cos(), center.x),
                radius.mul_add(angle.sin(), center.y),
            )
        })
        .collect()
}

/// Sample `segments` points around a rotated ellipse outline.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ellipse_points(
    center: Point,
    radius_x: f32,
    radius_y: f32,
    rotation: f32,
    segments: usize,
) -> Vec<Point> {
    let segments = segments.max(3);
    let (sin_r, cos_r) = rotation.sin_cos();
    (0..segments)
        .map(|i| {
            let t = TAU * i as f32 / segments as f32;
            let (ex, ey) = (radius_x * t.cos(), radius_y * t.sin());
            Point::new(
                ex.mul_add(cos_r, -ey * sin_r) + center.x,
                ex.mul_add(sin_r, ey * cos_r) + center.y,
            )
        })
        .collect()
}

/// Unit vector perpendicular to the segment `from -> to`, or `None` when the
/// segment has no length.
#[must_use]
pub fn normal(from: Point, to: Point) -> Option<(f32, f32)> {
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    let len = dx.hypot(dy);
    if len <= f32::EPSILON || !len.is_finite() {
        return None;
    }
    Some((-dy / len, dx / len))
}

/// Pluralize a word based on count.
///
/// # Examples
///
/// ```
/// use ultralytics_avatar::utils::pluralize;
///
/// assert_eq!(pluralize(1, "frame"), "frame");
/// assert_eq!(pluralize(3, "frame"), "frames");
/// ```
#[must_use]
pub fn pluralize(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
