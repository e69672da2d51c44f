// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Drawing primitives and the surface abstraction they are drawn onto.
//!
//! The renderer never touches pixels. It emits an ordered list of
//! [`Primitive`]s and hands them to a [`Surface`]. The raster backend lives in
//! [`crate::annotate`]; [`RecordingSurface`] keeps primitives for inspection.

use crate::visualizer::Color;

/// A point in surface (pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal position in pixels.
    pub x: f32,
    /// Vertical position in pixels.
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Point a fraction `t` of the way towards `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            (other.x - self.x).mul_add(t, self.x),
            (other.y - self.y).mul_add(t, self.y),
        )
    }
}

/// One drawing instruction.
///
/// Every variant carries an `alpha` in `[0, 1]`; surfaces blend over what is
/// already drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Straight round-capped stroke. With `end_color` set the color runs as a
    /// linear gradient from `color` at `from` to `end_color` at `to`.
    Stroke {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke width in pixels.
        width: f32,
        /// Color at `from`.
        color: Color,
        /// Color at `to` for gradient strokes.
        end_color: Option<Color>,
        /// Opacity.
        alpha: f32,
    },
    /// Filled circle.
    Circle {
        /// Center point.
        center: Point,
        /// Radius in pixels.
        radius: f32,
        /// Fill color.
        color: Color,
        /// Opacity.
        alpha: f32,
    },
    /// Filled ellipse rotated by `rotation` radians around its center.
    Ellipse {
        /// Center point.
        center: Point,
        /// Horizontal radius before rotation.
        radius_x: f32,
        /// Vertical radius before rotation.
        radius_y: f32,
        /// Clockwise rotation in radians.
        rotation: f32,
        /// Fill color.
        color: Color,
        /// Opacity.
        alpha: f32,
    },
    /// Filled polygon.
    Polygon {
        /// Vertices in order.
        points: Vec<Point>,
        /// Fill color.
        color: Color,
        /// Opacity.
        alpha: f32,
    },
    /// Open round-joined path.
    Polyline {
        /// Path vertices.
        points: Vec<Point>,
        /// Stroke width in pixels.
        width: f32,
        /// Stroke color.
        color: Color,
        /// Opacity.
        alpha: f32,
    },
}

impl Primitive {
    /// Opaque solid stroke.
    #[must_use]
    pub const fn stroke(from: Point, to: Point, width: f32, color: Color) -> Self {
        Self::Stroke {
            from,
            to,
            width,
            color,
            end_color: None,
            alpha: 1.0,
        }
    }

    /// Opaque filled circle.
    #[must_use]
    pub const fn circle(center: Point, radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            color,
            alpha: 1.0,
        }
    }

    /// Opaque filled ellipse.
    #[must_use]
    pub const fn ellipse(
        center: Point,
        radius_x: f32,
        radius_y: f32,
        rotation: f32,
        color: Color,
    ) -> Self {
        Self::Ellipse {
            center,
            radius_x,
            radius_y,
            rotation,
            color,
            alpha: 1.0,
        }
    }

    /// Opaque filled polygon.
    #[must_use]
    pub const fn polygon(points: Vec<Point>, color: Color) -> Self {
        Self::Polygon {
            points,
            color,
            alpha: 1.0,
        }
    }

    /// Opaque open path.
    #[must_use]
    pub const fn polyline(points: Vec<Point>, width: f32, color: Color) -> Self {
        Self::Polyline {
            points,
            width,
            color,
            alpha: 1.0,
        }
    }

    /// Replace the opacity.
    #[must_use]
    pub fn with_alpha(mut self, value: f32) -> Self {
        match &mut self {
            Self::Stroke { alpha, .. }
            | Self::Circle { alpha, .. }
            | Self::Ellipse { alpha, .. }
            | Self::Polygon { alpha, .. }
            | Self::Polyline { alpha, .. } => *alpha = value,
        }
        self
    }

    /// Turn a stroke into a gradient stroke ending at `end`. Other variants are
    /// returned unchanged.
    #[must_use]
    pub fn with_gradient(mut self, end: Color) -> Self {
        if let Self::Stroke { end_color, .. } = &mut self {
            *end_color = Some(end);
        }
        self
    }

    /// Primary color.
    #[must_use]
    pub const fn color(&self) -> Color {
        match self {
            Self::Stroke { color, .. }
            | Self::Circle { color, .. }
            | Self::Ellipse { color, .. }
            | Self::Polygon { color, .. }
            | Self::Polyline { color, .. } => *color,
        }
    }

    /// Opacity.
    #[must_use]
    pub const fn alpha(&self) -> f32 {
        match self {
            Self::Stroke { alpha, .. }
            | Self::Circle { alpha, .. }
            | Self::Ellipse { alpha, .. }
            | Self::Polygon { alpha, .. }
            | Self::Polyline { alpha, .. } => *alpha,
        }
    }

    /// Short variant name, handy in logs and assertions.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Stroke { .. } => "stroke",
            Self::Circle { .. } => "circle",
            Self::Ellipse { .. } => "ellipse",
            Self::Polygon { .. } => "polygon",
            Self::Polyline { .. } => "polyline",
        }
    }
}

/// A 2D target the renderer draws onto.
///
/// The caller owns the surface and lends it to the renderer for one synchronous
/// call.
pub trait Surface {
    /// Logical size `(width, height)` in pixels.
    fn size(&self) -> (u32, u32);

    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Draw one primitive over the current contents.
    fn draw(&mut self, primitive: &Primitive);
}

/// A surface that records every call instead of rasterizing.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    /// Primitives drawn since the last clear, in order.
    pub primitives: Vec<Primitive>,
    /// Number of times [`Surface::clear`] was called.
    pub clears: usize,
}

impl RecordingSurface {
    /// Create a recording surface of the given logical size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            primitives: Vec::new(),
            clears: 0,
        }
    }

    /// Check if nothing has been drawn since the last clear.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Count recorded primitives of one kind (see [`Primitive::kind`]).
    #[must_use]
    pub fn count(&self, kind: &str) -> usize {
        self.primitives.iter().filter(|p| p.kind() == kind).count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.primitives.clear();
        self.clears += 1;
    }

    fn draw(&mut self, primitive: &Primitive) {
        self.primitives.push(primitive.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_math() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < f32::EPSILON);
        assert_eq!(a.lerp(b, 0.5), Point::new(1.5, 2.0));
        assert_eq!(b.offset(1.0, -1.0), Point::new(4.0, 3.0));
    }

    #[test]
    fn test_primitive_builders() {
        let p = Primitive::stroke(Point::default(), Point::new(1.0, 1.0), 4.0, Color::WHITE)
            .with_gradient(Color::BLACK)
            .with_alpha(0.5);
        match p {
            Primitive::Stroke {
                end_color, alpha, ..
            } => {
                assert_eq!(end_color, Some(Color::BLACK));
                assert!((alpha - 0.5).abs() < f32::EPSILON);
            }
            _ => panic!("expected stroke"),
        }

        let c = Primitive::circle(Point::default(), 2.0, Color::WHITE).with_gradient(Color::BLACK);
        assert_eq!(c.kind(), "circle");
        assert_eq!(c.color(), Color::WHITE);
    }

    #[test]
    fn test_recording_surface() {
        let mut surface = RecordingSurface::new(640, 480);
        assert_eq!(surface.size(), (640, 480));
        surface.draw(&Primitive::circle(Point::default(), 1.0, Color::WHITE));
        assert_eq!(surface.count("circle"), 1);
        surface.clear();
        assert!(surface.is_blank());
        assert_eq!(surface.clears, 1);
    }
}
