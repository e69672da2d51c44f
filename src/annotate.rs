// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Raster drawing surface backed by `image` and `imageproc`.

use std::path::Path;

use image::{DynamicImage, Rgba, RgbaImage};
use imageproc::drawing::{Blend, draw_filled_circle_mut, draw_polygon_mut};
use imageproc::point::Point as PixelPoint;

use crate::error::Result;
use crate::surface::{Point, Primitive, Surface};
use crate::utils::{ellipse_points, normal};
use crate::visualizer::Color;

/// Pieces a gradient stroke is split into.
const GRADIENT_STEPS: usize = 12;

/// Outline resolution for ellipses.
const ELLIPSE_SEGMENTS: usize = 48;

/// An RGBA image that primitives are alpha-blended onto.
pub struct ImageSurface {
    canvas: Blend<RgbaImage>,
    background: Color,
}

impl ImageSurface {
    /// Create a surface filled with `background`.
    #[must_use]
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let image = RgbaImage::from_pixel(width, height, Rgba(background.rgba(1.0)));
        Self {
            canvas: Blend(image),
            background,
        }
    }

    /// The current frame.
    #[must_use]
    pub const fn image(&self) -> &RgbaImage {
        &self.canvas.0
    }

    /// Copy of the current frame as a [`DynamicImage`].
    #[must_use]
    pub fn to_dynamic(&self) -> DynamicImage {
        DynamicImage::ImageRgba8(self.canvas.0.clone())
    }

    /// Save the current frame; the format follows the file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be encoded or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.canvas.0.save(path)?;
        Ok(())
    }

    fn paint(color: Color, alpha: f32) -> Rgba<u8> {
        Rgba(color.rgba(alpha))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn circle(&mut self, center: Point, radius: f32, paint: Rgba<u8>) {
        if !(center.x.is_finite() && center.y.is_finite() && radius.is_finite()) || radius <= 0.0 {
            return;
        }
        draw_filled_circle_mut(
            &mut self.canvas,
            (center.x.round() as i32, center.y.round() as i32),
            radius.round().max(1.0) as i32,
            paint,
        );
    }

    #[allow(clippy::cast_possible_truncation)]
    fn polygon(&mut self, points: &[Point], paint: Rgba<u8>) {
        if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return;
        }
        let mut poly: Vec<PixelPoint<i32>> = Vec::with_capacity(points.len());
        for p in points {
            let q = PixelPoint::new(p.x.round() as i32, p.y.round() as i32);
            if poly.last() != Some(&q) {
                poly.push(q);
            }
        }
        // imageproc rejects polygons whose first and last vertex coincide
        while poly.len() > 1 && poly.first() == poly.last() {
            poly.pop();
        }
        if poly.len() >= 3 {
            draw_polygon_mut(&mut self.canvas, &poly, paint);
        }
    }

    /// Thick segment as a quad with round caps.
    fn segment(&mut self, from: Point, to: Point, width: f32, paint: Rgba<u8>, caps: bool) {
        let half = width / 2.0;
        match normal(from, to) {
            Some((nx, ny)) => {
                let quad = [
                    from.offset(nx * half, ny * half),
                    to.offset(nx * half, ny * half),
                    to.offset(-nx * half, -ny * half),
                    from.offset(-nx * half, -ny * half),
                ];
                self.polygon(&quad, paint);
                if caps {
                    self.circle(from, half, paint);
                    self.circle(to, half, paint);
                }
            }
            None => self.circle(from, half, paint),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn gradient(&mut self, from: Point, to: Point, width: f32, start: Color, end: Color, alpha: f32) {
        self.circle(from, width / 2.0, Self::paint(start, alpha));
        for i in 0..GRADIENT_STEPS {
            let t0 = i as f32 / GRADIENT_STEPS as f32;
            let t1 = (i + 1) as f32 / GRADIENT_STEPS as f32;
            let color = start.lerp(end, (t0 + t1) / 2.0);
            self.segment(from.lerp(to, t0), from.lerp(to, t1), width, Self::paint(color, alpha), false);
        }
        self.circle(to, width / 2.0, Self::paint(end, alpha));
    }
}

impl Surface for ImageSurface {
    fn size(&self) -> (u32, u32) {
        self.canvas.0.dimensions()
    }

    fn clear(&mut self) {
        let fill = Self::paint(self.background, 1.0);
        for pixel in self.canvas.0.pixels_mut() {
            *pixel = fill;
        }
    }

    fn draw(&mut self, primitive: &Primitive) {
        match primitive {
            Primitive::Stroke {
                from,
                to,
                width,
                color,
                end_color,
                alpha,
            } => match end_color {
                Some(end) => self.gradient(*from, *to, *width, *color, *end, *alpha),
                None => self.segment(*from, *to, *width, Self::paint(*color, *alpha), true),
            },
            Primitive::Circle {
                center,
                radius,
                color,
                alpha,
            } => self.circle(*center, *radius, Self::paint(*color, *alpha)),
            Primitive::Ellipse {
                center,
                radius_x,
                radius_y,
                rotation,
                color,
                alpha,
            } => {
                let outline = ellipse_points(*center, *radius_x, *radius_y, *rotation, ELLIPSE_SEGMENTS);
                self.polygon(&outline, Self::paint(*color, *alpha));
            }
            Primitive::Polygon {
                points,
                color,
                alpha,
            } => self.polygon(points, Self::paint(*color, *alpha)),
            Primitive::Polyline {
                points,
                width,
                color,
                alpha,
            } => {
                let paint = Self::paint(*color, *alpha);
                for pair in points.windows(2) {
                    self.segment(pair[0], pair[1], *width, paint, true);
                }
            }
        }
    }
}

/// Find the next available run directory (render, render2, render3, etc.)
#[must_use]
pub fn find_next_run_dir(base: &str, prefix: &str) -> String {
    let base_path = Path::new(base);

    let first = base_path.join(prefix);
    if !first.exists() {
        return first.to_string_lossy().to_string();
    }

    for i in 2.. {
        let numbered = base_path.join(format!("{prefix}{i}"));
        if !numbered.exists() {
            return numbered.to_string_lossy().to_string();
        }
    }

    base_path.join(prefix).to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Fidelity, RenderConfig};
    use crate::reference::ReferencePose;
    use crate::render::AvatarRenderer;
    use crate::style::AvatarStyle;

    fn pixel(surface: &ImageSurface, x: u32, y: u32) -> [u8; 4] {
        surface.image().get_pixel(x, y).0
    }

    #[test]
    fn test_new_surface_is_background() {
        let surface = ImageSurface::new(8, 6, Color::SLATE);
        assert_eq!(surface.size(), (8, 6));
        assert_eq!(pixel(&surface, 7, 5), Color::SLATE.rgba(1.0));
    }

    #[test]
    fn test_circle_and_clear() {
        let mut surface = ImageSurface::new(40, 40, Color::BLACK);
        surface.draw(&Primitive::circle(Point::new(20.0, 20.0), 5.0, Color::WHITE));
        assert_eq!(pixel(&surface, 20, 20), [255, 255, 255, 255]);
        assert_eq!(pixel(&surface, 2, 2), [0, 0, 0, 255]);

        surface.clear();
        assert_eq!(pixel(&surface, 20, 20), [0, 0, 0, 255]);
    }

    #[test]
    fn test_thick_stroke_covers_its_width() {
        let mut surface = ImageSurface::new(60, 60, Color::BLACK);
        let red = Color::new(255, 0, 0);
        surface.draw(&Primitive::stroke(Point::new(10.0, 30.0), Point::new(50.0, 30.0), 8.0, red));
        assert_eq!(pixel(&surface, 30, 27), [255, 0, 0, 255]);
        assert_eq!(pixel(&surface, 30, 33), [255, 0, 0, 255]);
        assert_eq!(pixel(&surface, 30, 40), [0, 0, 0, 255]);
    }

    #[test]
    fn test_gradient_stroke_changes_color() {
        let mut surface = ImageSurface::new(120, 20, Color::BLACK);
        let stroke = Primitive::stroke(Point::new(10.0, 10.0), Point::new(110.0, 10.0), 6.0, Color::new(255, 0, 0))
            .with_gradient(Color::new(0, 0, 255));
        surface.draw(&stroke);
        let start = pixel(&surface, 12, 10);
        let end = pixel(&surface, 108, 10);
        assert!(start[0] > start[2]);
        assert!(end[2] > end[0]);
    }

    #[test]
    fn test_translucent_primitive_blends() {
        let mut surface = ImageSurface::new(20, 20, Color::BLACK);
        surface.draw(&Primitive::circle(Point::new(10.0, 10.0), 4.0, Color::WHITE).with_alpha(0.5));
        let p = pixel(&surface, 10, 10);
        assert!(p[0] > 0 && p[0] < 255);
    }

    #[test]
    fn test_degenerate_shapes_are_ignored() {
        let mut surface = ImageSurface::new(20, 20, Color::BLACK);
        surface.draw(&Primitive::polygon(vec![Point::new(1.0, 1.0); 4], Color::WHITE));
        surface.draw(&Primitive::polygon(vec![Point::new(f32::NAN, 1.0); 3], Color::WHITE));
        surface.draw(&Primitive::circle(Point::new(5.0, 5.0), 0.0, Color::WHITE));
        surface.draw(&Primitive::ellipse(Point::new(5.0, 5.0), 0.1, 0.1, 0.0, Color::WHITE));
        assert!(surface.image().pixels().all(|p| p.0 == [0, 0, 0, 255]));
    }

    #[test]
    fn test_render_every_style() {
        let reference = ReferencePose::find("t-pose").unwrap().to_pose();
        for fidelity in [Fidelity::Basic, Fidelity::Enhanced] {
            let renderer = AvatarRenderer::new(RenderConfig::new().with_fidelity(fidelity));
            let mut surface = ImageSurface::new(640, 480, renderer.config().background);
            for style in AvatarStyle::ALL {
                renderer.render(&mut surface, Some(&reference), style);
                // The head is centered on the nose.
                assert_ne!(pixel(&surface, 320, 72), Color::SLATE.rgba(1.0), "{style} {fidelity}");
            }
            renderer.render(&mut surface, None, AvatarStyle::Cat);
            assert!(surface.image().pixels().all(|p| p.0 == Color::SLATE.rgba(1.0)));
        }
    }

    #[test]
    fn test_find_next_run_dir() {
        let base = std::env::temp_dir().join(format!("avatar-runs-{}", std::process::id()));
        let base_str = base.to_string_lossy().to_string();
        let first = find_next_run_dir(&base_str, "render");
        assert!(first.ends_with("render"));
        std::fs::create_dir_all(&first).unwrap();
        let second = find_next_run_dir(&base_str, "render");
        assert!(second.ends_with("render2"));
        std::fs::remove_dir_all(&base).unwrap();
    }
}
