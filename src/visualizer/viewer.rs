// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Window for watching rendered avatar frames.

use std::time::{Duration, Instant};

use image::RgbaImage;
use minifb::{Key, Window, WindowOptions};

use crate::error::{AvatarError, Result};
use crate::visualizer::Color;
use crate::warn;

/// A frame viewer using minifb.
pub struct Viewer {
    window: Window,
    pub width: usize,
    pub height: usize,
    buffer: Vec<u32>,
}

impl Viewer {
    /// Create a new viewer window.
    ///
    /// # Errors
    ///
    /// Returns [`AvatarError::VisualizerError`] if the window cannot be created.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let mut window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                resize: true,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| AvatarError::VisualizerError(format!("Failed to create window: {e}")))?;

        // ~60 fps
        window.set_target_fps(60);

        Ok(Self {
            window,
            width,
            height,
            buffer: vec![0; width * height],
        })
    }

    /// Open a window, or log a warning and return `None` so the caller can run
    /// headless.
    #[must_use]
    pub fn try_open(title: &str, width: usize, height: usize) -> Option<Self> {
        match Self::new(title, width, height) {
            Ok(viewer) => Some(viewer),
            Err(e) => {
                warn!("{e}. Continuing without a window.");
                None
            }
        }
    }

    /// Whether the user has closed the window or pressed Escape or Q.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        !self.window.is_open() || self.window.is_key_down(Key::Escape) || self.window.is_key_down(Key::Q)
    }

    /// Show a frame. Returns `Ok(false)` once the window has been closed.
    ///
    /// # Errors
    ///
    /// Returns [`AvatarError::VisualizerError`] if the window rejects the frame.
    pub fn update(&mut self, frame: &RgbaImage) -> Result<bool> {
        if self.is_closed() {
            return Ok(false);
        }

        let (width, height) = (frame.width() as usize, frame.height() as usize);
        self.buffer.clear();
        self.buffer
            .extend(frame.pixels().map(|p| Color::new(p[0], p[1], p[2]).packed()));
        self.width = width;
        self.height = height;

        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)
            .map_err(|e| AvatarError::VisualizerError(format!("Failed to update window: {e}")))?;

        Ok(true)
    }

    /// Keep the last frame on screen for `duration`. Returns `false` if the
    /// window was closed while waiting.
    pub fn wait(&mut self, duration: Duration) -> bool {
        let start = Instant::now();
        while start.elapsed() < duration {
            if self.is_closed() {
                return false;
            }
            if self
                .window
                .update_with_buffer(&self.buffer, self.width, self.height)
                .is_err()
            {
                return false;
            }
        }
        true
    }
}
