// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! I/O utilities: reading detector output from pose files and writing rendered
//! frames.
//!
//! A `.json` file holds either one pose object or an array of frames. A `.jsonl`
//! file holds one frame per line. In both layouts a `null` frame means the
//! detector found nobody in that frame.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AvatarError, Result};
use crate::landmarks::Pose;

#[cfg(feature = "annotate")]
use crate::annotate::ImageSurface;

#[derive(Deserialize)]
#[serde(untagged)]
enum PoseFile {
    Frames(Vec<Option<Pose>>),
    Single(Pose),
}

/// Parse pose frames from a JSON document.
///
/// # Errors
///
/// Returns [`AvatarError::ParseError`] if the document is not a pose or an
/// array of poses.
pub fn parse_poses(json: &str) -> Result<Vec<Option<Pose>>> {
    let file: PoseFile = serde_json::from_str(json)?;
    Ok(match file {
        PoseFile::Frames(frames) => frames,
        PoseFile::Single(pose) => vec![Some(pose)],
    })
}

/// Parse pose frames from JSON Lines, one frame per non-empty line.
///
/// # Errors
///
/// Returns [`AvatarError::ParseError`] naming the first malformed line.
pub fn parse_pose_lines(text: &str) -> Result<Vec<Option<Pose>>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str::<Option<Pose>>(line)
                .map_err(|e| AvatarError::ParseError(format!("line {}: {e}", i + 1)))
        })
        .collect()
}

/// Load pose frames from a `.json` or `.jsonl` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_poses<P: AsRef<Path>>(path: P) -> Result<Vec<Option<Pose>>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| AvatarError::IoError(format!("Failed to read {}: {e}", path.display())))?;
    let is_lines = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("jsonl"));
    if is_lines {
        parse_pose_lines(&text)
    } else {
        parse_poses(&text)
    }
}

/// Writes rendered frames as numbered PNG files into a directory.
#[cfg(feature = "annotate")]
pub struct FrameWriter {
    dir: PathBuf,
    count: usize,
}

#[cfg(feature = "annotate")]
impl FrameWriter {
    /// Create a writer, creating `dir` if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| {
            AvatarError::IoError(format!("Failed to create directory {}: {e}", dir.display()))
        })?;
        Ok(Self { dir, count: 0 })
    }

    /// Save the surface as the next frame and return its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame cannot be encoded or written.
    pub fn write(&mut self, surface: &ImageSurface) -> Result<PathBuf> {
        self.count += 1;
        let path = self.dir.join(format!("frame_{:04}.png", self.count));
        surface.save(&path)?;
        Ok(path)
    }

    /// Output directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of frames written so far.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }
}

/// Output path for a single named image inside `dir`.
#[must_use]
pub fn image_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE: &str = r#"{"landmarks": [{"x": 0.5, "y": 0.5}]}"#;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("avatar-io-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_parse_single_pose() {
        let frames = parse_poses(SINGLE).unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].as_ref().unwrap().landmarks.len(), 1);
    }

    #[test]
    fn test_parse_frames_with_gaps() {
        let json = format!("[{SINGLE}, null, {SINGLE}]");
        let frames = parse_poses(&json).unwrap();
        assert_eq!(frames.len(), 3);
        assert!(frames[1].is_none());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_poses("42"), Err(AvatarError::ParseError(_))));
    }

    #[test]
    fn test_parse_pose_lines() {
        let text = format!("{SINGLE}\n\nnull\n{SINGLE}\n");
        let frames = parse_pose_lines(&text).unwrap();
        assert_eq!(frames.len(), 3);
        assert!(frames[1].is_none());

        let err = parse_pose_lines("null\n{oops").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_load_poses_by_extension() {
        let json = temp_path("frames.json");
        fs::write(&json, SINGLE).unwrap();
        assert_eq!(load_poses(&json).unwrap().len(), 1);

        let lines = temp_path("frames.jsonl");
        fs::write(&lines, format!("{SINGLE}\n{SINGLE}\n")).unwrap();
        assert_eq!(load_poses(&lines).unwrap().len(), 2);

        fs::remove_file(json).unwrap();
        fs::remove_file(lines).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_poses(temp_path("missing.json")).unwrap_err();
        assert!(matches!(err, AvatarError::IoError(_)));
    }

    #[cfg(feature = "annotate")]
    #[test]
    fn test_frame_writer() {
        use crate::visualizer::Color;

        let dir = temp_path("frames");
        let mut writer = FrameWriter::new(&dir).unwrap();
        let surface = ImageSurface::new(16, 12, Color::SLATE);
        let first = writer.write(&surface).unwrap();
        let second = writer.write(&surface).unwrap();
        assert!(first.ends_with("frame_0001.png"));
        assert!(second.ends_with("frame_0002.png"));
        assert_eq!(writer.count(), 2);
        assert_eq!(image::open(&second).unwrap().width(), 16);
        fs::remove_dir_all(writer.dir()).unwrap();
    }

    #[test]
    fn test_image_path() {
        assert!(image_path(Path::new("runs"), "t-pose").ends_with("t-pose.png"));
    }
}
