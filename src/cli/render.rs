// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process;
#[cfg(feature = "visualize")]
use std::time::Duration;

#[cfg(feature = "annotate")]
use crate::annotate::{ImageSurface, find_next_run_dir};
#[cfg(feature = "annotate")]
use crate::io::FrameWriter;
#[cfg(not(feature = "annotate"))]
use crate::surface::RecordingSurface;
#[cfg(feature = "visualize")]
use crate::visualizer::Viewer;

use crate::cli::args::RenderArgs;
use crate::io::load_poses;
use crate::landmarks::{Pose, Side};
use crate::utils::pluralize;
use crate::{AvatarRenderer, AvatarStyle, Fidelity, RenderConfig, VERSION};
use crate::{error, verbose, warn};

/// Render every frame of a pose file.
#[allow(clippy::too_many_lines)]
pub fn run_render(args: &RenderArgs) {
    let frames = match load_poses(&args.pose) {
        Ok(frames) => frames,
        Err(e) => {
            error!("Error loading poses: {e}");
            process::exit(1);
        }
    };

    let style = args.style.parse::<AvatarStyle>().unwrap_or_else(|e| {
        warn!("{e}. Using default '--style={}'.", AvatarStyle::default());
        AvatarStyle::default()
    });
    let fidelity = if args.enhanced {
        Fidelity::Enhanced
    } else {
        Fidelity::Basic
    };
    let config = RenderConfig::new()
        .with_size(args.width, args.height)
        .with_fidelity(fidelity);
    if let Err(e) = config.validate() {
        error!("{e}");
        process::exit(1);
    }
    let renderer = AvatarRenderer::new(config);

    println!(
        "Ultralytics {VERSION} 🚀 Avatar {style} {fidelity} {}x{}",
        args.width, args.height
    );

    #[cfg(feature = "annotate")]
    let mut writer = if args.save || args.output.is_some() {
        let dir = args
            .output
            .clone()
            .unwrap_or_else(|| find_next_run_dir("runs/avatar", "render"));
        match FrameWriter::new(&dir) {
            Ok(writer) => Some(writer),
            Err(e) => {
                error!("{e}");
                process::exit(1);
            }
        }
    } else {
        None
    };

    #[cfg(not(feature = "annotate"))]
    if args.save || args.output.is_some() {
        warn!("--save requires the 'annotate' feature. Compile with --features annotate to enable saving.");
    }

    #[cfg(feature = "annotate")]
    let mut surface = ImageSurface::new(args.width, args.height, renderer.config().background);
    #[cfg(not(feature = "annotate"))]
    let mut surface = RecordingSurface::new(args.width, args.height);

    #[cfg(feature = "visualize")]
    let mut viewer = if args.show {
        Viewer::try_open("Ultralytics Avatar", args.width as usize, args.height as usize)
    } else {
        None
    };

    #[cfg(not(feature = "visualize"))]
    if args.show {
        warn!("--show requires the 'visualize' feature. Compile with --features visualize to enable display.");
    }

    let total = frames.len();
    for (i, pose) in frames.iter().enumerate() {
        renderer.render(&mut surface, pose.as_ref(), style);
        verbose!("frame {}/{total}: {}", i + 1, describe(pose.as_ref()));

        #[cfg(feature = "annotate")]
        if let Some(writer) = writer.as_mut()
            && let Err(e) = writer.write(&surface)
        {
            error!("Failed to save frame: {e}");
        }

        #[cfg(feature = "visualize")]
        if let Some(v) = viewer.as_mut() {
            match v.update(surface.image()) {
                Ok(true) if v.wait(Duration::from_millis(33)) => {}
                Ok(_) => break,
                Err(e) => {
                    warn!("{e}");
                    viewer = None;
                }
            }
        }
    }

    verbose!("Rendered {total} {}", pluralize(total, "frame"));

    #[cfg(feature = "annotate")]
    if let Some(writer) = writer {
        verbose!("Results saved to {}", writer.dir().display());
    }
}

/// One-line summary of what a frame contains.
fn describe(pose: Option<&Pose>) -> String {
    match pose {
        Some(pose) if !pose.is_empty() => {
            let landmarks = pose.landmarks.present_count();
            let hands = [Side::Left, Side::Right]
                .into_iter()
                .filter(|&side| pose.hand(side).is_some())
                .count();
            format!(
                "{landmarks} {}, {hands} {}",
                pluralize(landmarks, "landmark"),
                pluralize(hands, "hand")
            )
        }
        _ => "(no person)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::{Landmark, LandmarkSet};

    #[test]
    fn test_describe() {
        assert_eq!(describe(None), "(no person)");
        assert_eq!(describe(Some(&Pose::default())), "(no person)");

        let pose = Pose::new(LandmarkSet::new(vec![Landmark::new(0.5, 0.5)]))
            .with_hand(Side::Right, LandmarkSet::new(vec![Landmark::new(0.5, 0.5); 21]));
        assert_eq!(describe(Some(&pose)), "1 landmark, 1 hand");
    }
}
