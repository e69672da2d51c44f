// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#[cfg(feature = "annotate")]
use std::path::Path;

#[cfg(feature = "annotate")]
use crate::annotate::{ImageSurface, find_next_run_dir};
use crate::cli::args::ReferencesArgs;
#[cfg(feature = "annotate")]
use crate::io::image_path;
use crate::reference::ReferencePose;
#[cfg(feature = "annotate")]
use crate::render::AvatarRenderer;
use crate::{info, section};
#[cfg(feature = "annotate")]
use crate::{error, success, verbose};
#[cfg(not(feature = "annotate"))]
use crate::warn;

/// List the reference catalog, optionally saving an outline of each target.
pub fn run_references(args: &ReferencesArgs) {
    section!("Reference poses");
    for reference in ReferencePose::catalog() {
        info!("{:<12} {:<10} {}", reference.id, reference.name, reference.description);
    }

    if !args.save {
        return;
    }

    #[cfg(feature = "annotate")]
    {
        let dir = find_next_run_dir("runs/avatar", "references");
        if let Err(e) = std::fs::create_dir_all(&dir) {
            error!("Failed to create {dir}: {e}");
            return;
        }
        let renderer = AvatarRenderer::default();
        let (width, height) = (renderer.config().width, renderer.config().height);
        let mut surface = ImageSurface::new(width, height, renderer.config().background);
        for reference in ReferencePose::catalog() {
            renderer.render_reference(&mut surface, &reference.landmarks);
            let path = image_path(Path::new(&dir), reference.id);
            match surface.save(&path) {
                Ok(()) => verbose!("Saved {}", path.display()),
                Err(e) => {
                    error!("Failed to save {}: {e}", path.display());
                }
            }
        }
        success!("Reference outlines saved to {dir}");
    }

    #[cfg(not(feature = "annotate"))]
    {
        warn!("--save requires the 'annotate' feature. Compile with --features annotate to enable saving.");
    }
}
