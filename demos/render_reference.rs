// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Example script rendering every built-in reference pose as an avatar.
//!
//! For each target pose this writes two images into `runs/demo`:
//! 1. `<id>-outline.png`, the minimal single-color figure.
//! 2. `<id>-<style>.png`, the target drawn as a stylized avatar in enhanced fidelity.
//!
//! It also prints how a slightly shifted copy of each target scores against it.

use std::path::Path;

use ultralytics_avatar::annotate::ImageSurface;
use ultralytics_avatar::io::image_path;
use ultralytics_avatar::{
    AvatarRenderer, AvatarStyle, Fidelity, Landmark, PoseScorer, ReferencePose, RenderConfig, Result,
};

fn main() -> Result<()> {
    let dir = Path::new("runs/demo");
    std::fs::create_dir_all(dir)?;

    let renderer = AvatarRenderer::new(RenderConfig::new().with_fidelity(Fidelity::Enhanced));
    let mut surface = ImageSurface::new(800, 600, renderer.config().background);
    let scorer = PoseScorer::default();

    for (reference, style) in ReferencePose::catalog().iter().zip(AvatarStyle::ALL.iter().cycle()) {
        renderer.render_reference(&mut surface, &reference.landmarks);
        let outline = image_path(dir, &format!("{}-outline", reference.id));
        surface.save(&outline)?;

        renderer.render(&mut surface, Some(&reference.to_pose()), *style);
        let avatar = image_path(dir, &format!("{}-{style}", reference.id));
        surface.save(&avatar)?;

        // Nudge every landmark to the right and see how far the score drops.
        let mut shifted = reference.landmarks.clone();
        for (i, lm) in reference.landmarks.iter().enumerate() {
            if let Some(lm) = lm {
                shifted.set(i, Landmark::new(lm.x + 0.05, lm.y).with_z(lm.depth()));
            }
        }
        let report = scorer.evaluate(&shifted, &reference.landmarks);

        println!(
            "{:<12} {} / {} | shifted copy scores {}% ({})",
            reference.id,
            outline.display(),
            avatar.display(),
            report.score,
            report.feedback
        );
    }

    println!("\nDone! Check runs/demo for the rendered poses.");
    Ok(())
}
