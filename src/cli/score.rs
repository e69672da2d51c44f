// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process;

use crate::cli::args::ScoreArgs;
use crate::cli::logging::paint;
use crate::io::load_poses;
use crate::reference::ReferencePose;
use crate::scoring::{Feedback, PoseScorer, ScoreReport};
use crate::utils::pluralize;
use crate::{ScoringConfig, VERSION};
use crate::{celebrate, error, info, section, verbose};

/// Joints below this similarity are listed under their frame.
const OFF_TARGET: f32 = 0.5;

/// Score every frame of a pose file against a reference pose.
pub fn run_score(args: &ScoreArgs) {
    let Some(reference) = ReferencePose::find(&args.reference) else {
        let known: Vec<&str> = ReferencePose::catalog().iter().map(|r| r.id).collect();
        error!(
            "Unknown reference '{}'. Available: {}",
            args.reference,
            known.join(", ")
        );
        process::exit(1);
    };

    let frames = match load_poses(&args.pose) {
        Ok(frames) => frames,
        Err(e) => {
            error!("Error loading poses: {e}");
            process::exit(1);
        }
    };

    let mut config = ScoringConfig::new();
    if let Some(threshold) = args.visibility {
        config = config.with_visibility_threshold(threshold);
    }
    let scorer = PoseScorer::new(config);

    println!("Ultralytics {VERSION} 🚀 Avatar pose scoring");
    section!("{}: {}", reference.name, reference.description);

    let mut reports = Vec::with_capacity(frames.len());
    for (i, pose) in frames.iter().enumerate() {
        let report = match pose {
            Some(pose) => scorer.evaluate(&pose.landmarks, &reference.landmarks),
            None => ScoreReport {
                score: 0,
                feedback: Feedback::from_score(0),
                celebrate: false,
            },
        };
        let joints = pose
            .as_ref()
            .map(|p| scorer.joint_similarities(&p.landmarks, &reference.landmarks))
            .unwrap_or_default();
        info!(
            "frame {}: {:>3}% {} ({} {})",
            i + 1,
            report.score,
            paint(report.feedback.severity(), report.feedback.message()),
            joints.len(),
            pluralize(joints.len(), "joint")
        );
        for joint in joints.iter().filter(|j| j.similarity < OFF_TARGET) {
            verbose!(
                "    {:<16} {:>3.0}% (off by {:.2})",
                joint.joint.name(),
                joint.similarity * 100.0,
                joint.distance
            );
        }
        if report.celebrate {
            celebrate!("Pose matched!");
        }
        reports.push(report);
    }

    if let Some(summary) = summarize(&reports) {
        verbose!(
            "Best {}%, mean {:.1}% over {} {}, {} matched",
            summary.best,
            summary.mean,
            reports.len(),
            pluralize(reports.len(), "frame"),
            summary.matched
        );
    }
}

/// Aggregate of a scored sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Summary {
    best: u8,
    mean: f32,
    matched: usize,
}

#[allow(clippy::cast_precision_loss)]
fn summarize(reports: &[ScoreReport]) -> Option<Summary> {
    let best = reports.iter().map(|r| r.score).max()?;
    let mean = reports.iter().map(|r| f32::from(r.score)).sum::<f32>() / reports.len() as f32;
    let matched = reports.iter().filter(|r| r.celebrate).count();
    Some(Summary { best, mean, matched })
}
