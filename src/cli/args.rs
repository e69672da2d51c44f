// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::{Args, Parser, Subcommand};

use crate::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Render Options:
    --pose, -p <POSE>      Pose file (.json object or array, or .jsonl)
    --style <STYLE>        Avatar style (monkey, human, cat, dog, bird) [default: monkey]
    --enhanced             Gradient limbs, shadows, glows and detailed eyes
    --width <WIDTH>        Canvas width in pixels [default: 640]
    --height <HEIGHT>      Canvas height in pixels [default: 480]
    --save                 Save frames to runs/avatar/render
    --show                 Display frames in a window
    --verbose              Show verbose output

Examples:
    ultralytics-avatar render --pose frames.json --style cat --save
    ultralytics-avatar render -p frames.jsonl --enhanced --show
    ultralytics-avatar score --pose frames.json --reference t-pose
    ultralytics-avatar references --save"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render pose frames as a stylized avatar
    Render(RenderArgs),
    /// Score pose frames against a reference pose
    Score(ScoreArgs),
    /// List the built-in reference poses
    References(ReferencesArgs),
}

/// Arguments for the render command.
#[derive(Args, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct RenderArgs {
    /// Pose file (.json object or array, or .jsonl)
    #[arg(short, long)]
    pub pose: String,

    /// Avatar style; unknown names fall back to monkey
    #[arg(long, default_value = "monkey")]
    pub style: String,

    /// Gradient limbs, shadows, glows and detailed eyes
    #[arg(long, default_value_t = false)]
    pub enhanced: bool,

    /// Canvas width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Save frames to runs/avatar/render
    #[arg(long, default_value_t = false)]
    pub save: bool,

    /// Output directory, overrides the numbered run directory
    #[arg(short, long)]
    pub output: Option<String>,

    /// Display frames in a window
    #[arg(long, default_value_t = false)]
    pub show: bool,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}

/// Arguments for the score command.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Pose file (.json object or array, or .jsonl)
    #[arg(short, long)]
    pub pose: String,

    /// Reference pose id
    #[arg(short, long, default_value = "t-pose")]
    pub reference: String,

    /// Minimum landmark visibility for a joint to count
    #[arg(long)]
    pub visibility: Option<f32>,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}

/// Arguments for the references command.
#[derive(Args, Debug)]
pub struct ReferencesArgs {
    /// Render each reference outline to runs/avatar/references
    #[arg(long, default_value_t = false)]
    pub save: bool,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}

impl Commands {
    /// Verbosity requested by the subcommand.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        match self {
            Self::Render(args) => args.verbose,
            Self::Score(args) => args.verbose,
            Self::References(args) => args.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_args_defaults() {
        let args = Cli::parse_from(["app", "render", "--pose", "frames.json"]);
        assert!(args.command.verbose());
        match args.command {
            Commands::Render(render) => {
                assert_eq!(render.pose, "frames.json");
                assert_eq!(render.style, "monkey");
                assert_eq!((render.width, render.height), (640, 480));
                assert!(!render.enhanced);
                assert!(!render.save);
                assert!(render.output.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_render_args_custom() {
        let args = Cli::parse_from([
            "app",
            "render",
            "-p",
            "frames.jsonl",
            "--style",
            "bird",
            "--enhanced",
            "--width",
            "320",
            "--verbose",
            "false",
        ]);
        match args.command {
            Commands::Render(render) => {
                assert_eq!(render.style, "bird");
                assert!(render.enhanced);
                assert_eq!(render.width, 320);
                assert!(!render.verbose);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_score_args() {
        let args = Cli::parse_from(["app", "score", "--pose", "f.json", "-r", "arms-up", "--visibility", "0.7"]);
        match args.command {
            Commands::Score(score) => {
                assert_eq!(score.reference, "arms-up");
                assert_eq!(score.visibility, Some(0.7));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_render_requires_pose() {
        assert!(Cli::try_parse_from(["app", "render"]).is_err());
    }
}
