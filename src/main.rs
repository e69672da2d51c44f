// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::Parser;

use ultralytics_avatar::cli::args::{Cli, Commands};
use ultralytics_avatar::cli::logging::set_verbose;
use ultralytics_avatar::cli::references::run_references;
use ultralytics_avatar::cli::render::run_render;
use ultralytics_avatar::cli::score::run_score;

fn main() {
    let cli = Cli::parse();
    set_verbose(cli.command.verbose());

    match &cli.command {
        Commands::Render(args) => run_render(args),
        Commands::Score(args) => run_score(args),
        Commands::References(args) => run_references(args),
    }
}
