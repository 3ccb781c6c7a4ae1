//! droidify - Claude plugin to Factory Droid converter

use clap::Parser;

use droidify::cli::{Cli, Commands};
use droidify::commands;
use droidify::logging::init_tracing;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.quiet),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("{:?}", miette::Report::new(e));
        std::process::exit(1);
    }
}
