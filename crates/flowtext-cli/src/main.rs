//! Flowtext CLI - lay out text from the command line

mod cli;
mod commands;

use clap::Parser;

use cli::{Cli, Commands};
use commands::layout::Fit;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match &cli.command {
        Commands::Layout(args) => commands::layout::run(args).map(|fit| match fit {
            Fit::Overflows if args.strict => 2,
            _ => 0,
        }),
        Commands::Segment(args) => commands::segment::run(args).map(|()| 0),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        },
    }
}
