pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use clap::Parser;
use mig_core::Result;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Restore {
            path,
            output,
            point,
            no_input,
            json,
        } => handlers::handle_restore(path, output, point, no_input, json),
        Commands::Points { path, json } => handlers::handle_points(path, json),
        Commands::Plan { path, point, json } => handlers::handle_plan(path, point, json),
    }
}
