//! jobsift CLI - job posting filter and query service.

mod cli;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Serve {
            file,
            host,
            port,
            agent,
            model,
            api_base,
            alias,
        } => commands::serve::run(
            file,
            commands::serve::ServeOptions {
                host,
                port,
                agent,
                model,
                api_base,
            },
            alias,
            cli.verbose,
        ),

        Commands::Info { file, alias } => commands::info::run(file, alias, cli.verbose),

        Commands::Filter {
            file,
            location,
            company,
            role,
            skills,
            alias,
        } => commands::filter::run(
            file,
            jobsift::FilterRequest {
                location,
                company,
                role,
                skills,
            },
            alias,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so JSON printed by commands stays clean on stdout.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
