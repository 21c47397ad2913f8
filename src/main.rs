//! figma-ng - Angular component templates from Figma SVG exports.

mod cli;
mod config;
mod figma;
mod logger;
mod markup;
mod template;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    // Fully sequential: a single-threaded runtime drives the HTTP client.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match &cli.command {
        Commands::Component { args } => {
            logger::set_verbose(args.verbose);
            if let Err(e) = runtime.block_on(cli::component::run(args)) {
                log!("error"; "{}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
