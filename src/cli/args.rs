//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::figma::FigmaClient;

/// Figma to Angular template generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate Angular component templates from Figma SVG exports
    #[command(visible_alias = "c")]
    Component {
        #[command(flatten)]
        args: ComponentArgs,
    },
}

/// Component command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ComponentArgs {
    /// Path to components.json
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Figma personal access token
    #[arg(short, long, env = "FIGMA_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Figma REST API base URL
    #[arg(long, env = "FIGMA_API_URL", default_value = FigmaClient::DEFAULT_API_URL, value_hint = clap::ValueHint::Url)]
    pub api_url: String,

    /// Print progress messages
    #[arg(short, long)]
    pub verbose: bool,
}
