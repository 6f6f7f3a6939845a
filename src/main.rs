use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::clamp_cmd::ClampArgs;
use cli::config_cmd::ConfigCommand;
use cli::demo_cmd::{JsonArgs, PointArgs};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("CLAMPKIT_BUILD_DATE"),
    ", ",
    env!("CLAMPKIT_BUILD_TARGET"),
    ")"
);

#[derive(Parser)]
#[command(
    name = "clampkit",
    version,
    long_version = LONG_VERSION,
    about = "Clamp integers to a range, plus JSON and point demos"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Restrict a value to the inclusive range [lo, hi]
    #[command(allow_negative_numbers = true)]
    Clamp(ClampArgs),
    /// Print a two-field record as compact JSON
    #[command(allow_negative_numbers = true)]
    Json(JsonArgs),
    /// Print a point's distance from the origin
    #[command(allow_negative_numbers = true)]
    Point(PointArgs),
    /// Manage configuration (.clampkit.json)
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Clamp(args)) => cli::clamp_cmd::run(args),
        Some(Commands::Json(args)) => cli::demo_cmd::run_json(args),
        Some(Commands::Point(args)) => cli::demo_cmd::run_point(args),
        Some(Commands::Config { command }) => cli::config_cmd::run(command),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
