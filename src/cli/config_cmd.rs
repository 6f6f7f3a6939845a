use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::Path;

use super::style;
use clampkit::config::{CONFIG_FILENAME, Config, ConfigSources};

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write a default .clampkit.json in the current directory
    Init,
    /// Check the config files and print the resolved settings
    Show {
        /// Directory containing .clampkit.json (defaults to current directory)
        #[arg(long)]
        path: Option<String>,
    },
}

pub fn run(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Init => init(),
        ConfigCommand::Show { path } => show(&super::resolve_dir(path)),
    }
}

fn init() -> Result<()> {
    let path = Path::new(CONFIG_FILENAME);
    if path.exists() {
        println!(
            "{}",
            style::warn(&format!("{CONFIG_FILENAME} already exists, left unchanged."))
        );
        return Ok(());
    }

    let template = serde_json::to_string_pretty(&Config::default())?;
    std::fs::write(path, format!("{template}\n"))
        .with_context(|| format!("Failed to write {CONFIG_FILENAME}"))?;
    tracing::info!(path = %path.display(), "Wrote config template");
    println!("{}", style::success(&format!("Created {CONFIG_FILENAME}")));
    Ok(())
}

fn show(dir: &str) -> Result<()> {
    let sources = ConfigSources::discover(Path::new(dir));

    println!("{}", style::heading("Sources:"));
    match &sources.global {
        Some(path) => print_source("global", path),
        None => println!("  global  (no config directory on this platform)"),
    }
    print_source("local", &sources.local);

    let config = sources.resolve().context("Config is invalid")?;
    let range = config.clamp.range;

    println!("\n{}", style::heading("Resolved settings:"));
    println!(
        "  clamp   [{}, {}] policy={}",
        range.lo(),
        range.hi(),
        config.clamp.policy.as_str()
    );
    println!("  record  {}", config.record.to_compact_json()?);
    println!("  point   {}", config.point.describe());
    Ok(())
}

fn print_source(label: &str, path: &Path) {
    let state = if path.exists() { "found" } else { "not found" };
    println!("  {label:<7} {} ({state})", path.display());
}
