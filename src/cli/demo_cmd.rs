use anyhow::Result;
use clap::Args;

use clampkit::demo::{Point, Record};

#[derive(Args)]
pub struct JsonArgs {
    /// Integer `id` field (defaults to record.id from config)
    #[arg(long)]
    pub id: Option<i64>,
    /// String `name` field (defaults to record.name from config)
    #[arg(long)]
    pub name: Option<String>,
    /// Directory containing .clampkit.json (defaults to current directory)
    #[arg(long)]
    pub path: Option<String>,
}

#[derive(Args)]
pub struct PointArgs {
    #[arg(long)]
    pub x: Option<f64>,
    #[arg(long)]
    pub y: Option<f64>,
    /// Directory containing .clampkit.json (defaults to current directory)
    #[arg(long)]
    pub path: Option<String>,
}

pub fn run_json(args: JsonArgs) -> Result<()> {
    let config = super::load_config(&super::resolve_dir(args.path))?;
    let record = Record::new(
        args.id.unwrap_or(config.record.id),
        args.name.unwrap_or(config.record.name),
    );
    println!("{}", record.to_compact_json()?);
    Ok(())
}

pub fn run_point(args: PointArgs) -> Result<()> {
    let config = super::load_config(&super::resolve_dir(args.path))?;
    let point = Point::new(
        args.x.unwrap_or(config.point.x),
        args.y.unwrap_or(config.point.y),
    );
    tracing::debug!(x = point.x, y = point.y, "Computing distance from origin");
    println!("{}", point.describe());
    Ok(())
}
