use anyhow::Result;
use clap::Args;

use super::style;
use clampkit::clamp::{RangePolicy, clamp_with};

#[derive(Args)]
pub struct ClampArgs {
    /// Value to restrict
    pub value: i64,
    /// Lower bound (defaults to clamp.range.lo from config)
    #[arg(long)]
    pub lo: Option<i64>,
    /// Upper bound (defaults to clamp.range.hi from config)
    #[arg(long)]
    pub hi: Option<i64>,
    /// How to treat lo > hi (defaults to clamp.policy from config)
    #[arg(long, value_enum)]
    pub policy: Option<RangePolicy>,
    /// Directory containing .clampkit.json (defaults to current directory)
    #[arg(long)]
    pub path: Option<String>,
}

pub fn run(args: ClampArgs) -> Result<()> {
    let (lo, hi, policy) = match (args.lo, args.hi, args.policy) {
        (Some(lo), Some(hi), Some(policy)) => (lo, hi, policy),
        (lo, hi, policy) => {
            let config = super::load_config(&super::resolve_dir(args.path))?;
            (
                lo.unwrap_or(config.clamp.range.lo()),
                hi.unwrap_or(config.clamp.range.hi()),
                policy.unwrap_or(config.clamp.policy),
            )
        }
    };

    tracing::debug!(value = args.value, lo, hi, policy = policy.as_str(), "Clamping");

    match clamp_with(policy, args.value, lo, hi) {
        Ok(result) => {
            println!("{result}");
            Ok(())
        }
        Err(e) => {
            eprintln!(
                "{}",
                style::hint("Pass --policy lenient to apply the range as given.")
            );
            Err(e.into())
        }
    }
}
