//! `uavsim` — run UAV data-collection missions and parameter sweeps.
//!
//! ```text
//! uavsim [--config FILE] [overrides...] run [--out DIR]
//! uavsim --policy MAF --greedy sweep-alpha
//! uavsim compare-policies --vary-seed-per-policy
//! uavsim sweep-nodes --min 10 --max 50 --step 10
//! ```
//!
//! Set `RUST_LOG=debug` (or `trace` for one line per visit) for engine logs.

mod cli;
mod commands;
mod config;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::{Cli, Command};
use crate::config::ScenarioConfig;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();
    let mut cfg = ScenarioConfig::load_or_default(cli.config.as_deref())?;
    cfg.apply(&cli.overrides);

    let dir = match cli.command {
        Command::Run { out } => commands::run(&cfg, out.as_deref())?,
        Command::SweepAlpha { out } => commands::sweep_alpha(&cfg, out.as_deref())?,
        Command::ComparePolicies { out, vary_seed_per_policy } => {
            commands::compare_policies(&cfg, out.as_deref(), vary_seed_per_policy)?
        }
        Command::SweepNodes { min, max, step, out } => {
            commands::sweep_nodes(&cfg, min, max, step, out.as_deref())?
        }
    };
    println!("Results in {}", dir.display());
    Ok(())
}
