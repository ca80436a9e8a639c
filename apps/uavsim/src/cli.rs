//! Command-line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// UAV Age-of-Information / energy simulator
#[derive(Parser, Debug)]
#[command(name = "uavsim")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Scenario file (.toml or .json); built-in defaults when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Command,
}

/// Values that replace the corresponding scenario keys.
#[derive(Args, Debug, Default, Clone)]
pub struct Overrides {
    /// Node-selection policy: RR, MAF or AWN
    #[arg(long, global = true)]
    pub policy: Option<String>,

    #[arg(long, global = true)]
    pub alpha: Option<f64>,

    /// Seed for node placement
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Number of sensor nodes
    #[arg(long, global = true)]
    pub nodes: Option<usize>,

    /// Mission duration (s)
    #[arg(long, global = true)]
    pub mission_time: Option<f64>,

    /// Battery capacity (Wh)
    #[arg(long, global = true)]
    pub battery: Option<f64>,

    /// Cruise speed (m/s)
    #[arg(long, global = true)]
    pub speed: Option<f64>,

    /// Payload per visit (bits)
    #[arg(long, global = true)]
    pub payload: Option<u64>,

    /// AWN age exponent
    #[arg(long, global = true)]
    pub beta: Option<f64>,

    /// AWN distance exponent
    #[arg(long, global = true)]
    pub gamma: Option<f64>,

    /// Coverage radius (m)
    #[arg(long, global = true)]
    pub comm_radius: Option<f64>,

    /// Choose the next node by policy every cycle instead of a fixed tour
    #[arg(long, global = true)]
    pub greedy: bool,

    /// Cap on hover time per visit (s)
    #[arg(long, global = true)]
    pub hover_cap: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one simulation and write its log, config and summary
    Run {
        /// Output directory (default: runs/<timestamp>)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Sweep alpha over 0, 0.25, 0.5, 0.75, 1 on one node set
    SweepAlpha {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Compare RR, MAF and AWN in greedy mode
    ComparePolicies {
        #[arg(long)]
        out: Option<PathBuf>,

        /// Draw a separate node set for each policy
        #[arg(long)]
        vary_seed_per_policy: bool,
    },
    /// Sweep the number of nodes
    SweepNodes {
        #[arg(long, default_value_t = 10)]
        min: usize,

        #[arg(long, default_value_t = 50)]
        max: usize,

        #[arg(long, default_value_t = 10)]
        step: usize,

        #[arg(long)]
        out: Option<PathBuf>,
    },
}
