//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::info;
use uav_core::{Node, SimRng, path_length, place_random};
use uav_output::{CsvLogWriter, LOG_FILE_NAME, LogOutputObserver, RunMetrics};
use uav_planner::Policy;
use uav_sim::{MemoryObserver, SimBuilder, SimParams, Summary};

use crate::config::{Scenario, ScenarioConfig};

pub const ALPHAS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

pub const RESOLVED_CONFIG_FILE: &str = "resolved_config.json";
pub const SUMMARY_FILE: &str = "summary.json";
pub const PARETO_FILE: &str = "pareto_results.csv";
pub const POLICY_SUMMARY_FILE: &str = "policy_summary.csv";
pub const SWEEP_NODES_FILE: &str = "sweep_N.csv";

// ── Shared helpers ────────────────────────────────────────────────────────────

/// `runs/<YYYYmmdd_HHMMSS>` in local time.
pub fn default_run_dir() -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from("runs").join(stamp.to_string())
}

fn prepare_dir(out: Option<&Path>) -> Result<PathBuf> {
    let dir = out.map_or_else(default_run_dir, Path::to_path_buf);
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
    Ok(dir)
}

fn place_nodes(n: usize, field: (f64, f64), rng: &mut SimRng) -> Result<Vec<Node>> {
    place_random(n, field, rng).context("placing nodes")
}

fn builder<'a>(nodes: &'a [Node], scenario: &'a Scenario, params: &'a SimParams) -> SimBuilder<'a> {
    let mut b = SimBuilder::new(nodes, scenario.uav.clone(), &scenario.radio, params);
    if let Some(spec) = &scenario.rotor {
        b = b.aerodynamics(spec.clone());
    }
    if let Some(tx) = scenario.tx {
        b = b.transmitter(tx);
    }
    b
}

/// One run kept in memory; used by the sweeps.
fn simulate(nodes: &[Node], scenario: &Scenario, params: &SimParams) -> Result<(Summary, RunMetrics)> {
    let mut sim = builder(nodes, scenario, params).build()?;
    let mut obs = MemoryObserver::default();
    let summary = sim.run(&mut obs);
    Ok((summary, RunMetrics::compute(&obs.records)))
}

fn write_summary_json(summary: &Summary, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}

fn write_rows<R>(path: &Path, header: &[&str], rows: R) -> Result<()>
where
    R: IntoIterator<Item = Vec<String>>,
{
    let mut w = csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    w.write_record(header)?;
    for row in rows {
        w.write_record(&row)?;
    }
    w.flush()?;
    Ok(())
}

// ── run ───────────────────────────────────────────────────────────────────────

/// Single simulation; writes the log, summary and resolved config to `out`.
pub fn run(cfg: &ScenarioConfig, out: Option<&Path>) -> Result<PathBuf> {
    let scenario = cfg.resolve()?;
    let dir = prepare_dir(out)?;

    let mut rng = SimRng::new(scenario.seed);
    let nodes = place_nodes(scenario.n_nodes, scenario.params.field_size, &mut rng)?;

    let mut sim = builder(&nodes, &scenario, &scenario.params).build()?;
    let writer = CsvLogWriter::new(&dir, sim.schema())?;
    let mut obs = LogOutputObserver::new(writer);
    let summary = sim.run(&mut obs);
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing log");
    }

    cfg.write_json(&dir.join(RESOLVED_CONFIG_FILE))?;
    write_summary_json(&summary, &dir.join(SUMMARY_FILE))?;

    let log_path = dir.join(LOG_FILE_NAME);
    let m = RunMetrics::from_log(&log_path)?;
    println!("Run complete ({}):", summary.termination);
    println!("  log: {}", log_path.display());
    println!(
        "  avg_aoi={:.2}s, max_aoi={:.2}s, p99={:.2}s",
        m.avg_aoi, m.max_aoi, m.p99_aoi
    );
    println!("  energy={:.3} Wh over {} visits", m.total_energy_wh, summary.cycles);
    println!("  path={:.1} m", path_length(&summary.visited_path));
    Ok(dir)
}

// ── sweep-alpha ───────────────────────────────────────────────────────────────

/// Same node set for every alpha; writes `pareto_results.csv`.
pub fn sweep_alpha(cfg: &ScenarioConfig, out: Option<&Path>) -> Result<PathBuf> {
    let scenario = cfg.resolve()?;
    let dir = prepare_dir(out)?;

    let mut rng = SimRng::new(scenario.seed);
    let nodes = place_nodes(scenario.n_nodes, scenario.params.field_size, &mut rng)?;

    let results = ALPHAS
        .par_iter()
        .map(|&alpha| -> Result<(f64, f64, f64)> {
            let params = SimParams { alpha, ..scenario.params.clone() };
            let (summary, m) = simulate(&nodes, &scenario, &params)?;
            let energy_norm = m.total_energy_wh / summary.battery_wh.max(1e-9);
            Ok((alpha, m.avg_aoi, energy_norm))
        })
        .collect::<Result<Vec<_>>>()?;

    for (alpha, avg_aoi, energy_norm) in &results {
        println!("  alpha={alpha:.2}: avg_aoi={avg_aoi:.2}s, energy_norm={energy_norm:.3}");
    }
    write_rows(
        &dir.join(PARETO_FILE),
        &["alpha", "avg_aoi", "energy_norm"],
        results
            .iter()
            .map(|(a, aoi, e)| vec![a.to_string(), aoi.to_string(), e.to_string()]),
    )?;

    let mut saved = cfg.clone();
    saved.alpha = 0.5;
    saved.write_json(&dir.join(RESOLVED_CONFIG_FILE))?;
    info!(dir = %dir.display(), points = results.len(), "alpha sweep written");
    Ok(dir)
}

// ── compare-policies ──────────────────────────────────────────────────────────

/// RR, MAF and AWN in greedy mode; writes `policy_summary.csv`.
///
/// With `vary_seed_per_policy` each policy gets its own field, drawn from a
/// child generator of the scenario seed.
pub fn compare_policies(cfg: &ScenarioConfig, out: Option<&Path>, vary_seed_per_policy: bool) -> Result<PathBuf> {
    let scenario = cfg.resolve()?;
    let dir = prepare_dir(out)?;
    let field = scenario.params.field_size;

    let mut rng = SimRng::new(scenario.seed);
    let shared = place_nodes(scenario.n_nodes, field, &mut rng)?;
    let fields: Vec<Vec<Node>> = if vary_seed_per_policy {
        (0..Policy::ALL.len())
            .map(|i| place_nodes(scenario.n_nodes, field, &mut rng.child(i as u64)))
            .collect::<Result<_>>()?
    } else {
        vec![shared; Policy::ALL.len()]
    };

    let results = Policy::ALL
        .par_iter()
        .zip(fields.par_iter())
        .map(|(&policy, nodes)| -> Result<(Policy, f64, f64)> {
            let params = SimParams { policy, greedy_mode: true, ..scenario.params.clone() };
            let (_, m) = simulate(nodes, &scenario, &params)?;
            Ok((policy, m.avg_aoi, m.total_energy_wh))
        })
        .collect::<Result<Vec<_>>>()?;

    for (policy, avg_aoi, energy) in &results {
        println!("  {policy}: avg_aoi={avg_aoi:.2}s, energy={energy:.3}Wh");
    }
    write_rows(
        &dir.join(POLICY_SUMMARY_FILE),
        &["policy", "avg_aoi", "total_energy_Wh"],
        results
            .iter()
            .map(|(p, aoi, e)| vec![p.to_string(), aoi.to_string(), e.to_string()]),
    )?;

    let mut saved = cfg.clone();
    saved.policy = Policy::AgeWeightedNearest.to_string();
    saved.write_json(&dir.join(RESOLVED_CONFIG_FILE))?;
    info!(dir = %dir.display(), "policy comparison written");
    Ok(dir)
}

// ── sweep-nodes ───────────────────────────────────────────────────────────────

/// `N = min, min + step, ..., ≤ max`; writes `sweep_N.csv`.
///
/// Node sets are drawn one after another from a single generator, so each `N`
/// sees a different field.
pub fn sweep_nodes(
    cfg:  &ScenarioConfig,
    min:  usize,
    max:  usize,
    step: usize,
    out:  Option<&Path>,
) -> Result<PathBuf> {
    anyhow::ensure!(step > 0, "--step must be positive");
    let scenario = cfg.resolve()?;
    let dir = prepare_dir(out)?;

    let mut rng = SimRng::new(scenario.seed);
    let fields: Vec<(usize, Vec<Node>)> = (min..=max)
        .step_by(step)
        .map(|n| -> Result<(usize, Vec<Node>)> {
            Ok((n, place_nodes(n, scenario.params.field_size, &mut rng)?))
        })
        .collect::<Result<_>>()?;

    let results = fields
        .par_iter()
        .map(|(n, nodes)| -> Result<(usize, f64, f64)> {
            let (_, m) = simulate(nodes, &scenario, &scenario.params)?;
            Ok((*n, m.avg_aoi, m.total_energy_wh))
        })
        .collect::<Result<Vec<_>>>()?;

    for (n, avg_aoi, energy) in &results {
        println!("  N={n}: avg_aoi={avg_aoi:.2}s, energy={energy:.3}Wh");
    }
    write_rows(
        &dir.join(SWEEP_NODES_FILE),
        &["N", "avg_aoi", "total_energy_Wh"],
        results
            .iter()
            .map(|(n, aoi, e)| vec![n.to_string(), aoi.to_string(), e.to_string()]),
    )?;
    cfg.write_json(&dir.join(RESOLVED_CONFIG_FILE))?;
    info!(dir = %dir.display(), points = results.len(), "node sweep written");
    Ok(dir)
}
