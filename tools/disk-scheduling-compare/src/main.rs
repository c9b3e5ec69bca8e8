mod chart;

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Builder;
use itertools::Itertools;

use dslab_disk_scheduling::comparison::{best, Comparison, PolicyRun};
use dslab_disk_scheduling::input::SimulationConfig;
use dslab_disk_scheduling::{Cylinder, Direction, Policy};

const CHART_WIDTH: usize = 64;

/// Compares disk-head scheduling policies on the same set of requests.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Input file: key=value text or YAML (.yaml/.yml)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file for results in JSON
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of threads for running policies
    #[arg(short, long, default_value = "1")]
    threads: usize,

    /// Initial direction for SCAN and LOOK [up, down]
    #[arg(short, long)]
    direction: Option<Direction>,

    /// Policy to run, can be repeated (default: all)
    #[arg(short, long = "policy")]
    policies: Vec<Policy>,

    /// Lowest cylinder of the disk
    #[arg(long, allow_hyphen_values = true)]
    lower_bound: Option<Cylinder>,

    /// Highest cylinder of the disk
    #[arg(long, allow_hyphen_values = true)]
    upper_bound: Option<Cylinder>,

    /// Print text chart of head movement for each policy
    #[arg(long)]
    chart: bool,
}

fn apply_overrides(config: &mut SimulationConfig, args: &Args) {
    if let Some(direction) = args.direction {
        config.direction = direction;
    }
    if !args.policies.is_empty() {
        config.policies = args.policies.clone();
    }
    if let Some(lower_bound) = args.lower_bound {
        config.lower_bound = lower_bound;
    }
    if let Some(upper_bound) = args.upper_bound {
        config.upper_bound = upper_bound;
    }
}

fn report(runs: &[PolicyRun], config: &SimulationConfig, show_chart: bool) -> anyhow::Result<()> {
    let domain = config.domain()?;
    for run in runs {
        if run.policy.uses_direction() {
            println!("{} ({}) total head movement: {}", run.policy, run.direction, run.total_movement());
        } else {
            println!("{} total head movement: {}", run.policy, run.total_movement());
        }
        println!("    {}", run.trace.visited().iter().join(" -> "));
        if show_chart {
            print!("{}", chart::render(&run.trace, &domain, CHART_WIDTH));
        }
    }
    if let Some(best) = best(runs) {
        println!("Best: {} with total head movement {}", best.policy, best.total_movement());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let args = Args::parse();

    let mut config = SimulationConfig::load(&args.input)
        .with_context(|| format!("can't load input from {}", args.input.display()))?;
    apply_overrides(&mut config, &args);
    log::info!(
        "Initial position {}, {} requests, disk [{}, {}]",
        config.initial_position,
        config.requests.len(),
        config.lower_bound,
        config.upper_bound
    );

    let comparison = Comparison::from_config(&config).context("invalid simulation input")?;
    let runs = if args.threads > 1 {
        comparison.run_parallel(args.threads)?
    } else {
        comparison.run()?
    };

    report(&runs, &config, args.chart)?;

    if let Some(output) = &args.output {
        let file = File::create(output).with_context(|| format!("can't create {}", output.display()))?;
        serde_json::to_writer_pretty(file, &runs).context("can't write results")?;
        log::info!("Results saved to {}", output.display());
    }
    Ok(())
}
