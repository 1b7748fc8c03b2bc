//! voxlink-timing: time connected-component discovery on a random grid.
//!
//! Generates an `nx * ny * nz` occupancy grid from a seeded Bernoulli
//! source and reports connect and catalog times for each strategy.
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn, LevelFilter};
use voxlink_bench::{run_timed, RunConfig};
use voxlink_connect::Strategy;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    FloodFill,
    UnionFind,
    Both,
}

impl StrategyArg {
    fn strategies(self) -> Vec<Strategy> {
        match self {
            Self::FloodFill => vec![Strategy::FloodFill],
            Self::UnionFind => vec![Strategy::UnionFindSweep],
            Self::Both => Strategy::ALL.to_vec(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "voxlink-timing",
    about = "Time 6-connected component discovery on a random occupancy grid"
)]
struct Args {
    /// Cells along X
    #[arg(long, default_value_t = 400)]
    nx: u32,

    /// Cells along Y
    #[arg(long, default_value_t = 250)]
    ny: u32,

    /// Cells along Z
    #[arg(long, default_value_t = 100)]
    nz: u32,

    /// Probability that a cell is occupied
    #[arg(long, default_value_t = 0.5)]
    fill: f64,

    /// Seed for grid generation
    #[arg(long, default_value_t = 5)]
    seed: u64,

    /// Seed for union-find root selection
    #[arg(long, default_value_t = 1)]
    link_seed: u64,

    /// Strategy to time
    #[arg(long, value_enum, default_value = "both")]
    strategy: StrategyArg,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match args.verbose {
        0 => {}
        1 => {
            logger.filter_level(LevelFilter::Debug);
        }
        _ => {
            logger.filter_level(LevelFilter::Trace);
        }
    }
    logger.init();

    let config = RunConfig {
        nx: args.nx,
        ny: args.ny,
        nz: args.nz,
        fill_probability: args.fill,
        grid_seed: args.seed,
        link_seed: args.link_seed,
        strategies: args.strategy.strategies(),
    };
    info!("{config:?}");

    let report = run_timed(&config).context("timed run failed")?;

    println!(
        "Grid {}x{}x{}: {} occupied cells, generated in {:.6} (sec.)\n",
        report.dims.0,
        report.dims.1,
        report.dims.2,
        report.occupied,
        report.generate.as_secs_f64()
    );
    for strategy in &report.strategies {
        println!("{strategy}\n");
    }
    if !report.counts_agree() {
        warn!("strategies disagree on component counts");
    }
    Ok(())
}
