//! Timed runs of the connectivity strategies.

use std::fmt;
use std::time::{Duration, Instant};

use log::info;
use voxlink_connect::{ConnectivityBuilder, FloodFill, Strategy, UnionFindSweep};
use voxlink_forest::CoinFlip;
use voxlink_grid::{BernoulliSource, OccupancyGrid};

use crate::config::{ConfigError, RunConfig};

/// Timings and results for one strategy.
#[derive(Clone, Debug, PartialEq)]
pub struct StrategyReport {
    /// The strategy that ran.
    pub strategy: Strategy,
    /// Time spent discovering components.
    pub build: Duration,
    /// Time spent normalising the result into a catalog.
    pub catalog: Duration,
    /// Number of components found.
    pub components: usize,
    /// Size of the largest component, 0 if there are none.
    pub largest: usize,
}

impl StrategyReport {
    /// `build + catalog`.
    pub fn total(&self) -> Duration {
        self.build + self.catalog
    }
}

impl fmt::Display for StrategyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.strategy)?;
        writeln!(f, "Time used (connect): {:.6} (sec.)", self.build.as_secs_f64())?;
        writeln!(f, "Time used (catalog): {:.6} (sec.)", self.catalog.as_secs_f64())?;
        writeln!(f, "Time used sum(1, 2): {:.6} (sec.)", self.total().as_secs_f64())?;
        write!(
            f,
            "Components: {}, largest: {} cells",
            self.components, self.largest
        )
    }
}

/// Outcome of [`run_timed`].
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    /// Grid extent.
    pub dims: (u32, u32, u32),
    /// Occupied cells in the generated grid.
    pub occupied: usize,
    /// Time spent generating the grid.
    pub generate: Duration,
    /// One entry per configured strategy, in order.
    pub strategies: Vec<StrategyReport>,
}

impl RunReport {
    /// Whether every strategy found the same number of components.
    pub fn counts_agree(&self) -> bool {
        self.strategies
            .windows(2)
            .all(|w| w[0].components == w[1].components && w[0].largest == w[1].largest)
    }
}

/// Time both phases of `builder` over `grid`.
pub fn time_phases<B: ConnectivityBuilder>(
    strategy: Strategy,
    builder: &mut B,
    grid: &OccupancyGrid,
) -> StrategyReport {
    info!("{strategy}: start connect");
    let start = Instant::now();
    let output = builder.build(grid);
    let build = start.elapsed();
    info!("{strategy}: stop connect");

    info!("{strategy}: start catalog");
    let start = Instant::now();
    let catalog = builder.catalog(output);
    let catalog_time = start.elapsed();
    info!("{strategy}: stop catalog");

    StrategyReport {
        strategy,
        build,
        catalog: catalog_time,
        components: catalog.len(),
        largest: catalog.largest().map_or(0, |(_, m)| m.len()),
    }
}

/// Validate `config`, generate its grid, and time each configured strategy.
pub fn run_timed(config: &RunConfig) -> Result<RunReport, ConfigError> {
    config.validate()?;
    let mut source = BernoulliSource::new(config.fill_probability, config.grid_seed)?;

    let start = Instant::now();
    let grid = OccupancyGrid::generate(config.nx, config.ny, config.nz, &mut source)?;
    let generate = start.elapsed();
    info!(
        "generated {}x{}x{} grid, {} of {} cells occupied",
        config.nx,
        config.ny,
        config.nz,
        grid.occupied_count(),
        grid.cell_count()
    );

    let strategies = config
        .strategies
        .iter()
        .map(|&strategy| match strategy {
            Strategy::FloodFill => time_phases(strategy, &mut FloodFill::new(), &grid),
            Strategy::UnionFindSweep => time_phases(
                strategy,
                &mut UnionFindSweep::with_policy(CoinFlip::seeded(config.link_seed)),
                &grid,
            ),
        })
        .collect();

    Ok(RunReport {
        dims: grid.dims(),
        occupied: grid.occupied_count(),
        generate,
        strategies,
    })
}
