//! The [`ConnectivityBuilder`] trait and runtime strategy selection.

use crate::catalog::ComponentCatalog;
use crate::flood_fill::FloodFill;
use crate::sweep::UnionFindSweep;
use std::fmt;
use std::str::FromStr;
use voxlink_grid::OccupancyGrid;

/// A connected-component discovery algorithm.
///
/// A run has two phases. [`build`](Self::build) walks the grid and produces
/// the strategy's native structure (component lists, a forest, ...).
/// [`catalog`](Self::catalog) normalises that structure into a
/// [`ComponentCatalog`]. Keeping them apart lets a timing harness measure
/// each phase on its own.
pub trait ConnectivityBuilder {
    /// The strategy's native result.
    type Output;

    /// Human-readable strategy name, used in logs and reports.
    fn name(&self) -> &'static str;

    /// Discover the components of `grid`.
    fn build(&mut self, grid: &OccupancyGrid) -> Self::Output;

    /// Normalise a build result into a catalog.
    fn catalog(&self, output: Self::Output) -> ComponentCatalog;

    /// Both phases back to back.
    fn run(&mut self, grid: &OccupancyGrid) -> ComponentCatalog {
        let output = self.build(grid);
        self.catalog(output)
    }
}

/// Runtime choice between the two built-in strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Depth-first flood fill with an explicit work list.
    FloodFill,
    /// Union-find sweep over backward neighbours.
    UnionFindSweep,
}

impl Strategy {
    /// Both strategies, flood fill first.
    pub const ALL: [Strategy; 2] = [Strategy::FloodFill, Strategy::UnionFindSweep];

    /// Canonical name, also accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::FloodFill => "flood-fill",
            Self::UnionFindSweep => "union-find",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An unrecognised strategy name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseStrategyError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy '{}', expected 'flood-fill' or 'union-find'",
            self.input
        )
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "flood-fill" | "flood_fill" | "floodfill" | "dfs" => Ok(Self::FloodFill),
            "union-find" | "union_find" | "unionfind" | "dsu" => Ok(Self::UnionFindSweep),
            _ => Err(ParseStrategyError {
                input: s.to_string(),
            }),
        }
    }
}

/// Run `strategy` over `grid` with its default configuration.
pub fn connected_components(grid: &OccupancyGrid, strategy: Strategy) -> ComponentCatalog {
    match strategy {
        Strategy::FloodFill => FloodFill::new().run(grid),
        Strategy::UnionFindSweep => UnionFindSweep::new().run(grid),
    }
}
