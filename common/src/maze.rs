pub mod error;
pub mod grid;
pub mod maker;

use std::fmt;

use log::debug;
use serde::Serialize;

pub use error::ConfigError;
pub use grid::{Cell, Coord, Direction, Grid, Walls};
pub use maker::{Backtrack, Generation, LoopReport, Loops, MazeMaker};

use crate::{config::MazeConfig, random::RandomSource};

/// Carves a perfect maze into a fresh grid, one with no cell visited and every wall standing.
/// See [`Backtrack::backtrack`].
pub fn generate<R: RandomSource + ?Sized>(
    grid: &mut Grid,
    randomness: f64,
    rng: &mut R,
) -> Result<Generation, ConfigError> {
    let randomness = error::probability("randomness", randomness)?;
    let walls_standing = grid.cells().iter().all(|cell| cell.walls().is_closed());
    if grid.any_visited() || !walls_standing {
        return Err(ConfigError::AlreadyGenerated);
    }

    Ok(MazeMaker::new(grid, rng).backtrack(randomness))
}

/// Punches extra walls into a carved grid. See [`Loops::punch_loops`].
pub fn inject_loops<R: RandomSource + ?Sized>(
    grid: &mut Grid,
    break_chance: f64,
    rng: &mut R,
) -> Result<LoopReport, ConfigError> {
    let break_chance = error::probability("break_chance", break_chance)?;
    if break_chance == 1.0 {
        debug!("Break chance is 1, every cell will punch a wall.");
    }

    Ok(MazeMaker::new(grid, rng).punch_loops(break_chance))
}

#[derive(Clone, Serialize)]
pub struct Maze {
    pub grid: Grid,
    pub generation: Generation,
    pub loops: LoopReport,
}

impl Maze {
    pub fn new<R: RandomSource + ?Sized>(
        config: &MazeConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut grid = Grid::new(config.cols, config.rows)?;
        let generation = generate(&mut grid, config.randomness, rng)?;
        let loops = inject_loops(&mut grid, config.break_chance, rng)?;

        debug!(
            "Maze ready: {}x{}, {} open passages.",
            grid.cols(),
            grid.rows(),
            grid.open_passages()
        );

        Ok(Self {
            grid,
            generation,
            loops,
        })
    }

    pub fn open_passages(&self) -> usize {
        self.grid.open_passages()
    }

    /// Extra passages beyond the spanning tree, i.e. the number of independent loops.
    pub fn loop_count(&self) -> usize {
        self.open_passages() - (self.grid.len() - 1)
    }

    pub fn log(&self) -> String {
        self.grid
            .blocks()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&cell| if cell == 0 { "  " } else { "██" })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
