pub mod algorithms;

use crate::random::RandomSource;

use super::grid::{Coord, Grid};

pub use algorithms::{
    backtrack::{Backtrack, Generation},
    loops::{LoopReport, Loops},
};

/// Pairs a grid with the random source that shapes it. The algorithms are traits implemented on
/// this type.
pub struct MazeMaker<'a, R: RandomSource + ?Sized> {
    pub grid: &'a mut Grid,
    pub rng: &'a mut R,
}

impl<'a, R: RandomSource + ?Sized> MazeMaker<'a, R> {
    pub fn new(grid: &'a mut Grid, rng: &'a mut R) -> Self {
        MazeMaker { grid, rng }
    }

    fn pick_cell(&mut self) -> Coord {
        let x = self.rng.uniform_int(0, self.grid.cols());
        let y = self.rng.uniform_int(0, self.grid.rows());
        Coord::new(x, y)
    }

    fn pick_neighbor(&mut self, neighbors: &[Coord]) -> Option<Coord> {
        if neighbors.is_empty() {
            return None;
        }

        let i = self.rng.uniform_int(0, neighbors.len());
        Some(neighbors[i])
    }

    // Keeps the remaining cells in order, so later pops from the top see the same stack.
    fn pick_out_cell(&mut self, cells: &mut Vec<Coord>) -> Option<Coord> {
        if cells.is_empty() {
            return None;
        }

        let i = self.rng.uniform_int(0, cells.len());
        Some(cells.remove(i))
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.rng.uniform_float() < probability
    }
}
