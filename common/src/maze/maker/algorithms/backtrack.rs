use log::{debug, trace};
use serde::Serialize;

use crate::{maze::grid::Coord, random::RandomSource};

use super::super::MazeMaker;

/// What a run of [`Backtrack::backtrack`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Generation {
    pub start: Coord,
    /// Visits plus backtracks. Never more than twice the number of cells.
    pub steps: usize,
    pub passages: usize,
    pub random_backtracks: usize,
    pub stack_backtracks: usize,
}

pub trait Backtrack {
    /// Carves a perfect maze by depth-first search from a random cell.
    ///
    /// At a dead end, `randomness` is the chance of resuming from a random cell anywhere in the
    /// stack instead of its top: `0.0` gives the long corridors of a classic recursive
    /// backtracker, `1.0` the short, bushy branches of randomized Prim's.
    fn backtrack(&mut self, randomness: f64) -> Generation;
}

impl<R: RandomSource + ?Sized> Backtrack for MazeMaker<'_, R> {
    fn backtrack(&mut self, randomness: f64) -> Generation {
        let start = self.pick_cell();
        let mut visits = 0;
        self.grid.visit(start, visits);

        let mut generation = Generation {
            start,
            steps: 0,
            passages: 0,
            random_backtracks: 0,
            stack_backtracks: 0,
        };
        let mut stack = Vec::new();
        let mut current = Some(start);

        while let Some(curr) = current {
            let neighbors = self.grid.cell(curr).unvisited_neighbors(&*self.grid);

            current = if let Some(next) = self.pick_neighbor(&neighbors) {
                self.grid.remove_wall_between(curr, next);
                stack.push(curr);
                visits += 1;
                self.grid.visit(next, visits);
                generation.passages += 1;
                Some(next)
            } else if stack.is_empty() {
                None
            } else if self.chance(randomness) {
                generation.random_backtracks += 1;
                self.pick_out_cell(&mut stack)
            } else {
                generation.stack_backtracks += 1;
                stack.pop()
            };

            if let Some(next) = current {
                generation.steps += 1;
                trace!("Step {}: at {:?}, {} stacked.", generation.steps, next, stack.len());
            }
        }

        debug!(
            "Carved {}x{} maze from {:?}: {} passages, {} random and {} stack backtracks.",
            self.grid.cols(),
            self.grid.rows(),
            start,
            generation.passages,
            generation.random_backtracks,
            generation.stack_backtracks
        );

        generation
    }
}
