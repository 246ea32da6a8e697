use log::debug;
use serde::Serialize;

use crate::{
    maze::grid::{Coord, Direction},
    random::RandomSource,
};

use super::super::MazeMaker;

const BREAK_ORDER: [Direction; 4] = [
    Direction::West,
    Direction::East,
    Direction::North,
    Direction::South,
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoopReport {
    pub trials: usize,
    pub breaks: usize, // Trials that punched at a neighbor.
    pub opened: usize, // Breaks that hit a wall still standing.
}

pub trait Loops {
    /// Gives every cell a `break_chance` of removing the wall to one of its neighbors picked at
    /// random, visited or not. Cells are tried column by column. Punching an open wall does
    /// nothing.
    fn punch_loops(&mut self, break_chance: f64) -> LoopReport;
}

impl<R: RandomSource + ?Sized> Loops for MazeMaker<'_, R> {
    fn punch_loops(&mut self, break_chance: f64) -> LoopReport {
        let mut report = LoopReport::default();

        for x in 0..self.grid.cols() {
            for y in 0..self.grid.rows() {
                report.trials += 1;
                if !self.chance(break_chance) {
                    continue;
                }

                let cell = Coord::new(x, y);
                let neighbors: Vec<Coord> = BREAK_ORDER
                    .iter()
                    .filter_map(|&direction| self.grid.neighbor(cell, direction))
                    .collect();

                if let Some(neighbor) = self.pick_neighbor(&neighbors) {
                    report.breaks += 1;
                    if self.grid.remove_wall_between(cell, neighbor) {
                        report.opened += 1;
                    }
                }
            }
        }

        debug!(
            "Punched {} loops in {} breaks over {} cells.",
            report.opened, report.breaks, report.trials
        );

        report
    }
}
