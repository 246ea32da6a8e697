use std::collections::{HashSet, VecDeque};

use crate::maze::{Coord, Direction, Grid};
use crate::random::RandomSource;

/// Random source that replays fixed sequences, so a test can force every choice a maze maker
/// makes. Running out of either sequence panics, which catches a maker drawing more numbers than
/// the test expected.
pub struct ScriptedRandom {
    ints: VecDeque<usize>,
    floats: VecDeque<f64>,
}

impl ScriptedRandom {
    pub fn new(ints: &[usize], floats: &[f64]) -> Self {
        ScriptedRandom {
            ints: ints.iter().copied().collect(),
            floats: floats.iter().copied().collect(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.ints.is_empty() && self.floats.is_empty()
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform_int(&mut self, min: usize, max: usize) -> usize {
        let value = self
            .ints
            .pop_front()
            .expect("scripted random source ran out of integers");
        assert!(
            (min..max).contains(&value),
            "scripted integer {} is outside {}..{}",
            value,
            min,
            max
        );
        value
    }

    fn uniform_float(&mut self) -> f64 {
        self.floats
            .pop_front()
            .expect("scripted random source ran out of floats")
    }
}

pub fn assert_walls_symmetric(grid: &Grid) {
    for cell in grid.cells() {
        for direction in [Direction::East, Direction::South] {
            if let Some(neighbor) = grid.neighbor(cell.coord(), direction) {
                assert_eq!(
                    cell.walls().has(direction),
                    grid.cell(neighbor).walls().has(direction.opposite()),
                    "wall between {:?} and {:?} is one-sided",
                    cell.coord(),
                    neighbor
                );
            }
        }
    }
}

pub fn assert_border_intact(grid: &Grid) {
    for cell in grid.cells() {
        let Coord { x, y } = cell.coord();
        let walls = cell.walls();
        assert!(y > 0 || walls.top, "border opened above {:?}", cell.coord());
        assert!(x > 0 || walls.left, "border opened left of {:?}", cell.coord());
        assert!(
            y + 1 < grid.rows() || walls.bottom,
            "border opened below {:?}",
            cell.coord()
        );
        assert!(
            x + 1 < grid.cols() || walls.right,
            "border opened right of {:?}",
            cell.coord()
        );
    }
}

/// Number of cells reachable from the top-left cell through open walls.
pub fn reachable_cells(grid: &Grid) -> usize {
    let start = Coord::new(0, 0);
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(coord) = queue.pop_front() {
        let walls = grid.cell(coord).walls();
        for direction in [
            Direction::North,
            Direction::West,
            Direction::South,
            Direction::East,
        ] {
            if walls.has(direction) {
                continue;
            }
            if let Some(next) = grid.neighbor(coord, direction) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
    }

    seen.len()
}

pub fn assert_spanning_tree(grid: &Grid) {
    assert_walls_symmetric(grid);
    assert_border_intact(grid);
    assert_eq!(
        grid.open_passages(),
        grid.len() - 1,
        "a perfect maze opens exactly one wall fewer than it has cells"
    );
    assert_eq!(
        reachable_cells(grid),
        grid.len(),
        "every cell should be reachable"
    );
}
