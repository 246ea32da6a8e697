use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use super::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Self {
        Coord { x, y }
    }

    /// The side of `self` that `other` touches, or `None` unless the two are 4-adjacent.
    pub fn direction_to(&self, other: Coord) -> Option<Direction> {
        let next = |from: usize, to: usize| from.checked_add(1) == Some(to);

        if self.x == other.x && next(other.y, self.y) {
            Some(Direction::North)
        } else if self.y == other.y && next(other.x, self.x) {
            Some(Direction::West)
        } else if self.x == other.x && next(self.y, other.y) {
            Some(Direction::South)
        } else if self.y == other.y && next(self.x, other.x) {
            Some(Direction::East)
        } else {
            None
        }
    }
}

// Declaration order is the order in which unvisited neighbors are reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum Direction {
    North, // Decreasing y.
    West,  // Decreasing x.
    South, // Increasing y.
    East,  // Increasing x.
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::West => Direction::East,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walls {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Default for Walls {
    fn default() -> Self {
        Walls {
            top: true,
            right: true,
            bottom: true,
            left: true,
        }
    }
}

impl Walls {
    pub fn has(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.top,
            Direction::West => self.left,
            Direction::South => self.bottom,
            Direction::East => self.right,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.top && self.right && self.bottom && self.left
    }

    fn clear(&mut self, direction: Direction) {
        match direction {
            Direction::North => self.top = false,
            Direction::West => self.left = false,
            Direction::South => self.bottom = false,
            Direction::East => self.right = false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Cell {
    coord: Coord,
    walls: Walls,
    visited: bool,
    visit_order: Option<usize>,
}

impl Cell {
    fn new(x: usize, y: usize) -> Self {
        Cell {
            coord: Coord::new(x, y),
            walls: Walls::default(),
            visited: false,
            visit_order: None,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn walls(&self) -> Walls {
        self.walls
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Position of this cell in the generation's visiting sequence, the start cell being 0.
    pub fn visit_order(&self) -> Option<usize> {
        self.visit_order
    }

    /// Adjacent cells not yet visited, ordered north, west, south, east.
    pub fn unvisited_neighbors(&self, grid: &Grid) -> Vec<Coord> {
        Direction::iter()
            .filter_map(|direction| grid.neighbor(self.coord, direction))
            .filter(|&neighbor| !grid.cell(neighbor).visited)
            .collect()
    }
}

/// A `cols` by `rows` rectangle of cells, stored row by row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Fails unless both dimensions are positive and the block grid from [`Grid::blocks`] can be
    /// sized without overflow.
    pub fn new(cols: usize, rows: usize) -> Result<Self, ConfigError> {
        let len = checked_len(cols, rows)?;
        let mut cells = Vec::with_capacity(len);
        for y in 0..rows {
            for x in 0..cols {
                cells.push(Cell::new(x, y));
            }
        }

        Ok(Grid { cols, rows, cells })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.cols && y < self.rows
    }

    /// Panics if `(x, y)` lies outside the grid.
    pub fn cell_at(&self, x: usize, y: usize) -> &Cell {
        &self.cells[self.index(x, y)]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        if self.contains(x, y) {
            Some(&self.cells[y * self.cols + x])
        } else {
            None
        }
    }

    pub fn cell(&self, coord: Coord) -> &Cell {
        self.cell_at(coord.x, coord.y)
    }

    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let Coord { x, y } = coord;

        match direction {
            Direction::North => y.checked_sub(1).map(|y| Coord::new(x, y)),
            Direction::West => x.checked_sub(1).map(|x| Coord::new(x, y)),
            Direction::South => (y + 1 < self.rows).then(|| Coord::new(x, y + 1)),
            Direction::East => (x + 1 < self.cols).then(|| Coord::new(x + 1, y)),
        }
    }

    pub fn any_visited(&self) -> bool {
        self.cells.iter().any(|cell| cell.visited)
    }

    /// Opens the wall shared by two adjacent cells, on both sides at once.
    ///
    /// Returns `false` when the wall was already open, in which case nothing changes.
    /// Panics if the cells are not 4-adjacent or either lies outside the grid.
    pub fn remove_wall_between(&mut self, a: Coord, b: Coord) -> bool {
        let Some(direction) = a.direction_to(b) else {
            panic!("cells {:?} and {:?} are not adjacent", a, b);
        };

        let i = self.index(a.x, a.y);
        let j = self.index(b.x, b.y);
        let was_closed = self.cells[i].walls.has(direction);

        self.cells[i].walls.clear(direction);
        self.cells[j].walls.clear(direction.opposite());

        was_closed
    }

    /// Number of opened walls between pairs of adjacent cells.
    pub fn open_passages(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                let Coord { x, y } = cell.coord;
                let east = x + 1 < self.cols && !cell.walls.right;
                let south = y + 1 < self.rows && !cell.walls.bottom;
                east as usize + south as usize
            })
            .sum()
    }

    /// Rasterizes the walls into a `(2 * rows + 1)` by `(2 * cols + 1)` block grid: cells sit at odd
    /// indices, walls and pillars between them. `1` is solid, `0` is open.
    pub fn blocks(&self) -> Vec<Vec<u8>> {
        let width = 2 * self.cols + 1;
        let height = 2 * self.rows + 1;
        let mut blocks = vec![vec![1; width]; height];

        for cell in &self.cells {
            let x = 2 * cell.coord.x + 1;
            let z = 2 * cell.coord.y + 1;
            let walls = cell.walls;

            blocks[z][x] = 0;
            if !walls.top {
                blocks[z - 1][x] = 0;
            }
            if !walls.left {
                blocks[z][x - 1] = 0;
            }
            if !walls.bottom {
                blocks[z + 1][x] = 0;
            }
            if !walls.right {
                blocks[z][x + 1] = 0;
            }
        }

        blocks
    }

    pub(crate) fn visit(&mut self, coord: Coord, order: usize) {
        let i = self.index(coord.x, coord.y);
        let cell = &mut self.cells[i];
        cell.visited = true;
        cell.visit_order = Some(order);
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            self.contains(x, y),
            "cell ({}, {}) is outside the {}x{} grid",
            x,
            y,
            self.cols,
            self.rows
        );

        y * self.cols + x
    }
}

/// Number of cells in a `cols` by `rows` grid, if such a grid can be built.
pub(crate) fn checked_len(cols: usize, rows: usize) -> Result<usize, ConfigError> {
    let blocks = |n: usize| n.checked_mul(2)?.checked_add(1);
    let fits = cols > 0
        && rows > 0
        && blocks(cols)
            .zip(blocks(rows))
            .and_then(|(width, height)| width.checked_mul(height))
            .is_some();

    match cols.checked_mul(rows) {
        Some(len) if fits => Ok(len),
        _ => Err(ConfigError::InvalidDimensions { cols, rows }),
    }
}
