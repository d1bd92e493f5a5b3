//! Perfect-maze carving by randomized depth-first backtracking.
//!
//! Every cell starts with all four walls. Starting at the entry cell we
//! repeatedly knock through to a random untouched neighbour, pushing the
//! current cell on a stack; when no untouched neighbour is left we pop back.
//! The carved passages form a spanning tree of the grid: one path between
//! any two cells and exactly `cells − 1` passages.

use std::collections::VecDeque;

use bitflags::bitflags;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

/*------------------------------ walls -------------------------------*/

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Walls: u8 {
        const NORTH = 0b0001;
        const SOUTH = 0b0010;
        const EAST  = 0b0100;
        const WEST  = 0b1000;
    }
}

/// Grid direction. Row 0 is the top, so North is `row − 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Neighbour scan order used while carving.
    pub const SCAN: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::South,
        Direction::North,
    ];

    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    #[inline]
    pub fn wall(self) -> Walls {
        match self {
            Direction::North => Walls::NORTH,
            Direction::South => Walls::SOUTH,
            Direction::East => Walls::EAST,
            Direction::West => Walls::WEST,
        }
    }

    /// (d_col, d_row)
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

/*------------------------------ cells -------------------------------*/

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
    walls: Walls,
}

impl Cell {
    pub fn new(col: usize, row: usize) -> Self {
        Self {
            col,
            row,
            walls: Walls::all(),
        }
    }

    #[inline]
    pub fn walls(&self) -> Walls {
        self.walls
    }

    #[inline]
    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls.contains(dir.wall())
    }

    /// Untouched by the carver.
    #[inline]
    pub fn has_all_walls(&self) -> bool {
        self.walls.is_all()
    }
}

/*------------------------------ grid --------------------------------*/

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze needs at least one column and one row, got {cols}×{rows}")]
    EmptyGrid { cols: usize, rows: usize },

    #[error("entry ({col}, {row}) lies outside the {cols}×{rows} grid")]
    EntryOutOfBounds {
        col: usize,
        row: usize,
        cols: usize,
        rows: usize,
    },
}

/// Dense `cols × rows` grid of cells, stored row-major.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    cols: usize,
    rows: usize,
    entry: (usize, usize),
    cells: Vec<Cell>,
}

impl MazeGrid {
    /// Grid with every wall standing. `entry` is `(col, row)`.
    pub fn new(cols: usize, rows: usize, entry: (usize, usize)) -> Result<Self, MazeError> {
        if cols == 0 || rows == 0 {
            return Err(MazeError::EmptyGrid { cols, rows });
        }
        let (col, row) = entry;
        if col >= cols || row >= rows {
            return Err(MazeError::EntryOutOfBounds {
                col,
                row,
                cols,
                rows,
            });
        }
        let cells = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| Cell::new(c, r)))
            .collect();
        Ok(Self {
            cols,
            rows,
            entry,
            cells,
        })
    }

    /// [`new`](Self::new) followed by [`generate`](Self::generate).
    pub fn generated<R: Rng + ?Sized>(
        cols: usize,
        rows: usize,
        entry: (usize, usize),
        rng: &mut R,
    ) -> Result<Self, MazeError> {
        let mut maze = Self::new(cols, rows, entry)?;
        maze.generate(rng);
        Ok(maze)
    }

    /*──────────────────────── accessors ─────────────────────────────*/

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn entry(&self) -> (usize, usize) {
        self.entry
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        (col < self.cols && row < self.rows).then(|| &self.cells[self.index(col, row)])
    }

    /// Grid neighbour of `(col, row)` in `dir`, if it exists.
    pub fn neighbour(&self, col: usize, row: usize, dir: Direction) -> Option<(usize, usize)> {
        let (dc, dr) = dir.delta();
        let c = col.checked_add_signed(dc)?;
        let r = row.checked_add_signed(dr)?;
        (c < self.cols && r < self.rows).then_some((c, r))
    }

    /// Centre of a cell once the grid is scaled to `width`×`height`.
    pub fn cell_centre(&self, (col, row): (usize, usize), width: f32, height: f32) -> Vec2 {
        let sx = width / self.cols as f32;
        let sy = height / self.rows as f32;
        Vec2::new((col as f32 + 0.5) * sx, (row as f32 + 0.5) * sy)
    }

    /*──────────────────────── carving ───────────────────────────────*/

    /// Knock down the wall between cell `idx` and its neighbour in `dir`,
    /// on both sides.
    fn carve(&mut self, idx: usize, next: usize, dir: Direction) {
        self.cells[idx].walls.remove(dir.wall());
        self.cells[next].walls.remove(dir.opposite().wall());
    }

    /// Untouched neighbours of cell `idx`, in [`Direction::SCAN`] order.
    fn fresh_neighbours(&self, idx: usize) -> SmallVec<[(Direction, usize); 4]> {
        let Cell { col, row, .. } = self.cells[idx];
        Direction::SCAN
            .iter()
            .filter_map(|&dir| {
                let (c, r) = self.neighbour(col, row, dir)?;
                let n = self.index(c, r);
                self.cells[n].has_all_walls().then_some((dir, n))
            })
            .collect()
    }

    /// Carve a perfect maze from the entry cell. Any previous carving is
    /// discarded first.
    ///
    /// # Panics
    /// If the backtrack stack runs dry while cells are still unvisited. A
    /// rectangular grid is connected, so that means the carver is broken.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            cell.walls = Walls::all();
        }

        let total = self.cells.len();
        let mut stack: Vec<usize> = Vec::with_capacity(total);
        let mut current = self.index(self.entry.0, self.entry.1);
        let mut visited = 1;

        while visited < total {
            let options = self.fresh_neighbours(current);
            if options.is_empty() {
                current = stack.pop().unwrap_or_else(|| {
                    panic!("maze carver stranded with {visited}/{total} cells visited")
                });
                continue;
            }
            let (dir, next) = options[rng.random_range(0..options.len())];
            self.carve(current, next, dir);
            stack.push(current);
            current = next;
            visited += 1;
        }

        debug!(
            cols = self.cols,
            rows = self.rows,
            entry = ?self.entry,
            "maze carved"
        );
    }

    /*──────────────────────── structure checks ──────────────────────*/

    /// Number of knocked-down wall pairs.
    pub fn open_passages(&self) -> usize {
        self.cells
            .iter()
            .map(|c| {
                let south = c.row + 1 < self.rows && !c.has_wall(Direction::South);
                let east = c.col + 1 < self.cols && !c.has_wall(Direction::East);
                south as usize + east as usize
            })
            .sum()
    }

    /// Flood fill through open walls; returns how many cells are reachable
    /// from `start`.
    pub fn reachable_from(&self, start: (usize, usize)) -> usize {
        let mut seen = vec![false; self.cells.len()];
        let mut queue = VecDeque::from([start]);
        seen[self.index(start.0, start.1)] = true;
        let mut count = 0;

        while let Some((col, row)) = queue.pop_front() {
            count += 1;
            let cell = &self.cells[self.index(col, row)];
            for dir in Direction::SCAN {
                if cell.has_wall(dir) {
                    continue;
                }
                if let Some((c, r)) = self.neighbour(col, row, dir) {
                    let n = self.index(c, r);
                    if !seen[n] {
                        seen[n] = true;
                        queue.push_back((c, r));
                    }
                }
            }
        }
        count
    }

    /// Connected and acyclic: every cell reachable and `passages == cells − 1`.
    pub fn is_perfect(&self) -> bool {
        let n = self.cells.len();
        self.reachable_from(self.entry) == n && self.open_passages() == n - 1
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
