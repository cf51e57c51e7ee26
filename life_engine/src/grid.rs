// grid.rs - Grid state and the Conway step rule

use rand::Rng;

/// Moore neighborhood: the 8 offsets around a cell, (0, 0) excluded.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A fixed-size rectangular grid of live/dead cells. Dimensions are set at
/// construction and never change; a fresh `Grid` replaces the old one on
/// clear and randomize.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All-dead grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0);
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Grid where each cell is independently alive with probability
    /// `alive_probability`.
    pub fn random(rows: usize, cols: usize, alive_probability: f64, rng: &mut impl Rng) -> Self {
        let mut grid = Self::new(rows, cols);
        for cell in grid.cells.iter_mut() {
            *cell = rng.random_bool(alive_probability);
        }
        grid
    }

    /// All-dead grid with the given cells set alive. Out-of-bounds
    /// coordinates are skipped.
    pub fn from_live_cells(rows: usize, cols: usize, live: &[(usize, usize)]) -> Self {
        let mut grid = Self::new(rows, cols);
        for &(row, col) in live {
            if row < rows && col < cols {
                grid.set(row, col, true);
            }
        }
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let index = self.index(row, col);
        self.cells[index] = alive;
    }

    pub fn toggle(&mut self, row: usize, col: usize) {
        let index = self.index(row, col);
        self.cells[index] = !self.cells[index];
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Live cells in the Moore neighborhood of (row, col). Neighbors that
    /// fall outside the grid are skipped; edge and corner cells simply have
    /// fewer than 8 neighbors (no wraparound).
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for &(dr, dc) in &NEIGHBOR_OFFSETS {
            let nr = row as i32 + dr;
            let nc = col as i32 + dc;
            if nr >= 0
                && nc >= 0
                && (nr as usize) < self.rows
                && (nc as usize) < self.cols
                && self.get(nr as usize, nc as usize)
            {
                count += 1;
            }
        }
        count
    }

    /// One step of Conway's rule (B3/S23), computed purely from `self`.
    /// Every neighbor lookup reads the input generation; the result is a
    /// new grid of the same dimensions.
    pub fn next_generation(&self) -> Grid {
        let mut next = Grid::new(self.rows, self.cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let neighbors = self.live_neighbors(row, col);
                let alive = match (self.get(row, col), neighbors) {
                    (true, 2) | (true, 3) => true, // Survival
                    (false, 3) => true,            // Birth
                    _ => false,                    // Death or stays dead
                };
                next.set(row, col, alive);
            }
        }
        next
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            self.in_bounds(row, col),
            "cell ({row}, {col}) out of bounds for {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}
