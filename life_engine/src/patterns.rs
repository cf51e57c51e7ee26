// patterns.rs - Preset starting patterns

use crate::grid::Grid;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// All-dead grid with this pattern stamped in. Cells that fall outside
    /// the grid are skipped.
    pub fn to_grid(&self, rows: usize, cols: usize) -> Grid {
        Grid::from_live_cells(rows, cols, self.cells)
    }
}

/// Classic patterns, positioned for the default 50x50 grid.
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(5, 6), (6, 7), (7, 5), (7, 6), (7, 7)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(24, 23), (24, 24), (24, 25)],
    },
    Pattern {
        name: "Toad",
        cells: &[(23, 24), (23, 25), (23, 26), (24, 23), (24, 24), (24, 25)],
    },
    Pattern {
        name: "Beacon",
        cells: &[
            (9, 9),
            (9, 10),
            (10, 9),
            (10, 10),
            (11, 11),
            (11, 12),
            (12, 11),
            (12, 12),
        ],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (19, 23), (19, 24), (19, 25), (19, 29), (19, 30), (19, 31),
            (21, 21), (21, 26), (21, 28), (21, 33),
            (22, 21), (22, 26), (22, 28), (22, 33),
            (23, 21), (23, 26), (23, 28), (23, 33),
            (24, 23), (24, 24), (24, 25), (24, 29), (24, 30), (24, 31),
            // Bottom half (mirrored)
            (26, 23), (26, 24), (26, 25), (26, 29), (26, 30), (26, 31),
            (27, 21), (27, 26), (27, 28), (27, 33),
            (28, 21), (28, 26), (28, 28), (28, 33),
            (29, 21), (29, 26), (29, 28), (29, 33),
            (31, 23), (31, 24), (31, 25), (31, 29), (31, 30), (31, 31),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(24, 24), (24, 25), (23, 25), (25, 24), (25, 23)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_fit_the_default_grid() {
        for pattern in PATTERNS {
            for &(row, col) in pattern.cells {
                assert!(
                    row < 50 && col < 50,
                    "{} has cell ({row}, {col}) outside 50x50",
                    pattern.name
                );
            }
            let grid = pattern.to_grid(50, 50);
            assert_eq!(grid.live_count(), pattern.cells.len());
        }
    }

    #[test]
    fn glider_travels_diagonally() {
        let glider = &PATTERNS[0];
        let mut grid = glider.to_grid(50, 50);
        for _ in 0..4 {
            grid = grid.next_generation();
        }
        // After 4 generations a glider is the same shape shifted by (1, 1).
        let shifted: Vec<(usize, usize)> =
            glider.cells.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
        assert_eq!(grid, Grid::from_live_cells(50, 50, &shifted));
    }

    #[test]
    fn out_of_bounds_pattern_cells_are_skipped() {
        let gun = &PATTERNS[6];
        let grid = gun.to_grid(5, 5);
        assert_eq!(grid.rows(), 5);
        assert!(grid.live_count() < gun.cells.len());
    }
}
