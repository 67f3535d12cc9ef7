//! Column-multiplier scoring.
//!
//! Each column scores on its own. Within a column, `n` dice showing the
//! same face `v` are worth `v * n * n`: the plain sum `v * n` plus a bonus
//! of `(n - 1) * v * n`. A grid's score is the sum of its column scores.
//!
//! | column      | score                  |
//! |-------------|------------------------|
//! | 4, 4        | 4·2 + 1·4·2 = 16       |
//! | 5, 5, 5     | 5·3 + 2·5·3 = 45       |
//! | 2, 3, 6     | 2 + 3 + 6 = 11         |

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{DieFace, DEFAULT_COLUMNS};
use crate::grid::{Grid, GridError};

/// Per-column scores plus the total.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Score of each column, left to right.
    pub columns: SmallVec<[u32; DEFAULT_COLUMNS]>,
    /// Sum of `columns`.
    pub total: u32,
}

/// Stateless scorer.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    /// Score a multiset of faces as a single column.
    ///
    /// Order does not matter.
    pub fn score_faces(faces: impl IntoIterator<Item = DieFace>) -> u32 {
        let mut counts = [0u32; DieFace::MAX as usize + 1];
        let mut base = 0;
        for face in faces {
            counts[face.value() as usize] += 1;
            base += u32::from(face.value());
        }

        let bonus: u32 = counts
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n > 1)
            .map(|(v, &n)| (n - 1) * v as u32 * n)
            .sum();

        base + bonus
    }

    /// Score one column of a grid.
    pub fn column_score(grid: &Grid, column: usize) -> Result<u32, GridError> {
        Ok(Self::score_faces(grid.column(column)?))
    }

    /// Total score of a grid.
    ///
    /// ```
    /// use knucklebones::core::DieFace;
    /// use knucklebones::grid::Grid;
    /// use knucklebones::scoring::ScoringEngine;
    ///
    /// let mut grid = Grid::default();
    /// let four = DieFace::new(4).unwrap();
    /// grid.place(0, four).unwrap();
    /// grid.place(0, four).unwrap();
    ///
    /// assert_eq!(ScoringEngine::score(&grid), 16);
    /// ```
    #[must_use]
    pub fn score(grid: &Grid) -> u32 {
        Self::breakdown(grid).total
    }

    /// Per-column scores and total.
    #[must_use]
    pub fn breakdown(grid: &Grid) -> ScoreBreakdown {
        let columns: SmallVec<[u32; DEFAULT_COLUMNS]> = grid
            .iter_columns()
            .map(|faces| Self::score_faces(faces))
            .collect();
        let total = columns.iter().sum();

        ScoreBreakdown { columns, total }
    }
}
