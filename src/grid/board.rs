//! Per-player grid of die columns.
//!
//! A `Grid` is `columns` stacks of `rows` cells. Dice fill a column from
//! row 0 upward; removal clears a single cell in place and never shifts
//! the rest, so a gap may appear once an opponent knocks a die out. The
//! next placement in that column refills the lowest empty row.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::core::{DieFace, DEFAULT_COLUMNS, DEFAULT_ROWS};

/// Grid operation errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// Column index outside the grid. Recoverable: ask again.
    #[error("column {column} does not exist (grid has {columns} columns)")]
    InvalidColumn { column: usize, columns: usize },

    /// Every row of the column is occupied. Recoverable: ask again.
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    /// Cell coordinates outside the grid. A caller bug, not a game state.
    #[error("cell ({row}, {column}) is outside a {rows}x{columns} grid")]
    OutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
}

/// A serialized grid whose shape cannot be played on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GridShapeError {
    #[error("grid must have at least one column")]
    NoColumns,
    #[error("grid must have at least one row")]
    NoRows,
    #[error("column {column} has {len} cells, expected {rows}")]
    ColumnHeight {
        column: usize,
        len: usize,
        rows: usize,
    },
}

/// Outcome of `Grid::remove_first_matching`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Removal {
    /// The die in this row was cleared.
    Removed { row: usize },
    /// No die with that face in the column. Nothing changed.
    NotFound,
}

impl Removal {
    /// Row that was cleared, if any.
    #[must_use]
    pub fn row(self) -> Option<usize> {
        match self {
            Removal::Removed { row } => Some(row),
            Removal::NotFound => None,
        }
    }
}

type Column = SmallVec<[Option<DieFace>; DEFAULT_ROWS]>;

/// A fixed-size board of die columns.
///
/// ## Usage
///
/// ```
/// use knucklebones::core::DieFace;
/// use knucklebones::grid::{Grid, Removal};
///
/// let four = DieFace::new(4).unwrap();
/// let mut grid = Grid::new(3, 3);
///
/// assert_eq!(grid.place(1, four), Ok(0));
/// assert_eq!(grid.place(1, four), Ok(1));
/// assert_eq!(grid.cell_value(1, 1), Ok(4));
///
/// assert_eq!(grid.remove_first_matching(1, four), Removal::Removed { row: 0 });
/// assert_eq!(grid.cell_value(0, 1), Ok(0));
/// ```
///
/// Serialized grids are checked on the way back in: every column must
/// hold exactly `rows` cells and neither dimension may be zero.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GridCells", into = "GridCells")]
pub struct Grid {
    rows: usize,
    columns: Vec<Column>,
}

/// Unchecked wire form of a `Grid`.
#[derive(Serialize, Deserialize)]
struct GridCells {
    rows: usize,
    columns: Vec<Column>,
}

impl TryFrom<GridCells> for Grid {
    type Error = GridShapeError;

    fn try_from(cells: GridCells) -> Result<Self, Self::Error> {
        if cells.columns.is_empty() {
            return Err(GridShapeError::NoColumns);
        }
        if cells.rows == 0 {
            return Err(GridShapeError::NoRows);
        }
        if let Some((column, slot)) = cells
            .columns
            .iter()
            .enumerate()
            .find(|(_, slot)| slot.len() != cells.rows)
        {
            return Err(GridShapeError::ColumnHeight {
                column,
                len: slot.len(),
                rows: cells.rows,
            });
        }
        Ok(Self {
            rows: cells.rows,
            columns: cells.columns,
        })
    }
}

impl From<Grid> for GridCells {
    fn from(grid: Grid) -> Self {
        Self {
            rows: grid.rows,
            columns: grid.columns,
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS, DEFAULT_ROWS)
    }
}

impl Grid {
    /// Create an empty grid.
    ///
    /// Panics if either dimension is zero; `MatchConfig::validate` rejects
    /// such configurations before a grid is ever built from them.
    #[must_use]
    pub fn new(columns: usize, rows: usize) -> Self {
        assert!(columns > 0, "Grid must have at least one column");
        assert!(rows > 0, "Grid must have at least one row");

        Self {
            rows,
            columns: (0..columns).map(|_| SmallVec::from_elem(None, rows)).collect(),
        }
    }

    /// Number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows per column.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    fn column_slot(&self, column: usize) -> Result<&Column, GridError> {
        self.columns.get(column).ok_or(GridError::InvalidColumn {
            column,
            columns: self.columns.len(),
        })
    }

    // === Mutation ===

    /// Place a die in the lowest empty row of `column`.
    ///
    /// Returns the row it landed in. A rejected placement leaves the grid
    /// untouched.
    pub fn place(&mut self, column: usize, face: DieFace) -> Result<usize, GridError> {
        let columns = self.columns.len();
        let slot = self
            .columns
            .get_mut(column)
            .ok_or(GridError::InvalidColumn { column, columns })?;

        let row = slot
            .iter()
            .position(Option::is_none)
            .ok_or(GridError::ColumnFull { column })?;

        slot[row] = Some(face);
        Ok(row)
    }

    /// Clear the lowest cell in `column` holding `face`.
    ///
    /// Remaining dice stay where they are. An out-of-range column holds no
    /// dice, so it reports `NotFound`.
    pub fn remove_first_matching(&mut self, column: usize, face: DieFace) -> Removal {
        let Some(slot) = self.columns.get_mut(column) else {
            return Removal::NotFound;
        };

        match slot.iter().position(|cell| *cell == Some(face)) {
            Some(row) => {
                slot[row] = None;
                Removal::Removed { row }
            }
            None => Removal::NotFound,
        }
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        for slot in &mut self.columns {
            slot.iter_mut().for_each(|cell| *cell = None);
        }
    }

    // === Queries ===

    /// Die at a cell, or `None` if the cell is empty.
    pub fn cell(&self, row: usize, column: usize) -> Result<Option<DieFace>, GridError> {
        self.columns
            .get(column)
            .and_then(|slot| slot.get(row))
            .copied()
            .ok_or(GridError::OutOfRange {
                row,
                column,
                rows: self.rows,
                columns: self.columns.len(),
            })
    }

    /// Pip count at a cell, `0` when empty.
    pub fn cell_value(&self, row: usize, column: usize) -> Result<u8, GridError> {
        Ok(self.cell(row, column)?.map_or(0, DieFace::value))
    }

    /// Occupied faces in a column, bottom to top.
    pub fn column(&self, column: usize) -> Result<impl Iterator<Item = DieFace> + '_, GridError> {
        Ok(self.column_slot(column)?.iter().flatten().copied())
    }

    /// Occupied faces of every column, left to right.
    pub fn iter_columns(&self) -> impl Iterator<Item = impl Iterator<Item = DieFace> + '_> + '_ {
        self.columns.iter().map(|slot| slot.iter().flatten().copied())
    }

    /// Number of occupied cells in a column (0 for an out-of-range column).
    #[must_use]
    pub fn occupied(&self, column: usize) -> usize {
        self.columns
            .get(column)
            .map_or(0, |slot| slot.iter().filter(|cell| cell.is_some()).count())
    }

    /// True iff every row of `column` holds a die.
    #[must_use]
    pub fn column_full(&self, column: usize) -> bool {
        self.columns
            .get(column)
            .is_some_and(|slot| slot.iter().all(Option::is_some))
    }

    /// True iff every column is full.
    #[must_use]
    pub fn grid_full(&self) -> bool {
        (0..self.columns.len()).all(|c| self.column_full(c))
    }

    /// True iff no cell holds a die.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.iter().flatten().all(Option::is_none)
    }

    /// Columns that can still take a die.
    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.columns.len()).filter(|&c| !self.column_full(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(v: u8) -> DieFace {
        DieFace::new(v).unwrap()
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::default();

        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.rows(), 3);
        assert!(grid.is_empty());
        assert!(!grid.grid_full());
        for row in 0..3 {
            for column in 0..3 {
                assert_eq!(grid.cell_value(row, column), Ok(0));
            }
        }
    }

    #[test]
    fn test_place_fills_from_bottom() {
        let mut grid = Grid::default();

        assert_eq!(grid.place(0, face(2)), Ok(0));
        assert_eq!(grid.place(0, face(5)), Ok(1));
        assert_eq!(grid.place(0, face(1)), Ok(2));

        let column: Vec<u8> = grid.column(0).unwrap().map(DieFace::value).collect();
        assert_eq!(column, vec![2, 5, 1]);
        assert!(grid.column_full(0));
        assert!(!grid.column_full(1));
    }

    #[test]
    fn test_place_into_full_column_rejects_without_mutation() {
        let mut grid = Grid::default();
        for _ in 0..3 {
            grid.place(0, face(3)).unwrap();
        }
        let before = grid.clone();

        assert_eq!(grid.place(0, face(6)), Err(GridError::ColumnFull { column: 0 }));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_place_invalid_column() {
        let mut grid = Grid::default();
        let before = grid.clone();

        assert_eq!(
            grid.place(3, face(1)),
            Err(GridError::InvalidColumn {
                column: 3,
                columns: 3
            })
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn test_remove_first_matching_scans_from_bottom() {
        let mut grid = Grid::default();
        grid.place(1, face(4)).unwrap();
        grid.place(1, face(2)).unwrap();
        grid.place(1, face(4)).unwrap();

        assert_eq!(grid.remove_first_matching(1, face(4)), Removal::Removed { row: 0 });
        assert_eq!(grid.cell_value(0, 1), Ok(0));
        assert_eq!(grid.cell_value(1, 1), Ok(2));
        assert_eq!(grid.cell_value(2, 1), Ok(4));
        assert_eq!(grid.occupied(1), 2);
    }

    #[test]
    fn test_remove_not_found_leaves_column_unchanged() {
        let mut grid = Grid::default();
        grid.place(2, face(1)).unwrap();
        grid.place(2, face(3)).unwrap();
        let before = grid.clone();

        assert_eq!(grid.remove_first_matching(2, face(6)), Removal::NotFound);
        assert_eq!(grid.remove_first_matching(9, face(1)), Removal::NotFound);
        assert_eq!(grid, before);
        assert_eq!(Removal::NotFound.row(), None);
    }

    #[test]
    fn test_place_refills_gap_left_by_removal() {
        let mut grid = Grid::default();
        grid.place(0, face(6)).unwrap();
        grid.place(0, face(5)).unwrap();
        grid.remove_first_matching(0, face(6));

        assert!(!grid.column_full(0));
        assert_eq!(grid.place(0, face(1)), Ok(0));
        assert_eq!(grid.place(0, face(2)), Ok(2));
        assert!(grid.column_full(0));
    }

    #[test]
    fn test_grid_full_after_every_column_filled() {
        let mut grid = Grid::default();
        for column in 0..3 {
            for _ in 0..3 {
                assert!(!grid.grid_full());
                grid.place(column, face(1)).unwrap();
            }
        }
        assert!(grid.grid_full());
        assert_eq!(grid.open_columns().count(), 0);

        grid.clear();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_cell_out_of_range() {
        let grid = Grid::new(3, 2);

        assert_eq!(
            grid.cell_value(2, 0),
            Err(GridError::OutOfRange {
                row: 2,
                column: 0,
                rows: 2,
                columns: 3
            })
        );
        assert!(grid.cell(0, 3).is_err());
        assert!(grid.column(3).is_err());
        assert!(!grid.column_full(3));
    }

    #[test]
    fn test_open_columns() {
        let mut grid = Grid::new(2, 1);
        grid.place(0, face(3)).unwrap();

        let open: Vec<_> = grid.open_columns().collect();
        assert_eq!(open, vec![1]);
    }

    #[test]
    fn test_iter_columns() {
        let mut grid = Grid::new(3, 2);
        grid.place(0, face(1)).unwrap();
        grid.place(2, face(6)).unwrap();
        grid.place(2, face(4)).unwrap();

        let columns: Vec<Vec<u8>> = grid
            .iter_columns()
            .map(|faces| faces.map(DieFace::value).collect())
            .collect();
        assert_eq!(columns, vec![vec![1], vec![], vec![6, 4]]);
    }

    #[test]
    fn test_serde_keeps_gaps() {
        let mut grid = Grid::default();
        grid.place(1, face(4)).unwrap();
        grid.place(1, face(5)).unwrap();
        grid.remove_first_matching(1, face(4));

        let json = serde_json::to_string(&grid).unwrap();
        let restored: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, grid);
        assert_eq!(restored.cell_value(0, 1), Ok(0));
        assert_eq!(restored.cell_value(1, 1), Ok(5));
    }

    #[test]
    fn test_deserialize_rejects_bad_shapes() {
        let no_columns = serde_json::from_str::<Grid>(r#"{"rows":3,"columns":[]}"#);
        assert!(no_columns.is_err());

        let no_rows = serde_json::from_str::<Grid>(r#"{"rows":0,"columns":[[]]}"#);
        assert!(no_rows.is_err());

        let short = serde_json::from_str::<Grid>(r#"{"rows":3,"columns":[[null],[null],[null]]}"#);
        let message = short.unwrap_err().to_string();
        assert!(message.contains("column 0 has 1 cells, expected 3"), "{message}");

        let cells = GridCells {
            rows: 2,
            columns: vec![SmallVec::from_elem(None, 2), SmallVec::from_elem(None, 3)],
        };
        assert_eq!(
            Grid::try_from(cells),
            Err(GridShapeError::ColumnHeight {
                column: 1,
                len: 3,
                rows: 2
            })
        );
    }

    #[test]
    #[should_panic(expected = "Grid must have at least one column")]
    fn test_zero_columns() {
        let _ = Grid::new(0, 3);
    }
}
