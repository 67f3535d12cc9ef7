//! Player boards.
//!
//! ## Key Types
//!
//! - `Grid`: columns of dice, filled bottom-up
//! - `GridError`: rejected placements and out-of-range queries
//! - `Removal`: result of knocking a die out of a column
//! - `GridShapeError`: a serialized grid with an unplayable shape

pub mod board;

pub use board::{Grid, GridError, GridShapeError, Removal};
