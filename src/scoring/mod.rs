//! Score calculation.
//!
//! Scores are derived from grid contents on demand and never stored, so
//! there is no score field that can drift out of sync with the board.

pub mod engine;

pub use engine::{ScoreBreakdown, ScoringEngine};
