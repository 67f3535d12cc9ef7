//! # knucklebones
//!
//! Grid-placement and scoring engine for the dice game Knucklebones.
//!
//! ## Rules
//!
//! Two players each own a grid of columns (3x3 by default). On a turn the
//! active player rolls one die and drops it into a column of their own
//! grid, where it lands in the lowest empty row. Any die of the same face
//! in the opponent's matching column is knocked out (the lowest one). The
//! match ends when both grids are full; the higher score wins.
//!
//! ## Scoring
//!
//! Columns score independently. `n` dice of face `v` in one column are
//! worth `v * n * n`, so doubles and triples multiply.
//!
//! ## Modules
//!
//! - `core`: Die faces, players, RNG, configuration, placement history
//! - `grid`: Per-player board with placement, removal and occupancy queries
//! - `scoring`: Column-multiplier score calculation
//! - `rules`: Turn state machine and match outcome
//! - `frontend`: Presentation trait and match driver loop

pub mod core;
pub mod frontend;
pub mod grid;
pub mod rules;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, ConfigError, DiceRng, DiceRngState, DieFace, FaceError, MatchConfig, Placement,
    PlayerId, PlayerMap,
};

pub use crate::grid::{Grid, GridError, GridShapeError, Removal};

pub use crate::scoring::{ScoreBreakdown, ScoringEngine};

pub use crate::rules::{GameResult, MatchController, MatchError, MatchOutcome, TurnPhase};

pub use crate::frontend::{play_match, Frontend, ScriptedFrontend};
