//! Match rules: turn order, knock-outs and game end.
//!
//! `MatchController` is the only type that mutates grids during play.
//! Frontends drive it with rolls and column choices and read back grids,
//! scores and, at the end, a `MatchOutcome`.

pub mod controller;
pub mod outcome;

pub use controller::{MatchController, MatchError, TurnPhase};
pub use outcome::{GameResult, MatchOutcome};
