//! Core engine types: die faces, players, RNG, configuration, history.
//!
//! Everything here is independent of the board; `grid`, `scoring` and
//! `rules` build on it.

pub mod action;
pub mod config;
pub mod face;
pub mod player;
pub mod rng;

pub use action::{ActionRecord, Placement};
pub use config::{ConfigError, MatchConfig, DEFAULT_COLUMNS, DEFAULT_ROWS};
pub use face::{DieFace, FaceError};
pub use player::{InvalidPlayer, PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{DiceRng, DiceRngState};
