//! Turn state machine for a two-player match.
//!
//! ```text
//! AwaitingRoll(p) --submit_roll--> AwaitingColumnChoice(p, face)
//!       ^                                  |
//!       |                            choose_column
//!       |                                  v
//!       +------ (resolve) ------ both grids full? --yes--> GameOver
//! ```
//!
//! A rejected column leaves the phase where it was so the caller can ask
//! again. After a placement the opponent loses the lowest die in the same
//! column showing the same face, if there is one.
//!
//! Dice come from a `DiceRng` seeded with `MatchConfig::seed`, so two
//! controllers built from the same config roll the same sequence. Callers
//! with their own source of dice use `submit_roll` instead.

use im::Vector;
use log::{debug, info, trace};
use thiserror::Error;

use super::outcome::MatchOutcome;
use crate::core::{
    ActionRecord, ConfigError, DiceRng, DieFace, FaceError, MatchConfig, Placement, PlayerId,
    PlayerMap,
};
use crate::grid::{Grid, GridError};
use crate::scoring::ScoringEngine;

/// Current step of the turn cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// Waiting for `player`'s die.
    AwaitingRoll { player: PlayerId },
    /// `player` rolled `face` and must pick a column.
    AwaitingColumnChoice { player: PlayerId, face: DieFace },
    /// Both grids are full.
    GameOver(MatchOutcome),
}

/// Errors from driving a match.
///
/// `Grid` errors from `choose_column` are recoverable: the phase is
/// unchanged and the same player picks again.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Face(#[from] FaceError),
    #[error("{player} already rolled a {face} and must choose a column")]
    NotAwaitingRoll { player: PlayerId, face: DieFace },
    #[error("{player} has not rolled yet")]
    NotAwaitingColumn { player: PlayerId },
    #[error("the match is over")]
    MatchOver,
}

impl MatchError {
    /// True for errors a player fixes by choosing another column.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MatchError::Grid(GridError::InvalidColumn { .. } | GridError::ColumnFull { .. })
        )
    }
}

/// Owns both grids and enforces turn order.
#[derive(Clone, Debug)]
pub struct MatchController {
    config: MatchConfig,
    grids: PlayerMap<Grid>,
    phase: TurnPhase,
    dice: DiceRng,
    turn: u32,
    history: Vector<ActionRecord>,
}

impl Default for MatchController {
    fn default() -> Self {
        Self::start(MatchConfig::default())
    }
}

impl MatchController {
    /// Create a match with empty grids.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::start(config))
    }

    fn start(config: MatchConfig) -> Self {
        let grids = PlayerMap::new(|_| Grid::new(config.columns, config.rows));
        let phase = TurnPhase::AwaitingRoll {
            player: config.first_player,
        };
        let dice = DiceRng::new(config.seed);
        Self {
            config,
            grids,
            phase,
            dice,
            turn: 1,
            history: Vector::new(),
        }
    }

    /// Discard all progress and start a fresh match with the same config.
    ///
    /// The dice are reseeded too, so the new match rolls the same sequence.
    pub fn reset(&mut self) {
        debug!("resetting match");
        *self = Self::start(self.config.clone());
    }

    // === Queries ===

    /// The configuration this match was built from.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    /// Player whose turn it is, `None` once the match is over.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        match self.phase {
            TurnPhase::AwaitingRoll { player } | TurnPhase::AwaitingColumnChoice { player, .. } => {
                Some(player)
            }
            TurnPhase::GameOver(_) => None,
        }
    }

    /// Face waiting to be placed.
    #[must_use]
    pub fn pending_face(&self) -> Option<DieFace> {
        match self.phase {
            TurnPhase::AwaitingColumnChoice { face, .. } => Some(face),
            _ => None,
        }
    }

    /// Round number: turns 1 and 2 are round 1, turns 3 and 4 round 2, and so on.
    ///
    /// Counted from turns rather than from whose move it is, so a player
    /// sitting out with a full grid does not stall or speed up the count.
    #[must_use]
    pub fn round(&self) -> u32 {
        (self.turn + 1) / 2
    }

    /// Turn number of the placement in progress (starts at 1).
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// True once both grids are full.
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, TurnPhase::GameOver(_))
    }

    /// Final result, once the match is over.
    #[must_use]
    pub fn outcome(&self) -> Option<&MatchOutcome> {
        match &self.phase {
            TurnPhase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// A player's grid.
    #[must_use]
    pub fn grid(&self, player: PlayerId) -> &Grid {
        &self.grids[player]
    }

    /// A player's display name.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> &str {
        self.config.player_name(player)
    }

    /// A player's current score.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        ScoringEngine::score(&self.grids[player])
    }

    /// Both current scores.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<u32> {
        self.grids.map(|_, grid| ScoringEngine::score(grid))
    }

    /// Every resolved placement, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Most recent placement.
    #[must_use]
    pub fn last_action(&self) -> Option<&ActionRecord> {
        self.history.last()
    }

    /// The match's dice roller, for checkpointing its state.
    #[must_use]
    pub fn dice(&self) -> &DiceRng {
        &self.dice
    }

    // === Transitions ===

    /// Hand the current player a rolled die.
    pub fn submit_roll(&mut self, face: DieFace) -> Result<(), MatchError> {
        match self.phase {
            TurnPhase::AwaitingRoll { player } => {
                trace!("{player} rolled {face}");
                self.phase = TurnPhase::AwaitingColumnChoice { player, face };
                Ok(())
            }
            TurnPhase::AwaitingColumnChoice { player, face } => {
                Err(MatchError::NotAwaitingRoll { player, face })
            }
            TurnPhase::GameOver(_) => Err(MatchError::MatchOver),
        }
    }

    /// Validate a raw die value and submit it.
    pub fn submit_roll_value(&mut self, value: u8) -> Result<DieFace, MatchError> {
        let face = DieFace::new(value)?;
        self.submit_roll(face)?;
        Ok(face)
    }

    /// Roll the match dice and submit the result.
    ///
    /// The roller is only advanced when a roll is actually expected.
    pub fn roll(&mut self) -> Result<DieFace, MatchError> {
        match &self.phase {
            TurnPhase::AwaitingRoll { .. } => {}
            TurnPhase::AwaitingColumnChoice { player, face } => {
                return Err(MatchError::NotAwaitingRoll {
                    player: *player,
                    face: *face,
                })
            }
            TurnPhase::GameOver(_) => return Err(MatchError::MatchOver),
        }
        let face = self.dice.roll();
        self.submit_roll(face)?;
        Ok(face)
    }

    /// Place the pending die in `column` of the current player's grid.
    ///
    /// On success the opponent's lowest matching die in that column is
    /// removed, the turn resolves, and the placement is returned. On a
    /// grid error nothing changes.
    pub fn choose_column(&mut self, column: usize) -> Result<Placement, MatchError> {
        let (player, face) = match self.phase {
            TurnPhase::AwaitingColumnChoice { player, face } => (player, face),
            TurnPhase::AwaitingRoll { player } => {
                return Err(MatchError::NotAwaitingColumn { player })
            }
            TurnPhase::GameOver(_) => return Err(MatchError::MatchOver),
        };

        let row = self.grids[player].place(column, face).map_err(|err| {
            debug!("{player} cannot place {face} in column {column}: {err}");
            err
        })?;

        let opponent = player.opponent();
        let knocked_out = self.grids[opponent]
            .remove_first_matching(column, face)
            .row();

        debug!("{player} placed {face} in column {column}, row {row}");
        if let Some(removed) = knocked_out {
            debug!("{opponent} loses {face} from column {column}, row {removed}");
        }

        let placement = Placement {
            column,
            face,
            row,
            knocked_out,
        };
        self.history
            .push_back(ActionRecord::new(player, placement, self.turn));
        self.resolve(player);

        Ok(placement)
    }

    fn resolve(&mut self, acting: PlayerId) {
        if self.grids.iter().all(|(_, grid)| grid.grid_full()) {
            let outcome = MatchOutcome::new(self.scores(), self.config.player_names.clone());
            info!(
                "match over after {} turns: {} {} - {} {}",
                self.turn,
                self.player_name(PlayerId::ONE),
                outcome.scores[PlayerId::ONE],
                outcome.scores[PlayerId::TWO],
                self.player_name(PlayerId::TWO),
            );
            self.phase = TurnPhase::GameOver(outcome);
            return;
        }

        // A full grid has nowhere to place, so its owner sits out.
        let next = if self.grids[acting.opponent()].grid_full() {
            acting
        } else {
            acting.opponent()
        };

        self.turn += 1;
        trace!("turn {} (round {}): {next} to roll", self.turn, self.round());
        self.phase = TurnPhase::AwaitingRoll { player: next };
    }
}
