//! Match results.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

/// Who won a finished match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Strictly higher score.
    Winner(PlayerId),
    /// Equal scores.
    Tie,
}

impl GameResult {
    /// Decide the result from final scores.
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<u32>) -> Self {
        let (one, two) = (scores[PlayerId::ONE], scores[PlayerId::TWO]);
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::ONE),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::TWO),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Final state of a match: scores, names and result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Final score per seat.
    pub scores: PlayerMap<u32>,
    /// Display name per seat.
    pub names: PlayerMap<String>,
    /// Winner or tie.
    pub result: GameResult,
}

impl MatchOutcome {
    /// Build an outcome from final scores.
    #[must_use]
    pub fn new(scores: PlayerMap<u32>, names: PlayerMap<String>) -> Self {
        let result = GameResult::from_scores(&scores);
        Self {
            scores,
            names,
            result,
        }
    }

    /// Winning seat, `None` on a tie.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.result {
            GameResult::Winner(p) => Some(p),
            GameResult::Tie => None,
        }
    }

    /// True when scores were equal.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.result == GameResult::Tie
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.result {
            GameResult::Winner(p) => {
                write!(f, "{} wins with a score of {}!", self.names[p], self.scores[p])
            }
            GameResult::Tie => {
                write!(f, "It's a tie with a score of {}!", self.scores[PlayerId::ONE])
            }
        }
    }
}
