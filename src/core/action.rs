//! Placement history.
//!
//! Every resolved turn leaves one `ActionRecord`: who placed what where,
//! and which opponent die (if any) was knocked out as a result.

use serde::{Deserialize, Serialize};

use super::face::DieFace;
use super::player::PlayerId;

/// A resolved placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Target column.
    pub column: usize,

    /// Face that was placed.
    pub face: DieFace,

    /// Row the die landed in.
    pub row: usize,

    /// Row cleared in the opponent's same column, if a matching die was there.
    pub knocked_out: Option<usize>,
}

/// A recorded placement with turn metadata.
///
/// Used for:
/// - Replay/debugging
/// - Frontends that animate the last move
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who placed.
    pub player: PlayerId,

    /// The placement.
    pub placement: Placement,

    /// Turn number (starts at 1, counts every resolved placement).
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, placement: Placement, turn: u32) -> Self {
        Self {
            player,
            placement,
            turn,
        }
    }

    /// Did this placement remove an opponent die?
    #[must_use]
    pub fn knocked_out(&self) -> bool {
        self.placement.knocked_out.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(v: u8) -> DieFace {
        DieFace::new(v).unwrap()
    }

    #[test]
    fn test_action_record() {
        let placement = Placement {
            column: 2,
            face: face(4),
            row: 1,
            knocked_out: Some(0),
        };
        let record = ActionRecord::new(PlayerId::TWO, placement, 3);

        assert_eq!(record.player, PlayerId::TWO);
        assert_eq!(record.placement.column, 2);
        assert_eq!(record.turn, 3);
        assert!(record.knocked_out());
    }

    #[test]
    fn test_action_record_serialization() {
        let placement = Placement {
            column: 0,
            face: face(6),
            row: 0,
            knocked_out: None,
        };
        let record = ActionRecord::new(PlayerId::ONE, placement, 1);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
        assert!(!deserialized.knocked_out());
    }
}
