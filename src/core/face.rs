//! Die faces.
//!
//! A `DieFace` is always in `1..=6`. Raw integers coming from a frontend
//! are validated once here, so the grid and scoring code never see an
//! out-of-domain value.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A die value outside `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("die face must be between 1 and 6, got {0}")]
pub struct FaceError(pub u8);

/// The face of a six-sided die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieFace(u8);

impl DieFace {
    /// Lowest face.
    pub const MIN: u8 = 1;
    /// Highest face.
    pub const MAX: u8 = 6;

    /// Every face in ascending order.
    pub const ALL: [DieFace; 6] = [
        DieFace(1),
        DieFace(2),
        DieFace(3),
        DieFace(4),
        DieFace(5),
        DieFace(6),
    ];

    /// Validate a raw die value.
    ///
    /// ```
    /// use knucklebones::core::DieFace;
    ///
    /// assert_eq!(DieFace::new(4).unwrap().value(), 4);
    /// assert!(DieFace::new(0).is_err());
    /// assert!(DieFace::new(7).is_err());
    /// ```
    pub const fn new(value: u8) -> Result<Self, FaceError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(FaceError(value))
        }
    }

    /// The pip count.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DieFace {
    type Error = FaceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DieFace> for u8 {
    fn from(face: DieFace) -> u8 {
        face.0
    }
}

impl std::fmt::Display for DieFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
