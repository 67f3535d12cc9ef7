//! Match configuration.
//!
//! The classic board is 3x3, so that is the default.
//! The grid size is still configurable; the scoring rule does not care
//! how tall a column is.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::{PlayerId, PlayerMap};

/// Default number of columns per grid.
pub const DEFAULT_COLUMNS: usize = 3;

/// Default number of rows per column.
pub const DEFAULT_ROWS: usize = 3;

/// Configuration validation errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid must have at least one column")]
    NoColumns,
    #[error("grid must have at least one row")]
    NoRows,
    #[error("player name for {0} is empty")]
    EmptyName(PlayerId),
    #[error("both players are named {0:?}")]
    DuplicateNames(String),
}

/// Complete match configuration.
///
/// ```
/// use knucklebones::core::{MatchConfig, PlayerId};
///
/// let config = MatchConfig::default()
///     .with_player_names("Ada", "Grace")
///     .with_first_player(PlayerId::TWO)
///     .with_seed(9);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.columns, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Columns per grid.
    pub columns: usize,

    /// Rows per column.
    pub rows: usize,

    /// Display names, one per seat.
    pub player_names: PlayerMap<String>,

    /// Seat that rolls first.
    pub first_player: PlayerId,

    /// Seed for the dice `MatchController::roll` draws from.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            player_names: PlayerMap::new(|p| format!("Player{}", p.index() + 1)),
            first_player: PlayerId::ONE,
            seed: 0,
        }
    }
}

impl MatchConfig {
    /// Set the grid dimensions.
    #[must_use]
    pub fn with_grid_size(mut self, columns: usize, rows: usize) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    /// Set both display names.
    #[must_use]
    pub fn with_player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.player_names[PlayerId::ONE] = first.into();
        self.player_names[PlayerId::TWO] = second.into();
        self
    }

    /// Set the seat that rolls first.
    #[must_use]
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    /// Set the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Display name for a seat.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> &str {
        &self.player_names[player]
    }

    /// Check the configuration describes a playable match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::NoColumns);
        }
        if self.rows == 0 {
            return Err(ConfigError::NoRows);
        }
        for (player, name) in self.player_names.iter() {
            if name.trim().is_empty() {
                return Err(ConfigError::EmptyName(player));
            }
        }
        let first = &self.player_names[PlayerId::ONE];
        if first == &self.player_names[PlayerId::TWO] {
            return Err(ConfigError::DuplicateNames(first.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();

        assert_eq!(config.columns, 3);
        assert_eq!(config.rows, 3);
        assert_eq!(config.player_name(PlayerId::ONE), "Player1");
        assert_eq!(config.player_name(PlayerId::TWO), "Player2");
        assert_eq!(config.first_player, PlayerId::ONE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::default()
            .with_grid_size(4, 2)
            .with_player_names("Ada", "Grace")
            .with_first_player(PlayerId::TWO)
            .with_seed(77);

        assert_eq!(config.columns, 4);
        assert_eq!(config.rows, 2);
        assert_eq!(config.player_name(PlayerId::TWO), "Grace");
        assert_eq!(config.first_player, PlayerId::TWO);
        assert_eq!(config.seed, 77);
    }

    #[test]
    fn test_validate_rejects_empty_grid() {
        let config = MatchConfig::default().with_grid_size(0, 3);
        assert_eq!(config.validate(), Err(ConfigError::NoColumns));

        let config = MatchConfig::default().with_grid_size(3, 0);
        assert_eq!(config.validate(), Err(ConfigError::NoRows));
    }

    #[test]
    fn test_validate_rejects_bad_names() {
        let config = MatchConfig::default().with_player_names("Ada", "  ");
        assert_eq!(config.validate(), Err(ConfigError::EmptyName(PlayerId::TWO)));

        let config = MatchConfig::default().with_player_names("Ada", "Ada");
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateNames("Ada".to_string()))
        );
    }

    #[test]
    fn test_json_with_defaults() {
        let config: MatchConfig = serde_json::from_str(r#"{ "seed": 5, "rows": 4 }"#).unwrap();

        assert_eq!(config.seed, 5);
        assert_eq!(config.rows, 4);
        assert_eq!(config.columns, DEFAULT_COLUMNS);
        assert_eq!(config.player_name(PlayerId::ONE), "Player1");

        let json = serde_json::to_string(&config).unwrap();
        let back: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
