//! Headless frontend that replays a fixed list of column choices.

use std::collections::VecDeque;

use log::trace;

use super::driver::Frontend;
use crate::core::{DieFace, PlayerId};
use crate::rules::{MatchController, MatchError, MatchOutcome};

/// Replays scripted columns in order.
///
/// When the script runs out, or a scripted column was refused, it picks
/// the leftmost open column instead. An empty script therefore fills
/// each grid left to right.
#[derive(Clone, Debug, Default)]
pub struct ScriptedFrontend {
    script: VecDeque<usize>,
    fallback_next: bool,
    rejected: usize,
    outcome: Option<MatchOutcome>,
}

impl ScriptedFrontend {
    /// Create a frontend that plays `columns` in order.
    pub fn new(columns: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: columns.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Scripted choices not yet used.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Number of refused choices so far.
    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.rejected
    }

    /// Outcome reported at the end of the match.
    #[must_use]
    pub fn outcome(&self) -> Option<&MatchOutcome> {
        self.outcome.as_ref()
    }
}

impl Frontend for ScriptedFrontend {
    fn render(&mut self, _view: &MatchController) {}

    fn choose_column(&mut self, player: PlayerId, face: DieFace, view: &MatchController) -> usize {
        let scripted = if std::mem::take(&mut self.fallback_next) {
            None
        } else {
            self.script.pop_front()
        };

        let column = scripted.unwrap_or_else(|| view.grid(player).open_columns().next().unwrap_or(0));
        trace!("scripted {player}: {face} -> column {column}");
        column
    }

    fn rejected(&mut self, _error: &MatchError) {
        self.rejected += 1;
        self.fallback_next = true;
    }

    fn finished(&mut self, outcome: &MatchOutcome) {
        self.outcome = Some(outcome.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchConfig;
    use crate::frontend::play_match;

    #[test]
    fn test_empty_script_fills_left_to_right() {
        let config = MatchConfig::default().with_grid_size(2, 1);
        let mut controller = MatchController::new(config).unwrap();
        let mut frontend = ScriptedFrontend::default();

        controller.submit_roll_value(3).unwrap();
        let column = frontend.choose_column(PlayerId::ONE, DieFace::new(3).unwrap(), &controller);
        assert_eq!(column, 0);

        controller.choose_column(column).unwrap();
        controller.submit_roll_value(4).unwrap();
        controller.choose_column(1).unwrap();
        assert_eq!(
            frontend.choose_column(PlayerId::ONE, DieFace::new(1).unwrap(), &controller),
            1
        );
    }

    #[test]
    fn test_script_is_consumed_in_order() {
        let controller = MatchController::default();
        let mut frontend = ScriptedFrontend::new([2, 1]);
        let face = DieFace::new(6).unwrap();

        assert_eq!(frontend.choose_column(PlayerId::ONE, face, &controller), 2);
        assert_eq!(frontend.remaining(), 1);
        assert_eq!(frontend.choose_column(PlayerId::ONE, face, &controller), 1);
        assert_eq!(frontend.remaining(), 0);
    }

    #[test]
    fn test_bad_script_entries_fall_back() {
        let mut controller = MatchController::new(MatchConfig::default().with_seed(5)).unwrap();
        let mut frontend = ScriptedFrontend::new([9, 9, 9]);

        let outcome = play_match(&mut controller, &mut frontend).unwrap();

        assert!(frontend.rejected_count() >= 2);
        assert_eq!(frontend.outcome(), Some(&outcome));
    }
}
