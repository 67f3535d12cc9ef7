//! Match driver loop.

use log::{debug, warn};

use crate::core::{DieFace, PlayerId};
use crate::rules::{MatchController, MatchError, MatchOutcome, TurnPhase};

/// Something that can show a match and pick columns for it.
///
/// ## Implementation Notes
///
/// - `render` is called before every column prompt and once more at the end
/// - `choose_column` is called again after every rejected choice
/// - `rejected` and `finished` default to doing nothing
pub trait Frontend {
    /// Show the current state.
    fn render(&mut self, view: &MatchController);

    /// Pick a column for `face`.
    fn choose_column(&mut self, player: PlayerId, face: DieFace, view: &MatchController) -> usize;

    /// A column choice was refused; the same player will be asked again.
    fn rejected(&mut self, _error: &MatchError) {}

    /// The match has ended.
    fn finished(&mut self, _outcome: &MatchOutcome) {}
}

/// Play `controller` to completion.
///
/// Dice come from the controller's own roller; columns come from
/// `frontend`. Rejected columns are reported to the frontend and
/// re-prompted, so a frontend that never offers an open column will loop
/// forever.
///
/// ```
/// use knucklebones::core::MatchConfig;
/// use knucklebones::frontend::{play_match, ScriptedFrontend};
/// use knucklebones::rules::MatchController;
///
/// let mut controller = MatchController::new(MatchConfig::default().with_seed(3)).unwrap();
/// let mut frontend = ScriptedFrontend::default();
///
/// let outcome = play_match(&mut controller, &mut frontend).unwrap();
/// assert!(controller.is_over());
/// assert_eq!(outcome.scores, controller.scores());
/// ```
pub fn play_match(
    controller: &mut MatchController,
    frontend: &mut impl Frontend,
) -> Result<MatchOutcome, MatchError> {
    loop {
        let (player, face) = match controller.phase() {
            TurnPhase::GameOver(outcome) => {
                let outcome = outcome.clone();
                frontend.render(controller);
                frontend.finished(&outcome);
                return Ok(outcome);
            }
            TurnPhase::AwaitingColumnChoice { player, face } => (*player, *face),
            TurnPhase::AwaitingRoll { player } => {
                let player = *player;
                (player, controller.roll()?)
            }
        };
        debug!("{player} to place {face}");

        frontend.render(controller);
        let column = frontend.choose_column(player, face, controller);
        match controller.choose_column(column) {
            Ok(_) => {}
            Err(err) if err.is_recoverable() => {
                warn!("{player} chose column {column}: {err}");
                frontend.rejected(&err);
            }
            Err(err) => return Err(err),
        }
    }
}
