//! Presentation seam.
//!
//! A terminal UI, a graphical window and a test script all play the same
//! match; they differ only in how they show the board and where column
//! choices come from. `Frontend` captures exactly that, and `play_match`
//! runs the turn loop against any implementation.

pub mod driver;
pub mod scripted;

pub use driver::{play_match, Frontend};
pub use scripted::ScriptedFrontend;
