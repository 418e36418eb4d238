//! Screen state machine
//!
//! | screen   | Confirm        | Cancel | Pause   | Restart        |
//! |----------|----------------|--------|---------|----------------|
//! | Menu     | new run, play  | quit   | -       | -              |
//! | Playing  | -              | menu   | pause   | new run        |
//! | Paused   | resume         | menu   | resume  | new run, play  |
//! | GameOver | new run, play  | menu   | -       | -              |

use super::state::{GameState, Screen};
use crate::input::Command;

/// Whether the host loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply one screen command to the state
pub fn apply_command(state: &mut GameState, command: Command) -> Flow {
    use Command::*;
    use Screen::*;

    let from = state.screen;
    match (from, command) {
        (Menu, Cancel) => return Flow::Quit,
        (Menu, Confirm) | (GameOver, Confirm) | (Paused, Restart) => {
            state.reset_run();
            state.screen = Playing;
        }
        (Playing, Restart) => state.reset_run(),
        (Playing, Pause) => state.screen = Paused,
        (Paused, Pause) | (Paused, Confirm) => state.screen = Playing,
        (Playing, Cancel) | (Paused, Cancel) | (GameOver, Cancel) => state.screen = Menu,
        _ => {}
    }

    if state.screen != from {
        log::info!("Screen {:?} -> {:?}", from, state.screen);
    }
    Flow::Continue
}
