//! Match phase state machine
//!
//! Goals that do not end the match leave the phase untouched, so they are not
//! actions here.

use serde::{Deserialize, Serialize};

/// Match phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Playing,
    Paused,
    GameOver,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseAction {
    TogglePause,
    Restart,
    Win,
}

impl Phase {
    /// Get next phase for a given action (if valid)
    pub fn next(self, action: PhaseAction) -> Option<Phase> {
        match (self, action) {
            (Phase::Playing, PhaseAction::TogglePause) => Some(Phase::Paused),
            (Phase::Paused, PhaseAction::TogglePause) => Some(Phase::Playing),

            // Restart is accepted from every phase
            (_, PhaseAction::Restart) => Some(Phase::Playing),

            (Phase::Playing, PhaseAction::Win) => Some(Phase::GameOver),

            // Pause is inert once the match is decided
            _ => None,
        }
    }

    pub fn can_transition(self, action: PhaseAction) -> bool {
        self.next(action).is_some()
    }

    /// Paddles and ball only move while playing
    pub fn is_running(self) -> bool {
        self == Phase::Playing
    }

    pub fn is_game_over(self) -> bool {
        self == Phase::GameOver
    }
}
