use serde::Serialize;

use crate::models::Player;

/// Everything a presenter is told about, in the order it happens
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    GhostTurn {
        fragment: String,
        player: Player,
    },
    /// The fragment became a word; the player who completed it wins
    GhostWon {
        fragment: String,
        winner: Player,
    },
    /// No word starts with the fragment; the player about to move wins
    GhostExhausted {
        fragment: String,
        winner: Player,
    },
    HandDealt {
        letters: Vec<char>,
        replay: bool,
    },
    HandTurn {
        letters: Vec<char>,
        total: u32,
    },
    WordScored {
        word: String,
        points: u32,
        total: u32,
    },
    /// A recoverable mistake; the same prompt is asked again
    Rejected {
        message: String,
    },
    /// A hand round finished with its final score
    RoundEnd {
        total: u32,
    },
    SessionEnd,
}
