use serde::{Deserialize, Serialize};

/// One of the two Ghost players. Player one always opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opponent, i.e. whoever moves next
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Outcome reported when a round ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RoundResult {
    /// The fragment became a word; the player who completed it wins
    Win { winner: Player },
    /// No word starts with the fragment; the player about to move wins
    LexiconExhausted { winner: Player },
    /// Hand game total
    Score { total: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GhostState {
    InProgress {
        fragment: String,
        current_player: Player,
    },
    Won {
        winner: Player,
        fragment: String,
    },
    LexiconExhausted {
        winner: Player,
        fragment: String,
    },
}

impl GhostState {
    pub fn fragment(&self) -> &str {
        match self {
            GhostState::InProgress { fragment, .. }
            | GhostState::Won { fragment, .. }
            | GhostState::LexiconExhausted { fragment, .. } => fragment,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, GhostState::InProgress { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_players_alternate() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other().other(), Player::Two);
        assert_eq!(Player::Two.to_string(), "Player 2");
    }

    #[test]
    fn test_round_result_serializes_tagged() {
        let json = serde_json::to_value(RoundResult::Win { winner: Player::Two }).unwrap();
        assert_eq!(json, serde_json::json!({ "outcome": "win", "winner": "two" }));

        let json = serde_json::to_value(RoundResult::Score { total: 57 }).unwrap();
        assert_eq!(json, serde_json::json!({ "outcome": "score", "total": 57 }));
    }
}
