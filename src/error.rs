use std::path::PathBuf;

use thiserror::Error;

/// Why a word was turned down in the hand game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidWordReason {
    NotInLexicon,
    NotInHand,
}

impl std::fmt::Display for InvalidWordReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidWordReason::NotInLexicon => write!(f, "not a known word"),
            InvalidWordReason::NotInHand => write!(f, "the hand cannot supply its letters"),
        }
    }
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Word list unavailable at {}: {source}", .path.display())]
    LexiconUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Word list at {} contains no words", .path.display())]
    EmptyLexicon { path: PathBuf },
    #[error("Invalid move {input:?}: enter a single letter")]
    InvalidMove { input: String },
    #[error("Invalid word {word:?}: {reason}")]
    InvalidWord {
        word: String,
        reason: InvalidWordReason,
    },
    #[error("Invalid command {input:?}: choose n, r or e")]
    InvalidCommand { input: String },
    #[error("The round is already over")]
    GameFinished,
    #[error("No hand has been dealt yet")]
    NoHandDealt,
    #[error("Letter {letter:?} has no point value")]
    UnscoredLetter { letter: char },
    #[error("Hand cannot supply the letters of {word:?}")]
    ConsumePrecondition { word: String },
}

impl GameError {
    /// Errors the player can fix by trying again at the same prompt.
    /// Everything else ends the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::InvalidMove { .. }
                | GameError::InvalidWord { .. }
                | GameError::InvalidCommand { .. }
                | GameError::GameFinished
                | GameError::NoHandDealt
        )
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_split() {
        assert!(GameError::InvalidMove { input: "ab".into() }.is_recoverable());
        assert!(GameError::NoHandDealt.is_recoverable());
        assert!(!GameError::UnscoredLetter { letter: '!' }.is_recoverable());
        assert!(!GameError::ConsumePrecondition { word: "zzz".into() }.is_recoverable());
        assert!(!GameError::EmptyLexicon { path: "words.txt".into() }.is_recoverable());
    }

    #[test]
    fn test_invalid_word_message() {
        let err = GameError::InvalidWord {
            word: "xyz".into(),
            reason: InvalidWordReason::NotInLexicon,
        };
        assert_eq!(err.to_string(), "Invalid word \"xyz\": not a known word");
    }
}
