pub mod ghost;
pub mod hand;
pub mod hand_game;
pub mod scorer;

pub use ghost::GhostEngine;
pub use hand::LetterMultiset;
pub use hand_game::{HandRound, HandSession, SessionCommand, WordPlayed};
pub use scorer::Scorer;
