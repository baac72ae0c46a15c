pub mod game;

pub use game::{
    // Players and outcomes
    Player, RoundResult,
    // Live Ghost state
    GhostState,
};
