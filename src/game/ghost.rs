use crate::{
    dictionary::Lexicon,
    error::{GameError, Result},
    models::{GhostState, Player, RoundResult},
};

/// Shortest fragment that ends the game by being a word
pub const DEFAULT_MIN_WORD_LEN: usize = 4;

/// Two-player Ghost: players alternate adding a letter to a shared fragment.
///
/// Termination is checked at the start of every turn:
/// - a fragment of at least `min_word_len` letters that is a word wins for
///   the player who just completed it
/// - a fragment no word starts with wins for the player about to move
pub struct GhostEngine<'a> {
    lexicon: &'a Lexicon,
    min_word_len: usize,
    state: GhostState,
}

impl<'a> GhostEngine<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self::with_min_word_len(lexicon, DEFAULT_MIN_WORD_LEN)
    }

    /// Raise the winning word length. Values below [`DEFAULT_MIN_WORD_LEN`]
    /// are lifted to it, so short words never end a game.
    pub fn with_min_word_len(lexicon: &'a Lexicon, min_word_len: usize) -> Self {
        let mut engine = Self {
            lexicon,
            min_word_len: min_word_len.max(DEFAULT_MIN_WORD_LEN),
            state: GhostState::InProgress {
                fragment: String::new(),
                current_player: Player::One,
            },
        };
        engine.state = engine.start_turn(String::new(), Player::One);
        engine
    }

    pub fn state(&self) -> &GhostState {
        &self.state
    }

    pub fn fragment(&self) -> &str {
        self.state.fragment()
    }

    /// Player whose turn it is, or `None` once the game is over
    pub fn current_player(&self) -> Option<Player> {
        match self.state {
            GhostState::InProgress { current_player, .. } => Some(current_player),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn result(&self) -> Option<RoundResult> {
        match self.state {
            GhostState::InProgress { .. } => None,
            GhostState::Won { winner, .. } => Some(RoundResult::Win { winner }),
            GhostState::LexiconExhausted { winner, .. } => {
                Some(RoundResult::LexiconExhausted { winner })
            }
        }
    }

    /// Add one letter for the player whose turn it is.
    ///
    /// Anything other than a single ASCII letter is rejected without
    /// changing state, so the same player tries again.
    pub fn play(&mut self, input: &str) -> Result<&GhostState> {
        let (fragment, mover) = match &self.state {
            GhostState::InProgress {
                fragment,
                current_player,
            } => (fragment, *current_player),
            _ => return Err(GameError::GameFinished),
        };

        let letter = Self::parse_letter(input)?;

        let mut next = fragment.clone();
        next.push(letter);
        tracing::debug!("{} added '{}', fragment is now '{}'", mover, letter, next);

        self.state = self.start_turn(next, mover.other());
        Ok(&self.state)
    }

    fn parse_letter(input: &str) -> Result<char> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) if letter.is_ascii_alphabetic() => Ok(letter.to_ascii_lowercase()),
            _ => Err(GameError::InvalidMove {
                input: input.to_string(),
            }),
        }
    }

    /// Evaluate the fragment as `to_move` is about to play.
    fn start_turn(&self, fragment: String, to_move: Player) -> GhostState {
        if fragment.len() >= self.min_word_len && self.lexicon.contains(&fragment) {
            // The fragment became a word on the previous move
            let winner = to_move.other();
            tracing::info!("'{}' is a word, {} wins", fragment, winner);
            GhostState::Won { winner, fragment }
        } else if !self.lexicon.has_prefix(&fragment) {
            tracing::info!("No word starts with '{}', {} wins", fragment, to_move);
            GhostState::LexiconExhausted {
                winner: to_move,
                fragment,
            }
        } else {
            GhostState::InProgress {
                fragment,
                current_player: to_move,
            }
        }
    }
}
