use rand::Rng;

use crate::{
    dictionary::Lexicon,
    error::{GameError, InvalidWordReason, Result},
    game::{LetterMultiset, Scorer},
    models::RoundResult,
    utils::letters::{CONSONANTS, VOWELS},
};

/// Letters dealt per hand
pub const DEFAULT_HAND_SIZE: usize = 7;

/// Share of each dealt hand drawn from the vowels
pub const DEFAULT_VOWEL_FRACTION: f64 = 1.0 / 3.0;

/// Result of a word accepted by [`HandRound::play_word`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPlayed {
    pub word: String,
    pub points: u32,
    pub total: u32,
}

/// One round of the hand game, played until the hand runs out or the player stops.
pub struct HandRound<'a> {
    lexicon: &'a Lexicon,
    hand: LetterMultiset,
    letters_per_hand_dealt: usize,
    total_score: u32,
}

impl<'a> HandRound<'a> {
    pub fn new(lexicon: &'a Lexicon, hand: LetterMultiset, letters_per_hand_dealt: usize) -> Self {
        Self {
            lexicon,
            hand,
            letters_per_hand_dealt,
            total_score: 0,
        }
    }

    pub fn hand(&self) -> &LetterMultiset {
        &self.hand
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// The round ends by itself once every letter has been used
    pub fn is_over(&self) -> bool {
        self.hand.is_empty()
    }

    /// Play a word from the hand.
    ///
    /// A word outside the lexicon, or one the hand cannot spell, is rejected
    /// with no change to the hand or the score.
    pub fn play_word(&mut self, input: &str) -> Result<WordPlayed> {
        if self.is_over() {
            return Err(GameError::GameFinished);
        }

        let word = input.trim().to_lowercase();
        let reason = if !self.lexicon.contains(&word) {
            Some(InvalidWordReason::NotInLexicon)
        } else if !self.hand.can_form(&word) {
            Some(InvalidWordReason::NotInHand)
        } else {
            None
        };
        if let Some(reason) = reason {
            tracing::debug!("Rejected '{}': {}", word, reason);
            return Err(GameError::InvalidWord { word, reason });
        }

        let points = Scorer::score(&word, self.letters_per_hand_dealt)?;
        self.hand = self.hand.consume(&word)?;
        self.total_score += points;
        tracing::debug!("Played '{}' for {} points, total {}", word, points, self.total_score);

        Ok(WordPlayed {
            word,
            points,
            total: self.total_score,
        })
    }

    /// End the round early; whatever is left in the hand is discarded.
    pub fn stop(self) -> RoundResult {
        self.result()
    }

    pub fn result(&self) -> RoundResult {
        RoundResult::Score {
            total: self.total_score,
        }
    }
}

/// Session-level choice between rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    New,
    Replay,
    End,
}

impl SessionCommand {
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim().to_lowercase().as_str() {
            "n" => Ok(SessionCommand::New),
            "r" => Ok(SessionCommand::Replay),
            "e" => Ok(SessionCommand::End),
            _ => Err(GameError::InvalidCommand {
                input: input.to_string(),
            }),
        }
    }
}

/// Deals hands and keeps a snapshot of the last deal so it can be replayed exactly.
pub struct HandSession<'a, R: Rng> {
    lexicon: &'a Lexicon,
    rng: R,
    hand_size: usize,
    vowel_fraction: f64,
    dealt: Option<LetterMultiset>,
}

impl<'a, R: Rng> HandSession<'a, R> {
    pub fn new(lexicon: &'a Lexicon, rng: R) -> Self {
        Self::with_deal(lexicon, rng, DEFAULT_HAND_SIZE, DEFAULT_VOWEL_FRACTION)
    }

    pub fn with_deal(lexicon: &'a Lexicon, rng: R, hand_size: usize, vowel_fraction: f64) -> Self {
        Self {
            lexicon,
            rng,
            hand_size,
            vowel_fraction,
            dealt: None,
        }
    }

    /// The most recent deal, as it was before any word was played
    pub fn dealt_hand(&self) -> Option<&LetterMultiset> {
        self.dealt.as_ref()
    }

    /// Deal a fresh hand and start a round on a copy of it
    pub fn new_round(&mut self) -> HandRound<'a> {
        let hand = LetterMultiset::draw_random(
            self.hand_size,
            self.vowel_fraction,
            VOWELS,
            CONSONANTS,
            &mut self.rng,
        );
        tracing::info!("Dealt new hand: {}", hand);
        self.dealt = Some(hand.clone());
        HandRound::new(self.lexicon, hand, self.hand_size)
    }

    /// Start a round on the last dealt hand, as it was dealt
    pub fn replay_round(&self) -> Result<HandRound<'a>> {
        let hand = self.dealt.clone().ok_or(GameError::NoHandDealt)?;
        tracing::info!("Replaying hand: {}", hand);
        Ok(HandRound::new(self.lexicon, hand, self.hand_size))
    }

    /// Apply a session command; `None` means the session is over.
    pub fn command(&mut self, command: SessionCommand) -> Result<Option<HandRound<'a>>> {
        match command {
            SessionCommand::New => Ok(Some(self.new_round())),
            SessionCommand::Replay => self.replay_round().map(Some),
            SessionCommand::End => Ok(None),
        }
    }
}
