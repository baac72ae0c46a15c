use crate::{
    error::{GameError, Result},
    utils::letters::get_letter_value,
};

/// Flat bonus for a word that uses as many letters as the hand was dealt with
pub const FULL_HAND_BONUS: u32 = 50;

pub struct Scorer;

impl Scorer {
    /// Calculate the score for a played word.
    ///
    /// Scoring rules:
    /// - Each letter occurrence adds its fixed value
    /// - +50 when the word is as long as the originally dealt hand, not the
    ///   letters remaining at the time it was played
    pub fn score(word: &str, letters_per_hand_dealt: usize) -> Result<u32> {
        let mut letter_total = 0;
        for letter in word.chars() {
            letter_total += get_letter_value(letter).ok_or(GameError::UnscoredLetter { letter })?;
        }

        Ok(letter_total + Self::full_hand_bonus(word.chars().count(), letters_per_hand_dealt))
    }

    fn full_hand_bonus(length: usize, letters_per_hand_dealt: usize) -> u32 {
        if length == letters_per_hand_dealt {
            FULL_HAND_BONUS
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_hand_bonus() {
        assert_eq!(Scorer::full_hand_bonus(3, 7), 0);
        assert_eq!(Scorer::full_hand_bonus(6, 7), 0);
        assert_eq!(Scorer::full_hand_bonus(7, 7), FULL_HAND_BONUS);
        assert_eq!(Scorer::full_hand_bonus(8, 7), 0);
    }

    #[test]
    fn test_basic_score_calculation() {
        // C(3) + A(1) + B(3) = 7, no bonus for 3 of 7 letters
        assert_eq!(Scorer::score("cab", 7).unwrap(), 7);
    }

    #[test]
    fn test_word_using_whole_hand_gets_bonus() {
        // Q(10) + U(1) + A(1) + R(1) + T(1) + Z(10) = 24
        assert_eq!(Scorer::score("quartz", 7).unwrap(), 24);
        assert_eq!(Scorer::score("quartz", 6).unwrap(), 24 + FULL_HAND_BONUS);

        // J(8) + A(1) + C(3) + K(5) + P(3) + O(1) + T(1) = 22
        assert_eq!(Scorer::score("jackpot", 7).unwrap(), 22 + FULL_HAND_BONUS);
    }

    #[test]
    fn test_repeated_letters_each_count() {
        // Z(10) + I(1) + T(1) + I(1) = 13
        assert_eq!(Scorer::score("ziti", 7).unwrap(), 13);
        assert_eq!(Scorer::score("pizza", 7).unwrap(), 3 + 1 + 10 + 10 + 1);
    }

    #[test]
    fn test_unscored_letter_fails() {
        let err = Scorer::score("co-op", 7).unwrap_err();
        assert!(matches!(err, GameError::UnscoredLetter { letter: '-' }));
    }
}
