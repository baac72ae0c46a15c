use rand::seq::IndexedRandom;
use rand::Rng;

use crate::{
    error::{GameError, Result},
    utils::letters::{letter_at, letter_index, ALPHABET_LEN},
};

/// Counted bag of letters a-z, used as the player's hand.
///
/// Counts are never negative: the only way to remove letters is
/// [`LetterMultiset::consume`], which refuses words the bag cannot supply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterMultiset {
    counts: [usize; ALPHABET_LEN],
}

impl LetterMultiset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the letters of `word`. Characters outside a-z are ignored.
    pub fn from_word(word: &str) -> Self {
        let mut bag = Self::new();
        for idx in word.chars().filter_map(letter_index) {
            bag.counts[idx] += 1;
        }
        bag
    }

    /// Deal `size` letters: `floor(size * vowel_fraction)` drawn with
    /// replacement from `vowels`, the rest from `consonants`.
    pub fn draw_random(
        size: usize,
        vowel_fraction: f64,
        vowels: &str,
        consonants: &str,
        rng: &mut impl Rng,
    ) -> Self {
        let vowel_count = ((size as f64 * vowel_fraction).floor() as usize).min(size);
        let vowels: Vec<char> = vowels.chars().collect();
        let consonants: Vec<char> = consonants.chars().collect();

        let mut bag = Self::new();
        for _ in 0..vowel_count {
            bag.add_random(&vowels, rng);
        }
        for _ in vowel_count..size {
            bag.add_random(&consonants, rng);
        }
        bag
    }

    fn add_random(&mut self, alphabet: &[char], rng: &mut impl Rng) {
        if let Some(idx) = alphabet.choose(rng).copied().and_then(letter_index) {
            self.counts[idx] += 1;
        }
    }

    /// True iff every letter of `word` is held at least as many times as it appears
    pub fn can_form(&self, word: &str) -> bool {
        if word.chars().any(|ch| letter_index(ch).is_none()) {
            return false;
        }
        let needed = Self::from_word(word);
        self.counts
            .iter()
            .zip(needed.counts.iter())
            .all(|(have, need)| have >= need)
    }

    /// Return a new bag with the letters of `word` taken out.
    ///
    /// Callers check [`LetterMultiset::can_form`] first; a word the bag
    /// cannot supply is a logic error reported as `ConsumePrecondition`.
    pub fn consume(&self, word: &str) -> Result<Self> {
        if !self.can_form(word) {
            return Err(GameError::ConsumePrecondition {
                word: word.to_string(),
            });
        }

        let needed = Self::from_word(word);
        let mut remaining = self.clone();
        for (have, need) in remaining.counts.iter_mut().zip(needed.counts.iter()) {
            *have -= need;
        }
        Ok(remaining)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Total number of letters held
    pub fn len(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Held letters in alphabetical order, each repeated by its count
    pub fn letters(&self) -> Vec<char> {
        self.counts
            .iter()
            .enumerate()
            .flat_map(|(idx, &count)| std::iter::repeat_n(letter_at(idx), count))
            .collect()
    }
}

impl std::fmt::Display for LetterMultiset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letters: Vec<String> = self.letters().iter().map(char::to_string).collect();
        write!(f, "{}", letters.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::utils::letters::{is_vowel, CONSONANTS, VOWELS};

    #[test]
    fn test_deal_splits_vowels_and_consonants() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let hand = LetterMultiset::draw_random(7, 1.0 / 3.0, VOWELS, CONSONANTS, &mut rng);
            let letters = hand.letters();
            assert_eq!(hand.len(), 7);
            assert_eq!(letters.len(), 7);
            assert_eq!(letters.iter().filter(|ch| is_vowel(**ch)).count(), 2);
            assert_eq!(letters.iter().filter(|ch| !is_vowel(**ch)).count(), 5);
        }
    }

    #[test]
    fn test_seeded_deals_are_reproducible() {
        let deal = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            LetterMultiset::draw_random(7, 1.0 / 3.0, VOWELS, CONSONANTS, &mut rng)
        };
        assert_eq!(deal(42), deal(42));
    }

    #[test]
    fn test_can_form_respects_counts() {
        let hand = LetterMultiset::from_word("hello");
        assert!(hand.can_form("hello"));
        assert!(hand.can_form("hell"));
        assert!(hand.can_form("HOLE"));
        assert!(!hand.can_form("hellos"));
        assert!(!hand.can_form("llll"));
        assert!(!hand.can_form("he-l"));
        assert!(hand.can_form(""));
    }

    #[test]
    fn test_consume_removes_word_letters() {
        let hand = LetterMultiset::from_word("aabc");
        let rest = hand.consume("ab").unwrap();
        assert_eq!(rest.letters(), vec!['a', 'c']);
        // The original bag is untouched
        assert_eq!(hand.len(), 4);
    }

    #[test]
    fn test_consume_without_letters_is_refused() {
        let hand = LetterMultiset::from_word("abc");
        let err = hand.consume("abb").unwrap_err();
        assert!(matches!(err, GameError::ConsumePrecondition { .. }));
        assert_eq!(hand, LetterMultiset::from_word("cab"));
    }

    #[test]
    fn test_zero_vowel_fraction_deals_only_consonants() {
        let mut rng = StdRng::seed_from_u64(11);
        let hand = LetterMultiset::draw_random(5, 0.0, VOWELS, CONSONANTS, &mut rng);
        assert_eq!(hand.len(), 5);
        assert!(hand.letters().iter().all(|ch| !is_vowel(*ch)));
    }

    #[test]
    fn test_large_deal_keeps_every_letter() {
        let mut rng = StdRng::seed_from_u64(5);
        let hand = LetterMultiset::draw_random(300, 0.0, "a", "b", &mut rng);
        assert_eq!(hand.len(), 300);
        assert_eq!(hand.letters().iter().filter(|ch| **ch == 'b').count(), 300);
    }

    #[test]
    fn test_long_words_are_counted_exactly() {
        let hand = LetterMultiset::from_word(&"b".repeat(255));
        assert_eq!(hand.len(), 255);
        assert!(!hand.can_form(&"b".repeat(300)));
        assert!(matches!(
            hand.consume(&"b".repeat(300)),
            Err(GameError::ConsumePrecondition { .. })
        ));

        let hand = LetterMultiset::from_word(&"b".repeat(300));
        let rest = hand.consume(&"b".repeat(256)).unwrap();
        assert_eq!(rest.len(), 44);
    }

    #[test]
    fn test_emptiness_and_display() {
        let hand = LetterMultiset::from_word("cab");
        assert!(!hand.is_empty());
        assert_eq!(hand.to_string(), "a b c");

        let rest = hand.consume("cab").unwrap();
        assert!(rest.is_empty());
        assert_eq!(rest.to_string(), "");
    }
}
