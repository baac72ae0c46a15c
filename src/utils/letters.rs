/// Letters a hand draws its vowels from
pub const VOWELS: &str = "aeiou";

/// Letters a hand draws its consonants from
pub const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";

/// Number of letters in the playable alphabet
pub const ALPHABET_LEN: usize = 26;

/// Letter values similar to Scrabble scoring, indexed by `letter - 'a'`
pub const LETTER_VALUES: [u32; ALPHABET_LEN] = [
    1,  // a
    3,  // b
    3,  // c
    2,  // d
    1,  // e
    4,  // f
    2,  // g
    4,  // h
    1,  // i
    8,  // j
    5,  // k
    1,  // l
    3,  // m
    1,  // n
    1,  // o
    3,  // p
    10, // q
    1,  // r
    1,  // s
    1,  // t
    1,  // u
    4,  // v
    4,  // w
    8,  // x
    4,  // y
    10, // z
];

/// Position of a letter in the alphabet, or `None` for anything outside a-z.
/// Uppercase input is folded to lowercase first.
pub fn letter_index(letter: char) -> Option<usize> {
    let lower = letter.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Some((lower as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Inverse of [`letter_index`]
pub fn letter_at(index: usize) -> char {
    debug_assert!(index < ALPHABET_LEN);
    (b'a' + index as u8) as char
}

/// Get the point value for a letter
pub fn get_letter_value(letter: char) -> Option<u32> {
    letter_index(letter).map(|idx| LETTER_VALUES[idx])
}

#[cfg(test)]
pub fn is_vowel(letter: char) -> bool {
    VOWELS.contains(letter.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_values() {
        assert_eq!(get_letter_value('e'), Some(1));
        assert_eq!(get_letter_value('Q'), Some(10));
        assert_eq!(get_letter_value('x'), Some(8));
        assert_eq!(get_letter_value('d'), Some(2));
        assert_eq!(get_letter_value('k'), Some(5));
    }

    #[test]
    fn test_unknown_letters_have_no_value() {
        assert_eq!(get_letter_value('é'), None);
        assert_eq!(get_letter_value('-'), None);
        assert_eq!(get_letter_value('3'), None);
    }

    #[test]
    fn test_alphabets_cover_every_letter_once() {
        assert_eq!(VOWELS.len() + CONSONANTS.len(), ALPHABET_LEN);
        for idx in 0..ALPHABET_LEN {
            let letter = letter_at(idx);
            assert_eq!(letter_index(letter), Some(idx));
            assert_ne!(VOWELS.contains(letter), CONSONANTS.contains(letter));
        }
        assert!(is_vowel('A'));
        assert!(!is_vowel('z'));
    }
}
