use std::collections::BTreeSet;
use std::fs;
use std::ops::Bound;
use std::path::Path;

use crate::error::{GameError, Result};

/// Immutable, lowercase set of playable words.
///
/// Built once at startup and handed to the engines by reference.
pub struct Lexicon {
    words: BTreeSet<String>,
}

impl Lexicon {
    /// Load a lexicon from a newline-delimited word file.
    ///
    /// A missing or unreadable file, or one without a single word, is fatal:
    /// no game may start without a lexicon.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| GameError::LexiconUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let lexicon = Self::from_words(content.lines());
        if lexicon.is_empty() {
            return Err(GameError::EmptyLexicon {
                path: path.to_path_buf(),
            });
        }

        tracing::info!("Loaded {} words into lexicon from {}", lexicon.len(), path.display());

        Ok(lexicon)
    }

    /// Build a lexicon from in-memory words, normalized the same way as [`Lexicon::load`]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self { words }
    }

    /// Check if a word exists in the lexicon
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// True iff at least one word starts with `fragment`.
    /// The empty fragment is a prefix of every word.
    pub fn has_prefix(&self, fragment: &str) -> bool {
        let fragment = fragment.to_lowercase();
        // The first word at or after `fragment` in sort order is the only candidate.
        self.words
            .range::<str, _>((Bound::Included(fragment.as_str()), Bound::Unbounded))
            .next()
            .is_some_and(|word| word.starts_with(&fragment))
    }

    /// Get the number of words in the lexicon
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
