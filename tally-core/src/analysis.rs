//! Immutable view over finished aggregation results

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

/// A distinct word together with the number of times it occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordOccurrences<'a> {
    /// The word text
    pub word: &'a str,
    /// How many times the word occurred
    pub occurrences: usize,
}

impl fmt::Display for WordOccurrences<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.occurrences)
    }
}

/// Statistics of an analysed text.
///
/// Built once by [`Aggregator::finish`](crate::Aggregator::finish) and never
/// mutated afterwards. Every accessor is a pure read; the ordered views are
/// recomputed on each call, so they can be iterated any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    words_count: usize,
    sentences_count: usize,
    paragraphs_count: usize,
    total_characters: usize,
    char_frequency: BTreeMap<char, usize>,
    word_frequency: HashMap<String, usize>,
    alphabetic_dict: BTreeSet<String>,
}

impl Analysis {
    pub(crate) fn new(
        words_count: usize,
        sentences_count: usize,
        paragraphs_count: usize,
        total_characters: usize,
        char_frequency: BTreeMap<char, usize>,
        word_frequency: HashMap<String, usize>,
        alphabetic_dict: BTreeSet<String>,
    ) -> Self {
        debug_assert_eq!(word_frequency.values().sum::<usize>(), words_count);
        debug_assert_eq!(char_frequency.values().sum::<usize>(), total_characters);
        debug_assert_eq!(word_frequency.len(), alphabetic_dict.len());

        Self {
            words_count,
            sentences_count,
            paragraphs_count,
            total_characters,
            char_frequency,
            word_frequency,
            alphabetic_dict,
        }
    }

    /// Total number of words
    pub fn words_count(&self) -> usize {
        self.words_count
    }

    /// Total number of sentences
    pub fn sentences_count(&self) -> usize {
        self.sentences_count
    }

    /// Total number of paragraphs
    pub fn paragraphs_count(&self) -> usize {
        self.paragraphs_count
    }

    /// Sum of the lengths of all words, in characters
    pub fn total_characters(&self) -> usize {
        self.total_characters
    }

    /// Check if the text contained no words at all
    pub fn is_empty(&self) -> bool {
        self.words_count == 0
    }

    /// Average word length in characters.
    ///
    /// With no words this is `0 / 0`, i.e. `NaN`.
    pub fn average_word_length(&self) -> f64 {
        self.total_characters as f64 / self.words_count as f64
    }

    /// Number of distinct characters seen in words
    pub fn distinct_chars_count(&self) -> usize {
        self.char_frequency.len()
    }

    /// Number of times `ch` occurred inside words
    pub fn char_occurrences(&self, ch: char) -> usize {
        self.char_frequency.get(&ch).copied().unwrap_or(0)
    }

    /// Occurrences of `ch` divided by the number of distinct characters.
    ///
    /// The divisor is the count of distinct characters, not the total
    /// character count, so the values do not sum to 1. `None` if `ch` never
    /// occurred.
    pub fn relative_char_occurrence(&self, ch: char) -> Option<f64> {
        let distinct = self.distinct_chars_count() as f64;
        self.char_frequency
            .get(&ch)
            .map(|&count| count as f64 / distinct)
    }

    /// Relative occurrence of every character seen, in code-point order
    pub fn relative_char_occurrences(&self) -> BTreeMap<char, f64> {
        let distinct = self.distinct_chars_count() as f64;
        self.char_frequency
            .iter()
            .map(|(&ch, &count)| (ch, count as f64 / distinct))
            .collect()
    }

    /// Number of distinct words
    pub fn distinct_words_count(&self) -> usize {
        self.alphabetic_dict.len()
    }

    /// Number of times `word` occurred
    pub fn word_occurrences(&self, word: &str) -> usize {
        self.word_frequency.get(word).copied().unwrap_or(0)
    }

    /// Distinct words in ascending code-point order
    pub fn alphabetic_ordered(&self) -> impl Iterator<Item = &str> + '_ {
        self.alphabetic_dict.iter().map(String::as_str)
    }

    /// Distinct words by descending occurrence count, ties in ascending
    /// code-point order
    pub fn occurrence_desc_ordered(&self) -> impl Iterator<Item = WordOccurrences<'_>> + '_ {
        let mut ranking: Vec<WordOccurrences<'_>> = self
            .alphabetic_dict
            .iter()
            .map(|word| WordOccurrences {
                word,
                occurrences: self.word_occurrences(word),
            })
            .collect();

        ranking.sort_by(|a, b| {
            b.occurrences
                .cmp(&a.occurrences)
                .then_with(|| a.word.cmp(b.word))
        });

        ranking.into_iter()
    }
}
