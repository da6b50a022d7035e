//! Single-pass aggregation of a token stream

use std::collections::{BTreeSet, HashMap};

use crate::analysis::Analysis;
use crate::error::Result;
use crate::token::Token;

/// Accumulates counts and frequency tables from a token stream.
///
/// The aggregator is consumed by [`finish`](Self::finish), which freezes the
/// state into an [`Analysis`].
#[derive(Debug, Default, Clone)]
pub struct Aggregator {
    word_count: usize,
    sentence_count: usize,
    paragraph_count: usize,
    total_characters: usize,
    char_frequency: HashMap<char, usize>,
    word_frequency: HashMap<String, usize>,
    /// Same keys as `word_frequency`, kept in code-point order
    alphabetic_dict: BTreeSet<String>,
}

impl Aggregator {
    /// Create an empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for a single token
    pub fn consume(&mut self, token: Token) {
        match token {
            Token::Word(word) => self.add_word(word),
            Token::SentenceEnd => self.sentence_count += 1,
            Token::ParagraphEnd => self.paragraph_count += 1,
        }
    }

    /// Consume a whole token stream in order, stopping at the first error.
    ///
    /// On error nothing is returned; the partially filled state is dropped.
    pub fn aggregate<I>(mut self, tokens: I) -> Result<Analysis>
    where
        I: IntoIterator<Item = Result<Token>>,
    {
        for token in tokens {
            self.consume(token?);
        }
        Ok(self.finish())
    }

    /// Freeze the accumulated state
    pub fn finish(self) -> Analysis {
        tracing::debug!(
            words = self.word_count,
            sentences = self.sentence_count,
            paragraphs = self.paragraph_count,
            distinct_words = self.alphabetic_dict.len(),
            "aggregation finished"
        );

        Analysis::new(
            self.word_count,
            self.sentence_count,
            self.paragraph_count,
            self.total_characters,
            self.char_frequency.into_iter().collect(),
            self.word_frequency,
            self.alphabetic_dict,
        )
    }

    fn add_word(&mut self, word: String) {
        let mut length = 0;
        for ch in word.chars() {
            *self.char_frequency.entry(ch).or_insert(0) += 1;
            length += 1;
        }

        self.word_count += 1;
        self.total_characters += length;

        if let Some(count) = self.word_frequency.get_mut(&word) {
            *count += 1;
        } else {
            self.alphabetic_dict.insert(word.clone());
            self.word_frequency.insert(word, 1);
        }
    }
}
