//! Semantic tokens produced by the tokenizer

use std::fmt;

/// A token emitted by [`Tokenizer`](crate::Tokenizer)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A maximal run of letter characters
    Word(String),
    /// End of a sentence, either punctuated or inferred
    SentenceEnd,
    /// End of a paragraph that contained at least one word
    ParagraphEnd,
}

impl Token {
    /// Create a word token
    pub fn word(text: impl Into<String>) -> Self {
        Token::Word(text.into())
    }

    /// Whether this token marks a sentence or paragraph boundary
    pub fn is_boundary(&self) -> bool {
        !matches!(self, Token::Word(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(text) => write!(f, "Word({text})"),
            Token::SentenceEnd => write!(f, "SentenceEnd"),
            Token::ParagraphEnd => write!(f, "ParagraphEnd"),
        }
    }
}
