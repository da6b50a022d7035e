//! Streaming tokenizer
//!
//! Converts a character stream into [`Token`]s without materializing the
//! input. Punctuation handling is recovery oriented: a sentence is closed by
//! the first strong signal (a terminator run, a line break or the end of the
//! stream), and repeated terminators never open empty sentences.
//!
//! One production step may yield several boundary tokens at once, so
//! produced tokens are queued and handed out one at a time.

use std::collections::VecDeque;

use crate::buffer::{CharBuffer, DEFAULT_BUFFER_SIZE};
use crate::classifier::CharClass;
use crate::error::{Error, Result};
use crate::source::CharSource;
use crate::token::Token;

/// What a skipped run of separators contained
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct SkippedRun {
    terminator: bool,
    newline: bool,
}

/// Lazy, forward-only token sequence over a [`CharSource`]
pub struct Tokenizer<S> {
    buffer: CharBuffer<S>,
    pending: VecDeque<Token>,
    /// A word has been seen since the last sentence boundary
    sentence_open: bool,
    any_word_seen: bool,
    final_tokens_emitted: bool,
    /// No token will ever be produced again
    exhausted: bool,
}

impl<S: CharSource> Tokenizer<S> {
    /// Create a tokenizer with the default buffer size
    pub fn new(source: S) -> Self {
        Self::with_buffer_size(source, DEFAULT_BUFFER_SIZE)
    }

    /// Create a tokenizer reading `buffer_size` characters per batch
    pub fn with_buffer_size(source: S, buffer_size: usize) -> Self {
        Self {
            buffer: CharBuffer::new(source, buffer_size),
            pending: VecDeque::with_capacity(3),
            sentence_open: false,
            any_word_seen: false,
            final_tokens_emitted: false,
            exhausted: false,
        }
    }

    /// Check whether another token is available.
    ///
    /// May read from the source to produce the next batch of tokens but
    /// never consumes a token, so repeated calls are harmless.
    pub fn has_next(&mut self) -> Result<bool> {
        while self.pending.is_empty() {
            if self.exhausted || !self.produce()? {
                self.exhausted = true;
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Take the next token.
    ///
    /// Returns [`Error::Exhausted`] once the sequence has ended.
    pub fn next_token(&mut self) -> Result<Token> {
        if !self.has_next()? {
            return Err(Error::Exhausted);
        }
        self.pending.pop_front().ok_or(Error::Exhausted)
    }

    /// Run one production step, queueing zero or more tokens.
    ///
    /// Returns `false` once the stream is finished and nothing was queued.
    fn produce(&mut self) -> Result<bool> {
        let skipped = self.skip_separators()?;
        let was_open = self.sentence_open;

        if skipped.terminator && was_open {
            self.pending.push_back(Token::SentenceEnd);
            self.sentence_open = false;
        }

        if skipped.newline && was_open {
            // A line break closes a sentence that lost its terminator
            if !skipped.terminator {
                self.pending.push_back(Token::SentenceEnd);
            }
            self.sentence_open = false;
            self.pending.push_back(Token::ParagraphEnd);
        }

        if !self.pending.is_empty() {
            return Ok(true);
        }

        if self.buffer.peek()?.is_none() {
            return Ok(self.finish());
        }

        let word = self.read_word()?;
        tracing::trace!(word = %word, "word token");
        self.pending.push_back(Token::Word(word));
        self.sentence_open = true;
        self.any_word_seen = true;

        Ok(true)
    }

    /// Queue the tokens closing the last sentence and paragraph
    fn finish(&mut self) -> bool {
        if self.final_tokens_emitted {
            return false;
        }
        self.final_tokens_emitted = true;

        if !self.any_word_seen {
            tracing::debug!("end of stream without any words");
            return false;
        }

        if self.sentence_open {
            self.pending.push_back(Token::SentenceEnd);
            self.sentence_open = false;
        }
        self.pending.push_back(Token::ParagraphEnd);

        tracing::debug!(refills = self.buffer.refills(), "end of stream");
        true
    }

    fn skip_separators(&mut self) -> Result<SkippedRun> {
        let mut run = SkippedRun::default();

        while let Some(ch) = self.buffer.peek()? {
            match CharClass::of(ch) {
                CharClass::Letter => break,
                CharClass::Newline => run.newline = true,
                CharClass::SentenceTerminator => run.terminator = true,
                CharClass::Other => {}
            }
            self.buffer.advance();
        }

        Ok(run)
    }

    fn read_word(&mut self) -> Result<String> {
        let mut word = String::new();

        while let Some(ch) = self.buffer.peek()? {
            if CharClass::of(ch).is_separator() {
                break;
            }
            word.push(ch);
            self.buffer.advance();
        }

        Ok(word)
    }
}

impl<S: CharSource> Iterator for Tokenizer<S> {
    type Item = Result<Token>;

    /// Yields `None` on exhaustion and `Some(Err(_))` on a read failure
    fn next(&mut self) -> Option<Self::Item> {
        match self.has_next() {
            Ok(true) => self.pending.pop_front().map(Ok),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

impl<S> std::fmt::Debug for Tokenizer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("pending", &self.pending)
            .field("sentence_open", &self.sentence_open)
            .field("any_word_seen", &self.any_word_seen)
            .field("final_tokens_emitted", &self.final_tokens_emitted)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}

/// Tokenize an in-memory string into a vector
pub fn tokenize_str(text: &str) -> Vec<Token> {
    // StrSource never fails
    Tokenizer::new(crate::source::StrSource::new(text))
        .map_while(Result::ok)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StrSource;
    use std::io;

    use crate::token::Token::{ParagraphEnd as P, SentenceEnd as S};

    fn w(text: &str) -> Token {
        Token::word(text)
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize_str("").is_empty());
    }

    #[test]
    fn test_punctuation_only_input() {
        assert!(tokenize_str("... !?\n\n , ;").is_empty());
    }

    #[test]
    fn test_single_unterminated_sentence() {
        assert_eq!(tokenize_str("hello world"), vec![w("hello"), w("world"), S, P]);
    }

    #[test]
    fn test_terminated_sentences() {
        assert_eq!(
            tokenize_str("One. Two!"),
            vec![w("One"), S, w("Two"), S, P]
        );
    }

    #[test]
    fn test_repeated_terminators_collapse() {
        assert_eq!(
            tokenize_str("Wait... what?!? .. ok"),
            vec![w("Wait"), S, w("what"), S, w("ok"), S, P]
        );
    }

    #[test]
    fn test_newline_closes_dangling_sentence() {
        assert_eq!(
            tokenize_str("no stop here\nnext"),
            vec![w("no"), w("stop"), w("here"), S, P, w("next"), S, P]
        );
    }

    #[test]
    fn test_terminator_and_newline_in_one_run() {
        assert_eq!(
            tokenize_str("Done.\n\nAgain"),
            vec![w("Done"), S, P, w("Again"), S, P]
        );
        // Order inside the run does not matter
        assert_eq!(
            tokenize_str("Done\n.Again"),
            vec![w("Done"), S, P, w("Again"), S, P]
        );
    }

    #[test]
    fn test_stray_punctuation_without_open_sentence() {
        // Nothing is open before the first word, so the leading run emits nothing
        assert_eq!(
            tokenize_str(".!\n\nFirst.\n\n.\n!\nSecond."),
            vec![w("First"), S, P, w("Second"), S, P]
        );
    }

    #[test]
    fn test_leading_newlines_do_not_open_paragraph() {
        assert_eq!(tokenize_str("\n\n\nword"), vec![w("word"), S, P]);
    }

    #[test]
    fn test_trailing_newline_still_closes_at_end_of_stream() {
        // The end of the stream always closes a paragraph once words were seen
        assert_eq!(tokenize_str("End.\n"), vec![w("End"), S, P, P]);
    }

    #[test]
    fn test_closed_sentence_at_end_gets_only_paragraph() {
        assert_eq!(tokenize_str("Last...."), vec![w("Last"), S, P]);
    }

    #[test]
    fn test_letter_set() {
        assert_eq!(
            tokenize_str("snake_case, kebab-case, 42nd; Привет мир"),
            vec![
                w("snake_case"),
                w("kebab-case"),
                w("42nd"),
                w("Привет"),
                w("мир"),
                S,
                P
            ]
        );
    }

    #[test]
    fn test_non_letters_split_words() {
        assert_eq!(
            tokenize_str("café ёлка don't"),
            vec![w("caf"), w("лка"), w("don"), w("t"), S, P]
        );
    }

    #[test]
    fn test_carriage_returns_are_plain_separators() {
        assert_eq!(
            tokenize_str("one\r\ntwo"),
            vec![w("one"), S, P, w("two"), S, P]
        );
    }

    #[test]
    fn test_has_next_is_idempotent() {
        let mut tokenizer = Tokenizer::new(StrSource::new("a. b"));

        for _ in 0..5 {
            assert!(tokenizer.has_next().unwrap());
        }
        assert_eq!(tokenizer.next_token().unwrap(), w("a"));
        assert!(tokenizer.has_next().unwrap());
        assert!(tokenizer.has_next().unwrap());
        assert_eq!(tokenizer.next_token().unwrap(), S);
    }

    #[test]
    fn test_next_token_after_exhaustion_fails() {
        let mut tokenizer = Tokenizer::new(StrSource::new("word"));

        assert_eq!(tokenizer.next_token().unwrap(), w("word"));
        assert_eq!(tokenizer.next_token().unwrap(), S);
        assert_eq!(tokenizer.next_token().unwrap(), P);

        for _ in 0..3 {
            assert!(!tokenizer.has_next().unwrap());
            assert!(matches!(tokenizer.next_token(), Err(Error::Exhausted)));
        }
        assert!(tokenizer.next().is_none());
    }

    #[test]
    fn test_next_token_on_empty_input_fails() {
        let mut tokenizer = Tokenizer::new(StrSource::new(""));
        assert!(matches!(tokenizer.next_token(), Err(Error::Exhausted)));
    }

    #[test]
    fn test_words_spanning_buffer_refills() {
        let text = "Alpha beta.\nGamma delta epsilon";
        let expected = tokenize_str(text);

        for size in 1..=8 {
            let tokens: Vec<Token> = Tokenizer::with_buffer_size(StrSource::new(text), size)
                .collect::<Result<_>>()
                .unwrap();
            assert_eq!(tokens, expected, "buffer size {size}");
        }
    }

    #[test]
    fn test_read_failure_is_surfaced() {
        struct FailAfter<'a> {
            inner: StrSource<'a>,
            remaining_reads: usize,
        }
        impl CharSource for FailAfter<'_> {
            fn read_chars(&mut self, buf: &mut [char]) -> io::Result<usize> {
                if self.remaining_reads == 0 {
                    return Err(io::Error::other("connection reset"));
                }
                self.remaining_reads -= 1;
                self.inner.read_chars(buf)
            }
        }

        let source = FailAfter {
            inner: StrSource::new("abc def ghi"),
            remaining_reads: 1,
        };
        let mut tokenizer = Tokenizer::with_buffer_size(source, 4);

        assert_eq!(tokenizer.next_token().unwrap(), w("abc"));
        let err = tokenizer.next_token().unwrap_err();
        assert!(matches!(err, Error::Read(_)));
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn test_borrowed_source_can_be_resumed() {
        let mut source = StrSource::new("one; two");
        {
            let mut tokenizer = Tokenizer::with_buffer_size(&mut source, 4);
            assert_eq!(tokenizer.next_token().unwrap(), w("one"));
        }
        // Only the first batch was pulled; the rest is still in the source
        let rest: Vec<Token> = Tokenizer::new(&mut source).collect::<Result<_>>().unwrap();
        assert_eq!(rest, vec![w("two"), S, P]);
    }
}
