//! Streaming word, sentence and paragraph statistics
//!
//! This crate turns an unbounded character stream into aggregate text
//! statistics without holding the whole input in memory.
//!
//! # Architecture
//!
//! The pipeline is strictly linear:
//! - **Source**: a [`CharSource`] hands out characters in batches
//! - **Tokenizer**: a buffered, look-ahead lexer producing [`Token`]s
//! - **Aggregator**: a single pass accumulating counts and frequency tables
//! - **Analysis**: an immutable, queryable snapshot of the results
//!
//! # Example
//!
//! ```rust
//! use tally_core::TextAnalyzer;
//!
//! let analyzer = TextAnalyzer::new();
//! let analysis = analyzer
//!     .analyze_text("Test text. Second sentense.\nNew paragraph.\nLast paragraph.")
//!     .unwrap();
//!
//! assert_eq!(analysis.words_count(), 8);
//! assert_eq!(analysis.sentences_count(), 4);
//! assert_eq!(analysis.paragraphs_count(), 3);
//! assert_eq!(analysis.average_word_length(), 5.875);
//!
//! let top = analysis.occurrence_desc_ordered().next().unwrap();
//! assert_eq!(top.to_string(), "paragraph 2");
//! ```

pub mod aggregator;
pub mod analysis;
pub mod analyzer;
pub mod buffer;
pub mod classifier;
pub mod config;
pub mod error;
pub mod input;
pub mod source;
pub mod token;
pub mod tokenizer;

pub use aggregator::Aggregator;
pub use analysis::{Analysis, WordOccurrences};
pub use analyzer::TextAnalyzer;
pub use buffer::CharBuffer;
pub use classifier::{is_letter, CharClass};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use input::Input;
pub use source::{CharSource, ReaderSource, StrSource};
pub use token::Token;
pub use tokenizer::{tokenize_str, Tokenizer};

/// Re-exported so callers can name encodings without a direct dependency
pub use encoding_rs::Encoding;
