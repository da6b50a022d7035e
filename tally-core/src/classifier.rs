//! Character classification for tokenization

/// Classification of a single character
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// Part of a word: ASCII and basic Cyrillic letters, digits, `-` and `_`
    Letter,
    /// Line feed
    Newline,
    /// Sentence-ending punctuation (`.`, `!`, `?`)
    SentenceTerminator,
    /// Any other separator
    Other,
}

impl CharClass {
    /// Classify a character
    pub fn of(ch: char) -> Self {
        if is_letter(ch) {
            return CharClass::Letter;
        }

        match ch {
            '\n' => CharClass::Newline,
            '.' | '!' | '?' => CharClass::SentenceTerminator,
            _ => CharClass::Other,
        }
    }

    /// Check if the class is a separator (anything but a letter)
    pub fn is_separator(self) -> bool {
        self != CharClass::Letter
    }
}

/// Check if a character belongs to a word.
///
/// Only the fixed ranges below count; `ё` and `Ё` sit outside the basic
/// Cyrillic block and are separators.
pub fn is_letter(ch: char) -> bool {
    matches!(
        ch,
        'a'..='z' | 'A'..='Z' | 'а'..='я' | 'А'..='Я' | '0'..='9' | '-' | '_'
    )
}
