//! Word lexer
//!
//! Splits input into a token stream the extraction passes consume. Offsets
//! are byte positions in the original text; each token carries a lowercase
//! copy used only for comparison, so case folding never disturbs span
//! arithmetic.

/// A single word token
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Lowercase copy for comparison
    pub lower: String,
    /// Byte offset of the first byte in the original text
    pub start: usize,
    /// Byte offset one past the last byte
    pub end: usize,
}

impl Token {
    /// The original-case slice this token covers
    pub fn original<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    /// Parse the token as an integer, if it is one
    pub fn as_integer(&self) -> Option<i64> {
        self.lower.parse().ok()
    }

    pub fn is_alphabetic(&self) -> bool {
        !self.lower.is_empty() && self.lower.chars().all(|c| c.is_alphabetic())
    }
}

/// Tokenize into alphanumeric word runs
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        if ch.is_alphanumeric() {
            if start.is_none() {
                start = Some(idx);
            }
        } else if let Some(s) = start.take() {
            tokens.push(make_token(text, s, idx));
        }
    }
    if let Some(s) = start {
        tokens.push(make_token(text, s, text.len()));
    }
    tokens
}

fn make_token(text: &str, start: usize, end: usize) -> Token {
    Token {
        lower: text[start..end].to_lowercase(),
        start,
        end,
    }
}
