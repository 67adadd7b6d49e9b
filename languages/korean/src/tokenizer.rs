use regex::Regex;
use yeok_core::language::{Token, Tokenizer};

/// Runs of Unicode word characters; Hangul and Cyrillic both count
pub struct WordTokenizer {
    pattern: Regex,
}

impl WordTokenizer {
    pub fn new() -> Self {
        Self {
            // Literal pattern, cannot fail to compile
            pattern: Regex::new(r"\w+").expect("word pattern is valid"),
        }
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        self.pattern
            .find_iter(text)
            .map(|m| Token {
                surface: m.as_str().to_string(),
            })
            .collect()
    }
}
