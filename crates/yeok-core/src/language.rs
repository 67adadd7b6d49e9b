/// Splits sentences into lookup tokens
pub trait Tokenizer {
    /// Break text into tokens, in order of appearance
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// A fixed source/target language pair
pub trait LanguagePair {
    fn source(&self) -> Language;

    fn target(&self) -> Language;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// English display name
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
}

/// Whitespace split, punctuation stays attached to its word
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .map(|word| Token {
                surface: word.to_string(),
            })
            .collect()
    }
}
