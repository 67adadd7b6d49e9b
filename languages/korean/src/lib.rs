pub mod pair;
pub mod tokenizer;

pub use pair::KoreanRussian;
pub use tokenizer::WordTokenizer;
