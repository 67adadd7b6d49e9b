pub mod dictionary;
pub mod error;
pub mod history;
pub mod language;
pub mod session;
pub mod store;
pub mod translator;
pub mod types;

#[cfg(test)]
mod tests;

pub use dictionary::Dictionary;
pub use error::StoreError;
pub use history::History;
pub use language::{Language, LanguagePair, Token, Tokenizer, WhitespaceTokenizer};
pub use session::Session;
pub use store::{Store, ValuePolicy};
pub use translator::Translator;
pub use types::{Change, Direction, Granularity, Mapping, NOT_FOUND};
