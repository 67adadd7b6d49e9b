use yeok_core::language::{Language, LanguagePair};

pub const KOREAN: Language = Language { name: "Korean" };

pub const RUSSIAN: Language = Language { name: "Russian" };

/// Korean headwords with Russian translations
#[derive(Debug, Clone, Copy, Default)]
pub struct KoreanRussian;

impl LanguagePair for KoreanRussian {
    fn source(&self) -> Language {
        KOREAN
    }

    fn target(&self) -> Language {
        RUSSIAN
    }
}
