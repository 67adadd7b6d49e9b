use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use yeok_config::dictionary::DictionaryConfig;
use yeok_config::{Config, StoreKind, TokenizerKind};
use yeok_core::{
    Direction, Granularity, History, LanguagePair, Session, StoreError, Tokenizer, Translator,
    WhitespaceTokenizer,
};
use yeok_export::{default_export_path, export_xlsx};
use yeok_lang_korean::{KoreanRussian, WordTokenizer};
use yeok_store::{SqliteStore, import_csv, open_store};

use crate::shell::Shell;

/// Open the dictionary at `path` with the store and tokenizer it calls for
pub fn open_translator(config: &DictionaryConfig, path: &Path) -> Result<Translator, StoreError> {
    let kind = config.store_for(path);
    let tokenizer: Box<dyn Tokenizer> = match config.tokenizer_for(kind) {
        TokenizerKind::Word => Box::new(WordTokenizer::new()),
        TokenizerKind::Whitespace => Box::new(WhitespaceTokenizer),
    };

    Translator::open(open_store(kind, path), tokenizer)
}

pub fn new_session(config: &Config) -> anyhow::Result<Session> {
    let path = &config.dictionary.path;
    let translator = open_translator(&config.dictionary, path)
        .with_context(|| format!("Failed to open dictionary {}", path.display()))?;
    Ok(Session::new(translator, History::new(&config.history.path)))
}

/// Spreadsheet column titles
pub fn export_headers() -> [&'static str; 2] {
    let pair = KoreanRussian;
    [pair.source().name, pair.target().name]
}

/// Where the current dictionary is exported without an explicit target
pub fn export_target(config: &Config, dictionary_path: &Path) -> PathBuf {
    config
        .export
        .path
        .clone()
        .unwrap_or_else(|| default_export_path(dictionary_path))
}

pub fn run_shell(config: &Config) -> anyhow::Result<()> {
    let session = new_session(config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = Shell::new(session, config.clone(), stdin.lock(), stdout.lock()).run()?;

    let history = session
        .finish()
        .context("Failed to save translation history")?;
    tracing::debug!("Session ended after {} lookups", history.records().len());
    Ok(())
}

pub fn run_lookup(
    config: &Config,
    text: &str,
    reverse: bool,
    sentence: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut session = new_session(config)?;

    let direction = if reverse {
        Direction::Reverse
    } else {
        Direction::Forward
    };
    let granularity = if sentence {
        Granularity::Sentence
    } else {
        Granularity::Word
    };

    // One-shot lookups never flush the history file
    let output = session.translate(direction, granularity, text);

    writeln!(out, "{output}")?;
    Ok(())
}

/// Bulk import; any failure is fatal
pub fn run_import(
    config: &Config,
    source: &Path,
    database: Option<PathBuf>,
    create: bool,
) -> anyhow::Result<usize> {
    let database = database.unwrap_or_else(|| config.dictionary.path.clone());
    if config.dictionary.store_for(&database) != StoreKind::Sqlite {
        bail!(
            "Import target {} is not a SQLite dictionary",
            database.display()
        );
    }

    let store = SqliteStore::new(&database);
    if create {
        store
            .create()
            .with_context(|| format!("Failed to create {}", database.display()))?;
    }

    import_csv(source, &store).with_context(|| {
        format!(
            "Failed to import {} into {}",
            source.display(),
            database.display()
        )
    })
}

pub fn run_export(config: &Config, output: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    let path = &config.dictionary.path;
    let translator = open_translator(&config.dictionary, path)
        .with_context(|| format!("Failed to open dictionary {}", path.display()))?;
    let target = output.unwrap_or_else(|| export_target(config, path));

    export_xlsx(translator.dictionary(), export_headers(), &target)
        .with_context(|| format!("Failed to export dictionary to {}", target.display()))
}
