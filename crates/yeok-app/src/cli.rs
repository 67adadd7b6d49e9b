use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use yeok_config::{StoreKind, TokenizerKind};

#[derive(Debug, Parser)]
#[command(name = "yeok", version, about = "Korean-Russian dictionary lookup")]
pub struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Dictionary file (.csv or .db)
    #[arg(short, long, global = true)]
    pub dictionary: Option<PathBuf>,

    /// Store used when the dictionary extension is not recognised
    #[arg(long, value_enum, global = true)]
    pub store: Option<StoreArg>,

    /// How forward sentence lookups are split into words
    #[arg(long, value_enum, global = true)]
    pub tokenizer: Option<TokenizerArg>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive menu (default)
    Shell,
    /// Translate a word or sentence and exit
    Lookup {
        text: String,
        /// Russian to Korean
        #[arg(short, long)]
        reverse: bool,
        /// Treat the input as a sentence
        #[arg(short, long)]
        sentence: bool,
    },
    /// Merge a CSV file (with header line) into a SQLite dictionary
    Import {
        source: PathBuf,
        /// Target database, defaults to --dictionary
        #[arg(long)]
        database: Option<PathBuf>,
        /// Create the database if it does not exist
        #[arg(long)]
        create: bool,
    },
    /// Write the dictionary to an .xlsx spreadsheet
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StoreArg {
    Csv,
    Sqlite,
}

impl From<StoreArg> for StoreKind {
    fn from(arg: StoreArg) -> Self {
        match arg {
            StoreArg::Csv => StoreKind::Csv,
            StoreArg::Sqlite => StoreKind::Sqlite,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TokenizerArg {
    Word,
    Whitespace,
}

impl From<TokenizerArg> for TokenizerKind {
    fn from(arg: TokenizerArg) -> Self {
        match arg {
            TokenizerArg::Word => TokenizerKind::Word,
            TokenizerArg::Whitespace => TokenizerKind::Whitespace,
        }
    }
}
