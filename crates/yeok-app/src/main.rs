use anyhow::Context;
use clap::Parser;
use yeok_config::Config;

mod cli;
mod commands;
mod logging;
mod shell;

#[cfg(test)]
mod tests;

use self::cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    logging::init(&config, cli.verbose);

    tracing::debug!("Resolved config: {:?}", config);

    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => commands::run_shell(&config),
        Command::Lookup {
            text,
            reverse,
            sentence,
        } => {
            let stdout = std::io::stdout();
            commands::run_lookup(&config, &text, reverse, sentence, &mut stdout.lock())
        }
        Command::Import {
            source,
            database,
            create,
        } => {
            let imported = commands::run_import(&config, &source, database, create)?;
            println!("Imported {imported} rows");
            Ok(())
        }
        Command::Export { output } => {
            let path = commands::run_export(&config, output)?;
            println!("Dictionary exported to {} successfully!", path.display());
            Ok(())
        }
    }
}

/// Defaults, then config file and environment, then command line flags
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::new(),
    };

    if let Some(path) = &cli.dictionary {
        config.dictionary.path = path.clone();
    }
    if let Some(store) = cli.store {
        config.dictionary.store = store.into();
    }
    if let Some(tokenizer) = cli.tokenizer {
        config.dictionary.tokenizer = Some(tokenizer.into());
    }

    Ok(config)
}
