use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use yeok_config::Config;
use yeok_core::{Change, Direction, Granularity, LanguagePair, Session};
use yeok_export::export_xlsx;
use yeok_lang_korean::KoreanRussian;

use crate::commands::{export_headers, export_target, open_translator};

const RULE: &str = "-------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Menu-driven front end over a session
pub struct Shell<R, W> {
    session: Session,
    config: Config,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(session: Session, config: Config, input: R, output: W) -> Self {
        Self {
            session,
            config,
            input,
            output,
        }
    }

    /// Run until `q` or end of input, handing the session back for shutdown
    pub fn run(mut self) -> io::Result<Session> {
        let pair = KoreanRussian;
        let (source, target) = (pair.source().name, pair.target().name);

        loop {
            self.menu(&[
                format!("'kr' - translate from {source} to {target}"),
                format!("'rk' - translate from {target} to {source}"),
                "'m' - addition options".to_string(),
                "'q' - quit".to_string(),
            ])?;

            let Some(choice) = self.prompt("Your choice: ")? else {
                break;
            };

            let flow = match choice.to_lowercase().as_str() {
                "q" => Flow::Quit,
                "kr" => self.translate_menu(Direction::Forward)?,
                "rk" => self.translate_menu(Direction::Reverse)?,
                "m" => self.maintenance_menu()?,
                other => {
                    writeln!(self.output, "Unknown choice '{other}'.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        self.output.flush()?;
        Ok(self.session)
    }

    fn menu(&mut self, items: &[String]) -> io::Result<()> {
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "Enter one of the following operations:")?;
        for item in items {
            writeln!(self.output, "{item}")?;
        }
        writeln!(self.output, "{RULE}")
    }

    /// Read one trimmed line; `None` once input is exhausted
    ///
    /// Trimmed the same way the CSV store trims fields on load.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn translate_menu(&mut self, direction: Direction) -> io::Result<Flow> {
        let pair = KoreanRussian;
        let (from, to) = match direction {
            Direction::Forward => (pair.source().name, pair.target().name),
            Direction::Reverse => (pair.target().name, pair.source().name),
        };

        self.menu(&[
            "'W' - translate a word".to_string(),
            "'S' - translate a sentence".to_string(),
            "'B' - go back to the main menu".to_string(),
        ])?;
        let Some(choice) = self.prompt("Your choice: ")? else {
            return Ok(Flow::Quit);
        };

        match choice.to_lowercase().as_str() {
            "w" => {
                let Some(word) =
                    self.prompt(&format!("Enter a word to translate from {from} to {to}: "))?
                else {
                    return Ok(Flow::Quit);
                };
                let translation = self.session.translate(direction, Granularity::Word, &word);
                writeln!(self.output, "Translation: {translation}")?;
            }
            "s" => {
                let Some(sentence) =
                    self.prompt(&format!("Enter a sentence to translate from {from} to {to}: "))?
                else {
                    return Ok(Flow::Quit);
                };
                let translation =
                    self.session
                        .translate(direction, Granularity::Sentence, &sentence);
                writeln!(self.output, "Sentence translation: {translation}")?;
            }
            "b" => {}
            other => writeln!(self.output, "Unknown choice '{other}'.")?,
        }

        Ok(Flow::Continue)
    }

    fn maintenance_menu(&mut self) -> io::Result<Flow> {
        self.menu(&[
            "'a' - add a word".to_string(),
            "'d' - delete a translation".to_string(),
            "'u' - update a translation".to_string(),
            "'c' - clear the dictionary".to_string(),
            "'p' - print all words in the dictionary".to_string(),
            "'s' - select another dictionary file".to_string(),
            "'e' - export dictionary to Excel".to_string(),
            "'h' - print translation history".to_string(),
            "'b' - go back to the main menu".to_string(),
        ])?;
        let Some(choice) = self.prompt("Your choice: ")? else {
            return Ok(Flow::Quit);
        };

        match choice.to_lowercase().as_str() {
            "a" => self.add_word(),
            "d" => self.delete_translation(),
            "u" => self.update_translation(),
            "c" => {
                match self.session.translator_mut().clear() {
                    Ok(()) => writeln!(self.output, "Dictionary cleared successfully.")?,
                    Err(e) => self.report_save_error(&e)?,
                }
                Ok(Flow::Continue)
            }
            "p" => {
                self.print_words()?;
                Ok(Flow::Continue)
            }
            "s" => self.select_dictionary(),
            "e" => {
                self.export()?;
                Ok(Flow::Continue)
            }
            "h" => {
                self.print_history()?;
                Ok(Flow::Continue)
            }
            "b" => Ok(Flow::Continue),
            other => {
                writeln!(self.output, "Unknown choice '{other}'.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn add_word(&mut self) -> io::Result<Flow> {
        let Some(word) = self.prompt("Enter a word to add: ")? else {
            return Ok(Flow::Quit);
        };

        let mut translations = Vec::new();
        loop {
            match self.prompt("Enter a translation (or Enter to finish): ")? {
                Some(t) if !t.is_empty() => translations.push(t),
                Some(_) => break,
                None => return Ok(Flow::Quit),
            }
        }

        if word.is_empty() || translations.is_empty() {
            writeln!(self.output, "Nothing added to the dictionary.")?;
            return Ok(Flow::Continue);
        }

        match self.session.translator_mut().upsert(&word, &translations) {
            Ok(()) => writeln!(self.output, "Word added to the dictionary successfully!")?,
            Err(e) => self.report_save_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn delete_translation(&mut self) -> io::Result<Flow> {
        let Some(word) = self.prompt("Enter a word to delete translations: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(translation) = self.prompt("Enter a translation to delete: ")? else {
            return Ok(Flow::Quit);
        };

        match self.session.translator_mut().delete(&word, &translation) {
            Ok(Change::Applied) => writeln!(
                self.output,
                "Translation '{translation}' deleted successfully!"
            )?,
            Ok(Change::NotFound) => self.report_not_found()?,
            Err(e) => self.report_save_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn update_translation(&mut self) -> io::Result<Flow> {
        let Some(word) = self.prompt("Enter a word to update translations: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(old) = self.prompt("Enter the old translation: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(new) = self.prompt("Enter the new translation: ")? else {
            return Ok(Flow::Quit);
        };

        if new.is_empty() {
            writeln!(self.output, "Nothing updated.")?;
            return Ok(Flow::Continue);
        }

        match self.session.translator_mut().update(&word, &old, &new) {
            Ok(Change::Applied) => writeln!(self.output, "Translation updated successfully!")?,
            Ok(Change::NotFound) => self.report_not_found()?,
            Err(e) => self.report_save_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn print_words(&mut self) -> io::Result<()> {
        let dictionary = self.session.translator().dictionary();
        if dictionary.is_empty() {
            return writeln!(self.output, "Dictionary is empty.");
        }

        for (word, translations) in dictionary.iter() {
            writeln!(self.output, "{word}: {}", translations.join(", "))?;
        }
        Ok(())
    }

    fn select_dictionary(&mut self) -> io::Result<Flow> {
        let Some(path) = self.prompt("Enter the path to the dictionary file: ")? else {
            return Ok(Flow::Quit);
        };
        if path.is_empty() {
            writeln!(self.output, "No file selected.")?;
            return Ok(Flow::Continue);
        }

        let path = PathBuf::from(path);
        let translator = match open_translator(&self.config.dictionary, &path) {
            Ok(translator) => translator,
            Err(e) => {
                writeln!(self.output, "Error loading dictionary: {e}")?;
                writeln!(self.output, "Keeping the current dictionary.")?;
                return Ok(Flow::Continue);
            }
        };
        let words = translator.dictionary().len();
        self.session.switch(translator);

        writeln!(
            self.output,
            "Using dictionary {} ({words} words).",
            path.display()
        )?;
        Ok(Flow::Continue)
    }

    fn export(&mut self) -> io::Result<()> {
        let translator = self.session.translator();
        let target = export_target(&self.config, translator.store().location());

        match export_xlsx(translator.dictionary(), export_headers(), &target) {
            Ok(path) => writeln!(
                self.output,
                "Dictionary exported to {} successfully!",
                path.display()
            ),
            Err(e) => {
                tracing::error!("Export to {} failed: {}", target.display(), e);
                writeln!(self.output, "Error exporting dictionary to Excel: {e}")
            }
        }
    }

    fn print_history(&mut self) -> io::Result<()> {
        let records = self.session.history().records();
        if records.is_empty() {
            return writeln!(self.output, "No translations yet.");
        }

        for record in records {
            writeln!(self.output, "{record}")?;
        }
        Ok(())
    }

    fn report_not_found(&mut self) -> io::Result<()> {
        writeln!(self.output, "Word or translation not found in dictionary.")
    }

    fn report_save_error(&mut self, err: &yeok_core::StoreError) -> io::Result<()> {
        tracing::error!("Failed to save dictionary: {}", err);
        writeln!(self.output, "Error saving dictionary: {err}")
    }
}
