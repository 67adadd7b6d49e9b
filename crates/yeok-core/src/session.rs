use crate::history::History;
use crate::translator::Translator;
use crate::types::{Direction, Granularity};

/// The active dictionary plus everything translated so far
pub struct Session {
    translator: Translator,
    history: History,
}

impl Session {
    pub fn new(translator: Translator, history: History) -> Self {
        Self {
            translator,
            history,
        }
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn translator_mut(&mut self) -> &mut Translator {
        &mut self.translator
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Look `input` up and log the result to history
    pub fn translate(&mut self, direction: Direction, granularity: Granularity, input: &str) -> String {
        let output = match (direction, granularity) {
            (Direction::Forward, Granularity::Word) => {
                self.translator.lookup_forward(input).join(", ")
            }
            (Direction::Reverse, Granularity::Word) => {
                self.translator.lookup_reverse(input).join(", ")
            }
            (Direction::Forward, Granularity::Sentence) => {
                self.translator.lookup_sentence_forward(input)
            }
            (Direction::Reverse, Granularity::Sentence) => {
                self.translator.lookup_sentence_reverse(input)
            }
        };

        tracing::debug!(?direction, ?granularity, "Translated '{}'", input);
        self.history.record_lookup(input, &output);
        output
    }

    /// Replace the active dictionary, keeping the history
    pub fn switch(&mut self, translator: Translator) -> Translator {
        tracing::info!(
            "Switching dictionary to {}",
            translator.store().location().display()
        );
        std::mem::replace(&mut self.translator, translator)
    }

    /// Flush history on normal exit
    pub fn finish(self) -> std::io::Result<History> {
        self.history.flush()?;
        Ok(self.history)
    }
}
