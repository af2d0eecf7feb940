//! Scripted prompt source for driving the entry session in tests without a
//! terminal.

use std::collections::VecDeque;

use crate::cli::session::EntryPrompt;
use crate::errors::Result;
use crate::ledger::Category;

/// Replays a fixed sequence of answers in the order the session asks for
/// them, recording any invalid-choice notifications it receives.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    inputs: VecDeque<String>,
    pub rejected_choices: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            rejected_choices: Vec::new(),
        }
    }

    fn next(&mut self) -> Result<String> {
        self.inputs.pop_front().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "scripted prompt ran out of inputs",
            )
            .into()
        })
    }
}

impl EntryPrompt for ScriptedPrompt {
    fn menu_choice(&mut self) -> Result<String> {
        self.next()
    }

    fn label(&mut self, _category: Category) -> Result<String> {
        self.next()
    }

    fn amount(&mut self) -> Result<String> {
        self.next()
    }

    fn date(&mut self) -> Result<String> {
        self.next()
    }

    fn income(&mut self, _which: u8) -> Result<String> {
        self.next()
    }

    fn notify_invalid_choice(&mut self, raw: &str) {
        self.rejected_choices.push(raw.to_string());
    }
}
