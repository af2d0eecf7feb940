//! Entry session: a small state machine that collects expense records into
//! the month book, decoupled from the terminal behind [`EntryPrompt`].

use crate::errors::{ReportError, Result};
use crate::ledger::{Category, ExpenseRecord, MonthBook};

/// Case-insensitive sentinels that end entry for the current category.
const SENTINELS: [&str; 2] = ["sair", "exit"];

/// Collaborator supplying raw user input. Parsing and control flow stay in
/// the session so they can be tested without a terminal.
pub trait EntryPrompt {
    /// One selection from the numbered category menu.
    fn menu_choice(&mut self) -> Result<String>;
    /// Label for a new entry in `category` (or a sentinel).
    fn label(&mut self, category: Category) -> Result<String>;
    /// Raw amount text for the entry just labeled.
    fn amount(&mut self) -> Result<String>;
    /// Free-text purchase date, stored unvalidated.
    fn date(&mut self) -> Result<String>;
    /// Raw text for the `which`-th monthly income figure (1-based).
    fn income(&mut self, which: u8) -> Result<String>;
    /// Reports an invalid menu selection; the session keeps looping.
    fn notify_invalid_choice(&mut self, raw: &str);
}

/// States of the entry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Showing the category menu.
    Prompting,
    /// Collecting records for one category until a sentinel.
    Recording(Category),
    /// Menu option 0 chosen; the loop terminates.
    Exiting,
}

enum MenuChoice {
    Category(Category),
    Exit,
}

fn parse_menu_choice(raw: &str) -> Option<MenuChoice> {
    match raw {
        "1" => Some(MenuChoice::Category(Category::FixedExpenses)),
        "2" => Some(MenuChoice::Category(Category::Card1)),
        "3" => Some(MenuChoice::Category(Category::Card2)),
        "4" => Some(MenuChoice::Category(Category::Card3)),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

fn is_sentinel(label: &str) -> bool {
    let lowered = label.trim().to_lowercase();
    SENTINELS.iter().any(|sentinel| lowered == *sentinel)
}

/// Strict numeric parse of user input; failure is fatal for the whole run,
/// with no retry.
pub fn parse_amount(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| ReportError::InvalidNumber(trimmed.to_string()))
}

/// Runs the menu loop, appending accepted records to `book` immediately
/// (no batching, no rollback), until the exit option is chosen.
pub fn run_entry_loop(book: &mut MonthBook, prompt: &mut dyn EntryPrompt) -> Result<()> {
    let mut state = SessionState::Prompting;
    loop {
        state = match state {
            SessionState::Prompting => {
                let choice = prompt.menu_choice()?;
                let trimmed = choice.trim();
                match parse_menu_choice(trimmed) {
                    Some(MenuChoice::Category(category)) => SessionState::Recording(category),
                    Some(MenuChoice::Exit) => SessionState::Exiting,
                    None => {
                        prompt.notify_invalid_choice(trimmed);
                        SessionState::Prompting
                    }
                }
            }
            SessionState::Recording(category) => {
                let label = prompt.label(category)?;
                if is_sentinel(&label) {
                    SessionState::Prompting
                } else {
                    let amount = parse_amount(&prompt.amount()?)?;
                    let date = prompt.date()?;
                    book.ledger_mut(category)
                        .push(ExpenseRecord::new(label, amount, date));
                    SessionState::Recording(category)
                }
            }
            SessionState::Exiting => return Ok(()),
        };
    }
}

/// Collects the two monthly income figures prompted after the entry loop
/// and returns their sum. Runs unconditionally; parse failures are fatal.
pub fn collect_income(prompt: &mut dyn EntryPrompt) -> Result<f64> {
    let first = parse_amount(&prompt.income(1)?)?;
    let second = parse_amount(&prompt.income(2)?)?;
    Ok(first + second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_matches_case_insensitively() {
        assert!(is_sentinel("sair"));
        assert!(is_sentinel("SAIR"));
        assert!(is_sentinel("  Exit "));
        assert!(!is_sentinel("said"));
    }

    #[test]
    fn parse_amount_accepts_plain_decimals() {
        assert_eq!(parse_amount(" 45.50 ").unwrap(), 45.5);
    }

    #[test]
    fn parse_amount_failure_is_the_fatal_condition() {
        let err = parse_amount("quarenta").unwrap_err();
        assert!(matches!(err, ReportError::InvalidNumber(ref raw) if raw == "quarenta"));
    }
}
