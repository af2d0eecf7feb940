use super::{Category, CategoryLedger, MonthKey};
use crate::storage::WorkbookStore;

/// The four category ledgers for one monthly period.
///
/// Built fresh each run: prior rows loaded from the month's workbook come
/// first, entries collected in the current session are appended after them.
#[derive(Debug, Clone, Default)]
pub struct MonthBook {
    fixed: CategoryLedger,
    card1: CategoryLedger,
    card2: CategoryLedger,
    card3: CategoryLedger,
}

impl MonthBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populates a book from whatever history the store holds for `key`.
    ///
    /// Missing artifacts and unreadable sheets degrade to empty ledgers;
    /// history loss on corruption is accepted, never fatal.
    pub fn load_history(store: &dyn WorkbookStore, key: &MonthKey) -> Self {
        let mut book = Self::new();
        for category in Category::ALL {
            let outcome = store.load_category(key, category);
            book.ledger_mut(category).extend(outcome.into_records());
        }
        book
    }

    pub fn ledger(&self, category: Category) -> &CategoryLedger {
        match category {
            Category::FixedExpenses => &self.fixed,
            Category::Card1 => &self.card1,
            Category::Card2 => &self.card2,
            Category::Card3 => &self.card3,
        }
    }

    pub fn ledger_mut(&mut self, category: Category) -> &mut CategoryLedger {
        match category {
            Category::FixedExpenses => &mut self.fixed,
            Category::Card1 => &mut self.card1,
            Category::Card2 => &mut self.card2,
            Category::Card3 => &mut self.card3,
        }
    }

    /// Sum of all four category totals.
    pub fn expense_total(&self) -> f64 {
        Category::ALL
            .iter()
            .map(|category| self.ledger(*category).total())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::ExpenseRecord;
    use crate::storage::HistoryLoad;

    struct FixedHistoryStore;

    impl WorkbookStore for FixedHistoryStore {
        fn load_category(&self, _key: &MonthKey, category: Category) -> HistoryLoad {
            match category {
                Category::FixedExpenses => HistoryLoad::Loaded(vec![
                    ExpenseRecord::new("r1", 10.0, "01/06/2025"),
                    ExpenseRecord::new("r2", 20.0, "02/06/2025"),
                ]),
                Category::Card1 => HistoryLoad::Corrupt,
                _ => HistoryLoad::NotFound,
            }
        }

        fn save_report(&self, _report: &crate::report::MonthlyReport) -> crate::errors::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn history_precedes_session_entries() {
        let key = MonthKey::new(2025, 6).unwrap();
        let mut book = MonthBook::load_history(&FixedHistoryStore, &key);
        book.ledger_mut(Category::FixedExpenses)
            .push(ExpenseRecord::new("r3", 30.0, "03/06/2025"));

        let labels: Vec<&str> = book
            .ledger(Category::FixedExpenses)
            .records()
            .iter()
            .map(|r| r.label.as_str())
            .collect();
        assert_eq!(labels, vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn failed_loads_degrade_to_empty_ledgers() {
        let key = MonthKey::new(2025, 6).unwrap();
        let book = MonthBook::load_history(&FixedHistoryStore, &key);
        assert!(book.ledger(Category::Card1).is_empty());
        assert!(book.ledger(Category::Card3).is_empty());
        assert_eq!(book.expense_total(), 30.0);
    }
}
