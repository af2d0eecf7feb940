use serde::{Deserialize, Serialize};

/// A single expense row: what was bought, for how much, and when.
///
/// The date is kept as free text in the dd/mm/yyyy convention and is never
/// parsed or validated; malformed dates surface only in the output workbook.
/// Records have no identity beyond their position in the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    pub label: String,
    pub amount: f64,
    pub date: String,
}

impl ExpenseRecord {
    pub fn new(label: impl Into<String>, amount: f64, date: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            amount,
            date: date.into(),
        }
    }
}

/// The ordered sequence of expense records for one category in one monthly
/// period. Rows loaded from storage come first, session entries follow in
/// entry order; nothing is deduplicated or reordered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryLedger {
    records: Vec<ExpenseRecord>,
}

impl CategoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ExpenseRecord) {
        self.records.push(record);
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = ExpenseRecord>) {
        self.records.extend(records);
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact sum of all amounts; an empty ledger totals zero. Internal sums
    /// keep full precision, two-decimal rounding happens only at display.
    pub fn total(&self) -> f64 {
        self.records.iter().map(|record| record.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ledger_totals_zero() {
        assert_eq!(CategoryLedger::new().total(), 0.0);
    }

    #[test]
    fn total_is_the_exact_sum() {
        let mut ledger = CategoryLedger::new();
        ledger.push(ExpenseRecord::new("Aluguel", 300.0, "01/06/2025"));
        ledger.push(ExpenseRecord::new("Luz", 150.0, "05/06/2025"));
        ledger.push(ExpenseRecord::new("Mercado", 45.5, "07/06/2025"));
        assert_eq!(ledger.total(), 495.5);
    }

    #[test]
    fn extend_appends_after_existing_rows() {
        let mut ledger = CategoryLedger::new();
        ledger.push(ExpenseRecord::new("r1", 1.0, "01/01/2025"));
        ledger.extend(vec![
            ExpenseRecord::new("r2", 2.0, "02/01/2025"),
            ExpenseRecord::new("r3", 3.0, "03/01/2025"),
        ]);
        let labels: Vec<&str> = ledger.records().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["r1", "r2", "r3"]);
    }
}
