use crate::ledger::{MonthBook, MonthKey};
use crate::projection::{self, ProjectionEntry, DEFAULT_HORIZON_MONTHS};
use crate::summary::MonthlyTotals;

/// Everything one run produces for a monthly period, handed to the
/// persistence and rendering collaborators and then dropped.
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub key: MonthKey,
    pub book: MonthBook,
    pub totals: MonthlyTotals,
    pub projection: Vec<ProjectionEntry>,
}

impl MonthlyReport {
    /// Computes totals and the default 12-month projection for `book`.
    pub fn build(key: MonthKey, book: MonthBook, income_total: f64) -> Self {
        let totals = MonthlyTotals::compute(&book, income_total);
        let projection = projection::project(
            totals.income,
            totals.expenses,
            DEFAULT_HORIZON_MONTHS,
            key.start_date(),
        );
        Self {
            key,
            book,
            totals,
            projection,
        }
    }
}
