//! Forward-looking balance trajectory assuming unchanging income and
//! expenses.

use chrono::{Months, NaiveDate};

/// Number of months projected by default.
pub const DEFAULT_HORIZON_MONTHS: usize = 12;

/// One projected month: label like `Jun/2025` and the balance accumulated
/// up to and including that month.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionEntry {
    pub month_label: String,
    pub accumulated_balance: f64,
}

/// Projects the accumulated balance over `horizon_months` starting at
/// `start_month`.
///
/// The monthly net (income minus expenses) is computed once and repeated
/// flat across the whole horizon; entry `i` accumulates `net × (i + 1)`.
/// The flat net is a deliberate simplification, not a bug: no seasonal
/// variation, no compounding.
pub fn project(
    income_total: f64,
    expense_total: f64,
    horizon_months: usize,
    start_month: NaiveDate,
) -> Vec<ProjectionEntry> {
    let monthly_net = income_total - expense_total;
    (0..horizon_months)
        .map(|i| {
            let month = start_month + Months::new(i as u32);
            ProjectionEntry {
                month_label: month.format("%b/%Y").to_string(),
                accumulated_balance: monthly_net * (i + 1) as f64,
            }
        })
        .collect()
}
