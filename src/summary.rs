//! Aggregation over the month book: per-category totals and the combined
//! monthly figures.

use crate::ledger::{Category, MonthBook};

/// One summary row: a category and what it cost this month.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
}

/// Exactly four rows, in the fixed category order. The order is load-bearing:
/// the summary sheet's pie chart references these rows by cell position.
pub fn category_summary(book: &MonthBook) -> Vec<CategoryTotal> {
    Category::ALL
        .iter()
        .map(|category| CategoryTotal {
            category: *category,
            total: book.ledger(*category).total(),
        })
        .collect()
}

/// Scalar monthly figures, recomputed from scratch each run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyTotals {
    pub fixed: f64,
    pub card1: f64,
    pub card2: f64,
    pub card3: f64,
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

impl MonthlyTotals {
    pub fn compute(book: &MonthBook, income_total: f64) -> Self {
        let expenses = book.expense_total();
        Self {
            fixed: book.ledger(Category::FixedExpenses).total(),
            card1: book.ledger(Category::Card1).total(),
            card2: book.ledger(Category::Card2).total(),
            card3: book.ledger(Category::Card3).total(),
            income: income_total,
            expenses,
            balance: income_total - expenses,
        }
    }
}
