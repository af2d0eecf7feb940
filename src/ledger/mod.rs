//! Expense ledger domain models: records, categories, the per-month book,
//! and the year-month key that scopes one workbook.

pub mod book;
pub mod category;
pub mod period;
pub mod record;

pub use book::MonthBook;
pub use category::Category;
pub use period::MonthKey;
pub use record::{CategoryLedger, ExpenseRecord};
