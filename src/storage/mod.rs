pub mod xlsx_backend;

use crate::errors::ReportError;
use crate::ledger::{Category, ExpenseRecord, MonthKey};
use crate::report::MonthlyReport;

pub type Result<T> = std::result::Result<T, ReportError>;

/// Outcome of loading one category's history from a monthly workbook.
///
/// `NotFound` is the expected first run of a new month. `Corrupt` covers
/// malformed files, missing sheets, and unparseable rows; it degrades to
/// "no history" exactly like `NotFound`. `PermissionDenied` also degrades,
/// but the backend logs it, since the artifact exists and could not be read.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryLoad {
    Loaded(Vec<ExpenseRecord>),
    NotFound,
    Corrupt,
    PermissionDenied,
}

impl HistoryLoad {
    /// Collapses every non-loaded outcome into an empty sequence.
    pub fn into_records(self) -> Vec<ExpenseRecord> {
        match self {
            HistoryLoad::Loaded(records) => records,
            _ => Vec::new(),
        }
    }
}

/// Abstraction over persistence backends holding the monthly workbooks.
pub trait WorkbookStore {
    /// Loads the persisted rows for one category of the month keyed by
    /// `key`. Never fails: every problem maps to a `HistoryLoad` variant.
    fn load_category(&self, key: &MonthKey, category: Category) -> HistoryLoad;

    /// Writes the category sheets, the summary (with its embedded pie
    /// chart), and the projection sheet for one monthly report.
    fn save_report(&self, report: &MonthlyReport) -> Result<()>;
}

pub use xlsx_backend::XlsxStorage;
