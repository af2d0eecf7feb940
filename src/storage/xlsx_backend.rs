use std::io;
use std::path::{Path, PathBuf};

use calamine::{open_workbook, Data, Reader, Xlsx, XlsxError};
use rust_xlsxwriter::{Chart, ChartType, Format, Workbook, Worksheet};
use tracing::warn;

use crate::ledger::{Category, ExpenseRecord, MonthKey};
use crate::report::MonthlyReport;
use crate::summary;

use super::{HistoryLoad, Result, WorkbookStore};

const WORKBOOK_EXTENSION: &str = "xlsx";
const SUMMARY_SHEET: &str = "Resumo";
const PROJECTION_SHEET: &str = "Projecao Financeira";
const AMOUNT_HEADER: &str = "Valor";
const DATE_HEADER: &str = "Data";
const SUMMARY_HEADERS: [&str; 2] = ["Categoria", "Total Gasto"];
const PROJECTION_HEADERS: [&str; 2] = ["Mês", "Saldo Acumulado (R$)"];
const PIE_CHART_TITLE: &str = "Distribuição de Gastos";

/// Spreadsheet persistence: one workbook per calendar month, named
/// `<prefix>_<YYYY_MM>.xlsx` under a root directory.
#[derive(Debug, Clone)]
pub struct XlsxStorage {
    dir: PathBuf,
    prefix: String,
}

impl XlsxStorage {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
        }
    }

    pub fn workbook_path(&self, key: &MonthKey) -> PathBuf {
        self.dir
            .join(format!("{}_{}.{}", self.prefix, key, WORKBOOK_EXTENSION))
    }
}

impl WorkbookStore for XlsxStorage {
    fn load_category(&self, key: &MonthKey, category: Category) -> HistoryLoad {
        let path = self.workbook_path(key);
        if !path.exists() {
            return HistoryLoad::NotFound;
        }

        let mut workbook: Xlsx<_> = match open_workbook(&path) {
            Ok(workbook) => workbook,
            Err(XlsxError::Io(err)) if err.kind() == io::ErrorKind::PermissionDenied => {
                warn!(path = %path.display(), "workbook exists but cannot be read");
                return HistoryLoad::PermissionDenied;
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "discarding unreadable workbook history");
                return HistoryLoad::Corrupt;
            }
        };

        let range = match workbook.worksheet_range(category.name()) {
            Ok(range) => range,
            Err(err) => {
                warn!(sheet = category.name(), %err, "missing or unreadable sheet");
                return HistoryLoad::Corrupt;
            }
        };

        let mut records = Vec::new();
        for row in range.rows().skip(1) {
            if row.iter().all(|cell| matches!(cell, Data::Empty)) {
                continue;
            }
            let label = match row.first() {
                Some(Data::String(text)) => text.clone(),
                Some(Data::Empty) | None => String::new(),
                Some(other) => other.to_string(),
            };
            let amount = match row.get(1) {
                Some(Data::Float(value)) => *value,
                Some(Data::Int(value)) => *value as f64,
                Some(Data::String(text)) => match text.trim().parse::<f64>() {
                    Ok(value) => value,
                    Err(_) => {
                        warn!(sheet = category.name(), "unparseable amount cell");
                        return HistoryLoad::Corrupt;
                    }
                },
                _ => {
                    warn!(sheet = category.name(), "unparseable amount cell");
                    return HistoryLoad::Corrupt;
                }
            };
            // Dates are stored and reloaded as uninterpreted text.
            let date = match row.get(2) {
                Some(Data::Empty) | None => String::new(),
                Some(Data::String(text)) => text.clone(),
                Some(other) => other.to_string(),
            };
            records.push(ExpenseRecord::new(label, amount, date));
        }
        HistoryLoad::Loaded(records)
    }

    fn save_report(&self, report: &MonthlyReport) -> Result<()> {
        let path = self.workbook_path(&report.key);
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        for category in Category::ALL {
            let sheet = workbook.add_worksheet();
            write_category_sheet(sheet, category, report, &header_format)?;
        }

        let summary_rows = summary::category_summary(&report.book);
        let sheet = workbook.add_worksheet();
        sheet.set_name(SUMMARY_SHEET)?;
        sheet.write_string_with_format(0, 0, SUMMARY_HEADERS[0], &header_format)?;
        sheet.write_string_with_format(0, 1, SUMMARY_HEADERS[1], &header_format)?;
        for (index, row) in summary_rows.iter().enumerate() {
            let row_number = index as u32 + 1;
            sheet.write_string(row_number, 0, row.category.name())?;
            sheet.write_number(row_number, 1, row.total)?;
        }

        // The pie chart addresses the summary rows by cell range, which is
        // why the category order must stay fixed.
        let mut chart = Chart::new(ChartType::Pie);
        let last_row = summary_rows.len() as u32;
        chart
            .add_series()
            .set_categories((SUMMARY_SHEET, 1, 0, last_row, 0))
            .set_values((SUMMARY_SHEET, 1, 1, last_row, 1));
        chart.title().set_name(PIE_CHART_TITLE);
        sheet.insert_chart(6, 3, &chart)?;

        let sheet = workbook.add_worksheet();
        sheet.set_name(PROJECTION_SHEET)?;
        sheet.write_string_with_format(0, 0, PROJECTION_HEADERS[0], &header_format)?;
        sheet.write_string_with_format(0, 1, PROJECTION_HEADERS[1], &header_format)?;
        for (index, entry) in report.projection.iter().enumerate() {
            let row_number = index as u32 + 1;
            sheet.write_string(row_number, 0, &entry.month_label)?;
            sheet.write_number(row_number, 1, entry.accumulated_balance)?;
        }

        workbook.save(&path)?;
        Ok(())
    }
}

fn write_category_sheet(
    sheet: &mut Worksheet,
    category: Category,
    report: &MonthlyReport,
    header_format: &Format,
) -> Result<()> {
    sheet.set_name(category.name())?;
    sheet.write_string_with_format(0, 0, category.label_header(), header_format)?;
    sheet.write_string_with_format(0, 1, AMOUNT_HEADER, header_format)?;
    sheet.write_string_with_format(0, 2, DATE_HEADER, header_format)?;
    for (index, record) in report.book.ledger(category).records().iter().enumerate() {
        let row_number = index as u32 + 1;
        sheet.write_string(row_number, 0, &record.label)?;
        sheet.write_number(row_number, 1, record.amount)?;
        sheet.write_string(row_number, 2, &record.date)?;
    }
    Ok(())
}

/// Convenience used by the CLI to name the chart file next to the workbook.
pub fn chart_path(dir: &Path, key: &MonthKey) -> PathBuf {
    dir.join(format!("projecao_{}.html", key))
}
