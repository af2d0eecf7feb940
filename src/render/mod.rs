//! Standalone bar chart of the 12-month projection.

use std::path::Path;

use charming::{
    component::{Axis, Grid, Title},
    element::{AxisLabel, AxisType, Label, LabelPosition},
    series::Bar,
    Chart, HtmlRenderer,
};

use crate::errors::{ReportError, Result};
use crate::projection::ProjectionEntry;

const CHART_TITLE: &str = "Projeção Financeira Familiar para os Próximos 12 Meses";
const SERIES_NAME: &str = "Saldo Acumulado (R$)";
const CHART_WIDTH: u64 = 1200;
const CHART_HEIGHT: u64 = 700;

/// Builds the projection bar chart: one bar per month, currency value
/// labeled above each bar.
pub fn projection_chart(entries: &[ProjectionEntry]) -> Chart {
    let labels: Vec<String> = entries.iter().map(|e| e.month_label.clone()).collect();
    let values: Vec<f64> = entries.iter().map(|e| e.accumulated_balance).collect();

    Chart::new()
        .title(Title::new().text(CHART_TITLE))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(labels)
                .axis_label(AxisLabel::new().rotate(45.0)),
        )
        .y_axis(Axis::new().type_(AxisType::Value).name(SERIES_NAME))
        .series(
            Bar::new().name(SERIES_NAME).data(values).label(
                Label::new()
                    .show(true)
                    .position(LabelPosition::Top)
                    .formatter("R$ {c}"),
            ),
        )
}

/// Renders the projection chart to a standalone HTML file.
pub fn save_projection_chart(entries: &[ProjectionEntry], path: &Path) -> Result<()> {
    let chart = projection_chart(entries);
    let mut renderer = HtmlRenderer::new(CHART_TITLE, CHART_WIDTH, CHART_HEIGHT);
    renderer
        .save(&chart, path)
        .map_err(|err| ReportError::Render(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    use crate::projection::{project, DEFAULT_HORIZON_MONTHS};

    #[test]
    fn chart_html_is_written_for_a_full_projection() {
        let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let entries = project(5000.0, 3200.0, DEFAULT_HORIZON_MONTHS, start);
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("projecao_2025_06.html");

        save_projection_chart(&entries, &path).expect("render chart");
        assert!(path.exists());
    }
}
