use gastos_core::{
    cli::{self, output, DialoguerPrompt},
    config::ConfigManager,
    errors::Result,
    ledger::{MonthBook, MonthKey},
    render,
    report::MonthlyReport,
    storage::{xlsx_backend, WorkbookStore, XlsxStorage},
};

fn main() {
    gastos_core::init();
    if let Err(err) = run() {
        output::error(err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = ConfigManager::new().load()?;
    let key = MonthKey::current();
    let storage = XlsxStorage::new(&config.output_dir, &config.file_prefix);

    let mut book = MonthBook::load_history(&storage, &key);
    let mut prompt = DialoguerPrompt::new();
    cli::run_entry_loop(&mut book, &mut prompt)?;

    output::section("Receitas mensais");
    let income_total = cli::collect_income(&mut prompt)?;

    let report = MonthlyReport::build(key, book, income_total);
    print_totals(&report);

    storage.save_report(&report)?;
    output::success(format!(
        "Relatório e gráfico salvos em '{}'",
        storage.workbook_path(&report.key).display()
    ));

    let chart_path = xlsx_backend::chart_path(config.output_dir.as_ref(), &report.key);
    render::save_projection_chart(&report.projection, &chart_path)?;
    output::success(format!(
        "Projeção em barras salva em '{}'",
        chart_path.display()
    ));
    Ok(())
}

fn print_totals(report: &MonthlyReport) {
    let totals = &report.totals;
    output::section("Resumo do mês");
    output::info(format!("Total despesas fixas: R$ {:.2}", totals.fixed));
    output::info(format!("Total Cartão 1: R$ {:.2}", totals.card1));
    output::info(format!("Total Cartão 2: R$ {:.2}", totals.card2));
    output::info(format!("Total Cartão 3: R$ {:.2}", totals.card3));
    output::info(format!("Receita familiar total: R$ {:.2}", totals.income));
    output::info(format!("Saldo mensal estimado: R$ {:.2}", totals.balance));
}
