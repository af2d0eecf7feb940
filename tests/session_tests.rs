use gastos_core::{
    cli::{collect_income, run_entry_loop, ScriptedPrompt},
    errors::ReportError,
    ledger::{Category, ExpenseRecord, MonthBook},
};

#[test]
fn card_purchase_lands_in_the_right_ledger() {
    let mut book = MonthBook::new();
    let mut prompt = ScriptedPrompt::new(["2", "Mercado", "45.50", "05/06/2025", "sair", "0"]);

    run_entry_loop(&mut book, &mut prompt).expect("entry loop");

    assert_eq!(
        book.ledger(Category::Card1).records(),
        &[ExpenseRecord::new("Mercado", 45.5, "05/06/2025")]
    );
    for category in [Category::FixedExpenses, Category::Card2, Category::Card3] {
        assert!(book.ledger(category).is_empty());
    }
}

#[test]
fn recording_repeats_until_the_sentinel() {
    let mut book = MonthBook::new();
    let mut prompt = ScriptedPrompt::new([
        "1",
        "Aluguel",
        "1200",
        "01/06/2025",
        "Luz",
        "180.75",
        "10/06/2025",
        "SAIR",
        "0",
    ]);

    run_entry_loop(&mut book, &mut prompt).expect("entry loop");

    let fixed = book.ledger(Category::FixedExpenses);
    assert_eq!(fixed.len(), 2);
    assert_eq!(fixed.total(), 1380.75);
}

#[test]
fn invalid_menu_choice_is_reported_and_the_loop_continues() {
    let mut book = MonthBook::new();
    let mut prompt = ScriptedPrompt::new(["9", "banana", "0"]);

    run_entry_loop(&mut book, &mut prompt).expect("entry loop");

    assert_eq!(prompt.rejected_choices, vec!["9", "banana"]);
    assert_eq!(book.expense_total(), 0.0);
}

#[test]
fn sentinel_alone_adds_no_record() {
    let mut book = MonthBook::new();
    let mut prompt = ScriptedPrompt::new(["3", "exit", "0"]);

    run_entry_loop(&mut book, &mut prompt).expect("entry loop");
    assert!(book.ledger(Category::Card2).is_empty());
}

#[test]
fn unparseable_amount_aborts_the_run() {
    let mut book = MonthBook::new();
    let mut prompt = ScriptedPrompt::new(["1", "Luz", "cento e vinte"]);

    let err = run_entry_loop(&mut book, &mut prompt).unwrap_err();
    assert!(matches!(err, ReportError::InvalidNumber(ref raw) if raw == "cento e vinte"));
}

#[test]
fn session_entries_append_after_loaded_history() {
    let mut book = MonthBook::new();
    book.ledger_mut(Category::Card1)
        .extend(vec![
            ExpenseRecord::new("r1", 1.0, "01/06/2025"),
            ExpenseRecord::new("r2", 2.0, "02/06/2025"),
        ]);

    let mut prompt = ScriptedPrompt::new(["2", "r3", "3", "03/06/2025", "sair", "0"]);
    run_entry_loop(&mut book, &mut prompt).expect("entry loop");

    let labels: Vec<&str> = book
        .ledger(Category::Card1)
        .records()
        .iter()
        .map(|r| r.label.as_str())
        .collect();
    assert_eq!(labels, vec!["r1", "r2", "r3"]);
}

#[test]
fn income_prompts_sum_both_figures() {
    let mut prompt = ScriptedPrompt::new(["5000", "1200.50"]);
    assert_eq!(collect_income(&mut prompt).expect("income"), 6200.5);
}

#[test]
fn invalid_income_is_fatal_too() {
    let mut prompt = ScriptedPrompt::new(["5000", "muito"]);
    let err = collect_income(&mut prompt).unwrap_err();
    assert!(matches!(err, ReportError::InvalidNumber(_)));
}
