use budget_tracker::{
    core::{
        services::SummaryService, CategoryFilter, KindFilter, SortDirection, SortKey, SortOrder,
        TransactionFilter, TransactionView,
    },
    domain::TransactionDraft,
    init,
    ledger::Ledger,
};

#[test]
fn ledger_view_summary_smoke() {
    init();

    let mut ledger = Ledger::new();
    for (title, amount, category, kind, date) in [
        ("Salary", "2500", "Income", "Income", "2024-02-01"),
        ("Groceries", "120.40", "Groceries", "Expense", "2024-02-03"),
        ("Cinema", "24", "Entertainment", "Expense", "2024-02-02"),
    ] {
        let draft = TransactionDraft::new()
            .title(title)
            .amount(amount)
            .category(category)
            .kind(kind)
            .date(date);
        ledger.add(draft.validate().unwrap()).unwrap();
    }

    let view = TransactionView::new(
        TransactionFilter::new(KindFilter::Expense, CategoryFilter::All),
        SortOrder::new(SortKey::Date, SortDirection::Ascending),
    );
    let rows = view.project(&ledger);
    let titles: Vec<_> = rows.iter().map(|entry| entry.transaction.title()).collect();
    assert_eq!(titles, vec!["Cinema", "Groceries"]);

    let summary = SummaryService::summarize(&rows);
    assert_eq!(summary.total_income, 0.0);
    assert_eq!(summary.transaction_count, 2);
    assert!(summary.is_overspending());
    assert!(!SummaryService::current_totals(&ledger).is_overspending());
}
