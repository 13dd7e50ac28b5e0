mod common;

use std::{cell::RefCell, rc::Rc};

use budget_tracker::{
    core::{
        filter, sorter,
        services::{SummaryService, TransactionService},
        CategoryFilter, KindFilter, SortDirection, SortKey,
    },
    domain::{Category, Transaction, TransactionDraft, TransactionKind, MAX_AMOUNT},
    errors::{Field, LedgerError},
    ledger::{Ledger, LedgerEvent},
};
use common::{date, expense, income, mixed_ledger};

fn draft(title: &str, amount: &str, category: &str, kind: &str) -> TransactionDraft {
    TransactionDraft::new()
        .title(title)
        .amount(amount)
        .category(category)
        .kind(kind)
        .date("2024-05-01")
}

#[test]
fn paycheck_is_counted_as_income() {
    let mut ledger = Ledger::new();
    TransactionService::add(&mut ledger, &draft("Paycheck", "2000", "Income", "Income")).unwrap();

    assert_eq!(ledger.all().len(), 1);
    assert_eq!(SummaryService::current_totals(&ledger).total_income, 2000.0);
}

#[test]
fn removing_by_id_keeps_the_other_entry() {
    let mut ledger = Ledger::new();
    let netflix = TransactionService::add(
        &mut ledger,
        &draft("Netflix", "15.99", "Entertainment", "Expense"),
    )
    .unwrap();
    TransactionService::add(&mut ledger, &draft("Salary", "3000", "Income", "Income")).unwrap();

    TransactionService::remove(&mut ledger, netflix).unwrap();

    let remaining = ledger.all();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].transaction.title(), "Salary");
}

#[test]
fn mixed_ledger_totals() {
    let (ledger, _) = mixed_ledger();
    let summary = SummaryService::current_totals(&ledger);

    assert_eq!(summary.total_income, 1500.0);
    assert_eq!(summary.total_expense, 270.0);
    assert_eq!(summary.net_balance, 1230.0);
    assert!(!summary.is_overspending());
    assert_eq!(summary.category_total(Category::Bills), Some(180.0));
    assert_eq!(summary.category_total(Category::Income), None);
}

#[test]
fn expense_without_income_flags_overspending() {
    let mut ledger = Ledger::new();
    ledger.add(expense("Rent", 500.0, Category::Bills)).unwrap();

    let summary = SummaryService::current_totals(&ledger);
    assert_eq!(summary.net_balance, -500.0);
    assert!(summary.is_overspending());
}

#[test]
fn expense_bills_filter_selects_single_entry() {
    let (ledger, ids) = mixed_ledger();
    let visible = filter::apply(
        &ledger.all(),
        KindFilter::Expense,
        CategoryFilter::Only(Category::Bills),
    );

    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, ids[1]);
    assert_eq!(visible[0].transaction.category(), Category::Bills);
}

#[test]
fn added_transaction_is_returned_unchanged() {
    let mut ledger = Ledger::new();
    let before = ledger.len();
    let transaction = expense("Groceries run", 64.25, Category::Groceries);

    let id = ledger.add(transaction.clone()).unwrap();

    assert_eq!(ledger.len(), before + 1);
    let entry = ledger.all().into_iter().find(|entry| entry.id == id).unwrap();
    assert_eq!(entry.transaction, transaction);
}

#[test]
fn income_requires_the_income_category_on_create_and_edit() {
    let mut ledger = Ledger::new();
    let err = TransactionService::add(&mut ledger, &draft("Bonus", "100", "Shopping", "Income"))
        .unwrap_err();
    assert_eq!(err.field(), Some(Field::Category));
    assert!(ledger.is_empty());

    let id = TransactionService::add(&mut ledger, &draft("Bonus", "100", "Income", "Income"))
        .unwrap();
    let err = TransactionService::edit(&mut ledger, id, |draft| {
        draft.category = Some("Gas".into());
    })
    .unwrap_err();
    assert!(matches!(err, LedgerError::Validation { field: Field::Category, .. }));
    assert_eq!(ledger.get(id).unwrap().category(), Category::Income);
}

#[test]
fn summary_ignores_input_order() {
    let (ledger, _) = mixed_ledger();
    let forward = ledger.all();
    let mut reversed = forward.clone();
    reversed.reverse();
    let mut rotated = forward.clone();
    rotated.rotate_left(2);

    let expected = SummaryService::summarize(&forward);
    for permutation in [&reversed, &rotated] {
        let summary = SummaryService::summarize(permutation);
        assert_eq!(summary.total_income, expected.total_income);
        assert_eq!(summary.total_expense, expected.total_expense);
        assert_eq!(summary.net_balance, expected.net_balance);
    }
}

#[test]
fn filtering_twice_matches_filtering_once() {
    let (ledger, _) = mixed_ledger();
    let all = ledger.all();
    let once = filter::apply(&all, KindFilter::Income, CategoryFilter::All);
    let twice = filter::apply(&once, KindFilter::Income, CategoryFilter::All);
    assert_eq!(once, twice);
    assert_eq!(once.len(), 2);
}

#[test]
fn update_replaces_in_place() {
    let (mut ledger, ids) = mixed_ledger();
    let replacement = expense("Water", 45.0, Category::Bills);

    let previous = ledger.update(ids[1], replacement.clone()).unwrap();

    assert_eq!(previous.title(), "Electricity");
    let all = ledger.all();
    assert_eq!(all.len(), 4);
    assert_eq!(all[1].id, ids[1]);
    assert_eq!(all[1].transaction, replacement);
}

#[test]
fn stale_ids_are_reported_without_mutation() {
    let (mut ledger, ids) = mixed_ledger();
    ledger.remove(ids[0]).unwrap();
    let revision = ledger.revision();

    assert_eq!(ledger.remove(ids[0]), Err(LedgerError::NotFound(ids[0])));
    assert_eq!(
        ledger.update(ids[0], income("Late", 1.0)),
        Err(LedgerError::NotFound(ids[0]))
    );
    assert_eq!(ledger.len(), 3);
    assert_eq!(ledger.revision(), revision);
}

#[test]
fn non_numeric_amount_is_a_format_error() {
    let mut ledger = Ledger::new();
    let err =
        TransactionService::add(&mut ledger, &draft("Lunch", "twelve", "Groceries", "Expense"))
            .unwrap_err();
    assert!(matches!(err, LedgerError::Format(_)));
    assert!(ledger.is_empty());
}

#[test]
fn huge_amounts_are_rejected_and_totals_stay_finite() {
    let mut ledger = Ledger::new();
    let err = TransactionService::add(&mut ledger, &draft("Windfall", "1e308", "Income", "Income"))
        .unwrap_err();
    assert_eq!(err.field(), Some(Field::Amount));
    assert!(ledger.is_empty());

    let top = MAX_AMOUNT.to_string();
    let windfall = draft("Windfall", &top, "Income", "Income");
    let mansion = draft("Mansion", &top, "Bills", "Expense");
    for _ in 0..2 {
        TransactionService::add(&mut ledger, &windfall).unwrap();
    }
    for _ in 0..3 {
        TransactionService::add(&mut ledger, &mansion).unwrap();
    }

    let summary = SummaryService::current_totals(&ledger);
    assert!(summary.total_income.is_finite());
    assert!(summary.total_expense.is_finite());
    assert_eq!(summary.net_balance, -MAX_AMOUNT);
    assert!(summary.is_overspending());
}

#[test]
fn sorting_by_amount_descending_is_stable() {
    let mut ledger = Ledger::new();
    let first = ledger.add(expense("A", 20.0, Category::Gas)).unwrap();
    let second = ledger.add(expense("B", 50.0, Category::Gas)).unwrap();
    let third = ledger.add(expense("C", 20.0, Category::Other)).unwrap();

    let sorted = sorter::apply(&ledger.all(), SortKey::Amount, SortDirection::Descending);
    let order: Vec<_> = sorted.iter().map(|entry| entry.id).collect();
    assert_eq!(order, vec![second, first, third]);

    let untouched = sorter::apply(&ledger.all(), SortKey::None, SortDirection::Descending);
    let order: Vec<_> = untouched.iter().map(|entry| entry.id).collect();
    assert_eq!(order, vec![first, second, third]);
}

#[test]
fn sorting_by_date_uses_calendar_order() {
    let mut ledger = Ledger::new();
    let late = ledger
        .add(
            Transaction::new(
                "Late",
                1.0,
                Category::Other,
                TransactionKind::Expense,
                date(2024, 12, 1),
            )
            .unwrap(),
        )
        .unwrap();
    let early = ledger
        .add(
            Transaction::new(
                "Early",
                1.0,
                Category::Other,
                TransactionKind::Expense,
                date(2023, 2, 1),
            )
            .unwrap(),
        )
        .unwrap();

    let sorted = sorter::apply(&ledger.all(), SortKey::Date, SortDirection::Ascending);
    let order: Vec<_> = sorted.iter().map(|entry| entry.id).collect();
    assert_eq!(order, vec![early, late]);
}

#[test]
fn listeners_hear_every_successful_mutation() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut ledger = Ledger::new();
    let sink = Rc::clone(&events);
    ledger.subscribe(move |event| sink.borrow_mut().push(*event));

    let id = ledger.add(income("Salary", 10.0)).unwrap();
    ledger.update(id, income("Salary", 20.0)).unwrap();
    ledger.remove(id).unwrap();

    let recorded = events.borrow();
    assert_eq!(recorded.len(), 3);
    assert!(matches!(recorded[0], LedgerEvent::Added { .. }));
    assert!(matches!(recorded[1], LedgerEvent::Updated { .. }));
    assert!(matches!(recorded[2], LedgerEvent::Removed { .. }));
    assert!(recorded.iter().all(|event| event.id() == id));
}
