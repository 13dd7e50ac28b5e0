#![allow(dead_code)]

use budget_tracker::{
    config::ConfigManager,
    domain::{Category, Transaction, TransactionKind},
    ledger::{Ledger, TransactionId},
};
use chrono::NaiveDate;
use tempfile::TempDir;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn income(title: &str, amount: f64) -> Transaction {
    Transaction::new(
        title,
        amount,
        Category::Income,
        TransactionKind::Income,
        date(2024, 1, 1),
    )
    .expect("valid income")
}

pub fn expense(title: &str, amount: f64, category: Category) -> Transaction {
    Transaction::new(
        title,
        amount,
        category,
        TransactionKind::Expense,
        date(2024, 1, 2),
    )
    .expect("valid expense")
}

/// Income 1200, Bills 180, Dining Out 90, Income 300, in that order.
pub fn mixed_ledger() -> (Ledger, Vec<TransactionId>) {
    let mut ledger = Ledger::new();
    let ids = vec![
        ledger.add(income("Salary", 1200.0)).unwrap(),
        ledger.add(expense("Electricity", 180.0, Category::Bills)).unwrap(),
        ledger.add(expense("Dinner", 90.0, Category::DiningOut)).unwrap(),
        ledger.add(income("Freelance", 300.0)).unwrap(),
    ];
    (ledger, ids)
}

/// Config manager rooted in a fresh temporary directory. Keep the returned
/// guard alive for as long as the manager is used.
pub fn temp_config_manager() -> (TempDir, ConfigManager) {
    let temp = TempDir::new().expect("create temp dir");
    let manager =
        ConfigManager::with_base_dir(temp.path().to_path_buf()).expect("create config manager");
    (temp, manager)
}
