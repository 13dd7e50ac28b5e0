//! Aggregation of ledger totals and the expense category breakdown.

use serde::Serialize;

use crate::domain::{AsTransaction, Category, TransactionKind};
use crate::ledger::Ledger;

/// Summed expense amount for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
    pub count: usize,
}

/// Totals computed over a transaction set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub net_balance: f64,
    /// Expense categories only, in first-seen order.
    pub category_totals: Vec<CategoryTotal>,
    pub transaction_count: usize,
    /// `net_balance < 0`. Surfacing a warning is left to the caller.
    pub overspending: bool,
}

impl LedgerSummary {
    pub fn is_overspending(&self) -> bool {
        self.overspending
    }

    pub fn category_total(&self, category: Category) -> Option<f64> {
        self.category_totals
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.total)
    }

    /// Percentage of total expenses spent in `category`; `0.0` when nothing
    /// was spent.
    pub fn category_share(&self, category: Category) -> f64 {
        match self.category_total(category) {
            Some(total) if self.total_expense > 0.0 => total / self.total_expense * 100.0,
            _ => 0.0,
        }
    }
}

/// Aggregates ledger data for the summary screen and the spending chart.
pub struct SummaryService;

impl SummaryService {
    /// Summarizes any sequence of transactions. Amounts are added in input
    /// order, so a fixed input always yields the same figures.
    pub fn summarize<I>(items: I) -> LedgerSummary
    where
        I: IntoIterator,
        I::Item: AsTransaction,
    {
        let mut total_income = 0.0;
        let mut total_expense = 0.0;
        let mut transaction_count = 0;
        let mut category_totals: Vec<CategoryTotal> = Vec::new();

        for item in items {
            let transaction = item.transaction();
            transaction_count += 1;
            match transaction.kind() {
                TransactionKind::Income => total_income += transaction.amount(),
                TransactionKind::Expense => {
                    total_expense += transaction.amount();
                    match category_totals
                        .iter_mut()
                        .find(|entry| entry.category == transaction.category())
                    {
                        Some(entry) => {
                            entry.total += transaction.amount();
                            entry.count += 1;
                        }
                        None => category_totals.push(CategoryTotal {
                            category: transaction.category(),
                            total: transaction.amount(),
                            count: 1,
                        }),
                    }
                }
            }
        }

        let net_balance = total_income - total_expense;
        LedgerSummary {
            total_income,
            total_expense,
            net_balance,
            category_totals,
            transaction_count,
            overspending: net_balance < 0.0,
        }
    }

    /// Summarizes the whole ledger, ignoring any table filter.
    pub fn current_totals(ledger: &Ledger) -> LedgerSummary {
        Self::summarize(ledger.transactions())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::Transaction;

    fn txn(amount: f64, category: Category) -> Transaction {
        Transaction::new(
            category.label(),
            amount,
            category,
            category.kind(),
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn empty_input_is_all_zero() {
        let summary = SummaryService::summarize(Vec::<Transaction>::new());
        assert_eq!(summary.total_income, 0.0);
        assert_eq!(summary.total_expense, 0.0);
        assert_eq!(summary.net_balance, 0.0);
        assert!(summary.category_totals.is_empty());
        assert!(!summary.is_overspending());
    }

    #[test]
    fn income_is_excluded_from_category_breakdown() {
        let items = vec![
            txn(1000.0, Category::Income),
            txn(40.0, Category::Groceries),
            txn(25.0, Category::Gas),
            txn(10.0, Category::Groceries),
        ];
        let summary = SummaryService::summarize(&items);
        let categories: Vec<_> = summary
            .category_totals
            .iter()
            .map(|entry| entry.category)
            .collect();
        assert_eq!(categories, vec![Category::Groceries, Category::Gas]);
        assert_eq!(summary.category_total(Category::Groceries), Some(50.0));
        assert_eq!(summary.category_total(Category::Income), None);
        assert_eq!(summary.category_totals[0].count, 2);
    }

    #[test]
    fn shares_are_percentages_of_expenses() {
        let items = vec![txn(75.0, Category::Bills), txn(25.0, Category::Other)];
        let summary = SummaryService::summarize(&items);
        assert_eq!(summary.category_share(Category::Bills), 75.0);
        assert_eq!(summary.category_share(Category::Other), 25.0);
        assert_eq!(summary.category_share(Category::Gas), 0.0);
    }

    #[test]
    fn overspending_flag_follows_net_balance() {
        let summary = SummaryService::summarize(&[txn(500.0, Category::Shopping)]);
        assert_eq!(summary.net_balance, -500.0);
        assert!(summary.is_overspending());

        let summary = SummaryService::summarize(&[
            txn(500.0, Category::Shopping),
            txn(500.0, Category::Income),
        ]);
        assert!(!summary.is_overspending());
    }

    #[test]
    fn summary_serializes_category_labels() {
        let summary = SummaryService::summarize(&[txn(12.0, Category::DiningOut)]);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"Dining Out\""));
        assert!(json.contains("\"overspending\":true"));
    }
}
