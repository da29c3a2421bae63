use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use tally_data::{Category, Direction, Transaction};

/// Account balance: starting balance plus income minus expenses.
pub fn balance(starting: i64, transactions: &[Transaction]) -> i64 {
    starting
        + transactions
            .iter()
            .map(|tx| tx.signed_amount())
            .sum::<i64>()
}

pub fn total_income(transactions: &[Transaction]) -> i64 {
    total_for(transactions, Direction::Income)
}

pub fn total_expense(transactions: &[Transaction]) -> i64 {
    total_for(transactions, Direction::Expense)
}

fn total_for(transactions: &[Transaction], direction: Direction) -> i64 {
    transactions
        .iter()
        .filter(|tx| tx.direction == direction)
        .map(|tx| tx.amount)
        .sum()
}

/// Expense total of one category and its share of all expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: Category,
    pub total: i64,
    pub percentage: f64,
}

/// Summarize expenses by category, largest total first.
/// An empty or income-only ledger yields no summaries.
pub fn summarize_by_category(transactions: &[Transaction]) -> Vec<CategorySummary> {
    let mut totals: BTreeMap<Category, i64> = BTreeMap::new();
    for tx in transactions {
        if tx.direction == Direction::Expense {
            *totals.entry(tx.category).or_insert(0) += tx.amount;
        }
    }

    let grand_total: i64 = totals.values().sum();
    if grand_total == 0 {
        return vec![];
    }

    let mut summaries: Vec<CategorySummary> = totals
        .into_iter()
        .map(|(category, total)| CategorySummary {
            category,
            total,
            percentage: total as f64 * 100.0 / grand_total as f64,
        })
        .collect();
    summaries.sort_by(|a, b| b.total.cmp(&a.total));
    summaries
}
