use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::currency::short_month_label;
use crate::ledger::category::{resolve_category, CategoryId};
use crate::ledger::transaction::Transaction;

/// Summed spend for one category, shaped for a category breakdown chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryExpense {
    pub category_id: CategoryId,
    pub name: String,
    pub color: String,
    pub value: f64,
}

/// Summed spend per short month label, shaped for a monthly bar chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyExpense {
    pub month_label: String,
    pub amount: f64,
}

/// Sums transaction amounts per resolved category. One row per distinct
/// category present in the input, in first-encountered order; absent or
/// unresolvable references all land in the fallback bucket.
pub fn expenses_by_category(transactions: &[Transaction]) -> Vec<CategoryExpense> {
    let mut rows: Vec<CategoryExpense> = Vec::new();
    for transaction in transactions {
        let category = resolve_category(transaction.category_id.as_deref());
        match rows.iter_mut().find(|row| row.category_id == category.id) {
            Some(row) => row.value += transaction.amount,
            None => rows.push(CategoryExpense {
                category_id: category.id,
                name: category.name.to_owned(),
                color: category.color.to_owned(),
                value: transaction.amount,
            }),
        }
    }
    rows
}

/// Sums transaction amounts per short month label derived from the
/// transaction date, in first-encountered order.
///
/// Labels carry no year, so months from different years sharing a name merge
/// into one bucket. Kept for contract compatibility with existing chart
/// consumers.
pub fn expenses_by_month(transactions: &[Transaction]) -> Vec<MonthlyExpense> {
    let mut rows: Vec<MonthlyExpense> = Vec::new();
    for transaction in transactions {
        let label = short_month_label(transaction.date.month());
        match rows.iter_mut().find(|row| row.month_label == label) {
            Some(row) => row.amount += transaction.amount,
            None => rows.push(MonthlyExpense {
                month_label: label.to_owned(),
                amount: transaction.amount,
            }),
        }
    }
    rows
}

/// The `limit` most recent transactions, newest first. Ties on date keep
/// their input order.
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}
