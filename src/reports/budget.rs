use serde::{Deserialize, Serialize};

use crate::ledger::budget::Budget;
use crate::ledger::category::{CategoryId, CATEGORIES};
use crate::ledger::month::{transactions_in_month, MonthKey};
use crate::ledger::transaction::Transaction;

use super::summary::expenses_by_category;

/// Budget-versus-actual comparison for one category in one month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetVsActual {
    pub category_id: CategoryId,
    pub category_name: String,
    pub color: String,
    pub budget: f64,
    pub actual: f64,
    pub remaining: f64,
    pub overspent: f64,
    /// Display percentage, capped at 100. Overspend stays visible through
    /// `overspent`.
    pub percent_used: u8,
}

/// Joins per-category spend for `month` against that month's budgets.
///
/// Emits exactly one row per registry category, in registry order; categories
/// with no budget and no spend still appear with zeros. Duplicate budgets for
/// a pair resolve to the first match.
pub fn budget_vs_actual(
    transactions: &[Transaction],
    budgets: &[Budget],
    month: MonthKey,
) -> Vec<BudgetVsActual> {
    let monthly = transactions_in_month(transactions, month);
    let actuals = expenses_by_category(&monthly);

    CATEGORIES
        .iter()
        .map(|category| {
            let budget = budgets
                .iter()
                .find(|budget| budget.category_id == category.id && budget.month == month)
                .map(|budget| budget.amount)
                .unwrap_or(0.0);
            let actual = actuals
                .iter()
                .find(|row| row.category_id == category.id)
                .map(|row| row.value)
                .unwrap_or(0.0);
            BudgetVsActual {
                category_id: category.id,
                category_name: category.name.to_owned(),
                color: category.color.to_owned(),
                budget,
                actual,
                remaining: (budget - actual).max(0.0),
                overspent: (actual - budget).max(0.0),
                percent_used: percent_used(actual, budget),
            }
        })
        .collect()
}

fn percent_used(actual: f64, budget: f64) -> u8 {
    if budget > 0.0 {
        ((actual / budget) * 100.0).round().min(100.0) as u8
    } else {
        0
    }
}
