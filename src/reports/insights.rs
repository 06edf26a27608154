use serde::{Deserialize, Serialize};

use crate::currency::format_currency;
use crate::ledger::budget::Budget;
use crate::ledger::month::MonthKey;
use crate::ledger::transaction::Transaction;

use super::budget::{budget_vs_actual, BudgetVsActual};

/// Severity of a spending observation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Warning,
    Info,
    Success,
}

/// A rule-derived, human-readable observation about spending versus budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Insight {
    pub kind: InsightKind,
    pub message: String,
}

/// Derives textual insights for `month` from one budget-versus-actual pass.
///
/// Rules run in a fixed order and each contributes at most one insight:
/// over-budget, near-limit, no-spend, well-under-budget, then the overall
/// status. A rule with an empty matching set emits nothing.
pub fn spending_insights(
    transactions: &[Transaction],
    budgets: &[Budget],
    month: MonthKey,
) -> Vec<Insight> {
    let rows = budget_vs_actual(transactions, budgets, month);
    let mut insights = Vec::new();

    let over_budget = names_where(&rows, |row| row.actual > row.budget && row.budget > 0.0);
    if !over_budget.is_empty() {
        let noun = if over_budget.len() == 1 {
            "category"
        } else {
            "categories"
        };
        insights.push(Insight {
            kind: InsightKind::Warning,
            message: format!(
                "You've exceeded your budget in {} {}: {}.",
                over_budget.len(),
                noun,
                over_budget.join(", ")
            ),
        });
    }

    let near_limit = names_where(&rows, |row| {
        row.percent_used >= 80 && row.percent_used < 100 && row.budget > 0.0
    });
    if !near_limit.is_empty() {
        insights.push(Insight {
            kind: InsightKind::Info,
            message: format!(
                "You're close to your budget limit in: {}.",
                near_limit.join(", ")
            ),
        });
    }

    let untouched = names_where(&rows, |row| row.actual == 0.0 && row.budget > 0.0);
    if !untouched.is_empty() {
        insights.push(Insight {
            kind: InsightKind::Success,
            message: format!("You haven't spent anything in: {}.", untouched.join(", ")),
        });
    }

    let well_under = names_where(&rows, |row| {
        row.percent_used > 0 && row.percent_used < 20 && row.budget > 0.0
    });
    if !well_under.is_empty() {
        insights.push(Insight {
            kind: InsightKind::Success,
            message: format!("You're well under budget in: {}.", well_under.join(", ")),
        });
    }

    let total_budget: f64 = rows.iter().map(|row| row.budget).sum();
    let total_actual: f64 = rows.iter().map(|row| row.actual).sum();
    if total_budget > 0.0 {
        if total_actual > total_budget {
            insights.push(Insight {
                kind: InsightKind::Warning,
                message: format!(
                    "Overall, you've spent {} more than your total budget.",
                    format_currency(total_actual - total_budget)
                ),
            });
        } else {
            let percent = ((total_actual / total_budget) * 100.0).round() as u32;
            insights.push(Insight {
                kind: InsightKind::Success,
                message: format!(
                    "Overall, you've used {}% of your total budget ({} of {}).",
                    percent,
                    format_currency(total_actual),
                    format_currency(total_budget)
                ),
            });
        }
    }

    insights
}

fn names_where(rows: &[BudgetVsActual], matches: impl Fn(&BudgetVsActual) -> bool) -> Vec<String> {
    rows.iter()
        .filter(|row| matches(row))
        .map(|row| row.category_name.clone())
        .collect()
}
