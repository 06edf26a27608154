//! Pure derivation layer: month-scoped summaries, chart-ready series, and
//! rule-based insights over flat transaction/budget collections.
//!
//! Every function here recomputes from its inputs on each call and holds no
//! state between calls.

pub mod budget;
pub mod insights;
pub mod summary;

pub use budget::{budget_vs_actual, BudgetVsActual};
pub use insights::{spending_insights, Insight, InsightKind};
pub use summary::{
    expenses_by_category, expenses_by_month, recent_transactions, CategoryExpense, MonthlyExpense,
};
