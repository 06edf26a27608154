use serde::{Deserialize, Serialize};

use super::category::{category_by_id, Category, CategoryId};
use super::month::MonthKey;

/// A spending cap for one category in one month. At most one budget is
/// meaningful per `(category_id, month)` pair; writes go through
/// [`Ledger::upsert_budget`](super::Ledger::upsert_budget) to keep it that way.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: String,
    pub category_id: CategoryId,
    pub amount: f64,
    pub month: MonthKey,
}

impl Budget {
    pub fn new(id: impl Into<String>, category_id: CategoryId, amount: f64, month: MonthKey) -> Self {
        Self {
            id: id.into(),
            category_id,
            amount,
            month,
        }
    }

    pub fn category(&self) -> &'static Category {
        category_by_id(self.category_id)
    }
}
