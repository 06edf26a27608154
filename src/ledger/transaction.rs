use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::{resolve_category, Category};
use super::month::MonthKey;

/// A single recorded expense. Amounts carry no sign convention; every
/// transaction represents money spent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            date,
            description: description.into(),
            category_id: None,
        }
    }

    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    /// The registry entry this transaction belongs to, falling back to the
    /// sentinel when the reference is absent or unresolvable.
    pub fn category(&self) -> &'static Category {
        resolve_category(self.category_id.as_deref())
    }

    pub fn month_key(&self) -> MonthKey {
        MonthKey::of(self.date)
    }
}
