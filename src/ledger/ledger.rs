use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::TrackerError;
use crate::reports::{
    self, BudgetVsActual, CategoryExpense, Insight, MonthlyExpense,
};

use super::{
    budget::Budget,
    category::CategoryId,
    month::{transactions_in_month, MonthKey},
    transaction::Transaction,
};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// One user's complete snapshot of transactions and budgets, with the write
/// paths the persistence collaborator exposes. Reading never mutates; every
/// report call derives fresh values from the current record lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Ledger::schema_version_default")]
    pub schema_version: u8,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            transactions: Vec::new(),
            budgets: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> String {
        let id = transaction.id.clone();
        self.transactions.push(transaction);
        self.touch();
        id
    }

    /// Replaces the transaction `id` wholesale, keeping its stored id.
    pub fn edit_transaction(
        &mut self,
        id: &str,
        mut replacement: Transaction,
    ) -> Result<(), TrackerError> {
        let slot = self
            .transactions
            .iter_mut()
            .find(|transaction| transaction.id == id)
            .ok_or_else(|| TrackerError::InvalidRef(format!("transaction {id}")))?;
        replacement.id = slot.id.clone();
        *slot = replacement;
        self.touch();
        Ok(())
    }

    pub fn remove_transaction(&mut self, id: &str) -> Result<Transaction, TrackerError> {
        let index = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
            .ok_or_else(|| TrackerError::InvalidRef(format!("transaction {id}")))?;
        let removed = self.transactions.remove(index);
        self.touch();
        Ok(removed)
    }

    /// Writes the budget for `(category_id, month)`. An existing record is
    /// updated in place and keeps its id; otherwise a new record is minted.
    pub fn upsert_budget(
        &mut self,
        category_id: CategoryId,
        month: MonthKey,
        amount: f64,
    ) -> Budget {
        let updated = match self
            .budgets
            .iter_mut()
            .find(|budget| budget.category_id == category_id && budget.month == month)
        {
            Some(existing) => {
                existing.amount = amount;
                existing.clone()
            }
            None => {
                let budget = Budget::new(
                    Uuid::new_v4().to_string(),
                    category_id,
                    amount,
                    month,
                );
                self.budgets.push(budget.clone());
                budget
            }
        };
        self.touch();
        updated
    }

    pub fn remove_budget(&mut self, id: &str) -> Result<Budget, TrackerError> {
        let index = self
            .budgets
            .iter()
            .position(|budget| budget.id == id)
            .ok_or_else(|| TrackerError::InvalidRef(format!("budget {id}")))?;
        let removed = self.budgets.remove(index);
        self.touch();
        Ok(removed)
    }

    /// First budget matching the pair. Deterministic even if the uniqueness
    /// invariant was violated upstream.
    pub fn budget_for(&self, category_id: CategoryId, month: MonthKey) -> Option<&Budget> {
        self.budgets
            .iter()
            .find(|budget| budget.category_id == category_id && budget.month == month)
    }

    pub fn transactions_in_month(&self, month: MonthKey) -> Vec<Transaction> {
        transactions_in_month(&self.transactions, month)
    }

    pub fn expenses_by_category(&self) -> Vec<CategoryExpense> {
        reports::expenses_by_category(&self.transactions)
    }

    pub fn expenses_by_month(&self) -> Vec<MonthlyExpense> {
        reports::expenses_by_month(&self.transactions)
    }

    pub fn budget_vs_actual(&self, month: MonthKey) -> Vec<BudgetVsActual> {
        reports::budget_vs_actual(&self.transactions, &self.budgets, month)
    }

    pub fn insights(&self, month: MonthKey) -> Vec<Insight> {
        reports::spending_insights(&self.transactions, &self.budgets, month)
    }

    pub fn recent_transactions(&self, limit: usize) -> Vec<Transaction> {
        reports::recent_transactions(&self.transactions, limit)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
