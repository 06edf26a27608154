//! Ledger domain models, the category registry, and month filtering.

pub mod budget;
pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod month;
pub mod transaction;

pub use budget::Budget;
pub use category::{
    category_by_id, lookup_category, resolve_category, Category, CategoryId, CATEGORIES,
    FALLBACK_CATEGORY,
};
pub use ledger::Ledger;
pub use month::{transactions_in_month, MonthKey};
pub use transaction::Transaction;
