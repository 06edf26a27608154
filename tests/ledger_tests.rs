use chrono::NaiveDate;
use fintrack_core::{
    errors::TrackerError,
    ledger::{Budget, CategoryId, Ledger, MonthKey, Transaction},
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn april() -> MonthKey {
    "2025-04".parse().expect("valid month key")
}

#[test]
fn upsert_updates_the_existing_pair_in_place() {
    let mut ledger = Ledger::new("Budgets");
    let first = ledger.upsert_budget(CategoryId::Food, april(), 200.0);
    let second = ledger.upsert_budget(CategoryId::Food, april(), 250.0);

    assert_eq!(ledger.budgets.len(), 1, "upsert must not duplicate the pair");
    assert_eq!(second.id, first.id, "update keeps the original id");
    assert_eq!(second.amount, 250.0);
    assert_eq!(
        ledger
            .budget_for(CategoryId::Food, april())
            .expect("stored budget")
            .amount,
        250.0
    );
}

#[test]
fn upsert_separates_distinct_pairs() {
    let mut ledger = Ledger::new("Budgets");
    ledger.upsert_budget(CategoryId::Food, april(), 200.0);
    ledger.upsert_budget(CategoryId::Utilities, april(), 150.0);
    ledger.upsert_budget(CategoryId::Food, april().next(), 180.0);

    assert_eq!(ledger.budgets.len(), 3);
    let ids: Vec<&str> = ledger.budgets.iter().map(|b| b.id.as_str()).collect();
    let mut deduped = ids.clone();
    deduped.dedup();
    assert_eq!(ids, deduped, "each record carries its own id");
}

#[test]
fn budget_lookup_picks_the_first_match_deterministically() {
    let mut ledger = Ledger::new("Budgets");
    // Violate the uniqueness invariant on purpose; reads must not care.
    ledger
        .budgets
        .push(Budget::new("first", CategoryId::Food, 200.0, april()));
    ledger
        .budgets
        .push(Budget::new("second", CategoryId::Food, 999.0, april()));

    let found = ledger
        .budget_for(CategoryId::Food, april())
        .expect("a match");
    assert_eq!(found.id, "first");

    let rows = ledger.budget_vs_actual(april());
    assert_eq!(rows[0].budget, 200.0);
}

#[test]
fn edit_replaces_a_transaction_wholesale() {
    let mut ledger = Ledger::new("Edits");
    ledger.add_transaction(
        Transaction::new("t1", 42.50, date(2025, 4, 1), "Groceries").with_category("food"),
    );

    let replacement =
        Transaction::new("ignored", 99.0, date(2025, 4, 2), "Groceries and wine")
            .with_category("shopping");
    ledger.edit_transaction("t1", replacement).expect("edit");

    assert_eq!(ledger.transaction_count(), 1);
    let edited = &ledger.transactions[0];
    assert_eq!(edited.id, "t1", "stored id survives replacement");
    assert_eq!(edited.amount, 99.0);
    assert_eq!(edited.description, "Groceries and wine");
    assert_eq!(edited.category_id.as_deref(), Some("shopping"));
}

#[test]
fn unknown_references_are_rejected() {
    let mut ledger = Ledger::new("Refs");
    let err = ledger
        .edit_transaction("missing", Transaction::new("x", 1.0, date(2025, 4, 1), "x"))
        .expect_err("unknown transaction id");
    assert!(matches!(err, TrackerError::InvalidRef(_)));
    assert!(format!("{err}").contains("missing"));

    assert!(ledger.remove_transaction("missing").is_err());
    assert!(ledger.remove_budget("missing").is_err());
}

#[test]
fn remove_returns_the_dropped_record() {
    let mut ledger = Ledger::new("Removals");
    ledger.add_transaction(Transaction::new("t1", 10.0, date(2025, 4, 1), "Coffee"));
    let budget = ledger.upsert_budget(CategoryId::Food, april(), 200.0);

    let removed = ledger.remove_transaction("t1").expect("remove transaction");
    assert_eq!(removed.amount, 10.0);
    assert_eq!(ledger.transaction_count(), 0);

    let removed = ledger.remove_budget(&budget.id).expect("remove budget");
    assert_eq!(removed.amount, 200.0);
    assert!(ledger.budgets.is_empty());
}

#[test]
fn reads_derive_from_the_current_snapshot() {
    let mut ledger = Ledger::new("Reads");
    ledger.add_transaction(
        Transaction::new("t1", 42.50, date(2025, 4, 1), "Groceries").with_category("food"),
    );
    ledger.add_transaction(
        Transaction::new("t2", 5.00, date(2025, 3, 31), "March snack").with_category("food"),
    );
    ledger.upsert_budget(CategoryId::Food, april(), 200.0);

    assert_eq!(ledger.transactions_in_month(april()).len(), 1);
    let rows = ledger.budget_vs_actual(april());
    assert!((rows[0].actual - 42.50).abs() < f64::EPSILON);

    let recent = ledger.recent_transactions(5);
    assert_eq!(recent[0].id, "t1", "newest first");

    assert!(!ledger.insights(april()).is_empty());
}

#[test]
fn ledger_round_trips_through_json() {
    let mut ledger = Ledger::new("Snapshot");
    ledger.add_transaction(
        Transaction::new("t1", 42.50, date(2025, 4, 1), "Groceries").with_category("food"),
    );
    ledger.upsert_budget(CategoryId::Food, april(), 200.0);

    let encoded = serde_json::to_string(&ledger).expect("serialize ledger");
    let decoded: Ledger = serde_json::from_str(&encoded).expect("deserialize ledger");

    assert_eq!(decoded.id, ledger.id);
    assert_eq!(decoded.transactions, ledger.transactions);
    assert_eq!(decoded.budgets, ledger.budgets);
    assert_eq!(decoded.schema_version, ledger.schema_version);
}
