mod common;

use common::{clock, month, STAMP};
use pocket_ledger::{
    core::{
        confirm::{PresetConfirmer, ScriptedConfirmer},
        services::{
            BudgetChange, BudgetService, Outcome, ServiceError, TransactionDraft,
            TransactionService,
        },
        LedgerState,
    },
    storage::PersistentStore,
};

fn add(state: &mut LedgerState, store: &PersistentStore, description: &str, amount: f64) -> usize {
    let draft = TransactionDraft::new(description, amount, Vec::new());
    TransactionService::add(state, store, draft, &clock()).expect("add entry")
}

#[test]
fn coffee_entry_is_recorded_with_timestamp_and_total() {
    let store = PersistentStore::in_memory();
    let mut state = LedgerState::new(month(2));
    let draft = TransactionDraft::parse("Coffee", "-4.5", vec!["Card".into()]).unwrap();

    let index = TransactionService::add(&mut state, &store, draft, &clock()).unwrap();

    assert_eq!(index, 0);
    let entry = &state.selected_transactions()[0];
    assert_eq!(entry.description, "Coffee");
    assert_eq!(entry.amount, -4.5);
    assert_eq!(entry.timestamp, STAMP);
    assert_eq!(entry.tags, vec!["Card".to_string()]);
    assert_eq!(TransactionService::total_for_selected_month(&state), -4.5);
    assert!(store.load_transactions().unwrap().contains_key(&month(2)));
}

#[test]
fn declined_budget_overwrite_keeps_previous_value() {
    let store = PersistentStore::in_memory();
    let mut state = LedgerState::new(month(5));

    let first = BudgetService::set(&mut state, &store, "100", &mut PresetConfirmer::decline());
    assert_eq!(
        first.unwrap(),
        Outcome::Applied(BudgetChange {
            previous: None,
            current: 100.0
        })
    );

    let mut confirmer = ScriptedConfirmer::new([false]);
    let second = BudgetService::set(&mut state, &store, "150", &mut confirmer).unwrap();
    assert_eq!(second, Outcome::Declined);
    assert_eq!(confirmer.prompts.len(), 1);
    assert_eq!(state.selected_budget(), Some(100.0));
    assert_eq!(store.load_budgets().unwrap().get(&month(5)), Some(&100.0));
}

#[test]
fn same_budget_value_needs_no_confirmation() {
    let store = PersistentStore::in_memory();
    let mut state = LedgerState::new(month(1));
    BudgetService::set(&mut state, &store, "75", &mut PresetConfirmer::accept()).unwrap();

    let mut confirmer = ScriptedConfirmer::default();
    let outcome = BudgetService::set(&mut state, &store, "75.0", &mut confirmer).unwrap();
    assert!(outcome.is_applied());
    assert!(!confirmer.was_prompted());
}

#[test]
fn income_and_expense_net_out() {
    let store = PersistentStore::in_memory();
    let mut state = LedgerState::new(month(8));
    add(&mut state, &store, "Freelance", 50.0);
    add(&mut state, &store, "Groceries", -20.0);
    assert_eq!(state.selected_total(), 30.0);
}

#[test]
fn removal_keeps_relative_order_of_the_rest() {
    let store = PersistentStore::in_memory();
    let mut state = LedgerState::new(month(0));
    for (name, amount) in [("a", 1.0), ("b", 2.0), ("c", 3.0), ("d", 4.0)] {
        add(&mut state, &store, name, amount);
    }

    let removed =
        TransactionService::remove(&mut state, &store, 1, &mut PresetConfirmer::accept()).unwrap();
    assert!(matches!(removed, Outcome::Applied(ref txn) if txn.description == "b"));

    let names: Vec<&str> = state
        .selected_transactions()
        .iter()
        .map(|txn| txn.description.as_str())
        .collect();
    assert_eq!(names, vec!["a", "c", "d"]);
}

#[test]
fn out_of_range_removal_fails_before_prompting() {
    let store = PersistentStore::in_memory();
    let mut state = LedgerState::new(month(0));
    add(&mut state, &store, "only", 9.0);

    let mut confirmer = ScriptedConfirmer::new([true]);
    let err = TransactionService::remove(&mut state, &store, 1, &mut confirmer).unwrap_err();
    assert!(matches!(err, ServiceError::IndexOutOfRange { index: 1, len: 1 }));
    assert!(!confirmer.was_prompted());
    assert_eq!(state.selected_transactions().len(), 1);
}

#[test]
fn months_are_isolated() {
    let store = PersistentStore::in_memory();
    let mut state = LedgerState::new(month(3));
    add(&mut state, &store, "April rent", -900.0);
    state.set_selected_month(month(4));
    assert!(state.selected_transactions().is_empty());
    assert_eq!(state.selected_total(), 0.0);
    assert_eq!(state.selected_budget(), None);
}

/// Deterministic mix of adds and removes compared against a plain Vec model.
#[test]
fn totals_track_any_add_remove_sequence() {
    let store = PersistentStore::in_memory();
    let mut state = LedgerState::new(month(10));
    let mut model: Vec<(String, f64)> = Vec::new();
    let mut seed: u64 = 0x5eed;

    for step in 0..200 {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let roll = (seed >> 33) as usize;
        if roll % 3 == 0 && !model.is_empty() {
            let index = roll % model.len();
            TransactionService::remove(&mut state, &store, index, &mut PresetConfirmer::accept())
                .unwrap();
            model.remove(index);
        } else {
            let amount = ((roll % 20_001) as f64 - 10_000.0) / 100.0;
            let name = format!("entry {step}");
            add(&mut state, &store, &name, amount);
            model.push((name, amount));
        }

        let expected: f64 = model.iter().map(|(_, amount)| amount).sum();
        assert_eq!(state.selected_total(), expected);
        let names: Vec<&str> = state
            .selected_transactions()
            .iter()
            .map(|txn| txn.description.as_str())
            .collect();
        let model_names: Vec<&str> = model.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, model_names);
    }
}
