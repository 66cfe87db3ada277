//! Tests for the removal flow
//!
//! Removal goes: 'd' opens the confirmation, 'y' sends the remove request,
//! the worker's result either filters the local list (success) or leaves it
//! untouched behind an alert (failure). Cancellation never touches the list.

use chrono::{Duration, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use plantui::handlers::{handle_key, handle_store_response};
use plantui::logic::reminder::Locale;
use plantui::model::Model;
use plantui::services::{StoreRequest, StoreResponse};
use plantui::storage::Plant;
use tokio::sync::mpsc;

fn plant(id: u64, name: &str, in_secs: i64) -> Plant {
    Plant {
        id,
        name: name.to_string(),
        about: String::new(),
        water_tips: String::new(),
        notification: Utc::now() + Duration::seconds(in_secs),
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// A model in the ready state with the given plants loaded
fn loaded_model(plants: Vec<Plant>) -> Model {
    let mut model = Model::new(false);
    handle_store_response(
        &mut model,
        Locale::En,
        StoreResponse::ListResult { plants: Ok(plants) },
    );
    assert!(!model.plants.loading);
    model
}

#[test]
fn test_confirmed_successful_removal() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut model = loaded_model(vec![
        plant(1, "Fern", 3600),
        plant(2, "Cactus", 7200),
        plant(3, "Aloe", 10800),
    ]);

    // Select Cactus and ask to remove it
    model.ui.selected = Some(1);
    handle_key(&mut model, &tx, key(KeyCode::Char('d')));
    assert_eq!(model.ui.confirm_remove, Some((2, "Cactus".to_string())));

    handle_key(&mut model, &tx, key(KeyCode::Char('y')));
    let request = rx.try_recv().expect("confirm should queue a remove");
    assert!(matches!(request, StoreRequest::RemovePlant { id: 2 }));

    // Worker reports success
    handle_store_response(
        &mut model,
        Locale::En,
        StoreResponse::RemoveResult { id: 2, result: Ok(()) },
    );

    assert_eq!(model.plants.len(), 2);
    assert!(!model.plants.plants.iter().any(|p| p.id == 2));
    // Order of the others preserved
    assert_eq!(model.plants.plants[0].id, 1);
    assert_eq!(model.plants.plants[1].id, 3);
    // Toast confirms, no alert
    assert!(model.ui.toast_message.is_some());
    assert_eq!(model.ui.alerts_shown, 0);
}

#[test]
fn test_removal_recomputes_reminder() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut model = loaded_model(vec![plant(1, "Fern", 3600), plant(2, "Cactus", 7200)]);

    let before = model.plants.next_watering.clone().unwrap();
    assert!(before.contains("Fern"));

    // Remove Fern, the soonest-due plant
    handle_key(&mut model, &tx, key(KeyCode::Char('d')));
    handle_key(&mut model, &tx, key(KeyCode::Char('y')));
    let _ = rx.try_recv().unwrap();
    handle_store_response(
        &mut model,
        Locale::En,
        StoreResponse::RemoveResult { id: 1, result: Ok(()) },
    );

    // Banner now names the new soonest-due plant
    let after = model.plants.next_watering.clone().unwrap();
    assert!(after.contains("Cactus"), "got: {}", after);
}

#[test]
fn test_removing_last_plant_clears_reminder() {
    let mut model = loaded_model(vec![plant(1, "Fern", 3600)]);

    handle_store_response(
        &mut model,
        Locale::En,
        StoreResponse::RemoveResult { id: 1, result: Ok(()) },
    );

    assert!(model.plants.is_empty());
    assert!(model.plants.next_watering.is_none());
    assert!(model.ui.selected.is_none());
}

#[test]
fn test_cancelled_removal_leaves_list_identical() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut model = loaded_model(vec![plant(1, "Fern", 3600), plant(2, "Cactus", 7200)]);
    let snapshot = model.plants.plants.clone();

    handle_key(&mut model, &tx, key(KeyCode::Char('d')));
    handle_key(&mut model, &tx, key(KeyCode::Char('n')));

    assert_eq!(model.plants.plants, snapshot);
    assert!(model.ui.confirm_remove.is_none());
    assert!(rx.try_recv().is_err(), "cancel must not queue a request");
}

#[test]
fn test_failed_removal_leaves_list_identical_and_alerts() {
    let mut model = loaded_model(vec![plant(1, "Fern", 3600), plant(2, "Cactus", 7200)]);
    let snapshot = model.plants.plants.clone();

    handle_store_response(
        &mut model,
        Locale::En,
        StoreResponse::RemoveResult {
            id: 1,
            result: Err(anyhow::anyhow!("disk full")),
        },
    );

    assert_eq!(model.plants.plants, snapshot);
    assert_eq!(model.ui.alerts_shown, 1);
    let alert = model.ui.alert.as_deref().unwrap();
    assert!(alert.contains("Could not remove"), "got: {}", alert);
    assert!(model.ui.toast_message.is_none());
}

#[test]
fn test_selection_clamped_after_removing_last_card() {
    let mut model = loaded_model(vec![plant(1, "Fern", 3600), plant(2, "Cactus", 7200)]);
    model.ui.selected = Some(1);

    handle_store_response(
        &mut model,
        Locale::En,
        StoreResponse::RemoveResult { id: 2, result: Ok(()) },
    );

    // Highlight moves to the new last card instead of falling off the end
    assert_eq!(model.ui.selected, Some(0));
}

#[test]
fn test_fern_then_cactus_scenario() {
    // stored = [{id:1, Fern, now+3600}, {id:2, Cactus, now+7200}]
    let mut model = loaded_model(vec![plant(1, "Fern", 3600), plant(2, "Cactus", 7200)]);

    let reminder = model.plants.next_watering.as_deref().unwrap();
    assert!(reminder.contains("Fern") && reminder.contains("1 hour"), "got: {}", reminder);

    // Removing id:1 with confirm+success leaves [{id:2, ...}]
    handle_store_response(
        &mut model,
        Locale::En,
        StoreResponse::RemoveResult { id: 1, result: Ok(()) },
    );

    assert_eq!(model.plants.len(), 1);
    assert_eq!(model.plants.plants[0].id, 2);
    assert_eq!(model.plants.plants[0].name, "Cactus");
}
