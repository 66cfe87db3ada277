//! Keyboard Input Handler
//!
//! Dispatch order matters: a blocking alert eats every key except its
//! dismissal, the remove confirmation only reacts to y/n/Esc, and only then
//! do the global keys apply.

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc::UnboundedSender;

use crate::model::Model;
use crate::services::StoreRequest;

/// Handle keyboard input
pub fn handle_key(model: &mut Model, store_tx: &UnboundedSender<StoreRequest>, key: KeyEvent) {
    // Blocking alert: dismiss on Enter/Esc, swallow everything else
    if model.ui.alert.is_some() {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => model.ui.dismiss_alert(),
            _ => {}
        }
        return;
    }

    // Remove confirmation prompt
    if let Some((id, _name)) = &model.ui.confirm_remove {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                let id = *id;
                model.ui.confirm_remove = None;
                let _ = store_tx.send(StoreRequest::RemovePlant { id });
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                // User cancelled - no effect on the list
                model.ui.confirm_remove = None;
            }
            _ => {
                // Ignore other keys while the prompt is showing
            }
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => model.ui.should_quit = true,
        KeyCode::Esc => model.ui.should_quit = true,
        KeyCode::Char('d') | KeyCode::Delete => {
            // Ask for confirmation before removing the selected plant
            if let Some(plant) = model.selected_plant() {
                model.ui.confirm_remove = Some((plant.id, plant.name.clone()));
            }
        }
        KeyCode::Up => select_previous(model),
        KeyCode::Down => select_next(model),
        KeyCode::Char('k') if model.ui.vim_mode => select_previous(model),
        KeyCode::Char('j') if model.ui.vim_mode => select_next(model),
        KeyCode::Home => {
            if !model.plants.is_empty() {
                model.ui.selected = Some(0);
            }
        }
        KeyCode::End => {
            if !model.plants.is_empty() {
                model.ui.selected = Some(model.plants.len() - 1);
            }
        }
        _ => {}
    }
}

fn select_previous(model: &mut Model) {
    if model.plants.is_empty() {
        return;
    }
    let selected = model.ui.selected.unwrap_or(0);
    model.ui.selected = Some(selected.saturating_sub(1));
}

fn select_next(model: &mut Model) {
    if model.plants.is_empty() {
        return;
    }
    let selected = model.ui.selected.unwrap_or(0);
    model.ui.selected = Some((selected + 1).min(model.plants.len() - 1));
}
