//! Store Response Handler
//!
//! Applies results from the background store worker to the model. Late
//! deliveries are dropped: a `ListResult` is only applied while the initial
//! load is still pending, and nothing is applied once the screen has quit.

use chrono::Utc;

use crate::logic::{plants, reminder};
use crate::model::Model;
use crate::services::StoreResponse;

/// Handle a store worker response
pub fn handle_store_response(
    model: &mut Model,
    locale: reminder::Locale,
    response: StoreResponse,
) {
    // Liveness guard: the screen is gone, state must not change
    if model.ui.should_quit {
        return;
    }

    match response {
        StoreResponse::ListResult { plants: result } => {
            // Only one load happens per screen; a result with no load
            // pending is a stale duplicate
            if !model.plants.loading {
                return;
            }

            match result {
                Ok(plants) => {
                    model.plants.next_watering =
                        reminder::build_reminder(&plants, Utc::now(), locale);
                    model.ui.selected = if plants.is_empty() { None } else { Some(0) };
                    model.plants.plants = plants;
                }
                Err(e) => {
                    model.ui.show_alert(e.to_string());
                    model.plants.plants = Vec::new();
                    model.plants.next_watering = None;
                    model.ui.selected = None;
                }
            }
            model.plants.loading = false;
        }

        StoreResponse::RemoveResult { id, result } => match result {
            Ok(()) => {
                let removed_name = model
                    .plants
                    .plants
                    .iter()
                    .find(|p| p.id == id)
                    .map(|p| p.name.clone());

                model.plants.plants = plants::remove_by_id(&model.plants.plants, id);
                model.ui.selected =
                    plants::clamp_selection(model.ui.selected, model.plants.len());

                // The removed plant may have been the next one due
                model.plants.next_watering =
                    reminder::build_reminder(&model.plants.plants, Utc::now(), locale);

                if let Some(name) = removed_name {
                    model.show_toast(format!("{} removed", name));
                }
            }
            Err(e) => {
                // List stays untouched so the user can retry
                model.ui.show_alert(format!("Could not remove the plant: {}", e));
            }
        },
    }
}
