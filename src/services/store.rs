//! Plant store worker
//!
//! Runs storage I/O on a background task so the render loop never blocks.
//! The UI sends `StoreRequest`s over an unbounded channel and drains
//! `StoreResponse`s non-blocking once per frame.

use tokio::sync::mpsc;

use crate::storage::{Plant, PlantStore};

/// Store request types
#[derive(Debug, Clone)]
pub enum StoreRequest {
    /// List all stored plants
    ListPlants,

    /// Remove a plant by id
    RemovePlant { id: u64 },
}

/// Store response types
#[derive(Debug)]
pub enum StoreResponse {
    ListResult {
        plants: Result<Vec<Plant>, anyhow::Error>,
    },

    RemoveResult {
        id: u64,
        result: Result<(), anyhow::Error>,
    },
}

/// Execute a single request against the store
async fn execute_request(store: &PlantStore, request: StoreRequest) -> StoreResponse {
    match request {
        StoreRequest::ListPlants => StoreResponse::ListResult {
            plants: store.list_plants().await,
        },

        StoreRequest::RemovePlant { id } => StoreResponse::RemoveResult {
            id,
            result: store.remove_plant(id).await,
        },
    }
}

/// Spawn the store service worker.
///
/// Requests are processed in order; the screen issues at most one at a time,
/// so there is no need for prioritization or deduplication.
pub fn spawn_store_service(
    store: PlantStore,
) -> (
    mpsc::UnboundedSender<StoreRequest>,
    mpsc::UnboundedReceiver<StoreResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<StoreRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<StoreResponse>();

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            let response = execute_request(&store, request).await;

            // Receiver gone means the screen quit; nothing left to do
            if response_tx.send(response).is_err() {
                break;
            }
        }
    });

    (request_tx, response_rx)
}
