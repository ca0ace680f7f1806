//! Identifier allocation through a single-writer task.
//!
//! Every allocation goes through one Tokio task that owns the last issued
//! id, so concurrent creations in this process never receive the same id.
//! The task seeds itself from the store maximum on first use and again
//! after [`IdAllocator::invalidate`].

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use pokedex_core::error::AppError;
use pokedex_core::result::AppResult;
use pokedex_core::types::{Predicate, SortField};
use pokedex_database::RecordStore;
use pokedex_database::store::ID_FIELD;

const CHANNEL_CAPACITY: usize = 64;

#[derive(Debug)]
enum Command {
    Next(oneshot::Sender<AppResult<i64>>),
    Invalidate,
}

/// Handle to the allocator task. Cheap to clone.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    tx: mpsc::Sender<Command>,
}

impl IdAllocator {
    /// Start the allocator task. Must be called inside a Tokio runtime.
    pub fn spawn(store: Arc<dyn RecordStore>) -> Self {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        tokio::spawn(run(store, rx));
        Self { tx }
    }

    /// Allocate the next id.
    pub async fn next(&self) -> AppResult<i64> {
        let (reply, response) = oneshot::channel();
        self.tx
            .send(Command::Next(reply))
            .await
            .map_err(|_| AppError::service_unavailable("Id allocator is not running"))?;
        response
            .await
            .map_err(|_| AppError::service_unavailable("Id allocator dropped the request"))?
    }

    /// Forget the cached id; the next allocation re-reads the store.
    pub async fn invalidate(&self) -> AppResult<()> {
        self.tx
            .send(Command::Invalidate)
            .await
            .map_err(|_| AppError::service_unavailable("Id allocator is not running"))
    }
}

/// Largest id in the store, 0 when empty.
pub async fn current_max_id(store: &dyn RecordStore) -> AppResult<i64> {
    let top = store
        .find_one(&Predicate::All, SortField::desc(ID_FIELD))
        .await?;
    Ok(top.map_or(0, |pokemon| pokemon.id))
}

async fn run(store: Arc<dyn RecordStore>, mut rx: mpsc::Receiver<Command>) {
    let mut last: Option<i64> = None;

    while let Some(command) = rx.recv().await {
        match command {
            Command::Next(reply) => {
                let base = match last {
                    Some(id) => Ok(id),
                    None => current_max_id(store.as_ref()).await,
                };
                let result = base.and_then(|id| {
                    id.checked_add(1)
                        .ok_or_else(|| AppError::conflict("Id space exhausted"))
                });
                if let Ok(id) = result {
                    last = Some(id);
                    debug!(pokemon_id = id, "Allocated id");
                }
                // The requester may have been cancelled; the id is burned either way.
                let _ = reply.send(result);
            }
            Command::Invalidate => {
                warn!(last_allocated = ?last, "Id allocator resyncing from store");
                last = None;
            }
        }
    }

    debug!("Id allocator stopped");
}
