//! In-memory child collection backed by a persistent snapshot.
//!
//! The store is created once by the application root and shared by the
//! services. Every mutation runs under one lock and is followed by a save of
//! the whole collection, so readers never see a half-applied change.

use log::{error, info};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::models::ChildCollection;
use crate::storage::traits::ChildCollectionStorage;

#[derive(Clone)]
pub struct ChildStore {
    collection: Arc<Mutex<ChildCollection>>,
    storage: Arc<dyn ChildCollectionStorage>,
}

impl ChildStore {
    /// Load the persisted collection, starting empty when there is none or it
    /// can't be read
    pub async fn load(storage: Arc<dyn ChildCollectionStorage>) -> Self {
        let collection = match storage.load().await {
            Ok(Some(collection)) => collection,
            Ok(None) => ChildCollection::new(),
            Err(e) => {
                error!("Failed to load children, starting with an empty collection: {:#}", e);
                ChildCollection::new()
            }
        };

        info!("Child store ready with {} children", collection.len());

        Self {
            collection: Arc::new(Mutex::new(collection)),
            storage,
        }
    }

    /// Run a read-only closure against the current collection
    pub async fn read<R>(&self, f: impl FnOnce(&ChildCollection) -> R) -> R {
        let guard = self.collection.lock().await;
        f(&guard)
    }

    /// Apply `f` and persist the result. A failed save is logged; the
    /// in-memory change is kept.
    pub async fn mutate<R>(&self, f: impl FnOnce(&mut ChildCollection) -> R) -> R {
        let mut guard = self.collection.lock().await;
        let result = f(&mut guard);

        if let Err(e) = self.storage.save(&guard).await {
            error!("Failed to save children: {:#}", e);
        }

        result
    }
}
