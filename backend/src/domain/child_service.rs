use anyhow::Result;
use chrono::Local;
use log::{info, warn};

use crate::domain::child_store::ChildStore;
use crate::domain::models::validate_child_profile;
use shared::{Child, ChildListResponse, ChildResponse, CreateChildRequest};

/// Service for managing child profiles
#[derive(Clone)]
pub struct ChildService {
    store: ChildStore,
}

impl ChildService {
    pub fn new(store: ChildStore) -> Self {
        Self { store }
    }

    /// Create a new child with an empty log.
    ///
    /// Validation failures come back as a `ChildValidationError` inside the
    /// `anyhow::Error`.
    pub async fn create_child(&self, request: CreateChildRequest) -> Result<ChildResponse> {
        info!(
            "Creating child: name={}, date_of_birth={}, brand={}",
            request.name, request.date_of_birth, request.diaper_brand
        );

        let today = Local::now().date_naive();
        validate_child_profile(&request.name, request.date_of_birth, today)?;

        let child = Child::new(request.name.trim(), request.date_of_birth, request.diaper_brand);
        let stored = child.clone();
        self.store.mutate(move |collection| collection.add_child(stored)).await;

        info!("Created child: {} with ID: {}", child.name, child.id);

        Ok(ChildResponse {
            child,
            success_message: "Child created successfully".to_string(),
        })
    }

    /// Get a child by ID
    pub async fn get_child(&self, child_id: &str) -> Result<Option<Child>> {
        let child = self
            .store
            .read(|collection| collection.get(child_id).cloned())
            .await;

        if child.is_none() {
            warn!("Child not found: {}", child_id);
        }

        Ok(child)
    }

    /// List all children in insertion order
    pub async fn list_children(&self) -> Result<ChildListResponse> {
        let children = self
            .store
            .read(|collection| collection.children().to_vec())
            .await;

        info!("Found {} children", children.len());

        Ok(ChildListResponse { children })
    }

    /// Delete a child and every log recorded for it
    pub async fn delete_child(&self, child_id: &str) -> Result<()> {
        info!("Deleting child: {}", child_id);

        let removed = self
            .store
            .mutate(|collection| collection.remove_child(child_id))
            .await
            .ok_or_else(|| anyhow::anyhow!("Child not found: {}", child_id))?;

        info!("Deleted child: {} ({} logs)", removed.name, removed.logs.len());
        Ok(())
    }
}
