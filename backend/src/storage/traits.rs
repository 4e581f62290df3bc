//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::ChildCollection;

/// Trait defining whole-collection persistence of children and their logs
///
/// The collection is always read and written as one snapshot; there are no
/// partial updates.
#[async_trait]
pub trait ChildCollectionStorage: Send + Sync {
    /// Load the stored collection, `None` if nothing has been saved yet
    async fn load(&self) -> Result<Option<ChildCollection>>;

    /// Replace the stored collection
    async fn save(&self, collection: &ChildCollection) -> Result<()>;
}

/// Trait defining the interface for storage connections
///
/// Provides factory methods for creating repositories so the application
/// root can wire storage without knowing the backend.
pub trait Connection: Send + Sync + Clone {
    /// The type of ChildCollectionStorage this connection creates
    type ChildCollectionRepository: ChildCollectionStorage + 'static;

    /// Create a new child collection repository for this connection
    fn create_child_collection_repository(&self) -> Self::ChildCollectionRepository;
}
