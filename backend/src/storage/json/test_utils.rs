//! Test environment with a throwaway data directory.
//!
//! The directory is removed when the `TestEnvironment` is dropped, even if the
//! test panics.

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

use super::connection::JsonConnection;
use crate::domain::child_store::ChildStore;
use crate::storage::traits::Connection;

pub struct TestEnvironment {
    /// Kept alive so the directory survives until drop
    _temp_dir: TempDir,
    pub connection: JsonConnection,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = JsonConnection::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_path
    }

    /// A store backed by this environment's `children.json`
    pub async fn child_store(&self) -> ChildStore {
        let repository = self.connection.create_child_collection_repository();
        ChildStore::load(Arc::new(repository)).await
    }
}
