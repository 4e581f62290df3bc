use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use super::child_collection_repository::JsonChildCollectionRepository;
use crate::storage::traits::Connection;

pub const CHILDREN_FILE_NAME: &str = "children.json";

/// JsonConnection owns the data directory the JSON files live in
#[derive(Clone, Debug)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a new connection, creating the base directory if it doesn't exist
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .with_context(|| format!("Failed to create data directory {}", base_path.display()))?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the file holding the serialized child collection
    pub fn children_file_path(&self) -> PathBuf {
        self.base_directory.join(CHILDREN_FILE_NAME)
    }
}

impl Connection for JsonConnection {
    type ChildCollectionRepository = JsonChildCollectionRepository;

    fn create_child_collection_repository(&self) -> Self::ChildCollectionRepository {
        JsonChildCollectionRepository::new(self.clone())
    }
}
