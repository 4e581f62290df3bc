use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use super::connection::JsonConnection;
use crate::domain::models::ChildCollection;
use crate::storage::traits::ChildCollectionStorage;

/// Stores the full child collection as a pretty-printed JSON array in
/// `children.json`
#[derive(Clone)]
pub struct JsonChildCollectionRepository {
    connection: JsonConnection,
}

impl JsonChildCollectionRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    /// Move an unreadable file aside so the next save doesn't overwrite it
    fn back_up_corrupt_file(&self, path: &Path) -> Result<PathBuf> {
        let backup_path = self.connection.base_directory().join(format!(
            "children.corrupt-{}.json",
            chrono::Utc::now().timestamp_millis()
        ));
        fs::rename(path, &backup_path)
            .with_context(|| format!("Failed to move corrupt file to {}", backup_path.display()))?;
        Ok(backup_path)
    }
}

#[async_trait]
impl ChildCollectionStorage for JsonChildCollectionRepository {
    async fn load(&self) -> Result<Option<ChildCollection>> {
        let path = self.connection.children_file_path();

        if !path.exists() {
            info!("No children file at {}, starting fresh", path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        match serde_json::from_str::<ChildCollection>(&content) {
            Ok(collection) => {
                info!("Loaded {} children from {}", collection.len(), path.display());
                Ok(Some(collection))
            }
            Err(parse_error) => {
                let backup_path = self.back_up_corrupt_file(&path)?;
                warn!(
                    "Children file {} is not valid JSON, moved to {}",
                    path.display(),
                    backup_path.display()
                );
                Err(anyhow!("Failed to parse {}: {}", path.display(), parse_error))
            }
        }
    }

    async fn save(&self, collection: &ChildCollection) -> Result<()> {
        let path = self.connection.children_file_path();
        let content = serde_json::to_string_pretty(collection)?;

        // Atomic write using temp file
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        info!("Saved {} children to {}", collection.len(), path.display());
        Ok(())
    }
}
