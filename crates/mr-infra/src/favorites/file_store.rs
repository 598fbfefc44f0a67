use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use mr_core::ports::{SavedItemStoreError, SavedItemStorePort};
use mr_core::{SavedReference, UserId, VehicleId};

/// Local-only saved-item store: one JSON array file per user.
/// 本地收藏存储：每个用户一个 JSON 文件
pub struct JsonFileSavedItemStore {
    dir: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl JsonFileSavedItemStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, user: &UserId) -> Result<PathBuf, SavedItemStoreError> {
        if !user.is_valid_key() {
            return Err(SavedItemStoreError::InvalidUser(user.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", user.as_str())))
    }

    async fn read_items(&self, path: &Path) -> Result<Vec<SavedReference>, SavedItemStoreError> {
        let content = match fs::read_to_string(path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(SavedItemStoreError::Storage(format!(
                    "read {} failed: {}",
                    path.display(),
                    e
                )))
            }
        };

        serde_json::from_str(&content)
            .map_err(|e| SavedItemStoreError::Corrupt(format!("{}: {}", path.display(), e)))
    }

    /// Write to a sibling temp file, then rename over the target.
    async fn atomic_write(
        &self,
        path: &Path,
        items: &[SavedReference],
    ) -> Result<(), SavedItemStoreError> {
        fs::create_dir_all(&self.dir).await.map_err(|e| {
            SavedItemStoreError::Storage(format!("create {} failed: {}", self.dir.display(), e))
        })?;

        let content = serde_json::to_string_pretty(items)
            .map_err(|e| SavedItemStoreError::Storage(format!("serialize failed: {}", e)))?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, content).await.map_err(|e| {
            SavedItemStoreError::Storage(format!("write {} failed: {}", tmp_path.display(), e))
        })?;
        fs::rename(&tmp_path, path).await.map_err(|e| {
            SavedItemStoreError::Storage(format!(
                "rename {} -> {} failed: {}",
                tmp_path.display(),
                path.display(),
                e
            ))
        })?;

        Ok(())
    }
}

#[async_trait]
impl SavedItemStorePort for JsonFileSavedItemStore {
    async fn list(&self, user: &UserId) -> Result<Vec<SavedReference>, SavedItemStoreError> {
        let path = self.path_for(user)?;
        self.read_items(&path).await
    }

    async fn add(
        &self,
        user: &UserId,
        reference: SavedReference,
    ) -> Result<bool, SavedItemStoreError> {
        let path = self.path_for(user)?;
        let _guard = self.write_lock.lock().await;

        let mut items = self.read_items(&path).await?;
        if items.iter().any(|item| item.id == reference.id) {
            debug!(user = %user, id = %reference.id, "favorite already saved");
            return Ok(false);
        }

        items.push(reference);
        self.atomic_write(&path, &items).await?;
        Ok(true)
    }

    async fn remove(&self, user: &UserId, id: &VehicleId) -> Result<bool, SavedItemStoreError> {
        let path = self.path_for(user)?;
        let _guard = self.write_lock.lock().await;

        let mut items = self.read_items(&path).await?;
        let before = items.len();
        items.retain(|item| &item.id != id);
        if items.len() == before {
            return Ok(false);
        }

        self.atomic_write(&path, &items).await?;
        Ok(true)
    }
}
