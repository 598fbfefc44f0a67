use async_trait::async_trait;

use crate::ids::{UserId, VehicleId};
use crate::ports::errors::SavedItemStoreError;
use crate::vehicle::SavedReference;

#[async_trait]
pub trait SavedItemStorePort: Send + Sync {
    /// 查询用户的全部收藏
    ///
    /// A user with nothing saved yields an empty list, not an error.
    async fn list(&self, user: &UserId) -> Result<Vec<SavedReference>, SavedItemStoreError>;

    /// 新增收藏
    ///
    /// Returns `false` if a reference with the same id was already saved;
    /// the existing entry is left untouched.
    async fn add(
        &self,
        user: &UserId,
        reference: SavedReference,
    ) -> Result<bool, SavedItemStoreError>;

    /// 删除收藏
    ///
    /// Returns `false` if nothing was removed.
    async fn remove(&self, user: &UserId, id: &VehicleId) -> Result<bool, SavedItemStoreError>;
}
