use std::sync::Arc;

use tracing::{info_span, Instrument};

use mr_core::ports::{SavedItemStoreError, SavedItemStorePort};
use mr_core::{ResolvedList, UserId};

use super::{ResolveFavorites, ResolveFavoritesError, ResolveOptions};

#[derive(Debug, thiserror::Error)]
pub enum ListFavoritesError {
    /// The saved list itself could not be read. This is the only hard failure.
    #[error("failed to read saved favorites: {0}")]
    Store(#[from] SavedItemStoreError),

    #[error(transparent)]
    Resolve(#[from] ResolveFavoritesError),
}

/// Load a user's saved favorites and resolve them for display.
/// 加载并解析用户收藏列表
pub struct ListFavorites {
    store: Arc<dyn SavedItemStorePort>,
    resolver: Arc<ResolveFavorites>,
}

impl ListFavorites {
    pub fn new(store: Arc<dyn SavedItemStorePort>, resolver: Arc<ResolveFavorites>) -> Self {
        Self { store, resolver }
    }

    pub async fn execute(
        &self,
        user: &UserId,
        options: ResolveOptions,
    ) -> Result<ResolvedList, ListFavoritesError> {
        let span = info_span!("usecase.list_favorites.execute", user = %user);

        async {
            let references = self.store.list(user).await?;
            let list = self.resolver.execute(&references, options).await?;
            Ok::<_, ListFavoritesError>(list)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::favorites::ResolverSettings;
    use async_trait::async_trait;
    use mr_core::ports::{LookupError, VehicleLookupPort};
    use mr_core::{FallbackCatalog, SavedReference, VehicleId, VehicleListing};

    struct NoLookup;

    #[async_trait]
    impl VehicleLookupPort for NoLookup {
        async fn find_by_id(&self, _id: &VehicleId) -> Result<Option<VehicleListing>, LookupError> {
            Ok(None)
        }
    }

    struct FixedStore {
        items: Vec<SavedReference>,
        should_fail: bool,
    }

    #[async_trait]
    impl SavedItemStorePort for FixedStore {
        async fn list(&self, _user: &UserId) -> Result<Vec<SavedReference>, SavedItemStoreError> {
            if self.should_fail {
                return Err(SavedItemStoreError::Storage("disk unavailable".to_string()));
            }
            Ok(self.items.clone())
        }

        async fn add(
            &self,
            _user: &UserId,
            _reference: SavedReference,
        ) -> Result<bool, SavedItemStoreError> {
            unimplemented!()
        }

        async fn remove(
            &self,
            _user: &UserId,
            _id: &VehicleId,
        ) -> Result<bool, SavedItemStoreError> {
            unimplemented!()
        }
    }

    fn list_use_case(store: FixedStore) -> ListFavorites {
        let resolver = ResolveFavorites::new(
            Arc::new(NoLookup),
            Arc::new(FallbackCatalog::empty()),
            ResolverSettings::defaults(),
        );
        ListFavorites::new(Arc::new(store), Arc::new(resolver))
    }

    #[tokio::test]
    async fn test_resolves_every_saved_item() {
        let store = FixedStore {
            items: vec![SavedReference::new("a"), SavedReference::new("b")],
            should_fail: false,
        };

        let list = list_use_case(store)
            .execute(&UserId::from("u1"), ResolveOptions::online())
            .await
            .unwrap();

        assert_eq!(list.len(), 2);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let store = FixedStore {
            items: vec![],
            should_fail: true,
        };

        let result = list_use_case(store)
            .execute(&UserId::from("u1"), ResolveOptions::online())
            .await;

        assert!(matches!(result, Err(ListFavoritesError::Store(_))));
    }
}
