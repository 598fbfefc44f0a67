//! Favorites: resolve saved references into display-ready vehicles and
//! maintain the saved list.

mod add_favorite;
mod list_favorites;
mod remove_favorite;
mod resolve_favorites;
mod settings;
pub mod strategies;

pub use add_favorite::AddFavorite;
pub use list_favorites::{ListFavorites, ListFavoritesError};
pub use remove_favorite::RemoveFavorite;
pub use resolve_favorites::{ResolveFavorites, ResolveFavoritesError};
pub use settings::{ResolveOptions, ResolverSettings};

/// Error type shared by the add/remove commands.
#[derive(Debug, thiserror::Error)]
pub enum FavoriteCommandError {
    #[error("vehicle id must not be blank")]
    BlankVehicleId,

    #[error(transparent)]
    Store(#[from] mr_core::ports::SavedItemStoreError),
}
