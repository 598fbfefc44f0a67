//! My Ride Application Orchestration Layer
//!
//! This crate contains the favorites use cases. They depend on `mr-core`
//! ports only; adapters are injected by the host.

pub mod usecases;

pub use usecases::favorites::{
    AddFavorite, FavoriteCommandError, ListFavorites, ListFavoritesError, RemoveFavorite,
    ResolveFavorites, ResolveFavoritesError, ResolveOptions, ResolverSettings,
};
