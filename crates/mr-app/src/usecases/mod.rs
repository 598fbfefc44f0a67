//! Business logic use cases
//!
//! [SavedItemStore]
//         ↓
// ListFavorites  → store.list → ResolveFavorites → UI list
// ---------------------------------
// AddFavorite / RemoveFavorite → store only (persistence is the caller's job)

pub mod favorites;
