//! Catalog and per-user entities held by the store.
//!
//! Every entity comes in two shapes: the stored row (identity and timestamp
//! assigned by the store) and the `New*` payload accepted on insert.

pub mod progress;
pub mod review;
pub mod title;
pub mod user;
pub mod watchlist;

pub use progress::{ContinueWatching, NewWatchProgress, WatchProgress};
pub use review::{NewReview, Review};
pub use title::{NewTitle, Title};
pub use user::{NewUser, User};
pub use watchlist::{NewWatchlistEntry, WatchlistEntry};
