pub mod progress;
pub mod review;
pub mod title;
pub mod user;
pub mod watchlist;
