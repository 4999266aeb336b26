//! In-memory storage for tweets and users.
//!
//! Nothing is persisted; a restart returns to the seed data.
//!
//! ## Components
//!
//! - [`Store`]: get-all, find-by-id, append and remove-by-id over both collections

mod store;

pub use store::Store;
