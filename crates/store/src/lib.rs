//! `wicket-store` — entity storage behind trait seams.
//!
//! The auth core only depends on the `UserStore` lookup contract
//! (`find_by_email` returns exactly one matching user or none). The
//! in-memory implementations here are process-local and concurrency-safe.

pub mod item;
pub mod user;

pub use item::{InMemoryItemStore, Item, ItemStore};
pub use user::{InMemoryUserStore, User, UserStore, UserUpdate};
