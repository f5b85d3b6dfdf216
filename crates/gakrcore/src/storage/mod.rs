//! User store persistence

pub mod store;

// Re-exports for convenience
pub use store::{QueryEntry, Store, UserRecord, UserStore};
