//! Durable key-value storage for the Bazaar storefront.
//!
//! Provides a simple, ergonomic API over the browser's `localStorage`
//! with automatic JSON serialization. On native targets the same API is
//! backed by an in-process map, so everything layered on top is fully
//! exercisable in ordinary unit tests.
//!
//! # Example
//!
//! ```rust
//! use bazaar_storage::BrowserStore;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Snapshot {
//!     revision: u32,
//! }
//!
//! let store = BrowserStore::open();
//!
//! store.set("app.snapshot", &Snapshot { revision: 7 }).unwrap();
//! let back: Option<Snapshot> = store.get("app.snapshot").unwrap();
//! assert_eq!(back, Some(Snapshot { revision: 7 }));
//!
//! store.remove("app.snapshot").unwrap();
//! ```

mod error;
mod local;

pub use error::StorageError;
pub use local::BrowserStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{BrowserStore, StorageError};
}
