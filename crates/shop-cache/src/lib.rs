//! Pluggable key-value persistence for the storefront.
//!
//! Stores are byte-oriented and swappable behind [`KeyValueStore`]. The
//! [`Cache`] wrapper adds automatic JSON serialization on top of any store,
//! playing the role browser local storage plays for a web storefront.
//!
//! # Example
//!
//! ```rust
//! use shop_cache::Cache;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Prefs {
//!     currency: String,
//! }
//!
//! let cache = Cache::in_memory();
//! cache.set("prefs", &Prefs { currency: "USD".into() }).unwrap();
//!
//! let prefs: Option<Prefs> = cache.get("prefs").unwrap();
//! assert_eq!(prefs.unwrap().currency, "USD");
//!
//! cache.delete("prefs").unwrap();
//! assert!(!cache.exists("prefs").unwrap());
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore};
}
