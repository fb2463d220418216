//! Single-file JSON key-value store.

mod store;

pub use store::{JsonKeyValueStore, KeyValueStore};
