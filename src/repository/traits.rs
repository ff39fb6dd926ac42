//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for blob persistence.
//! Implementations can use SQLite, in-memory maps, etc.

use async_trait::async_trait;

use crate::domain::DomainResult;

/// Key-value persistence for JSON blobs
///
/// The whole application state lives under a handful of well-known
/// keys, each holding one serialized document. All operations are
/// async to support various backends.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under a key, if any
    async fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Write (or overwrite) the value under a key
    async fn set(&self, key: &str, value: &str) -> DomainResult<()>;

    /// Remove a key; removing an absent key is not an error
    async fn remove(&self, key: &str) -> DomainResult<()>;
}
