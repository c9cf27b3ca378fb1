//! Entity accessor trait and collection helpers

use crate::core::entity::Entity;
use anyhow::Result;
use async_trait::async_trait;

/// Read and delete access over the opaque data source backing a
/// resource.
///
/// The adapter depends only on this interface, so any storage engine
/// can be substituted. All writes other than deletion go through the
/// resource's validators, never through this trait.
#[async_trait]
pub trait EntityStore<T: Entity>: Send + Sync {
    /// All entities eligible for the resource
    async fn all(&self) -> Result<Vec<T>>;

    /// Look up one entity by identifier
    async fn get(&self, id: i64) -> Result<Option<T>>;

    /// Remove an entity; subsequent `get` with the same id is `None`
    async fn delete(&self, id: i64) -> Result<()>;
}

/// Order entities by ascending identifier.
///
/// This is the default listing order; it keeps pagination stable
/// across requests. Ordering across page fetches is undefined when
/// entities are inserted or deleted concurrently between fetches.
pub fn ordered_by_id<T: Entity>(mut items: Vec<T>) -> Vec<T> {
    items.sort_by_key(Entity::id);
    items
}

/// Take `limit` entities starting at `offset`; out-of-range offsets
/// yield an empty vector.
pub fn slice<T>(items: Vec<T>, offset: usize, limit: usize) -> Vec<T> {
    items.into_iter().skip(offset).take(limit).collect()
}
