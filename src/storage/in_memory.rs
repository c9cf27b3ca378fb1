//! In-memory implementation of EntityStore for testing and development

use crate::core::entity::Entity;
use crate::core::store::EntityStore;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory entity store
///
/// Uses RwLock for thread-safe access and an atomic counter for
/// identifier assignment, so every created entity gets a fresh,
/// previously unused id starting at 1.
pub struct InMemoryStore<T: Entity> {
    entities: Arc<RwLock<HashMap<i64, T>>>,
    next_id: Arc<AtomicI64>,
}

impl<T: Entity> Clone for InMemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            entities: self.entities.clone(),
            next_id: self.next_id.clone(),
        }
    }
}

impl<T: Entity> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            entities: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Create and persist an entity under a freshly assigned id.
    ///
    /// Validators use this for POST: the closure receives the new id
    /// and builds the entity around it.
    pub fn insert_with(&self, make: impl FnOnce(i64) -> T) -> Result<T> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let entity = make(id);
        let mut entities = self
            .entities
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;
        entities.insert(id, entity.clone());
        Ok(entity)
    }

    /// Persist an entity under its existing id (insert or replace).
    ///
    /// Seeding an entity with an explicit id bumps the counter past
    /// it, so later `insert_with` ids stay fresh.
    pub fn save(&self, entity: T) -> Result<T> {
        let id = entity.id();
        self.next_id.fetch_max(id + 1, Ordering::SeqCst);
        let mut entities = self
            .entities
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;
        entities.insert(id, entity.clone());
        Ok(entity)
    }

    /// Number of stored entities
    pub fn count(&self) -> usize {
        self.entities.read().map(|m| m.len()).unwrap_or(0)
    }
}

impl<T: Entity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> EntityStore<T> for InMemoryStore<T> {
    async fn all(&self) -> Result<Vec<T>> {
        let entities = self
            .entities
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(entities.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<T>> {
        let entities = self
            .entities
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(entities.get(&id).cloned())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        entities.remove(&id);

        Ok(())
    }
}
