//! Persistence port.

use async_trait::async_trait;

use crate::result::AppResult;

/// Narrow save/find/delete port that services depend on.
///
/// Adapters decide how identifiers are assigned; callers only rely on
/// `save` returning the entity as stored.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static + serde::Serialize,
    Id: Send + Sync + 'static,
{
    /// Insert or fully overwrite an entity and return the stored version.
    async fn save(&self, entity: &Entity) -> AppResult<Entity>;

    /// Return every stored entity.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;

    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: &Id) -> AppResult<Option<Entity>>;

    /// Delete an entity by its primary key. Returns `true` if a record was removed.
    async fn delete_by_id(&self, id: &Id) -> AppResult<bool>;

    /// Whether the backing store can currently serve requests.
    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
