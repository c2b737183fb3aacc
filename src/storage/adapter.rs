use crate::core::Result;
use crate::schema::BoxRecord;
use async_trait::async_trait;

/// The persistence collaborator boundary.
///
/// The engine drives any transactional record store through this by-name
/// interface and knows nothing about the storage technology behind it.
/// Implement it over a real database for production use; [`MemoryStore`]
/// (the in-memory reference implementation) backs tests and simple apps.
///
/// Mutations are staged as one unit of work per request and become durable
/// only at [`commit`](RecordStore::commit), atomically as a whole.
///
/// [`MemoryStore`]: crate::storage::MemoryStore
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch every record of the named entity.
    async fn fetch_all(&self, entity: &str) -> Result<Vec<BoxRecord>>;

    /// Fetch one record by identity. `None` when the id is absent.
    async fn fetch_by_id(&self, entity: &str, id: &str) -> Result<Option<BoxRecord>>;

    /// Stage an insert.
    async fn insert(&self, entity: &str, record: BoxRecord) -> Result<()>;

    /// Stage an update-by-identity; the record's `Id` field names the target.
    async fn update(&self, entity: &str, record: BoxRecord) -> Result<()>;

    /// Stage a delete. Deleting a missing id is a no-op, not an error.
    async fn delete(&self, entity: &str, id: &str) -> Result<()>;

    /// Durably apply everything staged since the last commit, atomically.
    async fn commit(&self) -> Result<()>;
}
