use crate::core::{AdminError, Result};
use crate::schema::{Administrable, BoxRecord};
use crate::storage::adapter::RecordStore;
use std::marker::PhantomData;

/// Typed view over a [`RecordStore`] for application code that knows its
/// record type statically.
///
/// The generic admin engine goes through the erased by-name interface; a
/// `Repository<T>` is the convenience layer for everything else, sharing
/// the same staged unit of work as the store it borrows.
///
/// ```
/// use entadmin::prelude::*;
///
/// entadmin::administrable! {
///     #[derive(Debug, PartialEq)]
///     pub struct Tag("Tags") {
///         "Id" => id: Id,
///         "Label" => label: Text,
///     }
/// }
///
/// # tokio_test::block_on(async {
/// let store = MemoryStore::new();
/// let repo = Repository::<Tag, _>::new(&store);
/// repo.add(Tag { id: "t1".into(), label: "urgent".into() }).await.unwrap();
/// repo.save().await.unwrap();
/// assert_eq!(repo.get("t1").await.unwrap().unwrap().label, "urgent");
/// # });
/// ```
pub struct Repository<'a, T, S> {
    store: &'a S,
    _record: PhantomData<T>,
}

impl<'a, T, S> Repository<'a, T, S>
where
    T: Administrable,
    S: RecordStore,
{
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    fn downcast(record: BoxRecord) -> Result<T> {
        record.as_any().downcast_ref::<T>().cloned().ok_or_else(|| {
            AdminError::TypeMismatch(format!(
                "store returned a foreign record for entity '{}'",
                T::entity_name()
            ))
        })
    }

    pub async fn get_all(&self) -> Result<Vec<T>> {
        let records = self.store.fetch_all(T::entity_name()).await?;
        records.into_iter().map(Self::downcast).collect()
    }

    pub async fn get(&self, id: &str) -> Result<Option<T>> {
        match self.store.fetch_by_id(T::entity_name(), id).await? {
            Some(record) => Ok(Some(Self::downcast(record)?)),
            None => Ok(None),
        }
    }

    pub async fn add(&self, item: T) -> Result<()> {
        self.store.insert(T::entity_name(), Box::new(item)).await
    }

    pub async fn update(&self, item: T) -> Result<()> {
        self.store.update(T::entity_name(), Box::new(item)).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.store.delete(T::entity_name(), id).await
    }

    /// Commit the store's staged unit of work.
    pub async fn save(&self) -> Result<()> {
        self.store.commit().await
    }
}
