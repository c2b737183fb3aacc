use crate::core::{AdminError, Result};
use crate::schema::BoxRecord;
use crate::storage::adapter::RecordStore;
use async_trait::async_trait;
use log::{debug, warn};
use std::collections::HashMap;
use tokio::sync::{Mutex, RwLock};

enum PendingOp {
    Insert { entity: String, record: BoxRecord },
    Update { entity: String, record: BoxRecord },
    Delete { entity: String, id: String },
}

/// In-memory [`RecordStore`] with unit-of-work commit semantics.
///
/// Reads see committed state only. Mutations are staged in order and
/// applied at commit against a copy of the committed tables; the copy is
/// swapped in only when every staged operation succeeds, so a failed unit
/// of work leaves committed state untouched. The staging buffer is
/// discarded either way.
pub struct MemoryStore {
    /// Committed records per entity name.
    tables: RwLock<HashMap<String, Vec<BoxRecord>>>,
    pending: Mutex<Vec<PendingOp>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Number of committed records for an entity.
    pub async fn committed_count(&self, entity: &str) -> usize {
        self.tables
            .read()
            .await
            .get(entity)
            .map_or(0, |records| records.len())
    }

    fn record_id_of(record: &BoxRecord) -> Result<String> {
        record.record_id().filter(|id| !id.is_empty()).ok_or_else(|| {
            AdminError::Storage(format!(
                "record of entity '{}' has no usable Id",
                record.entity_name()
            ))
        })
    }

    fn apply(tables: &mut HashMap<String, Vec<BoxRecord>>, op: PendingOp) -> Result<()> {
        match op {
            PendingOp::Insert { entity, record } => {
                Self::record_id_of(&record)?;
                tables.entry(entity).or_default().push(record);
                Ok(())
            }
            PendingOp::Update { entity, record } => {
                let id = Self::record_id_of(&record)?;
                let records = tables.entry(entity).or_default();
                let slot = records
                    .iter_mut()
                    .find(|r| r.record_id().as_deref() == Some(id.as_str()));
                match slot {
                    Some(slot) => {
                        *slot = record;
                        Ok(())
                    }
                    None => Err(AdminError::Storage(format!(
                        "cannot update '{}': no record with Id '{}'",
                        record.entity_name(),
                        id
                    ))),
                }
            }
            PendingOp::Delete { entity, id } => {
                // Idempotent: deleting an absent id changes nothing.
                if let Some(records) = tables.get_mut(&entity) {
                    records.retain(|r| r.record_id().as_deref() != Some(id.as_str()));
                }
                Ok(())
            }
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn fetch_all(&self, entity: &str) -> Result<Vec<BoxRecord>> {
        let tables = self.tables.read().await;
        Ok(tables.get(entity).cloned().unwrap_or_default())
    }

    async fn fetch_by_id(&self, entity: &str, id: &str) -> Result<Option<BoxRecord>> {
        let tables = self.tables.read().await;
        Ok(tables.get(entity).and_then(|records| {
            records
                .iter()
                .find(|r| r.record_id().as_deref() == Some(id))
                .cloned()
        }))
    }

    async fn insert(&self, entity: &str, record: BoxRecord) -> Result<()> {
        self.pending.lock().await.push(PendingOp::Insert {
            entity: entity.to_string(),
            record,
        });
        Ok(())
    }

    async fn update(&self, entity: &str, record: BoxRecord) -> Result<()> {
        self.pending.lock().await.push(PendingOp::Update {
            entity: entity.to_string(),
            record,
        });
        Ok(())
    }

    async fn delete(&self, entity: &str, id: &str) -> Result<()> {
        self.pending.lock().await.push(PendingOp::Delete {
            entity: entity.to_string(),
            id: id.to_string(),
        });
        Ok(())
    }

    async fn commit(&self) -> Result<()> {
        let ops: Vec<PendingOp> = self.pending.lock().await.drain(..).collect();
        if ops.is_empty() {
            return Ok(());
        }

        let mut tables = self.tables.write().await;
        // Copy-on-write: apply the unit to a clone, swap only on success.
        let mut next = tables.clone();
        let op_count = ops.len();

        for op in ops {
            if let Err(err) = Self::apply(&mut next, op) {
                warn!("commit aborted, unit of work discarded: {}", err);
                return Err(err);
            }
        }

        *tables = next;
        debug!("committed {} staged operation(s)", op_count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Value;
    use crate::schema::Administrable;
    use std::collections::BTreeMap;

    crate::administrable! {
        #[derive(Debug)]
        struct Widget("Widgets") {
            "Id" => id: Id,
            "Label" => label: Text,
        }
    }

    fn widget(id: &str, label: &str) -> BoxRecord {
        Box::new(Widget {
            id: id.to_string(),
            label: label.to_string(),
        })
    }

    #[tokio::test]
    async fn test_staged_ops_invisible_until_commit() {
        let store = MemoryStore::new();
        store.insert("Widgets", widget("w1", "first")).await.unwrap();

        assert_eq!(store.fetch_all("Widgets").await.unwrap().len(), 0);

        store.commit().await.unwrap();
        assert_eq!(store.fetch_all("Widgets").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_commit_leaves_state_untouched() {
        let store = MemoryStore::new();
        store.insert("Widgets", widget("w1", "first")).await.unwrap();
        store.commit().await.unwrap();

        // Second unit: a valid insert followed by an update of a missing id.
        store.insert("Widgets", widget("w2", "second")).await.unwrap();
        store.update("Widgets", widget("missing", "nope")).await.unwrap();
        let err = store.commit().await.unwrap_err();
        assert!(matches!(err, AdminError::Storage(_)));

        // Neither operation of the failed unit is visible.
        let records = store.fetch_all("Widgets").await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].record_id().as_deref(), Some("w1"));
    }

    #[tokio::test]
    async fn test_update_replaces_by_identity() {
        let store = MemoryStore::new();
        store.insert("Widgets", widget("w1", "before")).await.unwrap();
        store.commit().await.unwrap();

        store.update("Widgets", widget("w1", "after")).await.unwrap();
        store.commit().await.unwrap();

        let record = store.fetch_by_id("Widgets", "w1").await.unwrap().unwrap();
        assert_eq!(record.get("Label"), Some(Value::Text("after".into())));
        assert_eq!(store.committed_count("Widgets").await, 1);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryStore::new();
        store.delete("Widgets", "missing").await.unwrap();
        store.commit().await.unwrap();
        store.delete("Widgets", "missing").await.unwrap();
        store.commit().await.unwrap();
        assert_eq!(store.committed_count("Widgets").await, 0);
    }

    #[test]
    fn test_factory_defaults_for_missing_fields() {
        let values = BTreeMap::from([("Id".to_string(), Value::Id("w9".into()))]);
        let built = Widget::from_values(&values).unwrap();
        assert_eq!(built.id, "w9");
        assert_eq!(built.label, "");
    }
}
