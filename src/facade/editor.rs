use crate::core::{
    coerce_to_native, format_for_display, generate_id, AdminError, Result, Value,
};
use crate::result::{FieldView, RecordSet};
use crate::schema::{EntityDescriptor, SchemaCatalog};
use crate::storage::RecordStore;
use log::debug;
use std::collections::{BTreeMap, HashMap};

/// The façade the presentation tier drives.
///
/// One editor serves one request/response cycle at a time: every operation
/// is a self-contained unit of work bounded by a single commit, and the
/// editor keeps no state between calls beyond the catalog and the store
/// handle. The entity name is always validated against the catalog before
/// the store is touched.
///
/// ```
/// use entadmin::prelude::*;
/// use std::collections::HashMap;
///
/// entadmin::administrable! {
///     #[derive(Debug)]
///     pub struct Task("Tasks") {
///         "Id" => id: Id,
///         "Title" => title: Text,
///         "Done" => done: Boolean,
///     }
/// }
///
/// # tokio_test::block_on(async {
/// let catalog = SchemaCatalog::new().with_entity::<Task>().unwrap();
/// let editor = EntityEditor::new(catalog, MemoryStore::new());
///
/// let fields = HashMap::from([
///     ("Title".to_string(), "write docs".to_string()),
///     ("Done".to_string(), "on".to_string()),
/// ]);
/// editor.create("Tasks", &fields).await.unwrap();
///
/// let all = editor.get_all("Tasks").await.unwrap();
/// assert_eq!(all.record_count(), 1);
/// # });
/// ```
pub struct EntityEditor<S> {
    catalog: SchemaCatalog,
    store: S,
}

impl<S: RecordStore> EntityEditor<S> {
    pub fn new(catalog: SchemaCatalog, store: S) -> Self {
        Self { catalog, store }
    }

    pub fn catalog(&self) -> &SchemaCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Names of all administrable entities. Side-effect-free.
    pub fn list_entities(&self) -> Vec<String> {
        self.catalog
            .list_entities()
            .into_iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// All records of an entity, formatted for display and tagged with
    /// widget types.
    pub async fn get_all(&self, entity: &str) -> Result<RecordSet> {
        let descriptor = self.catalog.describe(entity)?;

        let records = self.store.fetch_all(entity).await?;

        let mut set = RecordSet::empty(entity);
        for record in &records {
            set.records.push(Self::display_record(descriptor, record)?);
        }
        Ok(set)
    }

    /// One empty record with the correct widget types, for rendering a
    /// creation form. Never touches the store.
    pub fn default_record(&self, entity: &str) -> Result<RecordSet> {
        let descriptor = self.catalog.describe(entity)?;

        let blank: Vec<FieldView> = descriptor
            .fields()
            .iter()
            .map(|f| FieldView {
                name: f.name().to_string(),
                value: None,
                widget: f.widget(),
                native: f.native(),
            })
            .collect();

        let mut set = RecordSet::empty(entity);
        set.records.push(blank);
        Ok(set)
    }

    /// Zero or one record by identity.
    ///
    /// An unknown entity name is [`AdminError::EntityNotFound`]; an unknown
    /// id is an empty set, to be read as "record not found" by the caller.
    pub async fn get_by_id(&self, entity: &str, id: &str) -> Result<RecordSet> {
        let descriptor = self.catalog.describe(entity)?;

        let mut set = RecordSet::empty(entity);
        if let Some(record) = self.store.fetch_by_id(entity, id).await? {
            set.records.push(Self::display_record(descriptor, &record)?);
        }
        Ok(set)
    }

    /// Create one record from submitted form fields.
    ///
    /// Every submitted key matching a descriptor field is coerced; the
    /// first coercion failure aborts the whole create before anything is
    /// staged. Unmatched keys are skipped. A missing or blank `Id` gets a
    /// generated identifier.
    pub async fn create(&self, entity: &str, fields: &HashMap<String, String>) -> Result<()> {
        Self::validate_submission(fields)?;
        let descriptor = self.catalog.describe(entity)?;

        let mut values = Self::coerce_fields(descriptor, fields)?;
        values
            .entry("Id".to_string())
            .or_insert_with(|| Value::Id(generate_id()));

        let record = self.catalog.build_record(entity, &values)?;
        self.store.insert(entity, record).await?;
        self.store.commit().await
    }

    /// Update one record from submitted form fields.
    ///
    /// Same contract as [`create`](EntityEditor::create), except the `Id`
    /// field must arrive with the submission (round-tripped from the edit
    /// form) and is never regenerated. An absent boolean key still coerces
    /// to `false`: the engine sees one whole form per request, so checkbox
    /// semantics apply to updates too. Submit an explicit token if a
    /// boolean must survive a partial form.
    pub async fn update(&self, entity: &str, fields: &HashMap<String, String>) -> Result<()> {
        Self::validate_submission(fields)?;
        let descriptor = self.catalog.describe(entity)?;

        match fields.get("Id") {
            Some(id) if !id.trim().is_empty() => {}
            _ => {
                return Err(AdminError::Validation(
                    "update requires the 'Id' field in the submitted values".to_string(),
                ));
            }
        }

        let values = Self::coerce_fields(descriptor, fields)?;
        let record = self.catalog.build_record(entity, &values)?;
        self.store.update(entity, record).await?;
        self.store.commit().await
    }

    /// Delete one record by identity.
    ///
    /// The entity name is validated; a missing id is a successful no-op per
    /// the store's idempotent delete contract.
    pub async fn delete(&self, entity: &str, id: &str) -> Result<()> {
        self.catalog.describe(entity)?;

        self.store.delete(entity, id).await?;
        self.store.commit().await
    }

    fn validate_submission(fields: &HashMap<String, String>) -> Result<()> {
        if fields.is_empty() {
            return Err(AdminError::Validation(
                "the submitted field map is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Coerce submitted text into native values, in field declaration
    /// order. Submitted keys with no matching descriptor field are skipped;
    /// extra form fields must not break a create or update.
    fn coerce_fields(
        descriptor: &EntityDescriptor,
        fields: &HashMap<String, String>,
    ) -> Result<BTreeMap<String, Value>> {
        let mut values = BTreeMap::new();

        for field in descriptor.fields() {
            if let Some(raw) = fields.get(field.name()) {
                let value = coerce_to_native(field.name(), raw, field.native())?;
                values.insert(field.name().to_string(), value);
            }
        }

        for key in fields.keys() {
            if descriptor.field(key).is_none() {
                debug!(
                    "ignoring submitted field '{}' unknown to entity '{}'",
                    key,
                    descriptor.name()
                );
            }
        }

        Ok(values)
    }

    /// Build the display form of one stored record.
    ///
    /// Stored values are re-validated against the descriptor first; a
    /// variant that disagrees with the declared native type means the
    /// stored data is malformed, and that fails loudly instead of
    /// rendering garbage.
    fn display_record(
        descriptor: &EntityDescriptor,
        record: &crate::schema::BoxRecord,
    ) -> Result<Vec<FieldView>> {
        let mut views = Vec::with_capacity(descriptor.field_count());

        for field in descriptor.fields() {
            let value = record.get(field.name()).unwrap_or(Value::Null);
            if !value.matches(field.native()) {
                return Err(AdminError::TypeMismatch(format!(
                    "stored field '{}' of entity '{}' holds {}, descriptor says {}",
                    field.name(),
                    descriptor.name(),
                    value.type_name(),
                    field.native()
                )));
            }
            views.push(FieldView {
                name: field.name().to_string(),
                value: format_for_display(&value),
                widget: field.widget(),
                native: field.native(),
            });
        }

        Ok(views)
    }
}
