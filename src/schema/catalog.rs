use crate::core::{AdminError, NativeType, Result, Value};
use crate::schema::descriptor::EntityDescriptor;
use crate::schema::entity::{Administrable, BoxRecord};
use std::collections::BTreeMap;

/// Factory building a native record instance from coerced field values.
type RecordFactory = Box<dyn Fn(&BTreeMap<String, Value>) -> Result<BoxRecord> + Send + Sync>;

struct EntityRegistration {
    descriptor: EntityDescriptor,
    build: RecordFactory,
}

/// The registry of administrable entities.
///
/// Registration is an explicit opt-in per record type; nothing is
/// discovered from storage. Entities keep their registration order, which
/// stays stable for the process lifetime.
///
/// The catalog is built once at startup with the consuming
/// [`with_entity`](SchemaCatalog::with_entity) builder:
///
/// ```
/// use entadmin::prelude::*;
///
/// entadmin::administrable! {
///     #[derive(Debug)]
///     pub struct Note("Notes") {
///         "Id" => id: Id,
///         "Body" => body: Text,
///     }
/// }
///
/// let catalog = SchemaCatalog::new().with_entity::<Note>().unwrap();
/// assert_eq!(catalog.list_entities(), vec!["Notes"]);
/// ```
#[derive(Default)]
pub struct SchemaCatalog {
    entities: Vec<EntityRegistration>,
}

impl std::fmt::Debug for SchemaCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaCatalog")
            .field(
                "entities",
                &self
                    .entities
                    .iter()
                    .map(|e| &e.descriptor)
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl SchemaCatalog {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Register `T` as administrable, returning the extended catalog.
    ///
    /// Fails with [`AdminError::EntityExists`] on a duplicate name and
    /// [`AdminError::Validation`] when the declared fields are unusable:
    /// record identity requires an `Id`-typed field named exactly `Id`, and
    /// field names must be unique within the entity.
    pub fn with_entity<T: Administrable>(mut self) -> Result<Self> {
        let name = T::entity_name();
        let fields = T::fields();

        if self.entity_exists(name) {
            return Err(AdminError::EntityExists(name.to_string()));
        }

        let has_identity = fields
            .iter()
            .any(|f| f.name() == "Id" && f.native() == NativeType::Id);
        if !has_identity {
            return Err(AdminError::Validation(format!(
                "entity '{}' must declare an 'Id' identity field",
                name
            )));
        }

        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.name() == field.name()) {
                return Err(AdminError::Validation(format!(
                    "entity '{}' declares field '{}' more than once",
                    name,
                    field.name()
                )));
            }
        }

        self.entities.push(EntityRegistration {
            descriptor: EntityDescriptor::new(name, fields),
            build: Box::new(|values| T::from_values(values).map(|r| Box::new(r) as BoxRecord)),
        });

        Ok(self)
    }

    /// Names of all administrable entities, in registration order.
    pub fn list_entities(&self) -> Vec<&str> {
        self.entities
            .iter()
            .map(|e| e.descriptor.name())
            .collect()
    }

    pub fn entity_exists(&self, name: &str) -> bool {
        self.entities.iter().any(|e| e.descriptor.name() == name)
    }

    /// Resolve the descriptor for a named entity.
    ///
    /// This is the administrable-set check and must run before any record
    /// store access; an unknown name is [`AdminError::EntityNotFound`].
    pub fn describe(&self, name: &str) -> Result<&EntityDescriptor> {
        self.entities
            .iter()
            .find(|e| e.descriptor.name() == name)
            .map(|e| &e.descriptor)
            .ok_or_else(|| AdminError::EntityNotFound(name.to_string()))
    }

    /// Build a native record instance for `name` from coerced values.
    pub fn build_record(
        &self,
        name: &str,
        values: &BTreeMap<String, Value>,
    ) -> Result<BoxRecord> {
        let registration = self
            .entities
            .iter()
            .find(|e| e.descriptor.name() == name)
            .ok_or_else(|| AdminError::EntityNotFound(name.to_string()))?;
        (registration.build)(values)
    }
}
