//! The opt-in registration trait and its type-erased record form.
//!
//! A record type becomes administrable by implementing [`Administrable`]
//! (usually through the [`administrable!`](crate::administrable) macro) and
//! registering with the catalog. The storage boundary traffics in
//! [`BoxRecord`]s so it stays ignorant of concrete record types.

use crate::core::{Result, Value};
use crate::schema::descriptor::FieldDescriptor;
use std::any::Any;
use std::collections::BTreeMap;

/// Marks a record type as editable through the generic admin engine.
///
/// The trait supplies everything the engine would otherwise need runtime
/// reflection for: the entity name, the field list in declaration order, a
/// by-name accessor, and a factory that builds an instance from coerced
/// field values. Fields absent from the factory input take their type's
/// default value.
pub trait Administrable: Clone + Send + Sync + 'static {
    /// Unique entity name, matched case-sensitively by the catalog.
    fn entity_name() -> &'static str;

    /// Field descriptors in declaration order.
    fn fields() -> Vec<FieldDescriptor>;

    /// Read one field by name. `None` for a name this type does not have.
    fn get(&self, field: &str) -> Option<Value>;

    /// Build an instance from coerced field values.
    fn from_values(values: &BTreeMap<String, Value>) -> Result<Self>;
}

/// Object-safe view of an [`Administrable`] record instance.
///
/// This is what crosses the [`RecordStore`](crate::storage::RecordStore)
/// boundary: the store holds and returns records without knowing their
/// concrete types.
pub trait EntityRecord: Send + Sync {
    fn entity_name(&self) -> &'static str;

    fn get(&self, field: &str) -> Option<Value>;

    /// The record's identity, from its `Id` field.
    fn record_id(&self) -> Option<String>;

    fn clone_record(&self) -> BoxRecord;

    /// Downcast support for typed repositories.
    fn as_any(&self) -> &dyn Any;
}

pub type BoxRecord = Box<dyn EntityRecord>;

impl<T: Administrable> EntityRecord for T {
    fn entity_name(&self) -> &'static str {
        T::entity_name()
    }

    fn get(&self, field: &str) -> Option<Value> {
        Administrable::get(self, field)
    }

    fn record_id(&self) -> Option<String> {
        match Administrable::get(self, "Id") {
            Some(Value::Id(id)) => Some(id),
            Some(Value::Text(id)) => Some(id),
            _ => None,
        }
    }

    fn clone_record(&self) -> BoxRecord {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Clone for BoxRecord {
    fn clone(&self) -> Self {
        self.clone_record()
    }
}

/// Typed extractors used by the factories the [`administrable!`] macro
/// generates. Missing and `Null` entries yield the field type's default;
/// a present entry of the wrong variant is a loud [`TypeMismatch`] so a
/// corrupt value map cannot silently build a record.
///
/// [`administrable!`]: crate::administrable
/// [`TypeMismatch`]: crate::core::AdminError::TypeMismatch
#[doc(hidden)]
pub mod field_ops {
    use crate::core::{AdminError, Result, Value};
    use chrono::{NaiveDate, NaiveTime};
    use std::collections::BTreeMap;

    type Values = BTreeMap<String, Value>;

    fn mismatch(field: &str, expected: &str, got: &Value) -> AdminError {
        AdminError::TypeMismatch(format!(
            "field '{}' expects {}, got {}",
            field,
            expected,
            got.type_name()
        ))
    }

    pub fn take_id(field: &str, values: &Values) -> Result<String> {
        match values.get(field) {
            None | Some(Value::Null) => Ok(String::new()),
            Some(Value::Id(s)) | Some(Value::Text(s)) => Ok(s.clone()),
            Some(other) => Err(mismatch(field, "ID", other)),
        }
    }

    pub fn take_text(field: &str, values: &Values) -> Result<String> {
        match values.get(field) {
            None | Some(Value::Null) => Ok(String::new()),
            Some(Value::Text(s)) => Ok(s.clone()),
            Some(other) => Err(mismatch(field, "TEXT", other)),
        }
    }

    pub fn take_i64(field: &str, values: &Values) -> Result<i64> {
        match values.get(field) {
            None | Some(Value::Null) => Ok(0),
            Some(Value::Integer(i)) => Ok(*i),
            Some(other) => Err(mismatch(field, "INTEGER", other)),
        }
    }

    pub fn take_f64(field: &str, values: &Values) -> Result<f64> {
        match values.get(field) {
            None | Some(Value::Null) => Ok(0.0),
            Some(Value::Decimal(d)) => Ok(*d),
            Some(Value::Integer(i)) => Ok(*i as f64),
            Some(other) => Err(mismatch(field, "DECIMAL", other)),
        }
    }

    pub fn take_bool(field: &str, values: &Values) -> Result<bool> {
        match values.get(field) {
            None | Some(Value::Null) => Ok(false),
            Some(Value::Boolean(b)) => Ok(*b),
            Some(other) => Err(mismatch(field, "BOOLEAN", other)),
        }
    }

    pub fn take_date(field: &str, values: &Values) -> Result<NaiveDate> {
        match values.get(field) {
            None | Some(Value::Null) => Ok(NaiveDate::default()),
            Some(Value::Date(d)) => Ok(*d),
            Some(other) => Err(mismatch(field, "DATE", other)),
        }
    }

    pub fn take_time(field: &str, values: &Values) -> Result<NaiveTime> {
        match values.get(field) {
            None | Some(Value::Null) => Ok(NaiveTime::default()),
            Some(Value::Time(t)) => Ok(*t),
            Some(other) => Err(mismatch(field, "TIME", other)),
        }
    }
}
