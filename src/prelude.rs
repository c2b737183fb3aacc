//! Recommended API entrypoints for application code.
//!
//! Intended usage:
//! - declare record types with [`administrable!`](crate::administrable),
//! - register them on a [`SchemaCatalog`],
//! - hand the catalog and a [`RecordStore`] to an [`EntityEditor`].

pub use crate::core::{AdminError, NativeType, Result, Value, WidgetType};
pub use crate::facade::EntityEditor;
pub use crate::result::{FieldView, RecordSet};
pub use crate::schema::{
    Administrable, BoxRecord, EntityDescriptor, EntityRecord, FieldDescriptor, SchemaCatalog,
};
pub use crate::storage::{MemoryStore, RecordStore, Repository};
