// ============================================================================
// entadmin Library
// ============================================================================

//! Generic entity administration engine.
//!
//! `entadmin` lets an operator browse, create, edit, and delete records of
//! arbitrary registered record types without per-type CRUD code: each type
//! opts in through the [`Administrable`] trait (usually via the
//! [`administrable!`] macro), the [`SchemaCatalog`] describes its fields,
//! and the [`EntityEditor`] façade translates between submitted form text
//! and native values while driving any [`RecordStore`] through a uniform
//! by-name interface.
//!
//! # Examples
//!
//! ```
//! use entadmin::prelude::*;
//! use std::collections::HashMap;
//!
//! entadmin::administrable! {
//!     #[derive(Debug)]
//!     pub struct SampleModel("SampleModels") {
//!         "Id" => id: Id,
//!         "Name" => name: Text,
//!         "IntCount" => int_count: Integer,
//!         "BoolValue" => bool_value: Boolean,
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let catalog = SchemaCatalog::new().with_entity::<SampleModel>().unwrap();
//! let editor = EntityEditor::new(catalog, MemoryStore::new());
//!
//! // An empty creation form: every value absent, widgets resolved.
//! let form = editor.default_record("SampleModels").unwrap();
//! assert_eq!(form.record_count(), 1);
//!
//! // Submit it back; the Id is generated because none was supplied.
//! let fields = HashMap::from([
//!     ("Name".to_string(), "first".to_string()),
//!     ("IntCount".to_string(), "3".to_string()),
//!     ("BoolValue".to_string(), "on".to_string()),
//! ]);
//! editor.create("SampleModels", &fields).await.unwrap();
//!
//! let all = editor.get_all("SampleModels").await.unwrap();
//! assert_eq!(all.record_count(), 1);
//! # });
//! ```

pub mod core;
pub mod facade;
pub mod result;
pub mod schema;
pub mod storage;

pub mod prelude;

// Re-export main types for convenience
pub use crate::core::{AdminError, NativeType, Result, Value, WidgetType};
pub use crate::facade::EntityEditor;
pub use crate::result::{FieldView, RecordSet};
pub use crate::schema::{
    Administrable, BoxRecord, EntityDescriptor, EntityRecord, FieldDescriptor, SchemaCatalog,
};
pub use crate::storage::{MemoryStore, RecordStore, Repository};

// The administrable! macro references chrono types through $crate.
pub use chrono;
