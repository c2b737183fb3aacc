pub mod catalog;
pub mod descriptor;
pub mod entity;
mod macros;

pub use catalog::SchemaCatalog;
pub use descriptor::{EntityDescriptor, FieldDescriptor};
pub use entity::{Administrable, BoxRecord, EntityRecord};
