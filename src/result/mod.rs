pub mod record_set;

pub use record_set::{FieldView, RecordSet};
