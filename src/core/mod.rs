pub mod coerce;
pub mod error;
pub mod types;
pub mod value;

pub use coerce::{coerce_to_native, format_for_display, generate_id};
pub use error::{AdminError, Result};
pub use types::{NativeType, WidgetType};
pub use value::Value;
