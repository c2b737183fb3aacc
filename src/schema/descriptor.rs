use crate::core::{NativeType, WidgetType};
use serde::Serialize;

/// Metadata for one editable field: name, native type, and the edit widget.
///
/// The widget is computed from the native type in the constructor and has
/// no setter, so the two can never disagree.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDescriptor {
    name: String,
    native: NativeType,
    widget: WidgetType,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, native: NativeType) -> Self {
        Self {
            name: name.into(),
            native,
            widget: native.widget(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn native(&self) -> NativeType {
        self.native
    }

    pub fn widget(&self) -> WidgetType {
        self.widget
    }
}

/// An administrable entity: its name plus field descriptors in declaration
/// order. Computed on demand from the catalog, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct EntityDescriptor {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl EntityDescriptor {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}
