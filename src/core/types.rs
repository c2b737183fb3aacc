use serde::{Deserialize, Serialize};
use std::fmt;

/// Native field types the engine can describe and coerce.
///
/// This is a closed set: a registrant that cannot express a field natively
/// registers it as `Text`, which is also the fallback widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NativeType {
    Text,
    Integer,
    Decimal,
    Boolean,
    Date,
    Time,
    Id,
}

/// Front-end edit-widget kinds, one per native type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetType {
    Text,
    Number,
    Checkbox,
    Date,
    Time,
}

impl NativeType {
    /// Widget kind used to edit a field of this type.
    ///
    /// Total and pure: a native type always maps to the same widget.
    pub fn widget(&self) -> WidgetType {
        match self {
            Self::Text | Self::Id => WidgetType::Text,
            Self::Integer | Self::Decimal => WidgetType::Number,
            Self::Boolean => WidgetType::Checkbox,
            Self::Date => WidgetType::Date,
            Self::Time => WidgetType::Time,
        }
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "TEXT"),
            Self::Integer => write!(f, "INTEGER"),
            Self::Decimal => write!(f, "DECIMAL"),
            Self::Boolean => write!(f, "BOOLEAN"),
            Self::Date => write!(f, "DATE"),
            Self::Time => write!(f, "TIME"),
            Self::Id => write!(f, "ID"),
        }
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // HTML input type tokens, what the presentation tier renders
        match self {
            Self::Text => write!(f, "text"),
            Self::Number => write!(f, "number"),
            Self::Checkbox => write!(f, "checkbox"),
            Self::Date => write!(f, "date"),
            Self::Time => write!(f, "time"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_mapping_is_total() {
        let all = [
            NativeType::Text,
            NativeType::Integer,
            NativeType::Decimal,
            NativeType::Boolean,
            NativeType::Date,
            NativeType::Time,
            NativeType::Id,
        ];
        for ty in all {
            // deterministic: two calls agree
            assert_eq!(ty.widget(), ty.widget());
        }
    }

    #[test]
    fn test_widget_mapping_table() {
        assert_eq!(NativeType::Text.widget(), WidgetType::Text);
        assert_eq!(NativeType::Id.widget(), WidgetType::Text);
        assert_eq!(NativeType::Integer.widget(), WidgetType::Number);
        assert_eq!(NativeType::Decimal.widget(), WidgetType::Number);
        assert_eq!(NativeType::Boolean.widget(), WidgetType::Checkbox);
        assert_eq!(NativeType::Date.widget(), WidgetType::Date);
        assert_eq!(NativeType::Time.widget(), WidgetType::Time);
    }

    #[test]
    fn test_widget_display_tokens() {
        assert_eq!(WidgetType::Checkbox.to_string(), "checkbox");
        assert_eq!(WidgetType::Number.to_string(), "number");
    }
}
