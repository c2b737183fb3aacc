use crate::core::{NativeType, WidgetType};
use serde::Serialize;

/// One field prepared for display: name, formatted text, and the widget
/// the presentation tier should render. `value` is `None` for a null or
/// absent value (an empty creation form is all-`None`).
#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub name: String,
    pub value: Option<String>,
    pub widget: WidgetType,
    pub native: NativeType,
}

impl FieldView {
    pub fn is_numeric(&self) -> bool {
        self.widget == WidgetType::Number
    }
}

/// Records of one entity prepared for display, one `Vec<FieldView>` per
/// record in field declaration order. Built fresh per request.
#[derive(Debug, Serialize)]
pub struct RecordSet {
    pub entity: String,
    pub records: Vec<Vec<FieldView>>,
}

impl RecordSet {
    pub fn empty(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            records: Vec::new(),
        }
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Render the set as an aligned console table.
    pub fn print(&self) {
        let Some(first) = self.records.first() else {
            println!("Empty record set for '{}'", self.entity);
            return;
        };

        let mut widths: Vec<usize> = first.iter().map(|f| f.name.len()).collect();
        for record in &self.records {
            for (i, field) in record.iter().enumerate() {
                let len = field.value.as_deref().unwrap_or("NULL").len();
                widths[i] = widths[i].max(len);
            }
        }

        let header: Vec<String> = first
            .iter()
            .enumerate()
            .map(|(i, f)| format!("{:width$}", f.name, width = widths[i]))
            .collect();
        println!("{}", header.join(" | "));

        let separator: String = widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-");
        println!("{}", separator);

        for record in &self.records {
            let row: Vec<String> = record
                .iter()
                .enumerate()
                .map(|(i, f)| {
                    format!(
                        "{:width$}",
                        f.value.as_deref().unwrap_or("NULL"),
                        width = widths[i]
                    )
                })
                .collect();
            println!("{}", row.join(" | "));
        }

        println!("\n{} record(s)", self.records.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_set() {
        let set = RecordSet::empty("SampleModels");
        assert!(set.is_empty());
        assert_eq!(set.record_count(), 0);
        assert_eq!(set.entity, "SampleModels");
    }

    #[test]
    fn test_field_view_numeric_helper() {
        let int_field = FieldView {
            name: "IntCount".into(),
            value: Some("3".into()),
            widget: NativeType::Integer.widget(),
            native: NativeType::Integer,
        };
        let text_field = FieldView {
            name: "Name".into(),
            value: None,
            widget: NativeType::Text.widget(),
            native: NativeType::Text,
        };
        assert!(int_field.is_numeric());
        assert!(!text_field.is_numeric());
    }
}
