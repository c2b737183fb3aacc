use chrono::{NaiveDate, NaiveTime};
use entadmin::core::{coerce_to_native, format_for_display};
use entadmin::{AdminError, NativeType, Value, WidgetType};

const ALL_NATIVE_TYPES: [NativeType; 7] = [
    NativeType::Text,
    NativeType::Integer,
    NativeType::Decimal,
    NativeType::Boolean,
    NativeType::Date,
    NativeType::Time,
    NativeType::Id,
];

#[test]
fn test_widget_type_total_and_deterministic() {
    for ty in ALL_NATIVE_TYPES {
        let first = ty.widget();
        let second = ty.widget();
        assert_eq!(first, second);
        assert!(matches!(
            first,
            WidgetType::Text
                | WidgetType::Number
                | WidgetType::Checkbox
                | WidgetType::Date
                | WidgetType::Time
        ));
    }
}

#[test]
fn test_round_trip_law() {
    let cases = [
        (Value::Text("plain text".into()), NativeType::Text),
        (Value::Text(String::new()), NativeType::Text),
        (Value::Integer(-17), NativeType::Integer),
        (Value::Integer(i64::MAX), NativeType::Integer),
        (Value::Decimal(12.5), NativeType::Decimal),
        (Value::Decimal(-0.25), NativeType::Decimal),
        (Value::Boolean(true), NativeType::Boolean),
        (Value::Boolean(false), NativeType::Boolean),
        (
            Value::Date(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap()),
            NativeType::Date,
        ),
        (
            Value::Time(NaiveTime::from_hms_opt(8, 5, 30).unwrap()),
            NativeType::Time,
        ),
    ];

    for (value, ty) in cases {
        let text = format_for_display(&value).unwrap();
        let back = coerce_to_native("Field", &text, ty).unwrap();
        assert_eq!(back, value, "round trip failed for {:?}", value);
    }
}

#[test]
fn test_boolean_widget_semantics() {
    let truthy = ["true", "on"];
    let falsy = ["", "false", "off", "1", "TRUE", "On", "checked"];

    for token in truthy {
        assert_eq!(
            coerce_to_native("B", token, NativeType::Boolean).unwrap(),
            Value::Boolean(true),
            "'{}' should be true",
            token
        );
    }
    for token in falsy {
        assert_eq!(
            coerce_to_native("B", token, NativeType::Boolean).unwrap(),
            Value::Boolean(false),
            "'{}' should be false",
            token
        );
    }
}

#[test]
fn test_decimal_accepts_both_separators() {
    // Twelve and a half, regardless of which separator the locale submits.
    for raw in ["12.50", "12,50"] {
        let value = coerce_to_native("D", raw, NativeType::Decimal).unwrap();
        assert_eq!(value, Value::Decimal(12.5));
    }
}

#[test]
fn test_conversion_error_is_field_scoped() {
    let err = coerce_to_native("IntCount", "three", NativeType::Integer).unwrap_err();
    let AdminError::Conversion { field, raw, target } = err else {
        panic!("expected a Conversion error");
    };
    assert_eq!(field, "IntCount");
    assert_eq!(raw, "three");
    assert_eq!(target, NativeType::Integer);
}

#[test]
fn test_date_rejects_malformed_input() {
    assert!(coerce_to_native("D", "31/12/1999", NativeType::Date).is_err());
    assert!(coerce_to_native("D", "", NativeType::Date).is_err());
    assert!(coerce_to_native("D", "2024-02-30", NativeType::Date).is_err());
}

#[test]
fn test_id_autogeneration_unique_across_calls() {
    let mut seen = std::collections::HashSet::new();
    for _ in 0..50 {
        let Value::Id(id) = coerce_to_native("Id", "", NativeType::Id).unwrap() else {
            panic!("expected an Id value");
        };
        assert!(!id.is_empty());
        assert!(seen.insert(id), "generated ids must not repeat");
    }
}
