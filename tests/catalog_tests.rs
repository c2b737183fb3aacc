use entadmin::{AdminError, NativeType, SchemaCatalog, WidgetType};

entadmin::administrable! {
    #[derive(Debug)]
    pub struct Invoice("Invoices") {
        "Id" => id: Id,
        "Number" => number: Text,
        "Total" => total: Decimal,
    }
}

entadmin::administrable! {
    #[derive(Debug)]
    pub struct Customer("Customers") {
        "Id" => id: Id,
        "Name" => name: Text,
    }
}

// Opted out on purpose: declares no Id identity field.
entadmin::administrable! {
    #[derive(Debug)]
    pub struct Orphan("Orphans") {
        "Label" => label: Text,
    }
}

#[test]
fn test_list_entities_keeps_registration_order() {
    let catalog = SchemaCatalog::new()
        .with_entity::<Invoice>()
        .unwrap()
        .with_entity::<Customer>()
        .unwrap();

    assert_eq!(catalog.list_entities(), vec!["Invoices", "Customers"]);
    // Stable within the process lifetime.
    assert_eq!(catalog.list_entities(), vec!["Invoices", "Customers"]);
}

#[test]
fn test_duplicate_registration_is_refused() {
    let err = SchemaCatalog::new()
        .with_entity::<Invoice>()
        .unwrap()
        .with_entity::<Invoice>()
        .unwrap_err();
    assert!(matches!(err, AdminError::EntityExists(name) if name == "Invoices"));
}

#[test]
fn test_registration_without_identity_field_is_refused() {
    let err = SchemaCatalog::new().with_entity::<Orphan>().unwrap_err();
    assert!(matches!(err, AdminError::Validation(_)));
}

#[test]
fn test_describe_resolves_fields_in_declaration_order() {
    let catalog = SchemaCatalog::new().with_entity::<Invoice>().unwrap();
    let descriptor = catalog.describe("Invoices").unwrap();

    let names: Vec<&str> = descriptor.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["Id", "Number", "Total"]);

    let total = descriptor.field("Total").unwrap();
    assert_eq!(total.native(), NativeType::Decimal);
    assert_eq!(total.widget(), WidgetType::Number);
}

#[test]
fn test_describe_unknown_entity() {
    let catalog = SchemaCatalog::new().with_entity::<Invoice>().unwrap();
    let err = catalog.describe("NoSuchEntity").unwrap_err();
    assert!(matches!(err, AdminError::EntityNotFound(name) if name == "NoSuchEntity"));

    // Case-sensitive, exactly as registered.
    assert!(catalog.describe("invoices").is_err());
    assert!(!catalog.entity_exists("invoices"));
}
