//! Drives the admin engine end to end against the in-memory store:
//! register two entities, create, list, edit, and delete records the way
//! a presentation tier would, entirely through entity names and raw
//! form text.
//!
//! Run with: cargo run --example admin_demo

use entadmin::prelude::*;
use std::collections::HashMap;

entadmin::administrable! {
    #[derive(Debug)]
    pub struct SampleModel("SampleModels") {
        "Id" => id: Id,
        "Name" => name: Text,
        "IntCount" => int_count: Integer,
        "DecimalCount" => decimal_count: Decimal,
        "BoolValue" => bool_value: Boolean,
        "DateValue" => date_value: Date,
    }
}

entadmin::administrable! {
    #[derive(Debug)]
    pub struct Customer("Customers") {
        "Id" => id: Id,
        "Name" => name: Text,
        "Vip" => vip: Boolean,
    }
}

fn form(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::main]
async fn main() -> entadmin::Result<()> {
    let catalog = SchemaCatalog::new()
        .with_entity::<SampleModel>()?
        .with_entity::<Customer>()?;
    let editor = EntityEditor::new(catalog, MemoryStore::new());

    println!("Administrable entities: {:?}\n", editor.list_entities());

    // What an empty creation form looks like.
    let blank = editor.default_record("SampleModels")?;
    for field in &blank.records[0] {
        println!("  {} -> {} widget", field.name, field.widget);
    }
    println!();

    // Create two records; note the comma decimal and the missing Id.
    editor
        .create(
            "SampleModels",
            &form(&[
                ("Name", "first"),
                ("IntCount", "3"),
                ("DecimalCount", "12,50"),
                ("BoolValue", "on"),
                ("DateValue", "2025-08-01"),
            ]),
        )
        .await?;
    editor
        .create(
            "SampleModels",
            &form(&[("Name", "second"), ("IntCount", "8")]),
        )
        .await?;

    let all = editor.get_all("SampleModels").await?;
    all.print();
    println!();

    // Edit the first record through its generated id.
    let id = all.records[0]
        .iter()
        .find(|f| f.name == "Id")
        .and_then(|f| f.value.clone())
        .expect("created records carry an Id");
    editor
        .update(
            "SampleModels",
            &form(&[("Id", id.as_str()), ("Name", "first, renamed"), ("IntCount", "4")]),
        )
        .await?;

    let one = editor.get_by_id("SampleModels", &id).await?;
    one.print();
    println!();

    // A bad field aborts the whole create, field-scoped.
    let err = editor
        .create("SampleModels", &form(&[("IntCount", "not-a-number")]))
        .await
        .unwrap_err();
    println!("Rejected create: {}\n", err);

    // The second entity works through the same by-name surface.
    editor
        .create("Customers", &form(&[("Name", "ACME"), ("Vip", "on")]))
        .await?;
    editor.get_all("Customers").await?.print();
    println!();

    editor.delete("SampleModels", &id).await?;
    println!(
        "After delete, {} record(s) remain",
        editor.get_all("SampleModels").await?.record_count()
    );

    Ok(())
}
