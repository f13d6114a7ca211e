//! Maps a sample table description to a record schema.
//!
//! Run with: `cargo run --example table_schema`

use avrokit::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let columns = [
        Column::from_catalog("id", "bigint")?,
        Column::from_catalog("sku", "char")?.with_char_bytes(8),
        Column::from_catalog("title", "varchar")?,
        Column::from_catalog("price", "decimal")?.with_numeric(10, 2),
        Column::from_catalog("stock", "int")?.with_default("0"),
        Column::from_catalog("released", "date")?.nullable(true),
        Column::from_catalog("updated_at", "timestamp")?.with_default("2024-01-01 00:00:00"),
    ];

    let options = MappingOptions::new().namespace(Some("shop".to_string()));
    let record = table_to_record("products", &columns, &options)?;

    println!("{}", to_canonical_string(&Schema::record(record)));
    Ok(())
}
