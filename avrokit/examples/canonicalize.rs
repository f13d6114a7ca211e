//! Parses a schema document and prints its canonical form.
//!
//! Run with: `cargo run --example canonicalize -- path/to/schema.avsc`
//!
//! Reads standard input when no path is given. Set `RUST_LOG=debug` to see
//! parser diagnostics.

use avrokit::prelude::*;
use std::io::Read;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let document = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    match SchemaParser::new().parse_str(&document) {
        Ok(schema) => {
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(())
        }
        Err(err) => {
            eprintln!("[{:?}] {err}", err.kind());
            std::process::exit(1);
        }
    }
}
