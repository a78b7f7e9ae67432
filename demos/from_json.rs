//! Loading field definitions from JSON and rendering them.
//!
//! Run with: cargo run --example from_json

use gofield::Field;
use std::error::Error;

const SCHEMA: &str = r#"[
    {"name": "ID", "type": "uuid.UUID", "tags": [{"key": "json", "value": "id"}]},
    {"name": "Title", "type": "string", "tags": [{"key": "json", "value": "title"}, {"key": "validate", "value": "required"}]},
    {"name": "Body", "type": "string", "tags": null},
    {"name": "Labels", "type": "[]string"}
]"#;

fn main() -> Result<(), Box<dyn Error>> {
    let fields: Vec<Field> = serde_json::from_str(SCHEMA)?;

    for field in &fields {
        println!("{}", field);
    }

    // Validation runs during deserialization
    let invalid = serde_json::from_str::<Field>(r#"{"name": "Oops", "type": ""}"#);
    if let Err(err) = invalid {
        println!("rejected: {}", err);
    }

    Ok(())
}
