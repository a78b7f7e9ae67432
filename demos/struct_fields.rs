//! Rendering a Go struct declaration from fields.
//!
//! Run with: cargo run --example struct_fields

use gofield::{Field, Tag};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let omitempty = Tag::key_only("omitempty")?;

    let fields = vec![
        Field::new("ID", "int64", vec![Tag::new("json", "id")?])?,
        Field::new(
            "Name",
            "string",
            vec![Tag::new("json", "name")?, omitempty.clone()],
        )?,
        Field::new("Email", "*string", vec![omitempty])?,
        Field::untagged("internal", "bool")?,
    ];

    println!("type User struct {{");
    for field in &fields {
        println!("\t{}", field);
    }
    println!("}}");

    Ok(())
}
