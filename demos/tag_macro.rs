//! Building tag lists with the tags! macro.
//!
//! Run with: cargo run --example tag_macro

use gofield::{field, tags, Error};

fn main() -> Result<(), Error> {
    let columns = ["id", "created_at", "deleted_at"];

    for column in columns {
        let tags = tags!["db": column, "json": format!("{},omitempty", column)]?;
        let name = column
            .split('_')
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<String>();

        println!("{}", field(name, "string", tags)?);
    }

    // An empty key is rejected before anything is rendered
    if let Err(err) = tags!["json": "x", ""] {
        println!("rejected: {}", err);
    }

    Ok(())
}
