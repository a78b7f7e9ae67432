//! # gofield
//!
//! Validated building blocks for generating Go struct declarations.
//!
//! ## What is in here?
//!
//! Code generators that emit Go types keep writing the same two fragments:
//!
//! - a **struct tag** such as `json:"name"` or `omitempty`, modelled by [`Tag`];
//! - a **struct field** such as ``Name string `json:"name" omitempty` ``,
//!   modelled by [`Field`].
//!
//! Both are immutable values. Construction validates the required parts and
//! returns a [`Result`]; once built, rendering cannot fail and always produces
//! the same text.
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! gofield = "0.1"
//! ```
//!
//! ### Building a field
//!
//! ```rust
//! use gofield::{Field, Tag};
//!
//! let field = Field::new(
//!     "Name",
//!     "string",
//!     vec![
//!         Tag::new("json", "name").unwrap(),
//!         Tag::new("omitempty", "").unwrap(),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(field.render(), r#"Name string `json:"name" omitempty`"#);
//! ```
//!
//! ### With the tags! macro
//!
//! ```rust
//! use gofield::{field, tags};
//!
//! let id = field("ID", "int64", tags!["json": "id", "db": "id"]?)?;
//! assert_eq!(id.to_string(), r#"ID int64 `json:"id" db:"id"`"#);
//! # Ok::<(), gofield::Error>(())
//! ```
//!
//! ### Loading field definitions
//!
//! `Tag` and `Field` implement serde's `Serialize` and `Deserialize`.
//! Deserialization runs the same validation as the constructors:
//!
//! ```rust
//! use gofield::Field;
//!
//! let field: Field = serde_json::from_str(
//!     r#"{"name": "CreatedAt", "type": "time.Time", "tags": [{"key": "json", "value": "created_at"}]}"#,
//! )
//! .unwrap();
//! assert_eq!(field.to_string(), r#"CreatedAt time.Time `json:"created_at"`"#);
//!
//! let invalid = serde_json::from_str::<Field>(r#"{"name": "", "type": "int"}"#);
//! assert!(invalid.is_err());
//! ```
//!
//! ## Rendering rules
//!
//! - A tag renders as `key` when its value is empty, otherwise `key:"value"`
//!   with every `"` in the value escaped as `\"`. Nothing else is escaped.
//! - A field renders as `name type`, followed by `` `tag tag ...` `` only when
//!   it has at least one tag.
//! - Output never carries a trailing newline or surrounding whitespace.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`struct_fields.rs`** - Rendering a whole struct from fields
//! - **`tag_macro.rs`** - Building tag lists with `tags!`
//! - **`from_json.rs`** - Loading field definitions with serde
//!
//! Run any example with: `cargo run --example <name>`

pub mod error;
pub mod field;
pub mod macros;
pub mod tag;

pub use error::{Error, Result};
pub use field::Field;
pub use tag::Tag;

/// Creates a [`Tag`] with the given key and value.
///
/// # Examples
///
/// ```rust
/// use gofield::tag;
///
/// assert_eq!(tag("json", "-").unwrap().to_string(), r#"json:"-""#);
/// ```
///
/// # Errors
///
/// Returns [`Error::EmptyTagKey`] if `key` is empty.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn tag(key: impl Into<String>, value: impl Into<String>) -> Result<Tag> {
    Tag::new(key, value)
}

/// Creates a [`Field`] with the given name, type and tags.
///
/// # Examples
///
/// ```rust
/// use gofield::field;
///
/// let field = field("Count", "int", None).unwrap();
/// assert_eq!(field.to_string(), "Count int");
/// ```
///
/// # Errors
///
/// Returns [`Error::EmptyFieldName`] if `name` is empty, otherwise
/// [`Error::EmptyFieldType`] if `type_descriptor` is empty.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn field<I>(name: impl Into<String>, type_descriptor: impl Into<String>, tags: I) -> Result<Field>
where
    I: IntoIterator<Item = Tag>,
{
    Field::new(name, type_descriptor, tags)
}
