//! Error types for tag and field construction.
//!
//! Every error is a "missing required input" condition detected while a
//! [`Tag`](crate::Tag) or [`Field`](crate::Field) is being built. Once a value
//! exists it is valid, so accessors and rendering never fail.
//!
//! ## Examples
//!
//! ```rust
//! use gofield::{Error, Field, Tag};
//!
//! assert_eq!(Tag::new("", "value").unwrap_err(), Error::EmptyTagKey);
//! assert_eq!(Field::untagged("", "").unwrap_err(), Error::EmptyFieldName);
//! assert_eq!(Field::untagged("Name", "").unwrap_err(), Error::EmptyFieldType);
//! ```

use thiserror::Error;

/// Represents all possible errors that can occur while building tags and fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// A tag was requested with a zero-length key
    #[error("no struct tag key provided")]
    EmptyTagKey,

    /// A field was requested with a zero-length name
    #[error("no field name provided")]
    EmptyFieldName,

    /// A field was requested with a zero-length type, but a non-empty name
    #[error("no field type provided")]
    EmptyFieldType,
}

pub type Result<T> = std::result::Result<T, Error>;
