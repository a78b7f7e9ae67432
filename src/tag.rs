//! Go struct tags.
//!
//! A [`Tag`] is one `key:"value"` entry of a struct tag, following the
//! convention established by Go's `reflect.StructTag`. The value is optional;
//! a tag with an empty value renders as the bare key (`omitempty`).
//!
//! ## Escaping
//!
//! Only the double quote is escaped when rendering a value, since it is the
//! one character that collides with the surrounding quotes:
//!
//! ```rust
//! use gofield::Tag;
//!
//! let tag = Tag::new("KEY", r#"VA"LUE"#).unwrap();
//! assert_eq!(tag.render(), r#"KEY:"VA\"LUE""#);
//! ```
//!
//! Backslashes, newlines and every other character pass through untouched.
//! A value containing a literal backslash may therefore be read differently by
//! a real struct-tag parser.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// A Go struct tag made of a required key and an optional value.
///
/// Tags are immutable once built. They are plain owned values, so the same tag
/// can be cloned into as many [`Field`](crate::Field)s as needed.
///
/// # Examples
///
/// ```rust
/// use gofield::Tag;
///
/// let json = Tag::new("json", "name").unwrap();
/// assert_eq!(json.to_string(), r#"json:"name""#);
///
/// let flag = Tag::key_only("omitempty").unwrap();
/// assert_eq!(flag.to_string(), "omitempty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTag")]
pub struct Tag {
    key: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    value: String,
}

impl Tag {
    /// Creates a tag with the given key and value.
    ///
    /// The key must be non-empty. The value may be empty, which means the tag
    /// has no value and renders as the bare key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTagKey`] if `key` is empty.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(Error::EmptyTagKey);
        }

        Ok(Tag {
            key,
            value: value.into(),
        })
    }

    /// Creates a tag that has a key and no value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTagKey`] if `key` is empty.
    pub fn key_only(key: impl Into<String>) -> Result<Self> {
        Self::new(key, String::new())
    }

    /// Returns the tag key. Never empty.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the tag value exactly as given; may be empty.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn has_value(&self) -> bool {
        !self.value.is_empty()
    }

    /// Renders the tag as Go source: `key` or `key:"value"`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)?;

        if self.has_value() {
            f.write_str(":\"")?;
            write_escaped(f, &self.value)?;
            f.write_char('"')?;
        }

        Ok(())
    }
}

#[inline]
fn write_escaped<W: Write>(out: &mut W, value: &str) -> fmt::Result {
    for ch in value.chars() {
        match ch {
            '"' => out.write_str("\\\"")?,
            _ => out.write_char(ch)?,
        }
    }
    Ok(())
}

#[derive(Deserialize)]
struct RawTag {
    key: String,
    #[serde(default)]
    value: String,
}

impl TryFrom<RawTag> for Tag {
    type Error = Error;

    fn try_from(raw: RawTag) -> Result<Self> {
        Tag::new(raw.key, raw.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "KEY";
    const VALUE: &str = "VALUE";

    #[test]
    fn test_new_tag() {
        let tag = Tag::new(KEY, VALUE).unwrap();
        assert_eq!(tag.key(), KEY);
        assert_eq!(tag.value(), VALUE);
        assert!(tag.has_value());
    }

    #[test]
    fn test_new_tag_empty_key() {
        assert_eq!(Tag::new("", VALUE), Err(Error::EmptyTagKey));
        assert_eq!(Tag::new("", ""), Err(Error::EmptyTagKey));
        assert_eq!(Tag::key_only(""), Err(Error::EmptyTagKey));
    }

    #[test]
    fn test_render_key_only() {
        let tag = Tag::new(KEY, "").unwrap();
        assert!(!tag.has_value());
        assert_eq!(tag.render(), tag.key());
    }

    #[test]
    fn test_render_with_value() {
        let tag = Tag::new(KEY, VALUE).unwrap();
        assert_eq!(tag.render(), format!(r#"{}:"{}""#, KEY, VALUE));
    }

    #[test]
    fn test_render_escapes_quotes() {
        let tag = Tag::new(KEY, r#"VA"LUE"#).unwrap();
        assert_eq!(tag.render(), r#"KEY:"VA\"LUE""#);

        let tag = Tag::new(KEY, r#""""#).unwrap();
        assert_eq!(tag.render(), r#"KEY:"\"\"""#);
    }

    #[test]
    fn test_render_leaves_other_characters() {
        let tag = Tag::new(KEY, "a\\b\nc\t").unwrap();
        assert_eq!(tag.render(), "KEY:\"a\\b\nc\t\"");
    }

    #[test]
    fn test_render_idempotent() {
        let tag = Tag::new("json", r#"na"me,omitempty"#).unwrap();
        assert_eq!(tag.render(), tag.render());
    }

    #[test]
    fn test_write_escaped_into_string() {
        let mut out = String::new();
        write_escaped(&mut out, r#"say "hi""#).unwrap();
        assert_eq!(out, r#"say \"hi\""#);
    }
}
