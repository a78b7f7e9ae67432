//! Go struct fields.
//!
//! A [`Field`] is one line of a Go struct body: a name, a type, and an
//! optional backtick-quoted list of [`Tag`]s.
//!
//! ```text
//! Name string `json:"name" omitempty`
//! ID   int64
//! ```
//!
//! Joining fields into a struct body (indentation, alignment, newlines) is left
//! to the caller.

use crate::{Error, Result, Tag};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// A Go struct field with a required name and type and zero or more tags.
///
/// Tags keep the order they were supplied in, which is also the order they
/// render in.
///
/// # Examples
///
/// ```rust
/// use gofield::{Field, Tag};
///
/// let field = Field::new(
///     "Name",
///     "string",
///     vec![
///         Tag::new("json", "name").unwrap(),
///         Tag::key_only("omitempty").unwrap(),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(field.render(), r#"Name string `json:"name" omitempty`"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawField")]
pub struct Field {
    name: String,
    #[serde(rename = "type")]
    type_descriptor: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<Tag>,
}

impl Field {
    /// Creates a field with the given name, type and tags.
    ///
    /// `tags` accepts anything iterable over [`Tag`]: a `Vec`, an array, or
    /// `None::<Tag>` when there are no tags at all. An empty or absent list
    /// simply produces a field without tags.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyFieldName`] if `name` is empty, otherwise
    /// [`Error::EmptyFieldType`] if `type_descriptor` is empty.
    pub fn new<I>(
        name: impl Into<String>,
        type_descriptor: impl Into<String>,
        tags: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = Tag>,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyFieldName);
        }

        let type_descriptor = type_descriptor.into();
        if type_descriptor.is_empty() {
            return Err(Error::EmptyFieldType);
        }

        Ok(Field {
            name,
            type_descriptor,
            tags: tags.into_iter().collect(),
        })
    }

    /// Creates a field without tags.
    ///
    /// # Errors
    ///
    /// Same as [`Field::new`].
    pub fn untagged(name: impl Into<String>, type_descriptor: impl Into<String>) -> Result<Self> {
        Self::new(name, type_descriptor, Vec::new())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the type exactly as given, e.g. `string` or `*time.Time`.
    #[must_use]
    pub fn type_descriptor(&self) -> &str {
        &self.type_descriptor
    }

    /// Returns the tags in insertion order. Empty when the field has none.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Renders the field as a single line of Go source.
    ///
    /// The backtick block is only written when the field has tags, so an
    /// untagged field renders as `name type` with nothing trailing.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        f.write_char(' ')?;
        f.write_str(&self.type_descriptor)?;

        if let Some((first, rest)) = self.tags.split_first() {
            f.write_str(" `")?;
            write!(f, "{first}")?;
            for tag in rest {
                write!(f, " {tag}")?;
            }
            f.write_char('`')?;
        }

        Ok(())
    }
}

#[derive(Deserialize)]
struct RawField {
    name: String,
    #[serde(rename = "type")]
    type_descriptor: String,
    // `null` and a missing key both mean "no tags"
    #[serde(default)]
    tags: Option<Vec<Tag>>,
}

impl TryFrom<RawField> for Field {
    type Error = Error;

    fn try_from(raw: RawField) -> Result<Self> {
        Field::new(raw.name, raw.type_descriptor, raw.tags.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: &str = "fieldName";
    const TYPE: &str = "fieldType";

    fn key_value() -> Tag {
        Tag::new("key", "value").unwrap()
    }

    #[test]
    fn test_new_field() {
        let field = Field::new(NAME, TYPE, vec![key_value()]).unwrap();
        assert_eq!(field.name(), NAME);
        assert_eq!(field.type_descriptor(), TYPE);
        assert_eq!(field.tags(), &[key_value()]);
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(Field::new("", TYPE, Vec::new()), Err(Error::EmptyFieldName));
    }

    #[test]
    fn test_empty_type() {
        assert_eq!(Field::new(NAME, "", Vec::new()), Err(Error::EmptyFieldType));
    }

    #[test]
    fn test_name_checked_before_type() {
        assert_eq!(Field::untagged("", ""), Err(Error::EmptyFieldName));
    }

    #[test]
    fn test_absent_tags() {
        let field = Field::new(NAME, TYPE, None::<Tag>).unwrap();
        assert!(field.tags().is_empty());
    }

    #[test]
    fn test_render_no_tags() {
        let field = Field::untagged(NAME, TYPE).unwrap();
        assert_eq!(field.render(), format!("{} {}", NAME, TYPE));
    }

    #[test]
    fn test_render_one_tag() {
        let field = Field::new(NAME, TYPE, [key_value()]).unwrap();
        assert_eq!(field.render(), r#"fieldName fieldType `key:"value"`"#);
    }

    #[test]
    fn test_render_multiple_tags() {
        let tags = vec![
            Tag::new("keyOne", "valueOne").unwrap(),
            Tag::key_only("keyTwo").unwrap(),
        ];
        let field = Field::new(NAME, TYPE, tags.clone()).unwrap();

        let expected = format!("{} {} `{} {}`", NAME, TYPE, tags[0], tags[1]);
        assert_eq!(field.render(), expected);
    }

    #[test]
    fn test_render_matches_display() {
        let field = Field::new(NAME, TYPE, [key_value()]).unwrap();
        assert_eq!(field.render(), format!("{}", field));
    }
}
