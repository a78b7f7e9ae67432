/// Builds a `Result<Vec<Tag>>` from a list of keys with optional values.
///
/// Each entry is a key literal, optionally followed by `: value`. The first
/// empty key turns the whole list into `Err(Error::EmptyTagKey)`.
///
/// ```rust
/// use gofield::{tags, Field};
///
/// let tags = tags!["json": "name", "omitempty"].unwrap();
/// let field = Field::new("Name", "string", tags).unwrap();
/// assert_eq!(field.to_string(), r#"Name string `json:"name" omitempty`"#);
/// ```
#[macro_export]
macro_rules! tags {
    // Missing value
    (@value) => {
        ""
    };

    (@value $value:expr) => {
        $value
    };

    // Handle empty list
    () => {
        ::std::result::Result::<::std::vec::Vec<$crate::Tag>, $crate::Error>::Ok(::std::vec::Vec::new())
    };

    ($($key:literal $(: $value:expr)?),+ $(,)?) => {
        [$($crate::Tag::new($key, $crate::tags!(@value $($value)?))),+]
            .into_iter()
            .collect::<$crate::Result<::std::vec::Vec<$crate::Tag>>>()
    };
}
