use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use uuid::Uuid;

/// Generates the newtype boilerplate shared by every non-empty string field.
macro_rules! non_empty_string {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> DomainResult<Self> {
                let value = value.into();
                if value.is_empty() {
                    return Err(DomainError::Validation(
                        concat!($field, " cannot be empty").into(),
                    ));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string!(
    /// Opaque, system-assigned article identifier.
    ArticleId,
    "article id"
);
non_empty_string!(ArticleAuthor, "author");
non_empty_string!(ArticleTitle, "title");
non_empty_string!(ArticleContent, "content");

impl From<Uuid> for ArticleId {
    fn from(value: Uuid) -> Self {
        Self(value.hyphenated().to_string())
    }
}
