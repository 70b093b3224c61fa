use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifiers issued by the blog API are opaque strings (cuid-style).
/// They are carried verbatim and only checked for emptiness.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::invalid_id(concat!(
                        stringify!($name),
                        " cannot be empty"
                    )));
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
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = DomainError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

define_id!(PostId);
define_id!(ViewerId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_opaque_strings() {
        let id = PostId::new("clx9a0b1c0000abcd").unwrap();
        assert_eq!(id.as_str(), "clx9a0b1c0000abcd");
        assert_eq!(id.to_string(), "clx9a0b1c0000abcd");
    }

    #[test]
    fn rejects_blank_ids() {
        assert!(matches!(PostId::new(""), Err(DomainError::InvalidId(_))));
        assert!(matches!(ViewerId::new("   "), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn serializes_transparently() {
        let id = ViewerId::new("user-1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"user-1\"");
        let back: ViewerId = serde_json::from_str("\"user-1\"").unwrap();
        assert_eq!(back, id);
    }
}
