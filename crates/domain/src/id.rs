//! Typed identifier newtypes over opaque strings.
//!
//! Scanner and station identifiers are assigned by the provisioning system
//! and carry no structure this crate relies on, except for the textual
//! checks made by the naming-convention rule.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the identifier is the empty string.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a [`Scanner`](crate::scanner::Scanner).
    ScannerId
);

define_id!(
    /// Identifier of a station a scanner is attached to.
    StationId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_inner_value() {
        let id = ScannerId::new("ST1-entry-01");
        assert_eq!(id.to_string(), "ST1-entry-01");
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let id = StationId::new("ST1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"ST1\"");
    }

    #[test]
    fn should_compare_by_value() {
        assert_eq!(ScannerId::from("a"), ScannerId::new(String::from("a")));
        assert_ne!(StationId::from("a"), StationId::from("b"));
    }

    #[test]
    fn should_report_empty_identifier() {
        assert!(StationId::new("").is_empty());
        assert!(!StationId::new("ST1").is_empty());
    }
}
