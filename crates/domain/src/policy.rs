//! Fallback policy — when the naming-convention rule may authorise a scanner.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Why the registry did not confirm a scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMiss {
    /// The query ran and found no matching active scanner.
    NotFound,
    /// The query itself failed (store unreachable, missing table, …).
    StorageError,
}

/// Decides whether the naming-convention rule runs after a [`LookupMiss`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Only registered scanners are accepted.
    Disabled,
    /// The rule runs only when the registry could not be queried.
    OnStorageError,
    /// The rule runs on any miss.
    #[default]
    OnMissOrStorageError,
}

impl FallbackPolicy {
    /// Whether the naming-convention rule may be applied after `miss`.
    #[must_use]
    pub fn permits(self, miss: LookupMiss) -> bool {
        match self {
            Self::Disabled => false,
            Self::OnStorageError => miss == LookupMiss::StorageError,
            Self::OnMissOrStorageError => true,
        }
    }
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str("disabled"),
            Self::OnStorageError => f.write_str("on_storage_error"),
            Self::OnMissOrStorageError => f.write_str("on_miss_or_storage_error"),
        }
    }
}

/// Returned when parsing an unknown [`FallbackPolicy`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fallback policy `{0}`")]
pub struct UnknownPolicy(pub String);

impl FromStr for FallbackPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disabled" => Ok(Self::Disabled),
            "on_storage_error" => Ok(Self::OnStorageError),
            "on_miss_or_storage_error" => Ok(Self::OnMissOrStorageError),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_fallback_on_any_miss() {
        let policy = FallbackPolicy::default();
        assert!(policy.permits(LookupMiss::NotFound));
        assert!(policy.permits(LookupMiss::StorageError));
    }

    #[test]
    fn should_never_permit_when_disabled() {
        assert!(!FallbackPolicy::Disabled.permits(LookupMiss::NotFound));
        assert!(!FallbackPolicy::Disabled.permits(LookupMiss::StorageError));
    }

    #[test]
    fn should_permit_only_storage_errors_when_on_storage_error() {
        assert!(!FallbackPolicy::OnStorageError.permits(LookupMiss::NotFound));
        assert!(FallbackPolicy::OnStorageError.permits(LookupMiss::StorageError));
    }

    #[test]
    fn should_parse_display_output() {
        for policy in [
            FallbackPolicy::Disabled,
            FallbackPolicy::OnStorageError,
            FallbackPolicy::OnMissOrStorageError,
        ] {
            assert_eq!(policy.to_string().parse::<FallbackPolicy>(), Ok(policy));
        }
    }

    #[test]
    fn should_reject_unknown_policy_name() {
        let err = "sometimes".parse::<FallbackPolicy>().unwrap_err();
        assert_eq!(err, UnknownPolicy("sometimes".to_string()));
    }

    #[test]
    fn should_deserialize_snake_case_name() {
        let policy: FallbackPolicy = serde_json::from_str("\"on_storage_error\"").unwrap();
        assert_eq!(policy, FallbackPolicy::OnStorageError);
    }
}
