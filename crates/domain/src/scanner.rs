//! Scanner — a QR scanning device attached to a station.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ScanGateError, ValidationError};
use crate::id::{ScannerId, StationId};

/// Direction a scanner records, usually `entry` or `exit`.
///
/// Kept as an opaque string: callers may submit any value and it is matched
/// against the stored scanner type verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanType(String);

impl ScanType {
    pub const ENTRY: &'static str = "entry";
    pub const EXIT: &'static str = "exit";

    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn entry() -> Self {
        Self::new(Self::ENTRY)
    }

    #[must_use]
    pub fn exit() -> Self {
        Self::new(Self::EXIT)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScanType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A scanner registered against a station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scanner {
    pub id: ScannerId,
    pub station_id: StationId,
    pub is_active: bool,
    pub scan_type: ScanType,
}

impl Scanner {
    /// Create a builder for constructing a [`Scanner`].
    #[must_use]
    pub fn builder() -> ScannerBuilder {
        ScannerBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ScanGateError::Validation`] when the id or station id is empty.
    pub fn validate(&self) -> Result<(), ScanGateError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyIdentifier("id").into());
        }
        if self.station_id.is_empty() {
            return Err(ValidationError::EmptyIdentifier("station_id").into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Scanner`].
#[derive(Debug, Default)]
pub struct ScannerBuilder {
    id: Option<ScannerId>,
    station_id: Option<StationId>,
    is_active: Option<bool>,
    scan_type: Option<ScanType>,
}

impl ScannerBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<ScannerId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn station_id(mut self, station_id: impl Into<StationId>) -> Self {
        self.station_id = Some(station_id.into());
        self
    }

    #[must_use]
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    #[must_use]
    pub fn scan_type(mut self, scan_type: impl Into<ScanType>) -> Self {
        self.scan_type = Some(scan_type.into());
        self
    }

    /// Consume the builder, validate, and return a [`Scanner`].
    ///
    /// Scanners are active and of type `entry` unless told otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ScanGateError::Validation`] if the id or station id is
    /// missing or empty.
    pub fn build(self) -> Result<Scanner, ScanGateError> {
        let scanner = Scanner {
            id: self.id.unwrap_or_else(|| ScannerId::new("")),
            station_id: self.station_id.unwrap_or_else(|| StationId::new("")),
            is_active: self.is_active.unwrap_or(true),
            scan_type: self.scan_type.unwrap_or_else(ScanType::entry),
        };
        scanner.validate()?;
        Ok(scanner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_active_entry_scanner_by_default() {
        let scanner = Scanner::builder()
            .id("S1")
            .station_id("ST1")
            .build()
            .unwrap();
        assert!(scanner.is_active);
        assert_eq!(scanner.scan_type, ScanType::entry());
    }

    #[test]
    fn should_return_validation_error_when_id_missing() {
        let result = Scanner::builder().station_id("ST1").build();
        assert!(matches!(
            result,
            Err(ScanGateError::Validation(ValidationError::EmptyIdentifier(
                "id"
            )))
        ));
    }

    #[test]
    fn should_return_validation_error_when_station_missing() {
        let result = Scanner::builder().id("S1").build();
        assert!(matches!(
            result,
            Err(ScanGateError::Validation(ValidationError::EmptyIdentifier(
                "station_id"
            )))
        ));
    }

    #[test]
    fn should_keep_unknown_scan_type_verbatim() {
        let scanner = Scanner::builder()
            .id("S1")
            .station_id("ST1")
            .scan_type("transfer")
            .build()
            .unwrap();
        assert_eq!(scanner.scan_type.as_str(), "transfer");
    }

    #[test]
    fn should_display_conventional_directions() {
        assert_eq!(ScanType::entry().to_string(), "entry");
        assert_eq!(ScanType::exit().to_string(), "exit");
    }
}
