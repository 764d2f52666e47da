//! Scan request — what a caller submits to have a scanner checked.

use crate::error::ValidationError;
use crate::id::{ScannerId, StationId};
use crate::scanner::ScanType;

/// A validated request to check a scanner against a station.
///
/// All three fields are guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub station_id: StationId,
    pub scanner_id: ScannerId,
    pub scan_type: ScanType,
}

impl ScanRequest {
    /// Build a request from raw, possibly absent, field values.
    ///
    /// A field counts as missing when it is `None` or the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] naming every absent field.
    pub fn from_fields(
        station_id: Option<String>,
        scanner_id: Option<String>,
        scan_type: Option<String>,
    ) -> Result<Self, ValidationError> {
        let station_id = station_id.filter(|v| !v.is_empty());
        let scanner_id = scanner_id.filter(|v| !v.is_empty());
        let scan_type = scan_type.filter(|v| !v.is_empty());

        match (station_id, scanner_id, scan_type) {
            (Some(station_id), Some(scanner_id), Some(scan_type)) => Ok(Self {
                station_id: StationId::new(station_id),
                scanner_id: ScannerId::new(scanner_id),
                scan_type: ScanType::new(scan_type),
            }),
            (station_id, scanner_id, scan_type) => {
                let fields = [
                    ("stationId", station_id.is_none()),
                    ("scannerId", scanner_id.is_none()),
                    ("qrType", scan_type.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, missing)| missing.then_some(name))
                .collect();
                Err(ValidationError::MissingFields { fields })
            }
        }
    }

    /// The registry lookup that would confirm this request.
    #[must_use]
    pub fn lookup(&self) -> ScannerLookup {
        ScannerLookup {
            scanner_id: self.scanner_id.clone(),
            station_id: self.station_id.clone(),
            scan_type: self.scan_type.clone(),
        }
    }

    /// Naming-convention check used when the registry cannot confirm the
    /// scanner: the scanner id must contain the station id and one of
    /// `entry` or `exit`.
    ///
    /// The requested scan type plays no part in this rule.
    #[must_use]
    pub fn matches_naming_convention(&self) -> bool {
        let scanner_id = self.scanner_id.as_str();
        scanner_id.contains(self.station_id.as_str())
            && (scanner_id.contains(ScanType::ENTRY) || scanner_id.contains(ScanType::EXIT))
    }
}

/// Filter for finding an active scanner registered at a station for a
/// given scan type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerLookup {
    pub scanner_id: ScannerId,
    pub station_id: StationId,
    pub scan_type: ScanType,
}
