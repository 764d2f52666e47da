//! Scanner repository port — read access to registered scanners.

use std::future::Future;

use scangate_domain::error::ScanGateError;
use scangate_domain::request::ScannerLookup;
use scangate_domain::scanner::Scanner;

/// Repository for querying registered [`Scanner`]s.
pub trait ScannerRepository {
    /// Find the active scanner matching every field of `lookup`.
    ///
    /// Returns `Ok(None)` when no such scanner exists, and
    /// [`ScanGateError::Storage`] when the query could not be run.
    fn find_authorized(
        &self,
        lookup: &ScannerLookup,
    ) -> impl Future<Output = Result<Option<Scanner>, ScanGateError>> + Send;
}
