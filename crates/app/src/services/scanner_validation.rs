//! Scanner validation service — decides whether a scanner may operate at a
//! station for a given scan type.

use scangate_domain::error::{ScanGateError, UnauthorizedError};
use scangate_domain::policy::{FallbackPolicy, LookupMiss};
use scangate_domain::request::ScanRequest;

use crate::ports::ScannerRepository;

/// Which rule authorised a scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// An active scanner with the requested station and type is registered.
    Registered,
    /// The registry did not confirm it but the id follows the naming convention.
    NamingConvention,
}

/// Application service for scanner authorization checks.
pub struct ScannerValidationService<R> {
    repo: R,
    policy: FallbackPolicy,
}

impl<R: ScannerRepository> ScannerValidationService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R, policy: FallbackPolicy) -> Self {
        Self { repo, policy }
    }

    /// The fallback policy this service applies.
    pub fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    /// Check that the scanner in `request` may operate at its station.
    ///
    /// Registry failures are never propagated: they are logged and handled
    /// as a [`LookupMiss::StorageError`], leaving the fallback policy to
    /// decide whether the naming convention is consulted.
    ///
    /// # Errors
    ///
    /// Returns [`ScanGateError::Unauthorized`] when neither the registry nor
    /// a permitted naming-convention check accepts the scanner.
    pub async fn validate(&self, request: &ScanRequest) -> Result<Verdict, ScanGateError> {
        let miss = match self.repo.find_authorized(&request.lookup()).await {
            Ok(Some(_)) => return Ok(Verdict::Registered),
            Ok(None) => LookupMiss::NotFound,
            Err(err) => {
                tracing::warn!(
                    error = ?err,
                    scanner_id = %request.scanner_id,
                    station_id = %request.station_id,
                    policy = %self.policy,
                    "scanner lookup failed, treating as not found"
                );
                LookupMiss::StorageError
            }
        };

        if self.policy.permits(miss) && request.matches_naming_convention() {
            tracing::info!(
                scanner_id = %request.scanner_id,
                station_id = %request.station_id,
                miss = ?miss,
                "scanner accepted by naming convention"
            );
            return Ok(Verdict::NamingConvention);
        }

        tracing::debug!(
            scanner_id = %request.scanner_id,
            station_id = %request.station_id,
            scan_type = %request.scan_type,
            miss = ?miss,
            "scanner rejected"
        );
        Err(UnauthorizedError {
            scanner_id: request.scanner_id.clone(),
            station_id: request.station_id.clone(),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scangate_domain::request::ScannerLookup;
    use scangate_domain::scanner::Scanner;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryScannerRepo {
        store: Mutex<Vec<Scanner>>,
    }

    impl InMemoryScannerRepo {
        fn with(scanners: Vec<Scanner>) -> Self {
            Self {
                store: Mutex::new(scanners),
            }
        }
    }

    impl ScannerRepository for InMemoryScannerRepo {
        fn find_authorized(
            &self,
            lookup: &ScannerLookup,
        ) -> impl Future<Output = Result<Option<Scanner>, ScanGateError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store
                .iter()
                .find(|s| {
                    s.is_active
                        && s.id == lookup.scanner_id
                        && s.station_id == lookup.station_id
                        && s.scan_type == lookup.scan_type
                })
                .cloned();
            async { Ok(result) }
        }
    }

    struct UnreachableRepo;

    impl ScannerRepository for UnreachableRepo {
        fn find_authorized(
            &self,
            _lookup: &ScannerLookup,
        ) -> impl Future<Output = Result<Option<Scanner>, ScanGateError>> + Send {
            async {
                Err(ScanGateError::Storage(Box::new(std::io::Error::other(
                    "no such table: scanners",
                ))))
            }
        }
    }

    fn registered_store() -> InMemoryScannerRepo {
        InMemoryScannerRepo::with(vec![
            Scanner::builder()
                .id("S1")
                .station_id("ST1")
                .scan_type("entry")
                .build()
                .unwrap(),
        ])
    }

    fn request(station: &str, scanner: &str, scan_type: &str) -> ScanRequest {
        ScanRequest::from_fields(
            Some(station.to_string()),
            Some(scanner.to_string()),
            Some(scan_type.to_string()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn should_accept_registered_scanner() {
        let svc = ScannerValidationService::new(registered_store(), FallbackPolicy::default());
        let verdict = svc.validate(&request("ST1", "S1", "entry")).await.unwrap();
        assert_eq!(verdict, Verdict::Registered);
    }

    #[tokio::test]
    async fn should_reject_registered_scanner_with_other_type() {
        let svc = ScannerValidationService::new(registered_store(), FallbackPolicy::default());
        let result = svc.validate(&request("ST1", "S1", "exit")).await;
        assert!(matches!(result, Err(ScanGateError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn should_reject_inactive_scanner_without_convention_match() {
        let repo = InMemoryScannerRepo::with(vec![
            Scanner::builder()
                .id("S1")
                .station_id("ST1")
                .is_active(false)
                .build()
                .unwrap(),
        ]);
        let svc = ScannerValidationService::new(repo, FallbackPolicy::default());
        let result = svc.validate(&request("ST1", "S1", "entry")).await;
        assert!(matches!(result, Err(ScanGateError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn should_accept_by_convention_when_store_unreachable() {
        let svc = ScannerValidationService::new(UnreachableRepo, FallbackPolicy::default());
        let verdict = svc
            .validate(&request("ST1", "ST1-entry-scanner", "entry"))
            .await
            .unwrap();
        assert_eq!(verdict, Verdict::NamingConvention);
    }

    #[tokio::test]
    async fn should_reject_unrelated_id_when_store_unreachable() {
        let svc = ScannerValidationService::new(UnreachableRepo, FallbackPolicy::default());
        let result = svc.validate(&request("ST1", "unrelated", "entry")).await;
        assert!(matches!(result, Err(ScanGateError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn should_accept_by_convention_on_plain_miss_by_default() {
        let svc = ScannerValidationService::new(registered_store(), FallbackPolicy::default());
        let verdict = svc
            .validate(&request("ST1", "ST1-exit-02", "exit"))
            .await
            .unwrap();
        assert_eq!(verdict, Verdict::NamingConvention);
    }

    #[tokio::test]
    async fn should_reject_convention_match_when_fallback_disabled() {
        let svc = ScannerValidationService::new(UnreachableRepo, FallbackPolicy::Disabled);
        let result = svc
            .validate(&request("ST1", "ST1-entry-scanner", "entry"))
            .await;
        assert!(matches!(result, Err(ScanGateError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn should_reject_plain_miss_when_fallback_only_on_storage_error() {
        let svc =
            ScannerValidationService::new(registered_store(), FallbackPolicy::OnStorageError);
        let result = svc.validate(&request("ST1", "ST1-exit-02", "exit")).await;
        assert!(matches!(result, Err(ScanGateError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn should_accept_storage_error_when_fallback_only_on_storage_error() {
        let svc = ScannerValidationService::new(UnreachableRepo, FallbackPolicy::OnStorageError);
        let verdict = svc
            .validate(&request("ST1", "ST1-exit-02", "exit"))
            .await
            .unwrap();
        assert_eq!(verdict, Verdict::NamingConvention);
    }

    #[tokio::test]
    async fn should_report_scanner_and_station_in_rejection() {
        let svc = ScannerValidationService::new(UnreachableRepo, FallbackPolicy::default());
        let err = svc
            .validate(&request("ST1", "unrelated", "entry"))
            .await
            .unwrap_err();
        let ScanGateError::Unauthorized(err) = err else {
            panic!("expected unauthorized, got {err:?}");
        };
        assert_eq!(err.scanner_id.as_str(), "unrelated");
        assert_eq!(err.station_id.as_str(), "ST1");
    }
}
