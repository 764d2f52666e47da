//! Shared application state for axum handlers.

use std::sync::Arc;

use scangate_app::ports::ScannerRepository;
use scangate_app::services::scanner_validation::ScannerValidationService;

/// Application state shared across all axum handlers.
///
/// Generic over the scanner repository to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<SR> {
    /// Scanner authorization service.
    pub scanner_validation: Arc<ScannerValidationService<SR>>,
}

impl<SR> Clone for AppState<SR> {
    fn clone(&self) -> Self {
        Self {
            scanner_validation: Arc::clone(&self.scanner_validation),
        }
    }
}

impl<SR> AppState<SR>
where
    SR: ScannerRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(scanner_validation: ScannerValidationService<SR>) -> Self {
        Self {
            scanner_validation: Arc::new(scanner_validation),
        }
    }
}
