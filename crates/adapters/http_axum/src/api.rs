//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod stations;

use axum::Router;
use axum::routing::post;

use scangate_app::ports::ScannerRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<SR>() -> Router<AppState<SR>>
where
    SR: ScannerRepository + Send + Sync + 'static,
{
    Router::new().route(
        "/stations/validate-scanner",
        post(stations::validate_scanner::<SR>),
    )
}
