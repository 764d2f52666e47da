//! JSON REST handlers for stations.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use scangate_app::ports::ScannerRepository;
use scangate_domain::error::ScanGateError;
use scangate_domain::request::ScanRequest;

use crate::error::ApiError;
use crate::state::AppState;

/// Body keys read by the validate-scanner endpoint, in `ScanRequest` order.
const REQUIRED_FIELDS: [&str; 3] = ["stationId", "scannerId", "qrType"];

/// Response body when the scanner is accepted.
#[derive(Debug, Serialize)]
pub struct ValidateScannerBody {
    pub valid: bool,
}

/// Possible responses from the validate-scanner endpoint.
pub enum ValidateResponse {
    Ok(Json<ValidateScannerBody>),
}

impl IntoResponse for ValidateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// One required field as found in the request body.
#[derive(Debug, PartialEq, Eq)]
enum Field {
    /// Absent, or present with a falsy value (`null`, `false`, `0`, `""`).
    Missing,
    Text(String),
    /// Truthy but not a string.
    NotText,
}

impl Field {
    /// Read `key` from `body`. Anything that is not an object has no keys.
    fn read(body: &Value, key: &str) -> Self {
        match body.get(key) {
            None => Self::Missing,
            Some(value) if is_falsy(value) => Self::Missing,
            Some(Value::String(text)) => Self::Text(text.clone()),
            Some(_) => Self::NotText,
        }
    }

    fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::Missing | Self::NotText => None,
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n == 0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Turn a decoded body into a [`ScanRequest`].
///
/// Missing fields win over mistyped ones, so `{"stationId": 5}` is a
/// missing-fields error rather than an unexpected body.
fn scan_request(body: &Value) -> Result<ScanRequest, ApiError> {
    if body.is_null() {
        return Err(ApiError::UnexpectedBody("body is null".to_string()));
    }

    let fields = REQUIRED_FIELDS.map(|key| Field::read(body, key));
    if !fields.contains(&Field::Missing) {
        if let Some(key) = REQUIRED_FIELDS
            .iter()
            .zip(&fields)
            .find_map(|(key, field)| (*field == Field::NotText).then_some(key))
        {
            return Err(ApiError::UnexpectedBody(format!("`{key}` is not a string")));
        }
    }

    let [station_id, scanner_id, qr_type] = fields.map(Field::into_text);
    ScanRequest::from_fields(station_id, scanner_id, qr_type)
        .map_err(|err| ApiError::from(ScanGateError::from(err)))
}

/// `POST /api/stations/validate-scanner`
///
/// The body is decoded by hand so that it is accepted whatever the
/// `Content-Type` header says.
pub async fn validate_scanner<SR>(
    State(state): State<AppState<SR>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<ValidateResponse, ApiError>
where
    SR: ScannerRepository + Send + Sync + 'static,
{
    let body: Value = serde_json::from_slice(&body?)?;
    let request = scan_request(&body)?;

    let verdict = state.scanner_validation.validate(&request).await?;
    tracing::debug!(
        scanner_id = %request.scanner_id,
        station_id = %request.station_id,
        verdict = ?verdict,
        "scanner validated"
    );

    Ok(ValidateResponse::Ok(Json(ValidateScannerBody { valid: true })))
}
