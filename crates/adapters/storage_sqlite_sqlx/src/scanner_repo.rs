//! `SQLite` implementation of [`ScannerRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use scangate_app::ports::ScannerRepository;
use scangate_domain::error::ScanGateError;
use scangate_domain::id::{ScannerId, StationId};
use scangate_domain::request::ScannerLookup;
use scangate_domain::scanner::{ScanType, Scanner};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Scanner`].
struct Wrapper(Scanner);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Scanner> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let station_id: String = row.try_get("station_id")?;
        let is_active: bool = row.try_get("is_active")?;
        let scanner_type: String = row.try_get("scanner_type")?;

        Ok(Self(Scanner {
            id: ScannerId::new(id),
            station_id: StationId::new(station_id),
            is_active,
            scan_type: ScanType::new(scanner_type),
        }))
    }
}

const SELECT_AUTHORIZED: &str = "SELECT id, station_id, is_active, scanner_type FROM scanners \
     WHERE id = ? AND station_id = ? AND is_active = 1 AND scanner_type = ? LIMIT 1";

/// `SQLite`-backed scanner repository.
pub struct SqliteScannerRepository {
    pool: SqlitePool,
}

impl SqliteScannerRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ScannerRepository for SqliteScannerRepository {
    fn find_authorized(
        &self,
        lookup: &ScannerLookup,
    ) -> impl Future<Output = Result<Option<Scanner>, ScanGateError>> + Send {
        let pool = self.pool.clone();
        let lookup = lookup.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_AUTHORIZED)
                .bind(lookup.scanner_id.as_str())
                .bind(lookup.station_id.as_str())
                .bind(lookup.scan_type.as_str())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }
}
