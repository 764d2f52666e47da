//! # scangate-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** (`POST /api/stations/validate-scanner`) used by
//!   scanning stations to check that a scanner may operate there
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses with the
//!   status codes clients rely on
//!
//! ## Dependency rule
//! Depends on `scangate-app` (for port traits and services) and `scangate-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
