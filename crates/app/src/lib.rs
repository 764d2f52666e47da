//! # scangate-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ScannerRepository` — look up registered scanners
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ScannerValidationService` — decide whether a scanner may operate at
//!     a station, consulting the registry first and the naming convention
//!     second, as allowed by the configured fallback policy
//!
//! ## Dependency rule
//! Depends on `scangate-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
