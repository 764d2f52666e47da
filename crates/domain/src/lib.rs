//! # scangate-domain
//!
//! Pure domain model for the scangate scanner authorization service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Scanners** (devices bound to a station with an entry/exit type)
//! - Define **Scan requests** (the three fields a caller submits) and the
//!   lookup they translate into
//! - Define the **naming-convention rule** used when the registry cannot
//!   confirm a scanner, and the **fallback policy** deciding when it applies
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod policy;
pub mod request;
pub mod scanner;
