//! Shared type definitions for the survey backend.
//!
//! This crate holds the data model served by the survey API and the
//! codec that turns request bodies into records and records back into
//! JSON text.
//!
//! # Modules
//!
//! - [`ids`] -- Server-assigned survey identifiers
//! - [`scalar`] -- Tagged scalar values (string or number)
//! - [`record`] -- Ordered field mappings, survey records, stats payloads
//! - [`codec`] -- Permissive flat-object decoder and JSON encoder

pub mod codec;
pub mod ids;
pub mod record;
pub mod scalar;

// Re-export all public types at crate root for convenience.
pub use codec::{decode_fields, encode};
pub use ids::SurveyId;
pub use record::{BreakdownRow, Fields, Stats, SurveyRecord};
pub use scalar::{NumberLiteral, Scalar};
