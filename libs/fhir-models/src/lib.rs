//! FHIR terminology models
//!
//! This crate provides the strongly-typed Rust structures the converter
//! reads and writes.
//!
//! # Module Organization
//!
//! - `common`: Version-agnostic models that work across FHIR R4, R4B, and R5
//!
//! # Example
//!
//! ```rust
//! use vsgen_models::common::CodeSystem;
//! use serde_json::json;
//!
//! let cs_json = json!({
//!     "resourceType": "CodeSystem",
//!     "url": "http://example.org/fhir/CodeSystem/colors",
//!     "status": "active",
//!     "concept": [{ "code": "red", "display": "Red" }]
//! });
//!
//! let cs: CodeSystem = serde_json::from_value(cs_json).unwrap();
//! assert_eq!(cs.url.as_deref(), Some("http://example.org/fhir/CodeSystem/colors"));
//! assert_eq!(cs.concepts()[0].code, "red");
//! ```

pub mod common;

// Re-export commonly used types
pub use common::*;
