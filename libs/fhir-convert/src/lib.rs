//! CodeSystem and flat code list to ValueSet conversion
//!
//! Two input shapes produce the same output document:
//!
//! - A FHIR CodeSystem (JSON). Its concepts become one `compose.include`
//!   whose system is the CodeSystem url. A CodeSystem without concepts is
//!   rejected.
//! - A flat delimited list (`code,system,display`, first line is a header).
//!   Codes are grouped into one `compose.include` per distinct system, in
//!   first-seen order.
//!
//! # Example
//!
//! ```rust
//! use std::path::Path;
//! use vsgen_convert::{convert_flat, ConvertOptions};
//!
//! let csv = "code,system,display\nA,http://sys,Alpha\nC,http://other,Gamma\n";
//! let vs = convert_flat(csv, Path::new("letters.csv"), &ConvertOptions::default()).unwrap();
//!
//! assert_eq!(vs.id.as_deref(), Some("letters"));
//! assert_eq!(vs.includes().len(), 2);
//! ```

pub mod assemble;
pub mod defaults;
pub mod error;
pub mod flat;
pub mod grouping;
pub mod options;
pub mod pipeline;
pub mod structured;

pub use error::{Error, Result};
pub use options::{ConvertOptions, Metadata, DEFAULT_CANONICAL_BASE};
pub use pipeline::{
    convert_code_system, convert_code_system_str, convert_file, convert_flat,
    default_output_path, InputKind,
};
