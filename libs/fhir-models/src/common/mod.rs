//! Version-agnostic FHIR models
//!
//! Types that work across FHIR R4, R4B, and R5

pub mod code_system;
pub mod error;
pub mod status;
pub mod value_set;

// Re-export commonly used types
pub use code_system::*;
pub use error::{Error, Result};
pub use status::*;
pub use value_set::*;
