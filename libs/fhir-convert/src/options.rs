//! Caller-supplied conversion options and resolved ValueSet metadata

use crate::flat::DEFAULT_DELIMITER;
use vsgen_models::PublicationStatus;

/// Base used to synthesize a canonical url for flat lists without `--url`
pub const DEFAULT_CANONICAL_BASE: &str = "http://example.org/fhir/ValueSet/";

/// Explicit overrides for the output metadata plus parsing knobs.
///
/// `None` means "not supplied"; each input path fills those from its own
/// fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub url: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub id: Option<String>,
    pub status: Option<PublicationStatus>,
    pub canonical_base: String,
    pub delimiter: u8,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            url: None,
            name: None,
            description: None,
            id: None,
            status: None,
            canonical_base: DEFAULT_CANONICAL_BASE.to_string(),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl ConvertOptions {
    pub fn with_status(mut self, status: PublicationStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Metadata of the ValueSet after defaulting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub id: Option<String>,
    pub url: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: PublicationStatus,
}

/// Treat empty strings as unset, the way a missing CLI value is
pub(crate) fn supplied(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
