//! FHIR ValueSet model
//!
//! Output-side model: the metadata and `compose.include` groups the
//! converter produces. Field order matches the serialized document.

use super::error::Result;
use super::status::PublicationStatus;
use serde::{Deserialize, Serialize};

/// FHIR ValueSet resource
///
/// A set of codes drawn from one or more code systems.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValueSet {
    /// Resource type - always "ValueSet"
    #[serde(default = "default_resource_type")]
    pub resource_type: String,

    /// Logical id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Canonical identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Name (computer friendly)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Publication status
    pub status: PublicationStatus,

    /// Content logical definition (the "intension")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compose: Option<ValueSetCompose>,
}

fn default_resource_type() -> String {
    "ValueSet".to_string()
}

/// Content logical definition of the value set (intension)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ValueSetCompose {
    /// Include one or more codes from a code system
    pub include: Vec<ValueSetInclude>,
}

/// Include codes from a code system
///
/// An absent `system` and an empty-string `system` are different groups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValueSetInclude {
    /// The system the codes come from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// Specific codes from the system
    pub concept: Vec<ValueSetConcept>,
}

/// A concept selected from the system
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValueSetConcept {
    /// Code from the system
    pub code: String,

    /// Text to display for this code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Definition carried over from the source code system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

impl ValueSet {
    /// Create a new ValueSet with only a status
    pub fn new(status: PublicationStatus) -> Self {
        Self {
            resource_type: default_resource_type(),
            id: None,
            url: None,
            name: None,
            description: None,
            status,
            compose: None,
        }
    }

    /// Inclusion groups, empty when there is no compose
    pub fn includes(&self) -> &[ValueSetInclude] {
        self.compose
            .as_ref()
            .map(|c| c.include.as_slice())
            .unwrap_or_default()
    }

    /// Total number of concepts across all inclusion groups
    pub fn concept_count(&self) -> usize {
        self.includes().iter().map(|i| i.concept.len()).sum()
    }

    /// Pretty JSON with two-space indentation and a trailing newline
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

impl ValueSetInclude {
    pub fn new(system: Option<String>) -> Self {
        Self {
            system,
            concept: Vec::new(),
        }
    }
}

impl ValueSetConcept {
    pub fn new(code: impl Into<String>, display: Option<String>) -> Self {
        Self {
            code: code.into(),
            display,
            definition: None,
        }
    }
}
