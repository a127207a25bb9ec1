//! CodeSystem extraction
//!
//! A CodeSystem becomes exactly one inclusion group whose system is the
//! CodeSystem's own url. Unset metadata options fall back to the
//! CodeSystem's `url`, `name`, `description` and `id`; its `status`
//! describes the CodeSystem and is never copied.

use crate::error::{Error, Result};
use crate::options::{supplied, ConvertOptions, Metadata};
use vsgen_models::{
    CodeSystem, CodeSystemConcept, PublicationStatus, ValueSetConcept, ValueSetInclude,
};

/// Fill unset options from the CodeSystem's own metadata.
pub fn resolve_structured(options: &ConvertOptions, code_system: &CodeSystem) -> Metadata {
    let fallback = |explicit: &Option<String>, own: &Option<String>| {
        supplied(explicit).or_else(|| supplied(own))
    };

    Metadata {
        url: fallback(&options.url, &code_system.url),
        name: fallback(&options.name, &code_system.name),
        description: fallback(&options.description, &code_system.description),
        id: fallback(&options.id, &code_system.id),
        status: options.status.unwrap_or(PublicationStatus::Draft),
    }
}

/// Map the CodeSystem's top-level concepts into a single inclusion group.
///
/// Fails with [`Error::MissingConcepts`] when `concept` is absent or empty.
pub fn extract_include(code_system: &CodeSystem) -> Result<ValueSetInclude> {
    let concepts = code_system.concepts();
    if concepts.is_empty() {
        return Err(Error::MissingConcepts {
            system: code_system.url.clone(),
        });
    }

    let include = ValueSetInclude {
        system: code_system.url.clone(),
        concept: concepts.iter().map(to_value_set_concept).collect(),
    };

    tracing::debug!(
        system = include.system.as_deref().unwrap_or_default(),
        concepts = include.concept.len(),
        "extracted CodeSystem concepts"
    );
    Ok(include)
}

fn to_value_set_concept(concept: &CodeSystemConcept) -> ValueSetConcept {
    ValueSetConcept {
        code: concept.code.clone(),
        display: concept.display.clone(),
        definition: concept.definition.clone(),
    }
}
