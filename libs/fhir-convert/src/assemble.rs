//! ValueSet assembly

use crate::options::Metadata;
use vsgen_models::{ValueSet, ValueSetCompose, ValueSetInclude};

/// Combine resolved metadata and inclusion groups into a ValueSet.
///
/// Unset metadata stays `None` and is omitted when serialized.
pub fn assemble(metadata: Metadata, include: Vec<ValueSetInclude>) -> ValueSet {
    let Metadata {
        id,
        url,
        name,
        description,
        status,
    } = metadata;

    ValueSet {
        id,
        url,
        name,
        description,
        compose: Some(ValueSetCompose { include }),
        ..ValueSet::new(status)
    }
}
