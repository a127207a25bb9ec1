//! Metadata defaulting for flat code lists
//!
//! Resolution order matters: `id` first, since `url` and `name` fall back
//! to it.

use crate::options::{supplied, ConvertOptions, Metadata};
use std::path::Path;
use vsgen_models::PublicationStatus;

/// File extension that marks a flat code list
pub const FLAT_EXTENSION: &str = ".csv";

/// Resolve ValueSet metadata for a flat list read from `input`.
pub fn resolve_flat(options: &ConvertOptions, input: &Path) -> Metadata {
    let id = supplied(&options.id).unwrap_or_else(|| id_from_path(input));
    let url = supplied(&options.url)
        .unwrap_or_else(|| canonical_url(&options.canonical_base, &id));
    let name = supplied(&options.name).unwrap_or_else(|| id.clone());

    Metadata {
        url: Some(url),
        name: Some(name),
        description: supplied(&options.description),
        status: options.status.unwrap_or(PublicationStatus::Active),
        id: Some(id),
    }
}

/// Base file name with the flat extension removed
pub fn id_from_path(input: &Path) -> String {
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_name.strip_suffix(FLAT_EXTENSION) {
        Some(stem) => stem.to_string(),
        None => file_name,
    }
}

fn canonical_url(base: &str, id: &str) -> String {
    if base.is_empty() || base.ends_with('/') {
        format!("{base}{id}")
    } else {
        format!("{base}/{id}")
    }
}
