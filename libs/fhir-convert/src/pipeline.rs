//! End-to-end conversion: pick the input kind, load, convert, and derive
//! where the result should go.

use crate::assemble::assemble;
use crate::defaults::{resolve_flat, FLAT_EXTENSION};
use crate::error::{Error, Result};
use crate::flat::parse_flat;
use crate::grouping::group_by_system;
use crate::options::ConvertOptions;
use crate::structured::{extract_include, resolve_structured};
use std::fs;
use std::path::{Path, PathBuf};
use vsgen_models::{CodeSystem, ValueSet};

/// Suffix appended to a CodeSystem file stem for the derived output name
pub const VALUE_SET_SUFFIX: &str = "-value-set.json";

/// Input shapes the converter understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Delimited `code,system,display` list
    Flat,
    /// FHIR CodeSystem JSON
    CodeSystem,
}

impl InputKind {
    /// `.csv` (case-sensitive) is a flat list, anything else a CodeSystem
    pub fn detect(path: &Path) -> Self {
        if path.to_string_lossy().ends_with(FLAT_EXTENSION) {
            Self::Flat
        } else {
            Self::CodeSystem
        }
    }
}

/// Convert a flat code list. `source` is only used to derive metadata.
pub fn convert_flat(content: &str, source: &Path, options: &ConvertOptions) -> Result<ValueSet> {
    let records = parse_flat(content, options.delimiter)?;
    if records.is_empty() {
        return Err(Error::EmptyCodeList {
            path: source.to_path_buf(),
        });
    }

    let include = group_by_system(records);
    let metadata = resolve_flat(options, source);
    Ok(assemble(metadata, include))
}

/// Convert an already-loaded CodeSystem.
pub fn convert_code_system(
    code_system: &CodeSystem,
    options: &ConvertOptions,
) -> Result<ValueSet> {
    let include = extract_include(code_system)?;
    let metadata = resolve_structured(options, code_system);
    Ok(assemble(metadata, vec![include]))
}

/// Convert CodeSystem JSON text.
pub fn convert_code_system_str(content: &str, options: &ConvertOptions) -> Result<ValueSet> {
    let code_system: CodeSystem = serde_json::from_str(content)?;
    convert_code_system(&code_system, options)
}

/// Read `input` and convert it according to its [`InputKind`].
pub fn convert_file(input: &Path, options: &ConvertOptions) -> Result<ValueSet> {
    let content = fs::read_to_string(input).map_err(|source| Error::Io {
        path: input.to_path_buf(),
        source,
    })?;

    let kind = InputKind::detect(input);
    tracing::debug!(path = %input.display(), ?kind, bytes = content.len(), "loaded input");

    match kind {
        InputKind::Flat => convert_flat(&content, input, options),
        InputKind::CodeSystem => convert_code_system_str(&content, options),
    }
}

/// Output path used when `--output` is given without a value.
///
/// `codes.csv` becomes `codes.json`; `colors.json` becomes
/// `colors-value-set.json` so the input is never overwritten.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match InputKind::detect(input) {
        InputKind::Flat => format!("{stem}.json"),
        InputKind::CodeSystem => format!("{stem}{VALUE_SET_SUFFIX}"),
    };
    input.with_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vsgen_models::PublicationStatus;

    #[test]
    fn test_detect_is_case_sensitive() {
        assert_eq!(InputKind::detect(Path::new("a/codes.csv")), InputKind::Flat);
        assert_eq!(
            InputKind::detect(Path::new("codes.CSV")),
            InputKind::CodeSystem
        );
        assert_eq!(
            InputKind::detect(Path::new("cs.json")),
            InputKind::CodeSystem
        );
        assert_eq!(InputKind::detect(Path::new("cs")), InputKind::CodeSystem);
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("dir/codes.csv")),
            PathBuf::from("dir/codes.json")
        );
        assert_eq!(
            default_output_path(Path::new("dir/colors.json")),
            PathBuf::from("dir/colors-value-set.json")
        );
        assert_eq!(
            default_output_path(Path::new("colors")),
            PathBuf::from("colors-value-set.json")
        );
    }

    #[test]
    fn test_flat_scenario() {
        let content =
            "code,system,display\nA,http://sys,Alpha\nB,http://sys,Beta\nC,http://other,Gamma\n";
        let vs = convert_flat(content, Path::new("letters.csv"), &ConvertOptions::default())
            .unwrap();

        assert_eq!(vs.id.as_deref(), Some("letters"));
        assert_eq!(vs.name.as_deref(), Some("letters"));
        assert_eq!(vs.status, PublicationStatus::Active);

        let includes = vs.includes();
        assert_eq!(includes.len(), 2);
        assert_eq!(includes[0].system.as_deref(), Some("http://sys"));
        assert_eq!(includes[0].concept.len(), 2);
        assert_eq!(includes[0].concept[1].display.as_deref(), Some("Beta"));
        assert_eq!(includes[1].system.as_deref(), Some("http://other"));
        assert_eq!(includes[1].concept[0].code, "C");
    }

    #[test]
    fn test_flat_without_codes_fails() {
        let options = ConvertOptions::default();
        let err = convert_flat("code,system,display\n\n", Path::new("x.csv"), &options).unwrap_err();
        assert!(matches!(err, Error::EmptyCodeList { .. }));
    }

    #[test]
    fn test_code_system_scenario() {
        let content = r#"{"url": "http://sys", "concept": [{"code": "A", "display": "Alpha"}]}"#;
        let options = ConvertOptions::default().with_status(PublicationStatus::Draft);
        let vs = convert_code_system_str(content, &options).unwrap();

        assert_eq!(vs.url.as_deref(), Some("http://sys"));
        assert_eq!(vs.status, PublicationStatus::Draft);
        assert_eq!(vs.includes().len(), 1);
        assert_eq!(vs.includes()[0].concept[0].display.as_deref(), Some("Alpha"));
    }

    #[test]
    fn test_built_code_system() {
        let mut cs = CodeSystem::new("http://acme.org/cs");
        cs.concept = Some(vec![
            vsgen_models::CodeSystemConcept::new("a").with_display("A"),
            vsgen_models::CodeSystemConcept::new("b").with_definition("The b code"),
        ]);

        let vs = convert_code_system(&cs, &ConvertOptions::default()).unwrap();
        assert_eq!(vs.url.as_deref(), Some("http://acme.org/cs"));
        assert_eq!(vs.concept_count(), 2);
        assert_eq!(vs.includes()[0].concept[1].definition.as_deref(), Some("The b code"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = convert_code_system_str("{ not json", &ConvertOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
