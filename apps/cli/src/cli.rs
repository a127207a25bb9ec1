//! Command-line arguments

use clap::Parser;
use std::fmt;
use std::path::{Path, PathBuf};
use vsgen_convert::{default_output_path, ConvertOptions, DEFAULT_CANONICAL_BASE};
use vsgen_models::PublicationStatus;

/// Convert a FHIR CodeSystem (JSON) or a flat code list (`.csv`) into a ValueSet.
#[derive(Debug, Parser)]
#[command(name = "vsgen", version, about)]
pub struct Cli {
    /// Input file; `.csv` is read as a flat code list, anything else as a CodeSystem
    pub input: PathBuf,

    /// Write the ValueSet to a file instead of stdout. Without a value the
    /// path is derived from the input (`codes.csv` -> `codes.json`,
    /// `cs.json` -> `cs-value-set.json`)
    #[arg(short, long, num_args = 0..=1, value_name = "PATH")]
    pub output: Option<Option<PathBuf>>,

    /// Canonical url of the ValueSet
    #[arg(short, long, env = "VSGEN_URL")]
    pub url: Option<String>,

    /// Computer-friendly name of the ValueSet
    #[arg(short, long, env = "VSGEN_NAME")]
    pub name: Option<String>,

    /// Description of the ValueSet
    #[arg(short, long, env = "VSGEN_DESCRIPTION")]
    pub description: Option<String>,

    /// Logical id of the ValueSet
    #[arg(short, long, env = "VSGEN_ID")]
    pub id: Option<String>,

    /// Publication status [default: draft for CodeSystems, active for flat lists]
    #[arg(short, long, env = "VSGEN_STATUS", value_parser = parse_status)]
    pub status: Option<PublicationStatus>,

    /// Base for the url synthesized for flat lists without --url
    #[arg(long, env = "VSGEN_CANONICAL_BASE", default_value = DEFAULT_CANONICAL_BASE)]
    pub canonical_base: String,

    /// Field delimiter of flat lists (a single character, or `\t`)
    #[arg(long, env = "VSGEN_DELIMITER", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "VSGEN_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, env = "VSGEN_LOG_JSON")]
    pub log_json: bool,
}

/// Where the serialized ValueSet goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("<stdout>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Cli {
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            url: self.url.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            id: self.id.clone(),
            status: self.status,
            canonical_base: self.canonical_base.clone(),
            delimiter: self.delimiter,
        }
    }

    pub fn output_target(&self) -> OutputTarget {
        match &self.output {
            None => OutputTarget::Stdout,
            Some(Some(path)) => OutputTarget::File(path.clone()),
            Some(None) => OutputTarget::File(default_output_path(&self.input)),
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }
}

fn parse_status(value: &str) -> Result<PublicationStatus, String> {
    value.parse().map_err(|e: vsgen_models::Error| e.to_string())
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        b"\\t" => Ok(b'\t'),
        _ => Err(format!(
            "delimiter must be a single ASCII character, got '{value}'"
        )),
    }
}
