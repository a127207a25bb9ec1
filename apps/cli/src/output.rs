//! Writing the serialized ValueSet

use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::cli::OutputTarget;

/// Write `document` to its target in one call
pub fn write_document(target: &OutputTarget, document: &str) -> anyhow::Result<()> {
    match target {
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(document.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write ValueSet to stdout")
        }
        OutputTarget::File(path) => write_file(path, document),
    }
}

fn write_file(path: &Path, document: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, document)
        .with_context(|| format!("Failed to write ValueSet to {}", path.display()))
}
