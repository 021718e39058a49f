//! Index rebuilding
//!
//! Scans a directory for generated test cases and rewrites the include file
//! that registers each of them through the item macro.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Naming;
use crate::error::GenError;

/// Header written at the top of every index file
pub const INDEX_HEADER: &str = "/**\n * This file is auto-generated by vg-lite-testgen. Do not modify manually.\n */\n";

/// Result of rebuilding the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexReport {
    /// Index file that was written
    pub path: PathBuf,
    /// Identifiers listed in the index, in file order
    pub identifiers: Vec<String>,
}

/// Collect the identifiers of all test cases present in `dir`
///
/// Only the directory itself is scanned. Identifiers are sorted so the index
/// does not depend on directory listing order.
pub fn discover_cases(dir: &Path, naming: &Naming) -> Result<Vec<String>, GenError> {
    let pattern = naming.case_pattern();
    let mut identifiers = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| GenError::io(dir, e))? {
        let entry = entry.map_err(|e| GenError::io(dir, e))?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            debug!(name = ?file_name, "skipping non-UTF-8 entry");
            continue;
        };

        match pattern.captures(name).and_then(|caps| caps.get(1)) {
            Some(id) => {
                debug!(file = name, identifier = id.as_str(), "found test case");
                identifiers.push(id.as_str().to_string());
            }
            None => debug!(file = name, "ignoring entry"),
        }
    }

    identifiers.sort();
    Ok(identifiers)
}

/// Render the index file content for `identifiers`
pub fn render_index(naming: &Naming, identifiers: &[String]) -> String {
    let mut output = String::from(INDEX_HEADER);
    for id in identifiers {
        output.push_str(&naming.index_entry(id));
        output.push('\n');
    }
    output
}

/// Rewrite the index file in `dir` from the test cases currently on disk
pub fn rebuild_index(dir: &Path, naming: &Naming) -> Result<IndexReport, GenError> {
    let identifiers = discover_cases(dir, naming)?;
    let path = dir.join(&naming.index_file);

    fs::write(&path, render_index(naming, &identifiers)).map_err(|e| GenError::io(&path, e))?;

    info!(path = %path.display(), entries = identifiers.len(), "index rebuilt");
    Ok(IndexReport { path, identifiers })
}
