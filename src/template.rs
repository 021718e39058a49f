//! Template instantiation
//!
//! Copies the template file to a new test case, replacing the placeholder
//! token with the test case identifier.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Naming;
use crate::confirm::Confirm;
use crate::error::GenError;

/// Outcome of instantiating a test case
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instantiation {
    /// The test case file was written
    Created { path: PathBuf, overwritten: bool },
    /// The target existed and overwriting was declined; nothing was written
    Declined { path: PathBuf },
}

/// Replace every literal occurrence of `placeholder` in `content` with `identifier`
///
/// An empty placeholder leaves the content untouched.
pub fn substitute(content: &str, placeholder: &str, identifier: &str) -> String {
    if placeholder.is_empty() {
        return content.to_string();
    }
    content.replace(placeholder, identifier)
}

/// Prompt shown before overwriting an existing test case
pub fn overwrite_prompt(file_name: &str) -> String {
    format!(
        "File '{}' already exists. Do you want to overwrite it? (yes/no): ",
        file_name
    )
}

/// Generate the test case file for `identifier` inside `dir`
///
/// Fails with [`GenError::MissingTemplate`] when the template is absent. When
/// the target already exists, `confirm` decides whether it is overwritten.
pub fn instantiate(
    dir: &Path,
    naming: &Naming,
    identifier: &str,
    confirm: &mut dyn Confirm,
) -> Result<Instantiation, GenError> {
    let template_path = dir.join(&naming.template_file);
    if !template_path.exists() {
        debug!(path = %template_path.display(), "template missing");
        return Err(GenError::MissingTemplate {
            path: template_path,
        });
    }

    let file_name = naming.case_file_name(identifier);
    let target = dir.join(&file_name);

    let overwritten = target.exists();
    if overwritten {
        let accepted = confirm
            .confirm(&overwrite_prompt(&file_name))
            .map_err(|e| GenError::io(&target, e))?;
        if !accepted {
            debug!(path = %target.display(), "overwrite declined");
            return Ok(Instantiation::Declined { path: target });
        }
    }

    let template =
        fs::read_to_string(&template_path).map_err(|e| GenError::io(&template_path, e))?;
    let content = substitute(&template, &naming.placeholder, identifier);
    fs::write(&target, content).map_err(|e| GenError::io(&target, e))?;

    info!(path = %target.display(), overwritten, "test case written");
    Ok(Instantiation::Created {
        path: target,
        overwritten,
    })
}
