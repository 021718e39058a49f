//! vg-lite-testgen - scaffolding for vg_lite GPU test cases
//!
//! This library creates test case sources from a template and keeps the
//! generated include file, which registers every test case through
//! `ITEM_DEF(name)`, in sync with the files on disk.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use vg_lite_testgen::{run, Naming};
//!
//! let mut never = |_: &str| false;
//! let report = run(Path::new("."), &Naming::default(), Some("blit"), &mut never).unwrap();
//! println!("{} test cases indexed", report.index.identifiers.len());
//! ```

pub mod config;
pub mod confirm;
pub mod error;
pub mod index;
pub mod logging;
pub mod template;

pub use config::{ConfigError, Naming};
pub use confirm::{Confirm, LinePrompt};
pub use error::GenError;
pub use index::{rebuild_index, IndexReport};
pub use template::{instantiate, substitute, Instantiation};

use std::path::{Path, PathBuf};

/// What happened to the requested test case during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    /// The file was generated or overwritten
    Created { path: PathBuf, overwritten: bool },
    /// The file existed and overwriting was declined
    Declined { path: PathBuf },
    /// No template was found, so nothing was generated
    MissingTemplate { path: PathBuf },
}

impl From<Instantiation> for CaseOutcome {
    fn from(inst: Instantiation) -> Self {
        match inst {
            Instantiation::Created { path, overwritten } => {
                CaseOutcome::Created { path, overwritten }
            }
            Instantiation::Declined { path } => CaseOutcome::Declined { path },
        }
    }
}

/// Summary of a complete run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Set when an identifier was given
    pub case: Option<CaseOutcome>,
    /// The rebuilt index
    pub index: IndexReport,
}

/// Generate the test case for `identifier` (if any), then rebuild the index
///
/// A missing template is reported in the returned [`CaseOutcome`] rather than
/// as an error, and the index is rebuilt regardless. An empty identifier is
/// treated like no identifier.
pub fn run(
    dir: &Path,
    naming: &Naming,
    identifier: Option<&str>,
    confirm: &mut dyn Confirm,
) -> Result<RunReport, GenError> {
    let case = match identifier.filter(|id| !id.is_empty()) {
        Some(id) => match instantiate(dir, naming, id, confirm) {
            Ok(inst) => Some(inst.into()),
            Err(GenError::MissingTemplate { path }) => Some(CaseOutcome::MissingTemplate { path }),
            Err(e) => return Err(e),
        },
        None => None,
    };

    let index = rebuild_index(dir, naming)?;
    Ok(RunReport { case, index })
}
