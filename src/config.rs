//! Naming conventions for templates, generated test cases and the index
//!
//! Every fixed file name the generator touches lives in [`Naming`]. The
//! defaults match the vg_lite test suite layout; a TOML file can override any
//! subset of them:
//!
//! ```toml
//! [naming]
//! case_prefix = "gpu_test_case_"
//! item_macro = "CASE"
//! ```

use std::path::Path;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a naming configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// File naming conventions shared by the instantiator and the index rebuilder
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Naming {
    /// Template the test cases are copied from
    pub template_file: String,
    /// File name prefix of every generated test case
    pub case_prefix: String,
    /// File name extension of every generated test case, including the dot
    pub case_extension: String,
    /// Literal token in the template replaced by the identifier
    pub placeholder: String,
    /// Generated include file listing all test cases
    pub index_file: String,
    /// Macro wrapped around each identifier in the index
    pub item_macro: String,
}

/// TOML structure for deserializing config files
#[derive(Deserialize)]
struct TomlConfig {
    #[serde(default)]
    naming: Naming,
}

impl Default for Naming {
    fn default() -> Self {
        Self {
            template_file: "_vg_lite_test_case_template.c".to_string(),
            case_prefix: "vg_lite_test_case_".to_string(),
            case_extension: ".c".to_string(),
            placeholder: "template".to_string(),
            index_file: "vg_lite_test_case.inc".to_string(),
            item_macro: "ITEM_DEF".to_string(),
        }
    }
}

impl Naming {
    /// Create naming conventions with the default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load naming conventions from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load naming conventions from a TOML string
    ///
    /// Fields missing from the `[naming]` table keep their defaults.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        Ok(parsed.naming)
    }

    pub fn with_template_file(mut self, name: impl Into<String>) -> Self {
        self.template_file = name.into();
        self
    }

    pub fn with_case_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.case_prefix = prefix.into();
        self
    }

    pub fn with_case_extension(mut self, extension: impl Into<String>) -> Self {
        self.case_extension = extension.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_index_file(mut self, name: impl Into<String>) -> Self {
        self.index_file = name.into();
        self
    }

    pub fn with_item_macro(mut self, name: impl Into<String>) -> Self {
        self.item_macro = name.into();
        self
    }

    /// File name of the test case generated for `identifier`
    pub fn case_file_name(&self, identifier: &str) -> String {
        format!("{}{}{}", self.case_prefix, identifier, self.case_extension)
    }

    /// Pattern matching a whole generated test case file name
    ///
    /// The single capture group holds the identifier.
    pub fn case_pattern(&self) -> Regex {
        let pattern = format!(
            r"^{}(\w+){}$",
            regex::escape(&self.case_prefix),
            regex::escape(&self.case_extension)
        );
        Regex::new(&pattern).expect("Escaped case pattern should be a valid regex")
    }

    /// Identifier embedded in `file_name`, if it names a generated test case
    pub fn case_identifier<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        self.case_pattern()
            .captures(file_name)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Index line registering `identifier`
    pub fn index_entry(&self, identifier: &str) -> String {
        format!("{}({})", self.item_macro, identifier)
    }
}
