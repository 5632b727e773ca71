//!
//! The failed benchmark run.
//!

use std::path::PathBuf;

///
/// A failure recorded instead of aborting the benchmark run.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    /// The scenario file path.
    pub scenario: PathBuf,
    /// The variant name, unset if the scenario could not be loaded.
    pub variant: Option<String>,
    /// The module reference, unset if the scenario could not be loaded.
    pub module: Option<String>,
    /// The error message.
    pub error: String,
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.scenario.to_string_lossy())?;
        if let Some(variant) = self.variant.as_deref() {
            write!(f, " [{variant}]")?;
        }
        if let Some(module) = self.module.as_deref() {
            write!(f, " {module}")?;
        }
        write!(f, ": {}", self.error)
    }
}
