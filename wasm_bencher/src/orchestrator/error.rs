//!
//! The benchmark run error.
//!

///
/// The benchmark run error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The scenario could not be loaded.
    #[error(transparent)]
    Scenario(#[from] crate::scenario::error::Error),
    /// The interpreter could not be run.
    #[error(transparent)]
    Process(#[from] crate::process::error::Error),
    /// The interpreter has exited with a non-zero code or by a signal.
    #[error("`{invocation}` has exited with {}", exit_status(.exit_code))]
    ExitStatus {
        /// The command line.
        invocation: String,
        /// The exit code, if any.
        exit_code: Option<i32>,
    },
    /// The interpreter output has no valid report line.
    #[error("`{invocation}`: {error}")]
    Report {
        /// The command line.
        invocation: String,
        /// The report extraction error.
        error: crate::report::error::Error,
    },
}

///
/// Describes the way the process has exited.
///
fn exit_status(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("code {code}"),
        None => "a signal".to_owned(),
    }
}
