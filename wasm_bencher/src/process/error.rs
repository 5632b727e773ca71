//!
//! The external process error.
//!

use std::path::PathBuf;

///
/// The external process error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The executable could not be started.
    #[error("{executable:?} subprocess spawning error: {error}")]
    Spawning {
        /// The underlying IO error.
        error: std::io::Error,
        /// The executable path.
        executable: PathBuf,
    },
    /// The output pipe could not be created.
    #[error("{executable:?} output pipe creating error: {error}")]
    Pipe {
        /// The underlying IO error.
        error: std::io::Error,
        /// The executable path.
        executable: PathBuf,
    },
    /// The output stream could not be read.
    #[error("{executable:?} output reading error: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The executable path.
        executable: PathBuf,
    },
    /// Waiting for the process exit has failed.
    #[error("{executable:?} subprocess waiting error: {error}")]
    Waiting {
        /// The underlying IO error.
        error: std::io::Error,
        /// The executable path.
        executable: PathBuf,
    },
}
