//!
//! The scenario loading error.
//!

use std::path::PathBuf;

///
/// The scenario loading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the scenario file.
    #[error("Reading scenario file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the scenario file.
        path: PathBuf,
    },
    /// The scenario file does not match the expected schema.
    #[error("Scenario file {path:?} schema: {error}")]
    Schema {
        /// The underlying YAML error.
        error: serde_yaml::Error,
        /// The path to the scenario file.
        path: PathBuf,
    },
    /// The scenario has no shard blocks to take the payload from.
    #[error("Scenario file {path:?} schema: `shard_blocks` is empty")]
    NoShardBlocks {
        /// The path to the scenario file.
        path: PathBuf,
    },
    /// Error writing the payload side-channel file.
    #[error("Writing payload file {path:?}: {error}")]
    PayloadWriting {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the payload file.
        path: PathBuf,
    },
}
