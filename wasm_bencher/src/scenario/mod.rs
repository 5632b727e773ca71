//!
//! The benchmark scenario.
//!


pub mod document;
pub mod error;

use std::path::Path;
use std::path::PathBuf;

use self::document::Document;
use self::error::Error;

///
/// The benchmark scenario.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// The scenario file path.
    pub path: PathBuf,
    /// The module references to benchmark, in the document order.
    pub modules: Vec<String>,
    /// The data of the first shard block.
    pub payload: String,
}

impl Scenario {
    /// The default payload side-channel file read by the interpreter.
    pub const DEFAULT_PAYLOAD_PATH: &'static str = "test_block_data.hex";

    ///
    /// Reads the scenario and writes its payload to `payload_path`, replacing
    /// the previous content.
    ///
    /// The file is closed before returning, so the interpreter started next
    /// always sees the payload of this scenario.
    ///
    pub fn load(path: &Path, payload_path: &Path) -> Result<Self, Error> {
        let scenario = Self::read(path)?;
        std::fs::write(payload_path, scenario.payload.as_bytes()).map_err(|error| {
            Error::PayloadWriting {
                error,
                path: payload_path.to_path_buf(),
            }
        })?;
        Ok(scenario)
    }

    ///
    /// Reads the scenario without touching the payload file.
    ///
    pub fn read(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path).map_err(|error| Error::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        let document: Document =
            serde_yaml::from_str(text.as_str()).map_err(|error| Error::Schema {
                error,
                path: path.to_path_buf(),
            })?;

        let payload = document
            .shard_blocks
            .into_iter()
            .next()
            .ok_or_else(|| Error::NoShardBlocks {
                path: path.to_path_buf(),
            })?
            .data;

        Ok(Self {
            path: path.to_path_buf(),
            modules: document.beacon_state.execution_scripts,
            payload,
        })
    }
}
