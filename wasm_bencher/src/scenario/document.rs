//!
//! The scenario document schema.
//!
//! Only the fields consumed by the benchmark runner are described, the rest
//! of the document is ignored.
//!

///
/// The scenario document.
///
#[derive(Debug, serde::Deserialize)]
pub struct Document {
    /// The initial beacon state.
    pub beacon_state: BeaconState,
    /// The shard blocks to execute.
    pub shard_blocks: Vec<ShardBlock>,
}

///
/// The beacon state.
///
#[derive(Debug, serde::Deserialize)]
pub struct BeaconState {
    /// The WebAssembly module file names.
    pub execution_scripts: Vec<String>,
}

///
/// The shard block.
///
#[derive(Debug, serde::Deserialize)]
pub struct ShardBlock {
    /// The block data passed to the modules.
    pub data: String,
}
