//!
//! The WebAssembly interpreter benchmark runner library.
//!

pub mod duration;
pub mod orchestrator;
pub mod process;
pub mod report;
pub mod results;
pub mod scenario;
pub mod variant;

pub use crate::duration::error::Error as DurationError;
pub use crate::duration::parse as parse_duration;
pub use crate::orchestrator::error::Error as RunError;
pub use crate::orchestrator::Config as OrchestratorConfig;
pub use crate::orchestrator::FailurePolicy;
pub use crate::orchestrator::Orchestrator;
pub use crate::process::error::Error as ProcessError;
pub use crate::process::subprocess::Subprocess;
pub use crate::process::Invocation;
pub use crate::process::Output as ProcessOutput;
pub use crate::process::Runner;
pub use crate::report::error::Error as ReportFormatError;
pub use crate::report::ReportLine;
pub use crate::results::failure::Failure;
pub use crate::results::record::Record;
pub use crate::results::Results;
pub use crate::scenario::error::Error as ScenarioError;
pub use crate::scenario::Scenario;
pub use crate::variant::Variant;

/// The successful exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;

/// The scenarios benchmarked when none are given.
pub const DEFAULT_SCENARIOS: [&str; 12] = [
    "blake2b_0.yaml",
    "blake2b_64.yaml",
    "blake2b_256.yaml",
    "blake2b_1024.yaml",
    "keccak256_0.yaml",
    "keccak256_64.yaml",
    "keccak256_256.yaml",
    "keccak256_1024.yaml",
    "sha256_0.yaml",
    "sha256_64.yaml",
    "sha256_256.yaml",
    "sha256_1024.yaml",
];
