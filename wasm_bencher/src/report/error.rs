//!
//! The benchmark report extraction error.
//!

///
/// The benchmark report extraction error.
///
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The process has printed nothing.
    #[error("Could not find the benchmark report line: the output is empty")]
    EmptyOutput,
    /// The last line does not follow `<tag> <int> us <int> us <int>`.
    #[error("Could not find the benchmark report line, the last line is `{line}`")]
    Mismatch {
        /// The last output line.
        line: String,
    },
    /// The report row belongs to another benchmark.
    #[error("Benchmark report tag mismatch: expected `{expected}`, found `{found}`")]
    Tag {
        /// The configured report tag.
        expected: String,
        /// The tag found in the report line.
        found: String,
    },
    /// A time field could not be converted.
    #[error("Benchmark report time field: {0}")]
    Duration(#[from] crate::duration::error::Error),
    /// The iteration count does not fit the counter.
    #[error("Benchmark report iteration count `{0}` is out of range")]
    Iterations(String),
}
