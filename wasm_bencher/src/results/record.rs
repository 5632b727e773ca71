//!
//! The benchmark run record.
//!

use std::path::PathBuf;

use crate::report::ReportLine;

///
/// The measurement of a single module run by a single variant.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// The wall time in seconds.
    pub time: f64,
    /// The CPU time in seconds.
    pub cpu_time: f64,
    /// The number of iterations the interpreter has run.
    pub iterations: u64,
    /// The module reference from the scenario.
    pub module: String,
    /// The scenario file path.
    pub scenario: PathBuf,
    /// The variant name.
    pub variant: String,
}

impl Record {
    ///
    /// Tags the report with its provenance.
    ///
    pub fn new(report: ReportLine, module: String, scenario: PathBuf, variant: String) -> Self {
        Self {
            time: report.time,
            cpu_time: report.cpu_time,
            iterations: report.iterations,
            module,
            scenario,
            variant,
        }
    }
}
