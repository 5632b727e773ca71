//!
//! The interpreter benchmark report.
//!
//! The interpreter prints a tabular report and its final row looks like:
//!
//! ```text
//! ------------------------------------------------------
//! Benchmark            Time             CPU   Iterations
//! ------------------------------------------------------
//! wabt_interp        734 us          732 us          859
//! ```
//!


pub mod error;

use once_cell::sync::Lazy;
use regex::Regex;

use self::error::Error;

/// The report row grammar: tag, wall time, CPU time, iterations.
static REPORT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(?P<tag>\S+)\s+(?P<time>[0-9]+) us\s+(?P<cpu_time>[0-9]+) us\s+(?P<iterations>[0-9]+)\s*$",
    )
    .expect("Always valid")
});

///
/// A parsed report row.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    /// The benchmark name printed in the first column.
    pub tag: String,
    /// The wall time in seconds.
    pub time: f64,
    /// The CPU time in seconds.
    pub cpu_time: f64,
    /// The number of iterations the interpreter has run.
    pub iterations: u64,
}

impl ReportLine {
    /// The default report tag printed by the `wabt` benchmark interpreter.
    pub const DEFAULT_TAG: &'static str = "wabt_interp";

    ///
    /// Extracts the report from the last line of the process output.
    ///
    /// Earlier lines are ignored even if they look like a report row.
    ///
    pub fn extract<S>(lines: &[S], tag: &str) -> Result<Self, Error>
    where
        S: AsRef<str>,
    {
        let line = lines.last().ok_or(Error::EmptyOutput)?;
        let report = Self::parse(line.as_ref())?;
        if report.tag != tag {
            return Err(Error::Tag {
                expected: tag.to_owned(),
                found: report.tag,
            });
        }
        Ok(report)
    }

    ///
    /// Parses a single report row.
    ///
    pub fn parse(line: &str) -> Result<Self, Error> {
        let captures = REPORT_LINE.captures(line).ok_or_else(|| Error::Mismatch {
            line: line.to_owned(),
        })?;

        let time = crate::duration::parse(format!("{}us", &captures["time"]).as_str())?;
        let cpu_time = crate::duration::parse(format!("{}us", &captures["cpu_time"]).as_str())?;
        let iterations = captures["iterations"]
            .parse::<u64>()
            .map_err(|_| Error::Iterations(captures["iterations"].to_owned()))?;

        Ok(Self {
            tag: captures["tag"].to_owned(),
            time,
            cpu_time,
            iterations,
        })
    }
}
