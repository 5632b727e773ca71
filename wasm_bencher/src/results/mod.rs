//!
//! The benchmark results collection.
//!

pub mod failure;
pub mod record;

use colored::Colorize;

use self::failure::Failure;
use self::record::Record;

type TimeStamp = chrono::DateTime<chrono::Utc>;

///
/// The benchmark results collection.
///
/// Records are kept in the order they were measured.
///
#[derive(Debug, Clone)]
pub struct Results {
    /// The successful measurements.
    pub records: Vec<Record>,
    /// The failures recorded in the keep-going mode.
    pub failures: Vec<Failure>,
    /// The time the benchmark run started.
    pub start: TimeStamp,
    /// The time the benchmark run finished.
    pub end: Option<TimeStamp>,
}

impl Default for Results {
    fn default() -> Self {
        Self::new()
    }
}

impl Results {
    ///
    /// Creates an empty collection with the start time set to now.
    ///
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            failures: Vec::new(),
            start: chrono::Utc::now(),
            end: None,
        }
    }

    ///
    /// Appends a measurement.
    ///
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    ///
    /// Appends a failure.
    ///
    pub fn push_failure(&mut self, failure: Failure) {
        self.failures.push(failure);
    }

    ///
    /// Sets the end time to now.
    ///
    pub fn finish(&mut self) {
        self.end = Some(chrono::Utc::now());
    }

    ///
    /// Whether no failures have been recorded.
    ///
    pub fn is_successful(&self) -> bool {
        self.failures.is_empty()
    }

    ///
    /// Prints the full collection.
    ///
    pub fn print(&self) {
        println!();
        println!(
            "{:<16} {:<24} {:<32} {:>12} {:>12} {:>10}",
            "Variant", "Scenario", "Module", "Time, s", "CPU, s", "Iterations"
        );
        for record in self.records.iter() {
            println!(
                "{:<16} {:<24} {:<32} {:>12.6} {:>12.6} {:>10}",
                record.variant,
                record.scenario.to_string_lossy(),
                record.module,
                record.time,
                record.cpu_time,
                record.iterations,
            );
        }

        if !self.failures.is_empty() {
            println!();
            for failure in self.failures.iter() {
                println!("    {} {failure}", "Failed".bright_red().bold());
            }
        }

        let elapsed = self
            .end
            .map(|end| (end - self.start).num_milliseconds() as f64 / 1000.0)
            .unwrap_or_default();
        println!();
        println!(
            "    {} {} measured, {} failed in {elapsed:.3}s",
            "Finished".bright_green().bold(),
            self.records.len(),
            self.failures.len(),
        );
    }
}
