//!
//! The benchmark orchestrator.
//!

#[cfg(test)]
mod tests;

pub mod error;

use std::path::Path;
use std::path::PathBuf;

use colored::Colorize;

use crate::process::Invocation;
use crate::process::Runner;
use crate::report::ReportLine;
use crate::results::failure::Failure;
use crate::results::record::Record;
use crate::results::Results;
use crate::scenario::Scenario;
use crate::variant::Variant;

use self::error::Error;

///
/// What to do when a single run fails.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the whole benchmark run.
    #[default]
    FailFast,
    /// Record the failure and continue with the next run.
    KeepGoing,
}

///
/// The orchestrator settings.
///
#[derive(Debug, Clone)]
pub struct Config {
    /// The directory module references are resolved against.
    pub modules_directory: PathBuf,
    /// The payload side-channel file.
    pub payload_path: PathBuf,
    /// The expected report tag.
    pub report_tag: String,
    /// The failure policy.
    pub policy: FailurePolicy,
    /// Whether the status output is suppressed.
    pub quiet: bool,
    /// Whether the scenario details are printed.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            modules_directory: PathBuf::from(Self::DEFAULT_MODULES_DIRECTORY),
            payload_path: PathBuf::from(Scenario::DEFAULT_PAYLOAD_PATH),
            report_tag: ReportLine::DEFAULT_TAG.to_owned(),
            policy: FailurePolicy::default(),
            quiet: false,
            verbose: false,
        }
    }
}

impl Config {
    /// The default directory with WebAssembly modules.
    pub const DEFAULT_MODULES_DIRECTORY: &'static str = "wasm";
}

///
/// Runs every module of every scenario with every variant.
///
pub struct Orchestrator<R> {
    /// The process runner.
    runner: R,
    /// The settings.
    config: Config,
}

impl<R> Orchestrator<R>
where
    R: Runner,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(runner: R, config: Config) -> Self {
        Self { runner, config }
    }

    ///
    /// Benchmarks the scenarios in the given order.
    ///
    /// Each scenario is loaded once, which rewrites the payload file, and then
    /// all variants are run against it before the next scenario is loaded.
    /// Records are ordered as scenario, then variant, then module.
    ///
    pub fn run_all(
        &mut self,
        scenario_paths: &[PathBuf],
        variants: &[Variant],
    ) -> Result<Results, Error> {
        let mut results = Results::new();

        for path in scenario_paths.iter() {
            if !self.config.quiet {
                println!(
                    "    {} {}",
                    "Loading".bright_green().bold(),
                    path.to_string_lossy()
                );
            }
            let scenario = match Scenario::load(path, self.config.payload_path.as_path()) {
                Ok(scenario) => scenario,
                Err(error) if self.config.policy == FailurePolicy::KeepGoing => {
                    self.print_failure(&error);
                    results.push_failure(Failure {
                        scenario: path.to_owned(),
                        variant: None,
                        module: None,
                        error: error.to_string(),
                    });
                    continue;
                }
                Err(error) => return Err(error.into()),
            };
            if self.config.verbose && !self.config.quiet {
                println!("    {} {:?}", "Modules".bright_white().bold(), scenario.modules);
                println!("    {} {}", "Payload".bright_white().bold(), scenario.payload);
            }

            for variant in variants.iter() {
                for module in scenario.modules.iter() {
                    match self.run_module(&scenario, variant, module) {
                        Ok(record) => results.push(record),
                        Err(error) if self.config.policy == FailurePolicy::KeepGoing => {
                            self.print_failure(&error);
                            results.push_failure(Failure {
                                scenario: scenario.path.clone(),
                                variant: Some(variant.name.clone()),
                                module: Some(module.clone()),
                                error: error.to_string(),
                            });
                        }
                        Err(error) => return Err(error),
                    }
                }
            }
        }

        results.finish();
        Ok(results)
    }

    ///
    /// Runs a single module and extracts its timing.
    ///
    fn run_module(
        &mut self,
        scenario: &Scenario,
        variant: &Variant,
        module: &str,
    ) -> Result<Record, Error> {
        let invocation = Invocation::new(
            variant.executable.clone(),
            vec![self.module_path(module).to_string_lossy().into_owned()],
        );
        if !self.config.quiet {
            println!("    {} {invocation}", "Running".bright_green().bold());
        }

        let output = self.runner.run(&invocation)?;
        if !output.is_success() {
            return Err(Error::ExitStatus {
                invocation: invocation.to_string(),
                exit_code: output.exit_code,
            });
        }
        let report = ReportLine::extract(output.lines.as_slice(), self.config.report_tag.as_str())
            .map_err(|error| Error::Report {
                invocation: invocation.to_string(),
                error,
            })?;

        if !self.config.quiet {
            println!(
                "    {} {module} [{}]: {:.6}s",
                "Measured".bright_green().bold(),
                variant.name,
                report.time,
            );
        }
        Ok(Record::new(
            report,
            module.to_owned(),
            scenario.path.clone(),
            variant.name.clone(),
        ))
    }

    ///
    /// Resolves a module reference against the modules directory.
    ///
    fn module_path(&self, module: &str) -> PathBuf {
        let module = Path::new(module);
        if module.is_absolute() {
            module.to_path_buf()
        } else {
            self.config.modules_directory.join(module)
        }
    }

    ///
    /// Prints a failure skipped by the keep-going policy.
    ///
    fn print_failure<E>(&self, error: &E)
    where
        E: std::fmt::Display,
    {
        if !self.config.quiet {
            println!("    {} {error}", "Failed".bright_red().bold());
        }
    }
}
