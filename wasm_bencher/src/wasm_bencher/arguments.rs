//!
//! The benchmark runner arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark runner arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Prints the module list and payload of every scenario.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppresses the status output and the interpreter output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Scenario files, run in the given order.
    /// If only one directory is provided, all its `*.yaml` files are run.
    /// Defaults to the `blake2b`, `keccak256` and `sha256` scenarios.
    pub scenarios: Vec<PathBuf>,

    /// Interpreter variant as `EXECUTABLE[=NAME]`, may be repeated.
    /// Defaults to `benchmark-interp-baseline=wabt-baseline` and
    /// `benchmark-interp-optimized=wabt-optimized`.
    #[arg(long = "variant")]
    pub variants: Vec<wasm_bencher::Variant>,

    /// Directory with the interpreter executables.
    /// If unset, the executables are looked up in `${PATH}`.
    #[arg(long)]
    pub interpreter_directory: Option<PathBuf>,

    /// Directory the scenario module references are resolved against.
    #[arg(long, default_value = wasm_bencher::OrchestratorConfig::DEFAULT_MODULES_DIRECTORY)]
    pub modules_directory: PathBuf,

    /// The payload file read by the interpreter.
    #[arg(long, default_value = wasm_bencher::Scenario::DEFAULT_PAYLOAD_PATH)]
    pub payload_path: PathBuf,

    /// The name of the interpreter report row.
    #[arg(long, default_value = wasm_bencher::ReportLine::DEFAULT_TAG)]
    pub report_tag: String,

    /// Records failed runs and continues instead of aborting.
    #[arg(short, long)]
    pub keep_going: bool,
}

impl Arguments {
    ///
    /// Validates the arguments.
    ///
    pub fn validate(arguments: Self) -> anyhow::Result<Self> {
        if arguments.quiet && arguments.verbose {
            anyhow::bail!("Verbose and quiet output are mutually exclusive");
        }
        if arguments.report_tag.is_empty() || arguments.report_tag.contains(char::is_whitespace) {
            anyhow::bail!(
                "Report tag `{}` must be a non-empty word",
                arguments.report_tag
            );
        }
        Ok(arguments)
    }

    ///
    /// Returns the scenario paths, expanding a single directory argument.
    ///
    pub fn scenario_paths(&self) -> anyhow::Result<Vec<PathBuf>> {
        match self.scenarios.as_slice() {
            [] => Ok(wasm_bencher::DEFAULT_SCENARIOS
                .iter()
                .map(PathBuf::from)
                .collect()),
            [directory] if directory.is_dir() => {
                let resolution_pattern = format!("{}/*.yaml", directory.to_string_lossy());
                let mut paths: Vec<PathBuf> = glob::glob(resolution_pattern.as_str())?
                    .filter_map(Result::ok)
                    .collect();
                if paths.is_empty() {
                    anyhow::bail!("No `*.yaml` scenario files found in {directory:?}");
                }
                paths.sort();
                Ok(paths)
            }
            scenarios => Ok(scenarios.to_vec()),
        }
    }
}
