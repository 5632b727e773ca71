//!
//! The benchmark runner binary.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(true) => wasm_bencher::EXIT_CODE_SUCCESS,
        Ok(false) => wasm_bencher::EXIT_CODE_FAILURE,
        Err(error) => {
            eprintln!("{error:?}");
            wasm_bencher::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
/// Returns whether every run has succeeded.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<bool> {
    let arguments = Arguments::validate(arguments)?;
    if !arguments.quiet {
        println!(
            "    {} {} v{}",
            "Starting".bright_green().bold(),
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION"),
        );
    }

    let scenario_paths = arguments.scenario_paths()?;
    let variants = if arguments.variants.is_empty() {
        wasm_bencher::Variant::defaults()
    } else {
        arguments.variants
    };
    let variants = variants
        .into_iter()
        .map(|variant| variant.resolve(arguments.interpreter_directory.as_deref()))
        .collect::<anyhow::Result<Vec<wasm_bencher::Variant>>>()?;

    let config = wasm_bencher::OrchestratorConfig {
        modules_directory: arguments.modules_directory,
        payload_path: arguments.payload_path,
        report_tag: arguments.report_tag,
        policy: if arguments.keep_going {
            wasm_bencher::FailurePolicy::KeepGoing
        } else {
            wasm_bencher::FailurePolicy::FailFast
        },
        quiet: arguments.quiet,
        verbose: arguments.verbose,
    };
    let runner = wasm_bencher::Subprocess::new(!arguments.quiet);
    let mut orchestrator = wasm_bencher::Orchestrator::new(runner, config);

    let results = orchestrator.run_all(scenario_paths.as_slice(), variants.as_slice())?;
    results.print();

    Ok(results.is_successful())
}
