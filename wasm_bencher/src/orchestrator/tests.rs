//!
//! The benchmark orchestrator tests.
//!

use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;

use super::error::Error;
use super::Config;
use super::FailurePolicy;
use super::Orchestrator;
use crate::process::error::Error as ProcessError;
use crate::process::Invocation;
use crate::process::Output;
use crate::process::Runner;
use crate::results::record::Record;
use crate::variant::Variant;

///
/// Answers every invocation with a canned report and remembers what it was asked.
///
struct StubRunner {
    /// The payload file, read at every invocation.
    payload_path: PathBuf,
    /// Canned outputs keyed by the module argument, the default report otherwise.
    outputs: HashMap<String, Output>,
    /// The invocations and the payload each one has seen.
    calls: Vec<(Invocation, String)>,
}

impl StubRunner {
    fn new(payload_path: &Path) -> Self {
        Self {
            payload_path: payload_path.to_path_buf(),
            outputs: HashMap::new(),
            calls: Vec::new(),
        }
    }

    fn report(microseconds: u64) -> Output {
        Output {
            lines: vec![
                "run benchmark...".to_owned(),
                "Benchmark            Time             CPU   Iterations".to_owned(),
                format!("wabt_interp  {microseconds} us  {microseconds} us  100"),
            ],
            exit_code: Some(0),
        }
    }
}

impl Runner for StubRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<Output, ProcessError> {
        let payload = std::fs::read_to_string(self.payload_path.as_path()).unwrap_or_default();
        self.calls.push((invocation.to_owned(), payload));
        let module = invocation.arguments[0].as_str();
        Ok(self
            .outputs
            .get(module)
            .cloned()
            .unwrap_or_else(|| Self::report(734)))
    }
}

fn write_scenario(directory: &Path, name: &str, modules: &[&str], data: &str) -> PathBuf {
    let path = directory.join(name);
    let content = format!(
        "beacon_state:\n  execution_scripts: [{}]\nshard_blocks:\n  - data: \"{data}\"\n",
        modules.join(", ")
    );
    std::fs::write(path.as_path(), content).expect("Failed to write scenario");
    path
}

fn config(directory: &Path, policy: FailurePolicy) -> Config {
    Config {
        modules_directory: PathBuf::from("wasm"),
        payload_path: directory.join("test_block_data.hex"),
        policy,
        quiet: true,
        ..Config::default()
    }
}

fn variants() -> Vec<Variant> {
    vec![
        Variant::new(PathBuf::from("interp-a"), "variant-a".to_owned()),
        Variant::new(PathBuf::from("interp-b"), "variant-b".to_owned()),
    ]
}

fn tags(records: &[Record]) -> Vec<(String, String, PathBuf)> {
    records
        .iter()
        .map(|record| {
            (
                record.variant.clone(),
                record.module.clone(),
                record.scenario.clone(),
            )
        })
        .collect()
}

#[test]
fn one_scenario_two_variants() {
    let directory = tempfile::tempdir().expect("Failed to create temp dir");
    let scenario = write_scenario(
        directory.path(),
        "sha256_64.yaml",
        &["module1.wasm", "module2.wasm"],
        "deadbeef",
    );
    let config = config(directory.path(), FailurePolicy::FailFast);
    let mut orchestrator =
        Orchestrator::new(StubRunner::new(config.payload_path.as_path()), config);

    let results = orchestrator
        .run_all(&[scenario.clone()], variants().as_slice())
        .expect("Benchmark run must succeed");

    assert_eq!(
        tags(results.records.as_slice()),
        vec![
            ("variant-a".to_owned(), "module1.wasm".to_owned(), scenario.clone()),
            ("variant-a".to_owned(), "module2.wasm".to_owned(), scenario.clone()),
            ("variant-b".to_owned(), "module1.wasm".to_owned(), scenario.clone()),
            ("variant-b".to_owned(), "module2.wasm".to_owned(), scenario.clone()),
        ]
    );
    for record in results.records.iter() {
        assert!((record.time - 0.000734).abs() < 1e-12);
        assert_eq!(record.iterations, 100);
    }
    assert!(results.is_successful());
    assert!(results.end.is_some());

    let invocations: Vec<String> = orchestrator
        .runner
        .calls
        .iter()
        .map(|(invocation, _)| invocation.to_string())
        .collect();
    assert_eq!(
        invocations,
        vec![
            "interp-a wasm/module1.wasm",
            "interp-a wasm/module2.wasm",
            "interp-b wasm/module1.wasm",
            "interp-b wasm/module2.wasm",
        ]
    );
}

#[test]
fn payload_follows_scenario() {
    let directory = tempfile::tempdir().expect("Failed to create temp dir");
    let first = write_scenario(directory.path(), "first.yaml", &["x.wasm"], "0011");
    let second = write_scenario(
        directory.path(),
        "second.yaml",
        &["x.wasm", "y.wasm"],
        "ffee",
    );
    let config = config(directory.path(), FailurePolicy::FailFast);
    let mut orchestrator =
        Orchestrator::new(StubRunner::new(config.payload_path.as_path()), config);

    orchestrator
        .run_all(&[first, second], variants().as_slice())
        .expect("Benchmark run must succeed");

    let payloads: Vec<&str> = orchestrator
        .runner
        .calls
        .iter()
        .map(|(_, payload)| payload.as_str())
        .collect();
    assert_eq!(payloads, vec!["0011", "0011", "ffee", "ffee", "ffee", "ffee"]);
}

#[test]
fn idempotent() {
    let directory = tempfile::tempdir().expect("Failed to create temp dir");
    let scenarios = vec![
        write_scenario(directory.path(), "a.yaml", &["m1.wasm", "m2.wasm"], "aa"),
        write_scenario(directory.path(), "b.yaml", &["m3.wasm"], "bb"),
    ];
    let config = config(directory.path(), FailurePolicy::FailFast);

    let mut first = Orchestrator::new(
        StubRunner::new(config.payload_path.as_path()),
        config.clone(),
    );
    let mut second = Orchestrator::new(
        StubRunner::new(config.payload_path.as_path()),
        config,
    );
    let first = first
        .run_all(scenarios.as_slice(), variants().as_slice())
        .expect("Benchmark run must succeed");
    let second = second
        .run_all(scenarios.as_slice(), variants().as_slice())
        .expect("Benchmark run must succeed");

    assert_eq!(first.records.len(), 6);
    assert_eq!(first.records, second.records);
    assert_eq!(first.failures, second.failures);
}

#[test]
fn module_absolute_path() {
    let directory = tempfile::tempdir().expect("Failed to create temp dir");
    let scenario = write_scenario(
        directory.path(),
        "abs.yaml",
        &["/opt/wasm/abs.wasm"],
        "00",
    );
    let config = config(directory.path(), FailurePolicy::FailFast);
    let mut orchestrator =
        Orchestrator::new(StubRunner::new(config.payload_path.as_path()), config);

    orchestrator
        .run_all(&[scenario], &variants()[..1])
        .expect("Benchmark run must succeed");
    assert_eq!(
        orchestrator.runner.calls[0].0.arguments,
        vec!["/opt/wasm/abs.wasm".to_owned()]
    );
}

#[test]
fn fail_fast_on_report() {
    let directory = tempfile::tempdir().expect("Failed to create temp dir");
    let scenario = write_scenario(
        directory.path(),
        "s.yaml",
        &["ok.wasm", "bad.wasm", "late.wasm"],
        "00",
    );
    let config = config(directory.path(), FailurePolicy::FailFast);
    let mut runner = StubRunner::new(config.payload_path.as_path());
    runner.outputs.insert(
        "wasm/bad.wasm".to_owned(),
        Output {
            lines: vec!["trap: unreachable executed".to_owned()],
            exit_code: Some(0),
        },
    );
    let mut orchestrator = Orchestrator::new(runner, config);

    let result = orchestrator.run_all(&[scenario], variants().as_slice());
    assert!(matches!(result, Err(Error::Report { .. })));
    assert_eq!(orchestrator.runner.calls.len(), 2);
}

#[test]
fn fail_fast_on_exit_code() {
    let directory = tempfile::tempdir().expect("Failed to create temp dir");
    let scenario = write_scenario(directory.path(), "s.yaml", &["crash.wasm"], "00");
    let config = config(directory.path(), FailurePolicy::FailFast);
    let mut runner = StubRunner::new(config.payload_path.as_path());
    let mut crashed = StubRunner::report(10);
    crashed.exit_code = None;
    runner.outputs.insert("wasm/crash.wasm".to_owned(), crashed);
    let mut orchestrator = Orchestrator::new(runner, config);

    let result = orchestrator.run_all(&[scenario], variants().as_slice());
    assert!(matches!(
        result,
        Err(Error::ExitStatus { exit_code: None, .. })
    ));
}

#[test]
fn fail_fast_on_scenario() {
    let directory = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = directory.path().join("missing.yaml");
    let config = config(directory.path(), FailurePolicy::FailFast);
    let mut orchestrator =
        Orchestrator::new(StubRunner::new(config.payload_path.as_path()), config);

    let result = orchestrator.run_all(&[missing], variants().as_slice());
    assert!(matches!(result, Err(Error::Scenario(_))));
    assert!(orchestrator.runner.calls.is_empty());
}

#[test]
fn keep_going() {
    let directory = tempfile::tempdir().expect("Failed to create temp dir");
    let scenarios = vec![
        directory.path().join("missing.yaml"),
        write_scenario(directory.path(), "s.yaml", &["ok.wasm", "bad.wasm"], "00"),
    ];
    let config = config(directory.path(), FailurePolicy::KeepGoing);
    let mut runner = StubRunner::new(config.payload_path.as_path());
    runner.outputs.insert(
        "wasm/bad.wasm".to_owned(),
        Output {
            lines: vec![],
            exit_code: Some(0),
        },
    );
    let mut orchestrator = Orchestrator::new(runner, config);

    let results = orchestrator
        .run_all(scenarios.as_slice(), variants().as_slice())
        .expect("Keep-going run must not fail");

    assert!(!results.is_successful());
    assert_eq!(results.records.len(), 2);
    assert_eq!(results.failures.len(), 3);
    assert_eq!(results.failures[0].scenario, scenarios[0]);
    assert_eq!(results.failures[0].module, None);
    assert_eq!(results.failures[1].variant.as_deref(), Some("variant-a"));
    assert_eq!(results.failures[1].module.as_deref(), Some("bad.wasm"));
    assert_eq!(results.failures[2].variant.as_deref(), Some("variant-b"));
}
