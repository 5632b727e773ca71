//!
//! The external process runner.
//!


pub mod error;
pub mod subprocess;

use std::path::PathBuf;

use self::error::Error;

///
/// A pre-tokenized command line.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The executable path.
    pub executable: PathBuf,
    /// The arguments passed as is, without shell interpretation.
    pub arguments: Vec<String>,
}

impl Invocation {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(executable: PathBuf, arguments: Vec<String>) -> Self {
        Self {
            executable,
            arguments,
        }
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.executable.to_string_lossy())?;
        for argument in self.arguments.iter() {
            write!(f, " {argument}")?;
        }
        Ok(())
    }
}

///
/// The captured output of a finished process.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    /// The merged stdout and stderr lines in arrival order, without line terminators.
    pub lines: Vec<String>,
    /// The exit code, or `None` if the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl Output {
    ///
    /// Whether the process has exited with code 0.
    ///
    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

///
/// Runs external commands to completion.
///
pub trait Runner {
    ///
    /// Runs the command, blocking until it exits, and returns its output
    /// regardless of the exit code.
    ///
    fn run(&mut self, invocation: &Invocation) -> Result<Output, Error>;
}
