//!
//! The OS process runner.
//!

use std::io::BufRead;
use std::io::BufReader;
use std::process::Stdio;

use super::error::Error;
use super::Invocation;
use super::Output;
use super::Runner;

///
/// Spawns OS processes and echoes their output to the console while capturing it.
///
#[derive(Debug, Clone, Default)]
pub struct Subprocess {
    /// Whether the output lines are printed as they arrive.
    pub echo: bool,
}

impl Subprocess {
    /// The output buffer default capacity.
    pub const LINES_INITIAL_CAPACITY: usize = 64;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(echo: bool) -> Self {
        Self { echo }
    }
}

impl Runner for Subprocess {
    fn run(&mut self, invocation: &Invocation) -> Result<Output, Error> {
        let executable = invocation.executable.clone();

        // stdout and stderr share one pipe, so lines keep the order the child wrote them.
        let (reader, writer) = std::io::pipe().map_err(|error| Error::Pipe {
            error,
            executable: executable.clone(),
        })?;
        let stdout_writer = writer.try_clone().map_err(|error| Error::Pipe {
            error,
            executable: executable.clone(),
        })?;

        let mut command = std::process::Command::new(invocation.executable.as_path());
        command
            .args(invocation.arguments.iter())
            .stdin(Stdio::null())
            .stdout(stdout_writer)
            .stderr(writer);
        let spawned = command.spawn();
        // The parent's write ends must be closed, otherwise the reader never sees EOF.
        drop(command);
        let mut child = spawned.map_err(|error| Error::Spawning {
            error,
            executable: executable.clone(),
        })?;

        let mut reader = BufReader::new(reader);
        let mut lines = Vec::with_capacity(Self::LINES_INITIAL_CAPACITY);
        let mut buffer = Vec::new();
        let mut reading_error = None;
        loop {
            buffer.clear();
            match reader.read_until(b'\n', &mut buffer) {
                Ok(0) => break,
                Ok(_) => {
                    while matches!(buffer.last(), Some(b'\n') | Some(b'\r')) {
                        buffer.pop();
                    }
                    // Invalid UTF-8 is replaced, only the last line is scraped.
                    let line = String::from_utf8_lossy(buffer.as_slice()).into_owned();
                    if self.echo {
                        println!("{line}");
                    }
                    lines.push(line);
                }
                Err(error) if error.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(error) => {
                    reading_error = Some(error);
                    let _ = child.kill();
                    break;
                }
            }
        }

        let status = child.wait().map_err(|error| Error::Waiting {
            error,
            executable: executable.clone(),
        })?;
        if let Some(error) = reading_error {
            return Err(Error::Reading { error, executable });
        }

        Ok(Output {
            lines,
            exit_code: status.code(),
        })
    }
}
