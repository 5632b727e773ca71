//!
//! The interpreter build variant.
//!

use std::path::Path;
use std::path::PathBuf;

///
/// The interpreter build variant.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// The executable name or path.
    pub executable: PathBuf,
    /// The name the results are tagged with.
    pub name: String,
}

impl Variant {
    /// The default baseline and optimized builds of the `wabt` benchmark interpreter.
    pub const DEFAULT: [(&'static str, &'static str); 2] = [
        ("benchmark-interp-baseline", "wabt-baseline"),
        ("benchmark-interp-optimized", "wabt-optimized"),
    ];

    ///
    /// A shortcut constructor.
    ///
    pub fn new(executable: PathBuf, name: String) -> Self {
        Self { executable, name }
    }

    ///
    /// Returns the default variant list.
    ///
    pub fn defaults() -> Vec<Self> {
        Self::DEFAULT
            .iter()
            .map(|(executable, name)| Self::new(PathBuf::from(executable), (*name).to_owned()))
            .collect()
    }

    ///
    /// Resolves the executable to an existing path.
    ///
    /// If `directory` is set, the executable is looked up there, otherwise in `${PATH}`.
    ///
    pub fn resolve(self, directory: Option<&Path>) -> anyhow::Result<Self> {
        let executable = match directory {
            Some(directory) => {
                let path = directory.join(self.executable.as_path());
                if !path.is_file() {
                    anyhow::bail!(
                        "The `{}` executable of variant `{}` not found at {path:?}",
                        self.executable.to_string_lossy(),
                        self.name,
                    );
                }
                path
            }
            None => which::which(self.executable.as_path()).map_err(|error| {
                anyhow::anyhow!(
                    "The `{}` executable of variant `{}` not found in ${{PATH}}: {error}",
                    self.executable.to_string_lossy(),
                    self.name,
                )
            })?,
        };
        Ok(Self {
            executable,
            name: self.name,
        })
    }
}

impl std::str::FromStr for Variant {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let (executable, name) = match string.split_once('=') {
            Some((executable, name)) => (executable, name),
            None => (string, string),
        };
        if executable.is_empty() || name.is_empty() {
            anyhow::bail!("Invalid variant `{string}`. Expected `EXECUTABLE[=NAME]`");
        }
        Ok(Self::new(PathBuf::from(executable), name.to_owned()))
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.executable.to_string_lossy(), self.name)
    }
}
